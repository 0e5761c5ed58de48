// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use jiff::civil::Date;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Formats a price the way the marketplace shows it, with two decimals.
pub fn format_price(price: f64) -> String {
    format!("₹{price:.2}")
}

/// Formats an optional date, empty when absent.
pub fn format_date(date: Option<Date>) -> Cow<'static, str> {
    match date {
        Some(date) => date.to_string().into(),
        None => "".into(),
    }
}

/// Formats an optional date range as `start ~ end`.
pub fn format_date_range(start: Option<Date>, end: Option<Date>) -> String {
    match (start, end) {
        (Some(start), Some(end)) if start == end => start.to_string(),
        (Some(start), Some(end)) => format!("{start} ~ {end}"),
        (Some(start), None) => format!("{start} ~"),
        (None, Some(end)) => format!("~ {end}"),
        (None, None) => String::new(),
    }
}

/// Shortens `s` to at most `width` display columns, marking the cut with `…`.
pub fn ellipsize(s: &str, width: usize) -> Cow<'_, str> {
    if s.width() <= width {
        return s.into();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out.into()
}
