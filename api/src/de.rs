// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Lenient deserializers for the loosely typed JSON the server emits.
//!
//! Ids and prices arrive either as JSON numbers or as strings (`"12"`,
//! `"1500.00"`), and dates either as `YYYY-MM-DD` or as a full ISO timestamp.

use std::fmt;

use jiff::civil::Date;
use serde::Deserialize;
use serde::de::{self, Deserializer, Visitor};

struct IntVisitor;

impl Visitor<'_> for IntVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer or an integer string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::custom(format!("integer out of range: {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        v.trim()
            .parse()
            .map_err(|_| E::custom(format!("invalid integer: {v:?}")))
    }
}

/// Integer given as a number or a numeric string.
pub fn int<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    d.deserialize_any(IntVisitor)
}

/// Optional integer; `null` and `""` are `None`.
pub fn opt_int<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    match <Option<Loose>>::deserialize(d)? {
        None => Ok(None),
        Some(Loose::Int(v)) => Ok(Some(v)),
        Some(Loose::Float(v)) => Err(de::Error::custom(format!("not an integer: {v}"))),
        Some(Loose::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(Loose::Str(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid integer: {s:?}"))),
    }
}

struct NumberVisitor;

impl Visitor<'_> for NumberVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    #[expect(clippy::cast_precision_loss)]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    #[expect(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        v.trim()
            .parse()
            .map_err(|_| E::custom(format!("invalid number: {v:?}")))
    }
}

/// Number given as a JSON number or a numeric string.
pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    d.deserialize_any(NumberVisitor)
}

/// Free text that the server sometimes sends as a number.
pub fn opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match <Option<Loose>>::deserialize(d)? {
        None => None,
        Some(Loose::Int(v)) => Some(v.to_string()),
        Some(Loose::Float(v)) => Some(v.to_string()),
        Some(Loose::Str(s)) => Some(s),
    })
}

/// Calendar date given as `YYYY-MM-DD` or as an ISO timestamp.
pub fn date<'de, D: Deserializer<'de>>(d: D) -> Result<Date, D::Error> {
    let s = <String as serde::Deserialize>::deserialize(d)?;
    parse_date(&s).map_err(de::Error::custom)
}

/// Optional calendar date; `null` and `""` are `None`.
pub fn opt_date<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Date>, D::Error> {
    match <Option<String>>::deserialize(d)? {
        Some(s) if !s.trim().is_empty() => parse_date(&s).map(Some).map_err(de::Error::custom),
        _ => Ok(None),
    }
}

/// Parses the date part of `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS...`.
///
/// # Errors
///
/// Returns an error if the leading date is not a valid calendar date.
pub fn parse_date(s: &str) -> Result<Date, String> {
    let s = s.trim();
    let head = s.split(['T', ' ']).next().unwrap_or(s);
    head.parse::<Date>()
        .map_err(|e| format!("invalid date {s:?}: {e}"))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(i64),
    Float(f64),
    Str(String),
}
