// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

use crate::util::OutputFormat;

const SEPARATOR: &str = "  ";

/// A column of a [`Table`] over rows of type `T`.
pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Rows rendered either as aligned text or as a JSON array of objects keyed
/// by column name.
#[derive(Debug)]
pub struct Table<'a, T, C> {
    columns: &'a [C],
    data: &'a [T],
    format: OutputFormat,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T], format: OutputFormat) -> Self {
        Self {
            columns,
            data,
            format,
        }
    }

    fn cells(&self) -> Vec<Vec<Cow<'a, str>>> {
        self.data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect()
    }

    fn fmt_json(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<serde_json::Value> = self
            .cells()
            .into_iter()
            .map(|cells| {
                let object = self
                    .columns
                    .iter()
                    .zip(cells)
                    .map(|(col, cell)| {
                        (col.name().into_owned(), serde_json::Value::String(cell.into_owned()))
                    })
                    .collect::<serde_json::Map<String, serde_json::Value>>();
                serde_json::Value::Object(object)
            })
            .collect();

        let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }

    fn fmt_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<Cow<'_, str>> = self.columns.iter().map(|col| col.name()).collect();
        let cells = self.cells();

        let mut widths: Vec<usize> = header.iter().map(|a| a.width()).collect();
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }

        let last = self.columns.len().saturating_sub(1);
        for (i, (name, width)) in header.iter().zip(&widths).enumerate() {
            let cell = pad(name, *width, PaddingDirection::Left, i == last);
            write!(f, "{}", cell.bold())?;
            f.write_str(if i == last { "\n" } else { SEPARATOR })?;
        }

        for (row, data) in cells.iter().zip(self.data) {
            for (i, ((col, cell), width)) in self.columns.iter().zip(row).zip(&widths).enumerate() {
                let cell = pad(cell, *width, col.padding_direction(), i == last);
                match col.color(data) {
                    Some(color) => write!(f, "{}", cell.color(color))?,
                    None => f.write_str(&cell)?,
                }
                f.write_str(if i == last { "\n" } else { SEPARATOR })?;
            }
        }
        Ok(())
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            OutputFormat::Json => self.fmt_json(f),
            OutputFormat::Table => self.fmt_table(f),
        }
    }
}

fn pad(cell: &str, width: usize, direction: PaddingDirection, last: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        // Last column does not need padding if it's left-aligned
        PaddingDirection::Left if last => cell.to_string(),
        PaddingDirection::Left => format!("{cell}{fill}"),
        PaddingDirection::Right => format!("{fill}{cell}"),
    }
}
