// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use colored::Color;
use evento_api::NonAvailability;
use jiff::{Zoned, civil::Date};

use crate::table::{PaddingDirection, TableColumn};

/// Columns of a blocked-date list; past dates are dimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordColumn {
    Id,
    Owner,
    Date { today: Date },
}

impl RecordColumn {
    pub fn columns() -> Vec<Self> {
        let today = Zoned::now().date();
        vec![
            RecordColumn::Id,
            RecordColumn::Date { today },
            RecordColumn::Owner,
        ]
    }
}

impl TableColumn<NonAvailability> for RecordColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            RecordColumn::Id => "ID",
            RecordColumn::Owner => "Blocked",
            RecordColumn::Date { .. } => "Date",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a NonAvailability) -> Cow<'a, str> {
        match self {
            RecordColumn::Id => data.id.to_string().into(),
            RecordColumn::Owner => match (data.package_id, data.vendor_id) {
                (Some(package), _) => format!("package {package}").into(),
                (None, Some(vendor)) => format!("vendor {vendor}").into(),
                (None, None) => "".into(),
            },
            RecordColumn::Date { .. } => data.non_availability_date.to_string().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            RecordColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, data: &NonAvailability) -> Option<Color> {
        match self {
            RecordColumn::Date { today } if data.non_availability_date < *today => {
                Some(Color::BrightBlack)
            }
            _ => None,
        }
    }
}
