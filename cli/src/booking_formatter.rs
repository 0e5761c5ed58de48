// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use evento_api::Booking;

use crate::table::{PaddingDirection, TableColumn};
use crate::util::format_date_range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingColumn {
    Id,
    Package,
    Customer,
    Email,
    Phone,
    Address,
    Dates,
    Advance,
}

impl BookingColumn {
    pub fn columns(verbose: bool) -> Vec<Self> {
        use BookingColumn::*;
        if verbose {
            vec![Id, Package, Customer, Email, Phone, Address, Dates, Advance]
        } else {
            vec![Id, Package, Customer, Phone, Dates]
        }
    }
}

impl TableColumn<Booking> for BookingColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            BookingColumn::Id => "ID",
            BookingColumn::Package => "Package",
            BookingColumn::Customer => "Customer",
            BookingColumn::Email => "Email",
            BookingColumn::Phone => "Phone",
            BookingColumn::Address => "Address",
            BookingColumn::Dates => "Dates",
            BookingColumn::Advance => "Advance",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a Booking) -> Cow<'a, str> {
        match self {
            BookingColumn::Id => data.id.to_string().into(),
            BookingColumn::Package => match (&data.package_name, data.package_id) {
                (Some(name), _) => name.as_str().into(),
                (None, Some(id)) => format!("#{id}").into(),
                (None, None) => "".into(),
            },
            BookingColumn::Customer => data.name.as_str().into(),
            BookingColumn::Email => data.email.as_str().into(),
            BookingColumn::Phone => data.phone.as_deref().unwrap_or_default().into(),
            BookingColumn::Address => address(data).into(),
            BookingColumn::Dates => format_date_range(data.start_date, data.end_date).into(),
            BookingColumn::Advance => data.advance_received.as_deref().unwrap_or_default().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            BookingColumn::Id | BookingColumn::Advance => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}

/// Landmark, area, city and state, most specific first.
fn address(booking: &Booking) -> String {
    [
        &booking.landmark,
        &booking.area,
        &booking.city,
        &booking.state,
    ]
    .into_iter()
    .filter_map(|a| a.as_deref().map(str::trim))
    .filter(|a| !a.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}
