// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use evento_api::Vendor;

use crate::table::{PaddingDirection, TableColumn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorColumn {
    Id,
    Name,
    Username,
    Category,
    Location,
    Phone,
    Email,
}

impl VendorColumn {
    pub fn columns(verbose: bool) -> Vec<Self> {
        use VendorColumn::*;
        if verbose {
            vec![Id, Name, Username, Category, Location, Phone, Email]
        } else {
            vec![Id, Name, Category, Location]
        }
    }
}

impl TableColumn<Vendor> for VendorColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            VendorColumn::Id => "ID",
            VendorColumn::Name => "Name",
            VendorColumn::Username => "Username",
            VendorColumn::Category => "Category",
            VendorColumn::Location => "Location",
            VendorColumn::Phone => "Phone",
            VendorColumn::Email => "Email",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a Vendor) -> Cow<'a, str> {
        let opt = |a: &'a Option<String>| -> Cow<'a, str> {
            a.as_deref().unwrap_or_default().into()
        };
        match self {
            VendorColumn::Id => data.id.to_string().into(),
            VendorColumn::Name => data.name.as_str().into(),
            VendorColumn::Username => opt(&data.username),
            VendorColumn::Category => opt(&data.category),
            VendorColumn::Location => opt(&data.location),
            VendorColumn::Phone => opt(&data.phone),
            VendorColumn::Email => opt(&data.email),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            VendorColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}
