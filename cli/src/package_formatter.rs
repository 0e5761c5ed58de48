// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use colored::Color;
use evento_api::{Package, PackageListing};

use crate::table::{PaddingDirection, TableColumn};
use crate::util::{OutputFormat, ellipsize, format_price};

const DESCRIPTION_WIDTH: usize = 40;

/// Columns of a vendor's own package list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageColumn {
    Id,
    Name,
    Price,
    Description(Option<usize>),
}

impl PackageColumn {
    pub fn columns(output_format: OutputFormat) -> Vec<Self> {
        vec![
            PackageColumn::Id,
            PackageColumn::Name,
            PackageColumn::Price,
            PackageColumn::Description(description_width(output_format)),
        ]
    }
}

impl TableColumn<Package> for PackageColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            PackageColumn::Id => "ID",
            PackageColumn::Name => "Package",
            PackageColumn::Price => "Price",
            PackageColumn::Description(_) => "Description",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a Package) -> Cow<'a, str> {
        match self {
            PackageColumn::Id => data.id.to_string().into(),
            PackageColumn::Name => data.package_name.as_str().into(),
            PackageColumn::Price => format_price(data.price).into(),
            PackageColumn::Description(width) => description(data.description.as_deref(), *width),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            PackageColumn::Id | PackageColumn::Price => PaddingDirection::Right,
            PackageColumn::Name | PackageColumn::Description(_) => PaddingDirection::Left,
        }
    }
}

/// Columns of the customer-facing category listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingColumn {
    Id,
    Vendor,
    Name,
    Price,
    Location,
    Description(Option<usize>),
}

impl ListingColumn {
    pub fn columns(output_format: OutputFormat, verbose: bool) -> Vec<Self> {
        let mut columns = vec![
            ListingColumn::Id,
            ListingColumn::Name,
            ListingColumn::Price,
            ListingColumn::Location,
        ];
        if verbose {
            columns.insert(1, ListingColumn::Vendor);
            columns.push(ListingColumn::Description(description_width(output_format)));
        }
        columns
    }
}

impl TableColumn<PackageListing> for ListingColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            ListingColumn::Id => "ID",
            ListingColumn::Vendor => "Vendor",
            ListingColumn::Name => "Package",
            ListingColumn::Price => "Price",
            ListingColumn::Location => "Location",
            ListingColumn::Description(_) => "Description",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a PackageListing) -> Cow<'a, str> {
        match self {
            ListingColumn::Id => data.package_id.to_string().into(),
            ListingColumn::Vendor => data.vendor_id.to_string().into(),
            ListingColumn::Name => data.package_name.as_str().into(),
            ListingColumn::Price => format_price(data.price).into(),
            ListingColumn::Location => data.location.as_deref().unwrap_or_default().into(),
            ListingColumn::Description(width) => description(data.description.as_deref(), *width),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            ListingColumn::Id | ListingColumn::Vendor | ListingColumn::Price => {
                PaddingDirection::Right
            }
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, _data: &PackageListing) -> Option<Color> {
        match self {
            ListingColumn::Price => Some(Color::Green),
            _ => None,
        }
    }
}

/// Tables truncate long descriptions, JSON keeps them whole.
fn description_width(output_format: OutputFormat) -> Option<usize> {
    match output_format {
        OutputFormat::Table => Some(DESCRIPTION_WIDTH),
        OutputFormat::Json => None,
    }
}

fn description(text: Option<&str>, width: Option<usize>) -> Cow<'_, str> {
    let text = text.unwrap_or_default();
    match width {
        Some(width) => ellipsize(text, width),
        None => text.into(),
    }
}
