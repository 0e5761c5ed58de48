// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use evento_api::{NonAvailability, PackageListing};

use crate::availability::{Owner, RequestedRange, filter_bookable};

/// Filters a customer applies to a category's packages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageFilter {
    /// Only packages offered in this location.
    pub location: Option<String>,
    /// Only packages priced at or below this.
    pub max_price: Option<f64>,
    /// Only packages bookable over these dates.
    pub range: RequestedRange,
}

impl PackageFilter {
    /// Whether no filter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.max_price.is_none() && self.range.bounds().is_none()
    }

    /// Applies location, then price, then availability.
    ///
    /// Locations match whole names, ignoring case and surrounding spaces. A
    /// `NaN` price limit is ignored.
    ///
    /// `records` may mix vendor and package non-availability; a listing is
    /// dropped when either its vendor or the package itself is blocked.
    #[must_use]
    pub fn apply(
        &self,
        listings: &[PackageListing],
        records: &[NonAvailability],
    ) -> Vec<PackageListing> {
        let location = self.location.as_deref().map(str::trim);
        let candidates = listings
            .iter()
            .filter(|a| match location {
                Some(loc) => a
                    .location
                    .as_deref()
                    .is_some_and(|b| b.trim().eq_ignore_ascii_case(loc)),
                None => true,
            })
            .filter(|a| {
                self.max_price
                    .filter(|max| !max.is_nan())
                    .is_none_or(|max| a.price <= max)
            })
            .cloned()
            .collect();

        filter_bookable(candidates, records, self.range, |a| {
            [Owner::Vendor(a.vendor_id), Owner::Package(a.package_id)]
        })
    }
}
