// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date-range availability filtering over non-availability records.

use std::collections::HashSet;

use evento_api::{NonAvailability, PackageId, VendorId};
use jiff::civil::Date;

/// The dates a customer wants to book, inclusive on both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestedRange {
    start: Option<Date>,
    end: Option<Date>,
}

impl RequestedRange {
    /// Creates a range. A missing bound disables date filtering.
    #[must_use]
    pub const fn new(start: Option<Date>, end: Option<Date>) -> Self {
        Self { start, end }
    }

    /// The start date, if any.
    #[must_use]
    pub const fn start(self) -> Option<Date> {
        self.start
    }

    /// The end date, if any.
    #[must_use]
    pub const fn end(self) -> Option<Date> {
        self.end
    }

    /// Both bounds, or `None` when the range does not filter at all.
    #[must_use]
    pub fn bounds(self) -> Option<(Date, Date)> {
        self.start.zip(self.end)
    }

    /// Whether `date` lies in `[start, end]`. Always false for an open range.
    #[must_use]
    pub fn contains(self, date: Date) -> bool {
        self.bounds()
            .is_some_and(|(start, end)| start <= date && date <= end)
    }
}

/// Who a non-availability record blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    Vendor(VendorId),
    Package(PackageId),
}

impl Owner {
    /// The owner a record blocks. A record naming a package blocks only that
    /// package, even when it also carries the vendor id.
    #[must_use]
    pub fn of(record: &NonAvailability) -> Option<Self> {
        match (record.package_id, record.vendor_id) {
            (Some(package), _) => Some(Self::Package(package)),
            (None, Some(vendor)) => Some(Self::Vendor(vendor)),
            (None, None) => None,
        }
    }
}

/// Every owner with at least one blocked date inside `range`.
#[must_use]
pub fn excluded_owners(records: &[NonAvailability], range: RequestedRange) -> HashSet<Owner> {
    if range.bounds().is_none() {
        return HashSet::new();
    }

    records
        .iter()
        .filter(|r| range.contains(r.non_availability_date))
        .filter_map(Owner::of)
        .collect()
}

/// Whether `owner` has a blocked date inside `range`.
#[must_use]
pub fn is_blocked(owner: Owner, records: &[NonAvailability], range: RequestedRange) -> bool {
    records
        .iter()
        .any(|r| Owner::of(r) == Some(owner) && range.contains(r.non_availability_date))
}

/// Keeps the candidates none of whose owners is blocked inside `range`.
///
/// With an open range the candidates are returned unchanged.
pub fn filter_bookable<T, I, F>(
    candidates: Vec<T>,
    records: &[NonAvailability],
    range: RequestedRange,
    owners_of: F,
) -> Vec<T>
where
    F: Fn(&T) -> I,
    I: IntoIterator<Item = Owner>,
{
    let excluded = excluded_owners(records, range);
    if excluded.is_empty() {
        return candidates;
    }

    candidates
        .into_iter()
        .filter(|c| !owners_of(c).into_iter().any(|o| excluded.contains(&o)))
        .collect()
}
