// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use evento_api::{
    Booking, BookingId, Media, MediaId, NonAvailability, Package, PackageId, PackageListing,
    RecordId, Vendor, VendorId,
};

/// A record addressable by its server id.
pub trait Keyed {
    /// The id type.
    type Key: Copy + Eq;

    /// The record's id.
    fn key(&self) -> Self::Key;
}

macro_rules! keyed {
    ($ty:ty, $key:ty, $field:ident) => {
        impl Keyed for $ty {
            type Key = $key;

            fn key(&self) -> Self::Key {
                self.$field
            }
        }
    };
}

keyed!(Vendor, VendorId, id);
keyed!(Package, PackageId, id);
keyed!(PackageListing, PackageId, package_id);
keyed!(Booking, BookingId, id);
keyed!(NonAvailability, RecordId, id);
keyed!(Media, MediaId, id);

/// The records a screen currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    items: Vec<T>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> ListState<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole list, e.g. with a fresh server response.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Appends a record.
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes the record with the given id. Removing an absent id is a no-op.
    pub fn remove(&mut self, key: T::Key) -> Option<T> {
        let index = self.items.iter().position(|a| a.key() == key)?;
        Some(self.items.remove(index))
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, key: T::Key) -> Option<&T> {
        self.items.iter().find(|a| a.key() == key)
    }

    /// Iterates over the records in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T: Keyed> IntoIterator for &'a ListState<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
