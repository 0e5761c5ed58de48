// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory marketplace that records every call.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use evento_api::{
    ApiError, Booking, BookingContext, Category, Credentials, Media, MediaId, MediaUpload,
    Message, NewBooking, NewNonAvailability, NewPackage, NewVendor, NonAvailability, Package,
    PackageId, PackageListing, RecordId, Vendor, VendorId, VendorIdentity,
};
use evento_core::Marketplace;

/// Server-side data of the fake marketplace.
#[derive(Debug, Clone, Default)]
pub struct FakeState {
    pub vendors: Vec<Vendor>,
    pub packages: Vec<Package>,
    pub listings: Vec<PackageListing>,
    pub records: Vec<NonAvailability>,
    pub bookings: Vec<Booking>,
    pub media: Vec<Media>,
    pub logins: Vec<(Credentials, VendorIdentity)>,

    /// Bookings received by `submit_booking`.
    pub submitted: Vec<NewBooking>,
    /// Names of the methods called, in order.
    pub calls: Vec<&'static str>,

    /// Every call fails with HTTP 500 while set.
    pub failing: bool,
    /// Whether write acknowledgments carry the created id.
    pub report_ids: bool,
    /// Per-package non-availability answers 404.
    pub package_records_missing: bool,
    /// Next id handed out to created records.
    pub next_id: i64,
}

/// A [`Marketplace`] backed by [`FakeState`].
#[derive(Debug, Default)]
pub struct FakeMarketplace {
    state: Mutex<FakeState>,
}

impl FakeMarketplace {
    /// Creates a fake serving `state`.
    #[must_use]
    pub fn new(state: FakeState) -> Self {
        let next_id = if state.next_id == 0 { 1000 } else { state.next_id };
        Self {
            state: Mutex::new(FakeState { next_id, ..state }),
        }
    }

    /// The calls made so far.
    #[must_use]
    pub fn calls(&self) -> Vec<&'static str> {
        self.lock().calls.clone()
    }

    /// Runs `f` against the server-side data.
    pub fn with<R>(&self, f: impl FnOnce(&mut FakeState) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    fn call(&self, name: &'static str) -> Result<MutexGuard<'_, FakeState>, ApiError> {
        let mut state = self.lock();
        state.calls.push(name);
        if state.failing {
            Err(ApiError::Status {
                status: 500,
                message: "Server is down".to_string(),
            })
        } else {
            Ok(state)
        }
    }
}

impl FakeState {
    fn create(&mut self) -> (i64, Option<i64>) {
        let id = self.next_id;
        self.next_id += 1;
        (id, self.report_ids.then_some(id))
    }
}

#[async_trait]
impl Marketplace for FakeMarketplace {
    async fn list_vendors(&self) -> Result<Vec<Vendor>, ApiError> {
        Ok(self.call("list_vendors")?.vendors.clone())
    }

    async fn add_vendor(&self, vendor: &NewVendor) -> Result<Message, ApiError> {
        let mut state = self.call("add_vendor")?;
        let (id, reported) = state.create();
        state.vendors.push(Vendor {
            id: VendorId::new(id),
            name: vendor.name.clone(),
            username: Some(vendor.username.clone()),
            phone: None,
            email: Some(vendor.email.clone()),
            password: Some(vendor.password.clone()),
            category: Some(vendor.category.clone()),
            location: Some(vendor.location.clone()),
        });
        Ok(Message {
            message: None,
            id: reported,
        })
    }

    async fn delete_vendor(&self, id: VendorId) -> Result<Message, ApiError> {
        let mut state = self.call("delete_vendor")?;
        state.vendors.retain(|a| a.id != id);
        Ok(Message::default())
    }

    async fn get_vendor(&self, id: VendorId) -> Result<Vendor, ApiError> {
        self.call("get_vendor")?
            .vendors
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(format!("/api2/vendors/{id}")))
    }

    async fn login(&self, credentials: &Credentials) -> Result<VendorIdentity, ApiError> {
        self.call("login")?
            .logins
            .iter()
            .find(|(c, _)| c == credentials)
            .map(|(_, identity)| identity.clone())
            .ok_or(ApiError::Unauthorized)
    }

    async fn list_vendor_packages(&self, vendor: VendorId) -> Result<Vec<Package>, ApiError> {
        let state = self.call("list_vendor_packages")?;
        Ok(packages_of(&state, vendor))
    }

    async fn list_managed_packages(&self, vendor: VendorId) -> Result<Vec<Package>, ApiError> {
        let state = self.call("list_managed_packages")?;
        Ok(packages_of(&state, vendor))
    }

    async fn add_package(&self, package: &NewPackage) -> Result<Message, ApiError> {
        let mut state = self.call("add_package")?;
        let (id, reported) = state.create();
        state.packages.push(Package {
            id: PackageId::new(id),
            vendor_id: Some(package.vendor_id),
            package_name: package.package_name.clone(),
            description: Some(package.description.clone()),
            price: package.price,
        });
        Ok(Message {
            message: Some("Package added".to_string()),
            id: reported,
        })
    }

    async fn delete_package(&self, id: PackageId) -> Result<Message, ApiError> {
        let mut state = self.call("delete_package")?;
        state.packages.retain(|a| a.id != id);
        Ok(Message::default())
    }

    async fn get_package(&self, id: PackageId) -> Result<Package, ApiError> {
        self.call("get_package")?
            .packages
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(format!("/packagesun1/{id}")))
    }

    async fn list_category_packages(
        &self,
        _category: Category,
    ) -> Result<Vec<PackageListing>, ApiError> {
        Ok(self.call("list_category_packages")?.listings.clone())
    }

    async fn list_all_vendor_non_availability(&self) -> Result<Vec<NonAvailability>, ApiError> {
        let state = self.call("list_all_vendor_non_availability")?;
        Ok(state
            .records
            .iter()
            .filter(|a| a.package_id.is_none())
            .cloned()
            .collect())
    }

    async fn list_vendor_non_availability(
        &self,
        vendor: VendorId,
    ) -> Result<Vec<NonAvailability>, ApiError> {
        let state = self.call("list_vendor_non_availability")?;
        Ok(state
            .records
            .iter()
            .filter(|a| a.package_id.is_none() && a.vendor_id == Some(vendor))
            .cloned()
            .collect())
    }

    async fn add_vendor_non_availability(
        &self,
        record: &NewNonAvailability,
    ) -> Result<Message, ApiError> {
        let mut state = self.call("add_vendor_non_availability")?;
        push_record(&mut state, record);
        Ok(Message::default())
    }

    async fn list_package_non_availability(
        &self,
        package: PackageId,
    ) -> Result<Vec<NonAvailability>, ApiError> {
        let state = self.call("list_package_non_availability")?;
        if state.package_records_missing {
            return Err(ApiError::not_found(format!(
                "/api/package-non-availability/{package}"
            )));
        }

        // The server answers with dates only.
        Ok(state
            .records
            .iter()
            .filter(|a| a.package_id == Some(package))
            .map(|a| NonAvailability {
                package_id: None,
                ..a.clone()
            })
            .collect())
    }

    async fn add_package_non_availability(
        &self,
        record: &NewNonAvailability,
    ) -> Result<Message, ApiError> {
        let mut state = self.call("add_package_non_availability")?;
        push_record(&mut state, record);
        Ok(Message::default())
    }

    async fn get_booking_context(&self, package: PackageId) -> Result<BookingContext, ApiError> {
        let state = self.call("get_booking_context")?;
        let listing = state
            .listings
            .iter()
            .find(|a| a.package_id == package)
            .ok_or_else(|| ApiError::not_found(format!("/api2/vendor2/{package}")))?;

        Ok(BookingContext {
            vendor_id: listing.vendor_id,
            vendor_name: None,
            category: None,
            phone: None,
            email: None,
            location: listing.location.clone(),
            package_name: Some(listing.package_name.clone()),
            description: listing.description.clone(),
            price: Some(listing.price.to_string()),
        })
    }

    async fn submit_booking(&self, booking: &NewBooking) -> Result<Message, ApiError> {
        let mut state = self.call("submit_booking")?;
        state.submitted.push(booking.clone());
        Ok(Message::default())
    }

    async fn list_vendor_bookings(&self, vendor: VendorId) -> Result<Vec<Booking>, ApiError> {
        let state = self.call("list_vendor_bookings")?;
        Ok(state
            .bookings
            .iter()
            .filter(|a| a.vendor_id == Some(vendor))
            .cloned()
            .collect())
    }

    async fn list_package_media(&self, package: PackageId) -> Result<Vec<Media>, ApiError> {
        let state = self.call("list_package_media")?;
        Ok(media_of(&state, package))
    }

    async fn list_category_media(
        &self,
        _category: Category,
        package: PackageId,
    ) -> Result<Vec<Media>, ApiError> {
        let state = self.call("list_category_media")?;
        Ok(media_of(&state, package))
    }

    async fn upload_media(&self, upload: &MediaUpload) -> Result<Message, ApiError> {
        let mut state = self.call("upload_media")?;
        let (id, reported) = state.create();
        state.media.push(Media {
            id: MediaId::new(id),
            package_id: Some(upload.package_id),
            kind: upload.kind,
            image_url: format!("http://cdn/{}", upload.file_name),
        });
        Ok(Message {
            message: None,
            id: reported,
        })
    }
}

fn packages_of(state: &FakeState, vendor: VendorId) -> Vec<Package> {
    state
        .packages
        .iter()
        .filter(|a| a.vendor_id == Some(vendor))
        .cloned()
        .collect()
}

fn media_of(state: &FakeState, package: PackageId) -> Vec<Media> {
    state
        .media
        .iter()
        .filter(|a| a.package_id == Some(package))
        .cloned()
        .collect()
}

fn push_record(state: &mut FakeState, record: &NewNonAvailability) {
    let (id, _) = state.create();
    state.records.push(NonAvailability {
        id: RecordId::new(id),
        vendor_id: record.vendor_id,
        package_id: record.package_id,
        non_availability_date: record.non_availability_date,
    });
}
