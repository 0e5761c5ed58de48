// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use evento_api::{
    ApiClient, ApiError, Booking, BookingContext, Category, Credentials, Media, MediaUpload,
    Message, NewBooking, NewNonAvailability, NewPackage, NewVendor, NonAvailability, Package,
    PackageId, PackageListing, Vendor, VendorId, VendorIdentity,
};

/// The marketplace operations the screens are built on.
#[async_trait]
pub trait Marketplace: Send + Sync {
    async fn list_vendors(&self) -> Result<Vec<Vendor>, ApiError>;
    async fn add_vendor(&self, vendor: &NewVendor) -> Result<Message, ApiError>;
    async fn delete_vendor(&self, id: VendorId) -> Result<Message, ApiError>;
    async fn get_vendor(&self, id: VendorId) -> Result<Vendor, ApiError>;
    async fn login(&self, credentials: &Credentials) -> Result<VendorIdentity, ApiError>;

    async fn list_vendor_packages(&self, vendor: VendorId) -> Result<Vec<Package>, ApiError>;
    async fn list_managed_packages(&self, vendor: VendorId) -> Result<Vec<Package>, ApiError>;
    async fn add_package(&self, package: &NewPackage) -> Result<Message, ApiError>;
    async fn delete_package(&self, id: PackageId) -> Result<Message, ApiError>;
    async fn get_package(&self, id: PackageId) -> Result<Package, ApiError>;
    async fn list_category_packages(
        &self,
        category: Category,
    ) -> Result<Vec<PackageListing>, ApiError>;

    async fn list_all_vendor_non_availability(&self) -> Result<Vec<NonAvailability>, ApiError>;
    async fn list_vendor_non_availability(
        &self,
        vendor: VendorId,
    ) -> Result<Vec<NonAvailability>, ApiError>;
    async fn add_vendor_non_availability(
        &self,
        record: &NewNonAvailability,
    ) -> Result<Message, ApiError>;
    async fn list_package_non_availability(
        &self,
        package: PackageId,
    ) -> Result<Vec<NonAvailability>, ApiError>;
    async fn add_package_non_availability(
        &self,
        record: &NewNonAvailability,
    ) -> Result<Message, ApiError>;

    async fn get_booking_context(&self, package: PackageId) -> Result<BookingContext, ApiError>;
    async fn submit_booking(&self, booking: &NewBooking) -> Result<Message, ApiError>;
    async fn list_vendor_bookings(&self, vendor: VendorId) -> Result<Vec<Booking>, ApiError>;

    async fn list_package_media(&self, package: PackageId) -> Result<Vec<Media>, ApiError>;
    async fn list_category_media(
        &self,
        category: Category,
        package: PackageId,
    ) -> Result<Vec<Media>, ApiError>;
    async fn upload_media(&self, upload: &MediaUpload) -> Result<Message, ApiError>;
}

#[async_trait]
impl Marketplace for ApiClient {
    async fn list_vendors(&self) -> Result<Vec<Vendor>, ApiError> {
        ApiClient::list_vendors(self).await
    }

    async fn add_vendor(&self, vendor: &NewVendor) -> Result<Message, ApiError> {
        ApiClient::add_vendor(self, vendor).await
    }

    async fn delete_vendor(&self, id: VendorId) -> Result<Message, ApiError> {
        ApiClient::delete_vendor(self, id).await
    }

    async fn get_vendor(&self, id: VendorId) -> Result<Vendor, ApiError> {
        ApiClient::get_vendor(self, id).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<VendorIdentity, ApiError> {
        ApiClient::login(self, credentials).await
    }

    async fn list_vendor_packages(&self, vendor: VendorId) -> Result<Vec<Package>, ApiError> {
        ApiClient::list_vendor_packages(self, vendor).await
    }

    async fn list_managed_packages(&self, vendor: VendorId) -> Result<Vec<Package>, ApiError> {
        ApiClient::list_managed_packages(self, vendor).await
    }

    async fn add_package(&self, package: &NewPackage) -> Result<Message, ApiError> {
        ApiClient::add_package(self, package).await
    }

    async fn delete_package(&self, id: PackageId) -> Result<Message, ApiError> {
        ApiClient::delete_package(self, id).await
    }

    async fn get_package(&self, id: PackageId) -> Result<Package, ApiError> {
        ApiClient::get_package(self, id).await
    }

    async fn list_category_packages(
        &self,
        category: Category,
    ) -> Result<Vec<PackageListing>, ApiError> {
        ApiClient::list_category_packages(self, category).await
    }

    async fn list_all_vendor_non_availability(&self) -> Result<Vec<NonAvailability>, ApiError> {
        ApiClient::list_all_vendor_non_availability(self).await
    }

    async fn list_vendor_non_availability(
        &self,
        vendor: VendorId,
    ) -> Result<Vec<NonAvailability>, ApiError> {
        ApiClient::list_vendor_non_availability(self, vendor).await
    }

    async fn add_vendor_non_availability(
        &self,
        record: &NewNonAvailability,
    ) -> Result<Message, ApiError> {
        ApiClient::add_vendor_non_availability(self, record).await
    }

    async fn list_package_non_availability(
        &self,
        package: PackageId,
    ) -> Result<Vec<NonAvailability>, ApiError> {
        ApiClient::list_package_non_availability(self, package).await
    }

    async fn add_package_non_availability(
        &self,
        record: &NewNonAvailability,
    ) -> Result<Message, ApiError> {
        ApiClient::add_package_non_availability(self, record).await
    }

    async fn get_booking_context(&self, package: PackageId) -> Result<BookingContext, ApiError> {
        ApiClient::get_booking_context(self, package).await
    }

    async fn submit_booking(&self, booking: &NewBooking) -> Result<Message, ApiError> {
        ApiClient::submit_booking(self, booking).await
    }

    async fn list_vendor_bookings(&self, vendor: VendorId) -> Result<Vec<Booking>, ApiError> {
        ApiClient::list_vendor_bookings(self, vendor).await
    }

    async fn list_package_media(&self, package: PackageId) -> Result<Vec<Media>, ApiError> {
        ApiClient::list_package_media(self, package).await
    }

    async fn list_category_media(
        &self,
        category: Category,
        package: PackageId,
    ) -> Result<Vec<Media>, ApiError> {
        ApiClient::list_category_media(self, category, package).await
    }

    async fn upload_media(&self, upload: &MediaUpload) -> Result<Message, ApiError> {
        ApiClient::upload_media(self, upload).await
    }
}
