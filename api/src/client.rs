// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Marketplace client, one method per endpoint.

use std::sync::Arc;

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::request::{Credentials, MediaUpload, NewBooking, NewNonAvailability, NewPackage, NewVendor};
use crate::types::{
    Booking, BookingContext, Category, Media, MediaEnvelope, Message, NonAvailability, Package,
    PackageId, PackageListing, Vendor, VendorId, VendorIdentity,
};

/// Client for the event-services marketplace API.
///
/// # Example
///
/// ```ignore
/// use evento_api::{ApiClient, ApiConfig, Category};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::new(ApiConfig::with_base_url("http://localhost:5000"))?;
/// let listings = client.list_category_packages(Category::Decorators).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Arc<HttpClient>,
    config: ApiConfig,
}

impl ApiClient {
    /// Creates a new marketplace client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = HttpClient::new(config.clone())?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // Vendors

    /// Lists every vendor (admin directory).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_vendors(&self) -> Result<Vec<Vendor>, ApiError> {
        self.get("/vendors").await
    }

    /// Registers a vendor.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn add_vendor(&self, vendor: &NewVendor) -> Result<Message, ApiError> {
        self.post("/vendors", vendor).await
    }

    /// Deletes a vendor.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_vendor(&self, id: VendorId) -> Result<Message, ApiError> {
        self.delete(&format!("/vendors/{id}")).await
    }

    /// Fetches one vendor's details.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_vendor(&self, id: VendorId) -> Result<Vendor, ApiError> {
        self.get(&format!("/api2/vendors/{id}")).await
    }

    /// Verifies vendor credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] if the credentials are rejected.
    #[tracing::instrument(skip(self))]
    pub async fn login(&self, credentials: &Credentials) -> Result<VendorIdentity, ApiError> {
        self.post_json("/login", credentials).await
    }

    // Packages

    /// Lists the packages shown on a vendor's dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_vendor_packages(&self, vendor: VendorId) -> Result<Vec<Package>, ApiError> {
        self.get(&format!("/api/vendor-packages/{vendor}")).await
    }

    /// Lists the packages of a vendor for management.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_managed_packages(&self, vendor: VendorId) -> Result<Vec<Package>, ApiError> {
        self.get(&format!("/package-manager/{vendor}")).await
    }

    /// Creates a package.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn add_package(&self, package: &NewPackage) -> Result<Message, ApiError> {
        self.post("/add-packages", package).await
    }

    /// Deletes a package.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_package(&self, id: PackageId) -> Result<Message, ApiError> {
        self.delete(&format!("/delete-packages/{id}")).await
    }

    /// Fetches one package.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_package(&self, id: PackageId) -> Result<Package, ApiError> {
        self.get(&format!("/packagesun1/{id}")).await
    }

    /// Lists the customer-facing packages of a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_category_packages(
        &self,
        category: Category,
    ) -> Result<Vec<PackageListing>, ApiError> {
        self.get(&format!("/api/{}/packages", category.slug())).await
    }

    // Non-availability

    /// Lists every vendor's blocked dates.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_all_vendor_non_availability(
        &self,
    ) -> Result<Vec<NonAvailability>, ApiError> {
        self.get("/vendor-availability").await
    }

    /// Lists one vendor's blocked dates.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_vendor_non_availability(
        &self,
        vendor: VendorId,
    ) -> Result<Vec<NonAvailability>, ApiError> {
        self.get(&format!("/vendor_availability/{vendor}")).await
    }

    /// Blocks a date for a vendor.
    ///
    /// # Errors
    ///
    /// Returns an error if the body names no vendor or the request fails.
    pub async fn add_vendor_non_availability(
        &self,
        record: &NewNonAvailability,
    ) -> Result<Message, ApiError> {
        if record.vendor_id.is_none() {
            return Err(ApiError::Config("vendor_id is required".to_string()));
        }
        self.post("/vendor_availability", record).await
    }

    /// Lists one package's blocked dates.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_package_non_availability(
        &self,
        package: PackageId,
    ) -> Result<Vec<NonAvailability>, ApiError> {
        self.get(&format!("/api/package-non-availability/{package}"))
            .await
    }

    /// Blocks a date for a package.
    ///
    /// # Errors
    ///
    /// Returns an error if the body names no package or the request fails.
    pub async fn add_package_non_availability(
        &self,
        record: &NewNonAvailability,
    ) -> Result<Message, ApiError> {
        if record.package_id.is_none() {
            return Err(ApiError::Config("package_id is required".to_string()));
        }
        self.post("/api/package-non-availability/posting", record)
            .await
    }

    // Bookings

    /// Fetches what the booking form shows for a package.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_booking_context(&self, package: PackageId) -> Result<BookingContext, ApiError> {
        self.get(&format!("/api2/vendor2/{package}")).await
    }

    /// Submits a booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn submit_booking(&self, booking: &NewBooking) -> Result<Message, ApiError> {
        self.post("/submit-booking-form", booking).await
    }

    /// Lists the bookings a vendor received.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_vendor_bookings(&self, vendor: VendorId) -> Result<Vec<Booking>, ApiError> {
        self.get(&format!("/api2/vendors/{vendor}/bookings")).await
    }

    // Media

    /// Lists a package's media, as managed by its vendor.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_package_media(&self, package: PackageId) -> Result<Vec<Media>, ApiError> {
        let envelope: MediaEnvelope = self.get(&format!("/package-media/{package}")).await?;
        Ok(envelope.media)
    }

    /// Lists a package's media from the customer-facing category gallery.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_category_media(
        &self,
        category: Category,
        package: PackageId,
    ) -> Result<Vec<Media>, ApiError> {
        self.get(&format!("/api/{}/package-images/{package}", category.slug()))
            .await
    }

    /// Uploads an image or a video for a package.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[tracing::instrument(skip(self))]
    pub async fn upload_media(&self, upload: &MediaUpload) -> Result<Message, ApiError> {
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.mime)?;
        let form = Form::new()
            .part("media", part)
            .text("package_id", upload.package_id.to_string())
            .text("type", upload.kind.as_str());

        let req = self.http.build_request(Method::POST, "/upload").multipart(form);
        let resp = self.http.execute(req).await?;
        HttpClient::message(resp).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, path))
            .await?;
        HttpClient::decode(resp).await
    }

    async fn post<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Message, ApiError> {
        tracing::debug!(path, "POST");
        let resp = self
            .http
            .execute(self.http.build_request(Method::POST, path).json(body))
            .await?;
        HttpClient::message(resp).await
    }

    async fn post_json<B: serde::Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "POST");
        let resp = self
            .http
            .execute(self.http.build_request(Method::POST, path).json(body))
            .await?;
        HttpClient::decode(resp).await
    }

    async fn delete(&self, path: &str) -> Result<Message, ApiError> {
        tracing::debug!(path, "DELETE");
        let resp = self
            .http
            .execute(self.http.build_request(Method::DELETE, path))
            .await?;
        HttpClient::message(resp).await
    }
}
