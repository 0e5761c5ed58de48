// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Request bodies for the write endpoints.

use std::path::Path;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::types::{MediaKind, PackageId, VendorId};

/// Body of `POST /vendors`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewVendor {
    pub name: String,
    pub username: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub category: String,
    pub location: String,
}

/// Body of `POST /add-packages`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPackage {
    pub vendor_id: VendorId,
    pub package_name: String,
    pub description: String,
    pub price: f64,
}

/// Body of `POST /submit-booking-form`.
///
/// Field names follow the booking form the server was written against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub state: String,
    pub city: String,
    pub area: String,
    pub landmark: String,
    #[serde(rename = "startDate")]
    pub start_date: Option<Date>,
    #[serde(rename = "endDate")]
    pub end_date: Option<Date>,
    #[serde(rename = "vendorId")]
    pub vendor_id: VendorId,
    #[serde(rename = "packageId")]
    pub package_id: PackageId,
    pub advance_received: String,
}

/// Body of the non-availability `POST` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewNonAvailability {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<VendorId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<PackageId>,
    pub non_availability_date: Date,
}

impl NewNonAvailability {
    /// Blocks a date for a vendor.
    #[must_use]
    pub const fn vendor(vendor_id: VendorId, date: Date) -> Self {
        Self {
            vendor_id: Some(vendor_id),
            package_id: None,
            non_availability_date: date,
        }
    }

    /// Blocks a date for a single package.
    #[must_use]
    pub const fn package(package_id: PackageId, date: Date) -> Self {
        Self {
            vendor_id: None,
            package_id: Some(package_id),
            non_availability_date: date,
        }
    }
}

/// Body of `POST /login`, also read from the configuration file.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// A file to attach to a package, sent as multipart form data.
#[derive(Clone, PartialEq, Eq)]
pub struct MediaUpload {
    pub package_id: PackageId,
    pub kind: MediaKind,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for MediaUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaUpload")
            .field("package_id", &self.package_id)
            .field("kind", &self.kind)
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl MediaUpload {
    /// Builds an upload from in-memory bytes, inferring kind and MIME type
    /// from the file extension.
    #[must_use]
    pub fn new(package_id: PackageId, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let (kind, mime) = mime_of(&file_name);
        Self {
            package_id,
            kind,
            file_name,
            mime,
            bytes,
        }
    }

    /// Reads a file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub async fn from_path(package_id: PackageId, path: &Path) -> Result<Self, ApiError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|a| a.to_str())
            .ok_or_else(|| ApiError::Config(format!("Invalid file name: {}", path.display())))?
            .to_string();
        Ok(Self::new(package_id, file_name, bytes))
    }
}

/// `mp4` is a video; every other extension is sent as `image/<ext>`.
fn mime_of(file_name: &str) -> (MediaKind, String) {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|a| a.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| "jpeg".to_string());

    match ext.as_str() {
        "mp4" => (MediaKind::Video, "video/mp4".to_string()),
        "jpg" => (MediaKind::Image, "image/jpeg".to_string()),
        _ => (MediaKind::Image, format!("image/{ext}")),
    }
}
