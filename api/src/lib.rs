// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Typed HTTP client for the Evento event-services marketplace API.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

mod client;
mod config;
pub mod de;
mod error;
mod http;
mod request;
mod types;

pub use crate::client::ApiClient;
pub use crate::config::{ApiConfig, DEFAULT_BASE_URL};
pub use crate::error::{ApiError, GENERIC_FAILURE};
pub use crate::request::{
    Credentials, MediaUpload, NewBooking, NewNonAvailability, NewPackage, NewVendor,
};
pub use crate::types::{
    Booking, BookingContext, BookingId, Category, Media, MediaId, MediaKind, Message,
    NonAvailability, PackageId, Package, PackageListing, RecordId, Vendor, VendorId,
    VendorIdentity,
};
