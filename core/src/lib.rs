// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the Evento marketplace client: sessions, forms, availability
//! filtering and the screens built on top of them.

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
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

mod availability;
mod config;
mod error;
mod evento;
mod filter;
mod form;
mod marketplace;
mod screen;
mod session;
mod state;

pub use crate::availability::{
    Owner, RequestedRange, excluded_owners, filter_bookable, is_blocked,
};
pub use crate::config::{APP_NAME, AdminCredentials, Config, expand_path, get_config_dir};
pub use crate::error::Error;
pub use crate::evento::Evento;
pub use crate::filter::PackageFilter;
pub use crate::form::{
    BookingForm, DateForm, FieldError, LOCATIONS, LoginForm, PackageForm, ValidationError,
    VendorForm, find_location,
};
pub use crate::marketplace::Marketplace;
pub use crate::screen::{
    AvailabilityCalendar, BookingList, BookingScreen, MediaGallery, MediaSource, PackageBrowser,
    PackageManager, VendorDashboard, VendorDirectory,
};
pub use crate::session::{AdminSession, Session, VendorSession};
pub use crate::state::{Keyed, ListState};
