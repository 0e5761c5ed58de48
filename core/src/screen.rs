// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! One load/submit cycle per screen.
//!
//! Every screen follows the same rules: a failed load leaves the previous
//! state in place, a submit validates its form before any request is made,
//! and a successful write patches or re-fetches the local list.

mod booking;
mod browser;
mod calendar;
mod dashboard;
mod directory;
mod gallery;
mod packages;

pub use crate::screen::booking::{BookingList, BookingScreen};
pub use crate::screen::browser::PackageBrowser;
pub use crate::screen::calendar::AvailabilityCalendar;
pub use crate::screen::dashboard::VendorDashboard;
pub use crate::screen::directory::VendorDirectory;
pub use crate::screen::gallery::{MediaGallery, MediaSource};
pub use crate::screen::packages::PackageManager;

use evento_api::{ApiError, Message, PackageId};

use crate::error::Error;
use crate::marketplace::Marketplace;
use crate::session::Session;

/// Logs a failed request and lifts it into a screen error.
fn request<T>(screen: &'static str, result: Result<T, ApiError>) -> Result<T, Error> {
    result.map_err(|e| {
        tracing::warn!(screen, error = %e, "request failed");
        Error::Api(e)
    })
}

/// Id for a record created locally: the server's when it reported one.
fn created_id(msg: &Message) -> i64 {
    msg.id
        .unwrap_or_else(|| jiff::Timestamp::now().as_millisecond())
}

/// Fails unless `session` may manage `package`.
async fn authorize_package<M: Marketplace + ?Sized>(
    market: &M,
    session: &Session,
    package: PackageId,
) -> Result<(), Error> {
    let Session::Vendor(vendor) = session else {
        return Ok(());
    };

    let owner = request("authorize", market.get_package(package).await)?.vendor_id;
    match owner {
        Some(owner) => vendor.authorize(owner),
        None => Err(Error::Forbidden(format!(
            "package {package} has no owner on record"
        ))),
    }
}
