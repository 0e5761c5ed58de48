// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use evento_api::{Booking, BookingContext, NewBooking, PackageId, VendorId};

use crate::error::Error;
use crate::form::BookingForm;
use crate::marketplace::Marketplace;
use crate::screen::request;
use crate::session::VendorSession;
use crate::state::ListState;

/// Books one package.
#[derive(Debug)]
pub struct BookingScreen<M> {
    market: Arc<M>,
    package_id: PackageId,
    context: Option<BookingContext>,
    /// The booking form.
    pub form: BookingForm,
}

impl<M: Marketplace> BookingScreen<M> {
    /// Opens the booking form of `package_id`.
    pub fn new(market: Arc<M>, package_id: PackageId) -> Self {
        Self {
            market,
            package_id,
            context: None,
            form: BookingForm::default(),
        }
    }

    /// The package being booked.
    pub fn package_id(&self) -> PackageId {
        self.package_id
    }

    /// What the form shows about the package, once loaded.
    pub fn context(&self) -> Option<&BookingContext> {
        self.context.as_ref()
    }

    /// Fetches the vendor and package the form is about.
    pub async fn load(&mut self) -> Result<(), Error> {
        let context = request(
            "booking",
            self.market.get_booking_context(self.package_id).await,
        )?;
        self.context = Some(context);
        Ok(())
    }

    /// Submits the form and clears it. The package stays selected.
    pub async fn submit(&mut self) -> Result<String, Error> {
        let known_vendor = self.context.as_ref().map(|a| a.vendor_id);
        let booking = self
            .form
            .validate(known_vendor.unwrap_or(VendorId::new(0)), self.package_id)?;

        let booking = match known_vendor {
            Some(_) => booking,
            None => {
                self.load().await?;
                NewBooking {
                    vendor_id: self.context.as_ref().map_or(booking.vendor_id, |a| a.vendor_id),
                    ..booking
                }
            }
        };

        let msg = request("booking", self.market.submit_booking(&booking).await)?;
        self.form = BookingForm::default();
        Ok(msg.or("Your form has been submitted successfully!"))
    }
}

/// The bookings a vendor received.
#[derive(Debug)]
pub struct BookingList<M> {
    market: Arc<M>,
    vendor_id: VendorId,
    bookings: ListState<Booking>,
}

impl<M: Marketplace> BookingList<M> {
    /// Opens the bookings of the signed-in vendor.
    pub fn new(market: Arc<M>, session: &VendorSession) -> Self {
        Self {
            market,
            vendor_id: session.id(),
            bookings: ListState::new(),
        }
    }

    /// The bookings currently shown.
    pub fn bookings(&self) -> &ListState<Booking> {
        &self.bookings
    }

    /// Fetches the bookings.
    pub async fn load(&mut self) -> Result<(), Error> {
        let bookings = request(
            "booking list",
            self.market.list_vendor_bookings(self.vendor_id).await,
        )?;
        self.bookings.replace(bookings);
        Ok(())
    }
}
