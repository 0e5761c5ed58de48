// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use evento_api::{Package, Vendor, VendorId};

use crate::error::Error;
use crate::marketplace::Marketplace;
use crate::screen::request;
use crate::session::VendorSession;
use crate::state::ListState;

/// A vendor's own details and packages.
#[derive(Debug)]
pub struct VendorDashboard<M> {
    market: Arc<M>,
    vendor_id: VendorId,
    vendor: Option<Vendor>,
    packages: ListState<Package>,
}

impl<M: Marketplace> VendorDashboard<M> {
    /// Opens the dashboard of the signed-in vendor.
    pub fn new(market: Arc<M>, session: &VendorSession) -> Self {
        Self {
            market,
            vendor_id: session.id(),
            vendor: None,
            packages: ListState::new(),
        }
    }

    /// The vendor's details, once loaded.
    pub fn vendor(&self) -> Option<&Vendor> {
        self.vendor.as_ref()
    }

    /// The vendor's packages.
    pub fn packages(&self) -> &ListState<Package> {
        &self.packages
    }

    /// Fetches the vendor and its packages together.
    pub async fn load(&mut self) -> Result<(), Error> {
        let market = &*self.market;
        let (vendor, packages) = request(
            "vendor dashboard",
            tokio::try_join!(
                market.get_vendor(self.vendor_id),
                market.list_vendor_packages(self.vendor_id),
            ),
        )?;
        self.vendor = Some(vendor);
        self.packages.replace(packages);
        Ok(())
    }
}
