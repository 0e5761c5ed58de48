// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use evento_api::{Package, PackageId, VendorId};

use crate::error::Error;
use crate::form::PackageForm;
use crate::marketplace::Marketplace;
use crate::screen::request;
use crate::session::Session;
use crate::state::ListState;

/// Adds and removes the packages of one vendor.
#[derive(Debug)]
pub struct PackageManager<M> {
    market: Arc<M>,
    session: Session,
    vendor_id: VendorId,
    packages: ListState<Package>,
    /// The package creation form.
    pub form: PackageForm,
}

impl<M: Marketplace> PackageManager<M> {
    /// Opens the package manager of `vendor_id`.
    pub fn new(market: Arc<M>, session: Session, vendor_id: VendorId) -> Result<Self, Error> {
        session.authorize(vendor_id)?;
        Ok(Self {
            market,
            session,
            vendor_id,
            packages: ListState::new(),
            form: PackageForm::default(),
        })
    }

    /// The vendor whose packages are managed.
    pub fn vendor_id(&self) -> VendorId {
        self.vendor_id
    }

    /// The vendor's packages.
    pub fn packages(&self) -> &ListState<Package> {
        &self.packages
    }

    /// Fetches the vendor's packages.
    pub async fn load(&mut self) -> Result<(), Error> {
        let packages = request(
            "package manager",
            self.market.list_managed_packages(self.vendor_id).await,
        )?;
        self.packages.replace(packages);
        Ok(())
    }

    /// Creates the package in the form, then re-fetches the list.
    pub async fn add(&mut self) -> Result<String, Error> {
        let new = self.form.validate(self.vendor_id)?;
        let msg = request("package manager", self.market.add_package(&new).await)?;

        self.form = PackageForm::default();
        self.refresh().await;
        Ok(msg.or("Package added successfully!"))
    }

    /// Deletes a package, then re-fetches the list.
    ///
    /// A vendor can only remove packages listed on its own manager, so the
    /// list must have been loaded first.
    pub async fn remove(&mut self, id: PackageId) -> Result<String, Error> {
        if matches!(self.session, Session::Vendor(_)) && self.packages.get(id).is_none() {
            return Err(Error::Forbidden(format!(
                "package {id} is not one of vendor {}'s packages",
                self.vendor_id
            )));
        }

        let msg = request("package manager", self.market.delete_package(id).await)?;
        self.packages.remove(id);
        self.refresh().await;
        Ok(msg.or("Package removed successfully!"))
    }

    /// Re-fetches after a successful write. The write stands even if this fails.
    async fn refresh(&mut self) {
        if let Err(e) = self.load().await {
            tracing::warn!(error = %e, "failed to refresh packages after write");
        }
    }
}
