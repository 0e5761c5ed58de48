// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use evento_api::{Vendor, VendorId};

use crate::error::Error;
use crate::form::VendorForm;
use crate::marketplace::Marketplace;
use crate::screen::{created_id, request};
use crate::session::AdminSession;
use crate::state::ListState;

/// The administrator's vendor directory.
#[derive(Debug)]
pub struct VendorDirectory<M> {
    market: Arc<M>,
    vendors: ListState<Vendor>,
    /// The vendor registration form.
    pub form: VendorForm,
}

impl<M: Marketplace> VendorDirectory<M> {
    /// Opens the directory. Only the administrator can.
    pub fn new(market: Arc<M>, _session: &AdminSession) -> Self {
        Self {
            market,
            vendors: ListState::new(),
            form: VendorForm::default(),
        }
    }

    /// The vendors currently shown.
    pub fn vendors(&self) -> &ListState<Vendor> {
        &self.vendors
    }

    /// Fetches every vendor.
    pub async fn load(&mut self) -> Result<(), Error> {
        let vendors = request("vendor directory", self.market.list_vendors().await)?;
        self.vendors.replace(vendors);
        Ok(())
    }

    /// Registers the vendor in the form, appending it to the list.
    pub async fn add(&mut self) -> Result<String, Error> {
        let new = self.form.validate()?;
        let msg = request("vendor directory", self.market.add_vendor(&new).await)?;

        tracing::debug!(id = ?msg.id, "vendor added");
        self.vendors.append(Vendor {
            id: VendorId::new(created_id(&msg)),
            name: new.name,
            username: Some(new.username),
            phone: Some(new.phone).filter(|a| !a.is_empty()),
            email: Some(new.email),
            password: Some(new.password),
            category: Some(new.category),
            location: Some(new.location),
        });
        self.form = VendorForm::default();
        Ok(msg.or("Vendor added successfully"))
    }

    /// Deletes a vendor and drops it from the list.
    pub async fn delete(&mut self, id: VendorId) -> Result<String, Error> {
        let msg = request("vendor directory", self.market.delete_vendor(id).await)?;
        self.vendors.remove(id);
        Ok(msg.or("Vendor deleted successfully"))
    }
}
