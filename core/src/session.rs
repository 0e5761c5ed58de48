// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Authenticated identities the screens run under.

use evento_api::{VendorId, VendorIdentity};

use crate::error::Error;

/// Proof that the administrator signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminSession {
    _private: (),
}

impl AdminSession {
    pub(crate) const fn new() -> Self {
        Self { _private: () }
    }
}

/// A vendor signed in through the marketplace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorSession {
    identity: VendorIdentity,
}

impl VendorSession {
    pub(crate) const fn new(identity: VendorIdentity) -> Self {
        Self { identity }
    }

    /// The signed-in vendor's id.
    #[must_use]
    pub const fn id(&self) -> VendorId {
        self.identity.id
    }

    /// The signed-in vendor's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.identity.name
    }

    /// The identity returned at login.
    #[must_use]
    pub const fn identity(&self) -> &VendorIdentity {
        &self.identity
    }

    /// Fails unless `vendor` is the signed-in vendor.
    pub fn authorize(&self, vendor: VendorId) -> Result<(), Error> {
        if vendor == self.id() {
            Ok(())
        } else {
            Err(Error::Forbidden(format!(
                "vendor {} cannot manage vendor {vendor}",
                self.id()
            )))
        }
    }
}

/// Either kind of session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Admin(AdminSession),
    Vendor(VendorSession),
}

impl Session {
    /// Fails unless this session may manage `vendor`'s records. The
    /// administrator may manage every vendor.
    pub fn authorize(&self, vendor: VendorId) -> Result<(), Error> {
        match self {
            Self::Admin(_) => Ok(()),
            Self::Vendor(session) => session.authorize(vendor),
        }
    }
}

impl From<AdminSession> for Session {
    fn from(session: AdminSession) -> Self {
        Self::Admin(session)
    }
}

impl From<VendorSession> for Session {
    fn from(session: VendorSession) -> Self {
        Self::Vendor(session)
    }
}
