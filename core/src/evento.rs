// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use evento_api::{ApiClient, ApiError, Category, PackageId, VendorId};

use crate::availability::Owner;
use crate::config::Config;
use crate::error::Error;
use crate::form::LoginForm;
use crate::marketplace::Marketplace;
use crate::screen::{
    AvailabilityCalendar, BookingList, BookingScreen, MediaGallery, MediaSource, PackageBrowser,
    PackageManager, VendorDashboard, VendorDirectory,
};
use crate::session::{AdminSession, Session, VendorSession};

/// Evento marketplace application core.
#[derive(Debug)]
pub struct Evento<M = ApiClient> {
    config: Config,
    market: Arc<M>,
}

impl<M> Clone for Evento<M> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            market: Arc::clone(&self.market),
        }
    }
}

impl Evento<ApiClient> {
    /// Creates a new Evento instance talking to the configured server.
    pub fn new(mut config: Config) -> Result<Self, Error> {
        config.normalize()?;
        let client = ApiClient::new(config.api.clone())?;
        Ok(Self {
            config,
            market: Arc::new(client),
        })
    }
}

impl<M: Marketplace> Evento<M> {
    /// Creates an instance over any marketplace implementation.
    pub fn with_marketplace(mut config: Config, market: M) -> Result<Self, Error> {
        config.normalize()?;
        Ok(Self {
            config,
            market: Arc::new(market),
        })
    }

    /// The normalized configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The marketplace the screens talk to.
    pub fn marketplace(&self) -> &M {
        &self.market
    }

    /// Signs the administrator in against the configured credentials.
    pub fn login_admin(&self, username: &str, password: &str) -> Result<AdminSession, Error> {
        let admin = self
            .config
            .admin
            .as_ref()
            .ok_or_else(|| Error::Config("admin credentials are not configured".to_string()))?;

        if admin.username == username.trim() && admin.password == password {
            tracing::debug!(username, "admin signed in");
            Ok(AdminSession::new())
        } else {
            tracing::warn!(username, "admin sign-in rejected");
            Err(Error::Api(ApiError::Unauthorized))
        }
    }

    /// Signs a vendor in through the marketplace.
    pub async fn login_vendor(&self, form: &LoginForm) -> Result<VendorSession, Error> {
        let credentials = form.validate()?;
        let identity = self.market.login(&credentials).await?;
        tracing::debug!(id = %identity.id, "vendor signed in");
        Ok(VendorSession::new(identity))
    }

    /// Signs in with the vendor credentials from the configuration.
    pub async fn login_configured_vendor(&self) -> Result<VendorSession, Error> {
        let credentials = self
            .config
            .vendor
            .as_ref()
            .ok_or_else(|| Error::Config("vendor credentials are not configured".to_string()))?;

        self.login_vendor(&LoginForm {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        })
        .await
    }

    /// The administrator's vendor directory.
    pub fn vendor_directory(&self, session: &AdminSession) -> VendorDirectory<M> {
        VendorDirectory::new(Arc::clone(&self.market), session)
    }

    /// The signed-in vendor's dashboard.
    pub fn vendor_dashboard(&self, session: &VendorSession) -> VendorDashboard<M> {
        VendorDashboard::new(Arc::clone(&self.market), session)
    }

    /// The package manager of `vendor`.
    pub fn package_manager(
        &self,
        session: impl Into<Session>,
        vendor: VendorId,
    ) -> Result<PackageManager<M>, Error> {
        PackageManager::new(Arc::clone(&self.market), session.into(), vendor)
    }

    /// The customer-facing browser of `category`.
    pub fn package_browser(&self, category: Category) -> PackageBrowser<M> {
        PackageBrowser::new(Arc::clone(&self.market), category)
    }

    /// The booking form of `package`.
    pub fn booking(&self, package: PackageId) -> BookingScreen<M> {
        BookingScreen::new(Arc::clone(&self.market), package)
    }

    /// The bookings the signed-in vendor received.
    pub fn booking_list(&self, session: &VendorSession) -> BookingList<M> {
        BookingList::new(Arc::clone(&self.market), session)
    }

    /// The blocked dates of a vendor or a package.
    pub fn calendar(&self, owner: Owner) -> AvailabilityCalendar<M> {
        AvailabilityCalendar::new(Arc::clone(&self.market), owner)
    }

    /// The media of `package`.
    pub fn media_gallery(&self, package: PackageId, source: MediaSource) -> MediaGallery<M> {
        MediaGallery::new(Arc::clone(&self.market), package, source)
    }
}
