// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::sync::Arc;

use evento_api::{Category, Media, MediaUpload, PackageId};

use crate::error::Error;
use crate::marketplace::Marketplace;
use crate::screen::{authorize_package, request};
use crate::session::Session;
use crate::state::ListState;

/// Where a gallery reads its media from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSource {
    /// The vendor's own media manager.
    Manager,
    /// The customer-facing category gallery.
    Category(Category),
}

/// Images and videos of one package.
#[derive(Debug)]
pub struct MediaGallery<M> {
    market: Arc<M>,
    package_id: PackageId,
    source: MediaSource,
    media: ListState<Media>,
}

impl<M: Marketplace> MediaGallery<M> {
    /// Opens the gallery of `package_id`.
    pub fn new(market: Arc<M>, package_id: PackageId, source: MediaSource) -> Self {
        Self {
            market,
            package_id,
            source,
            media: ListState::new(),
        }
    }

    /// The package whose media is shown.
    pub fn package_id(&self) -> PackageId {
        self.package_id
    }

    /// The media currently shown.
    pub fn media(&self) -> &ListState<Media> {
        &self.media
    }

    /// Fetches the package's media.
    pub async fn load(&mut self) -> Result<(), Error> {
        let media = match self.source {
            MediaSource::Manager => self.market.list_package_media(self.package_id).await,
            MediaSource::Category(category) => {
                self.market
                    .list_category_media(category, self.package_id)
                    .await
            }
        };
        let media = request("media gallery", media)?;
        self.media.replace(media);
        Ok(())
    }

    /// Uploads a file from disk, then re-fetches.
    pub async fn upload_file(&mut self, session: &Session, path: &Path) -> Result<String, Error> {
        let upload = request(
            "media gallery",
            MediaUpload::from_path(self.package_id, path).await,
        )?;
        self.send(session, upload).await
    }

    /// Uploads in-memory bytes, then re-fetches.
    pub async fn upload_bytes(
        &mut self,
        session: &Session,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, Error> {
        let upload = MediaUpload::new(self.package_id, file_name, bytes);
        self.send(session, upload).await
    }

    async fn send(&mut self, session: &Session, upload: MediaUpload) -> Result<String, Error> {
        authorize_package(&*self.market, session, self.package_id).await?;
        let msg = request("media gallery", self.market.upload_media(&upload).await)?;

        if let Err(e) = self.load().await {
            tracing::warn!(error = %e, "failed to refresh media after upload");
        }
        Ok(msg.or("Upload successful"))
    }
}
