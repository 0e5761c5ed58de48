// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use evento_api::{ApiError, Category, NonAvailability, PackageListing};
use futures::future::join_all;

use crate::error::Error;
use crate::filter::PackageFilter;
use crate::marketplace::Marketplace;
use crate::screen::request;
use crate::state::ListState;

/// A category's packages, as customers browse them.
#[derive(Debug)]
pub struct PackageBrowser<M> {
    market: Arc<M>,
    category: Category,
    listings: ListState<PackageListing>,
    records: Vec<NonAvailability>,
    /// Filters applied by [`PackageBrowser::visible`].
    pub filter: PackageFilter,
}

impl<M: Marketplace> PackageBrowser<M> {
    /// Opens the browser of `category`.
    pub fn new(market: Arc<M>, category: Category) -> Self {
        Self {
            market,
            category,
            listings: ListState::new(),
            records: Vec::new(),
            filter: PackageFilter::default(),
        }
    }

    /// The category being browsed.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Every listing of the category, unfiltered.
    pub fn listings(&self) -> &ListState<PackageListing> {
        &self.listings
    }

    /// Vendor and package non-availability known to the browser.
    pub fn records(&self) -> &[NonAvailability] {
        &self.records
    }

    /// The listings that pass the filter.
    pub fn visible(&self) -> Vec<PackageListing> {
        self.filter.apply(self.listings.as_slice(), &self.records)
    }

    /// Fetches the listings and every vendor's blocked dates together, then
    /// the blocked dates of each listed package.
    pub async fn load(&mut self) -> Result<(), Error> {
        let market = &*self.market;
        let (listings, mut records) = request(
            "package browser",
            tokio::try_join!(
                market.list_category_packages(self.category),
                market.list_all_vendor_non_availability(),
            ),
        )?;

        // Per-package records are optional: a package whose records cannot
        // be fetched is treated as having none.
        let per_package = join_all(listings.iter().map(|a| async move {
            match market.list_package_non_availability(a.package_id).await {
                Ok(records) => records
                    .into_iter()
                    .map(|r| NonAvailability {
                        package_id: Some(a.package_id),
                        ..r
                    })
                    .collect::<Vec<_>>(),
                Err(ApiError::NotFound { .. }) => Vec::new(),
                Err(e) => {
                    tracing::warn!(
                        package = %a.package_id,
                        error = %e,
                        "package non-availability unavailable"
                    );
                    Vec::new()
                }
            }
        }))
        .await;
        records.extend(per_package.into_iter().flatten());

        tracing::debug!(
            category = %self.category,
            listings = listings.len(),
            records = records.len(),
            "browser loaded"
        );
        self.listings.replace(listings);
        self.records = records;
        Ok(())
    }
}
