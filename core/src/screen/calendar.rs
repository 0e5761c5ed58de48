// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use evento_api::{NewNonAvailability, NonAvailability};
use jiff::civil::Date;

use crate::availability::{Owner, RequestedRange, is_blocked};
use crate::error::Error;
use crate::form::DateForm;
use crate::marketplace::Marketplace;
use crate::screen::{authorize_package, request};
use crate::session::Session;
use crate::state::ListState;

/// Blocked dates of a vendor or of a single package.
#[derive(Debug)]
pub struct AvailabilityCalendar<M> {
    market: Arc<M>,
    owner: Owner,
    records: ListState<NonAvailability>,
    /// The date picker.
    pub form: DateForm,
}

impl<M: Marketplace> AvailabilityCalendar<M> {
    /// Opens the calendar of `owner`. Anyone can read it.
    pub fn new(market: Arc<M>, owner: Owner) -> Self {
        Self {
            market,
            owner,
            records: ListState::new(),
            form: DateForm::default(),
        }
    }

    /// Whose dates are shown.
    pub fn owner(&self) -> Owner {
        self.owner
    }

    /// The blocked-date records.
    pub fn records(&self) -> &ListState<NonAvailability> {
        &self.records
    }

    /// The blocked dates, sorted and without duplicates.
    pub fn dates(&self) -> Vec<Date> {
        let mut dates: Vec<_> = self
            .records
            .iter()
            .map(|a| a.non_availability_date)
            .collect();
        dates.sort_unstable();
        dates.dedup();
        dates
    }

    /// Whether any blocked date falls inside `range`.
    pub fn is_blocked(&self, range: RequestedRange) -> bool {
        is_blocked(self.owner, self.records.as_slice(), range)
    }

    /// Fetches the blocked dates.
    pub async fn load(&mut self) -> Result<(), Error> {
        let records = match self.owner {
            Owner::Vendor(id) => self.market.list_vendor_non_availability(id).await,
            Owner::Package(id) => self.market.list_package_non_availability(id).await,
        };
        let records = request("availability", records)?;

        // Attribute every record to the owner it was fetched for.
        let records = records
            .into_iter()
            .map(|r| match self.owner {
                Owner::Vendor(id) => NonAvailability {
                    vendor_id: Some(id),
                    package_id: None,
                    ..r
                },
                Owner::Package(id) => NonAvailability {
                    package_id: Some(id),
                    ..r
                },
            })
            .collect();
        self.records.replace(records);
        Ok(())
    }

    /// Blocks the picked date, then re-fetches.
    pub async fn add(&mut self, session: &Session) -> Result<String, Error> {
        let date = self.form.validate()?;

        let result = match self.owner {
            Owner::Vendor(id) => {
                session.authorize(id)?;
                let record = NewNonAvailability::vendor(id, date);
                self.market.add_vendor_non_availability(&record).await
            }
            Owner::Package(id) => {
                authorize_package(&*self.market, session, id).await?;
                let record = NewNonAvailability::package(id, date);
                self.market.add_package_non_availability(&record).await
            }
        };
        let msg = request("availability", result)?;

        self.form = DateForm::default();
        if let Err(e) = self.load().await {
            tracing::warn!(error = %e, "failed to refresh blocked dates after write");
        }
        Ok(msg.or("Non-availability date submitted successfully!"))
    }
}
