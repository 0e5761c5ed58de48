// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use evento_api::Category;
use evento_core::{PackageFilter, RequestedRange};
use jiff::civil::date;

use crate::common::{FakeState, listing, package_record, test_evento, vendor_record};

fn state() -> FakeState {
    FakeState {
        listings: vec![
            listing(10, 1, 5000.0, "Kolkata"),
            listing(20, 2, 4000.0, "Kolkata"),
            listing(30, 3, 9000.0, "Howrah"),
            listing(31, 3, 2500.0, "Howrah"),
        ],
        records: vec![
            // vendor 1 is away on 2024-06-10, vendor 2 on 2024-07-01
            vendor_record(1, 1, date(2024, 6, 10)),
            vendor_record(2, 2, date(2024, 7, 1)),
            package_record(3, 31, date(2024, 6, 15)),
        ],
        ..Default::default()
    }
}

fn ids(browser: &evento_core::PackageBrowser<crate::common::FakeMarketplace>) -> Vec<i64> {
    browser.visible().iter().map(|a| a.package_id.get()).collect()
}

#[tokio::test]
async fn browser_without_filter_shows_everything() {
    let evento = test_evento(state());
    let mut browser = evento.package_browser(Category::Decorators);

    browser.load().await.unwrap();

    assert_eq!(ids(&browser), [10, 20, 30, 31]);
    assert_eq!(browser.records().len(), 3);
}

#[tokio::test]
async fn browser_excludes_vendors_blocked_in_range() {
    let evento = test_evento(state());
    let mut browser = evento.package_browser(Category::Decorators);
    browser.load().await.unwrap();

    browser.filter = PackageFilter {
        range: RequestedRange::new(Some(date(2024, 6, 1)), Some(date(2024, 6, 15))),
        ..Default::default()
    };

    // vendor 1 and package 31 are blocked, the latter on the end date
    assert_eq!(ids(&browser), [20, 30]);
}

#[tokio::test]
async fn browser_applies_location_then_price() {
    let evento = test_evento(state());
    let mut browser = evento.package_browser(Category::Decorators);
    browser.load().await.unwrap();

    browser.filter = PackageFilter {
        location: Some("Howrah".to_string()),
        max_price: Some(5000.0),
        range: RequestedRange::new(Some(date(2024, 6, 1)), None),
    };

    assert_eq!(ids(&browser), [31]);
}

#[tokio::test]
async fn browser_treats_missing_package_records_as_none() {
    let evento = test_evento(FakeState {
        package_records_missing: true,
        ..state()
    });
    let mut browser = evento.package_browser(Category::Decorators);

    browser.load().await.unwrap();

    assert_eq!(browser.records().len(), 2);
}

#[tokio::test]
async fn browser_failed_load_keeps_listings() {
    let evento = test_evento(state());
    let mut browser = evento.package_browser(Category::Decorators);
    browser.load().await.unwrap();

    evento.marketplace().with(|s| s.failing = true);
    assert!(browser.load().await.is_err());
    assert_eq!(browser.listings().len(), 4);
}
