// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::common::{FakeState, package, sign_in, test_evento, vendor, vendor_login};

#[tokio::test]
async fn dashboard_loads_details_and_packages() {
    let evento = test_evento(FakeState {
        vendors: vec![vendor(1, "Lens Light"), vendor(2, "Bloom Decor")],
        packages: vec![package(10, 1, 5000.0), package(20, 2, 3000.0)],
        logins: vec![vendor_login(2, "Bloom Decor")],
        ..Default::default()
    });
    let session = sign_in(&evento, 2).await;
    let mut dashboard = evento.vendor_dashboard(&session);

    dashboard.load().await.unwrap();

    assert_eq!(dashboard.vendor().unwrap().name, "Bloom Decor");
    let ids: Vec<_> = dashboard.packages().iter().map(|a| a.id.get()).collect();
    assert_eq!(ids, [20]);
}

#[tokio::test]
async fn dashboard_fails_when_vendor_is_gone() {
    let evento = test_evento(FakeState {
        logins: vec![vendor_login(3, "Gone")],
        ..Default::default()
    });
    let session = sign_in(&evento, 3).await;
    let mut dashboard = evento.vendor_dashboard(&session);

    assert!(dashboard.load().await.is_err());
    assert!(dashboard.vendor().is_none());
    assert!(dashboard.packages().is_empty());
}
