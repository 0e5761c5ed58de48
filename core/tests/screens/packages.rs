// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use evento_api::{PackageId, VendorId};
use evento_core::{Error, PackageForm};

use crate::common::{
    ADMIN_PASSWORD, ADMIN_USERNAME, FakeState, package, sign_in, test_evento, vendor_login,
};

fn state() -> FakeState {
    FakeState {
        packages: vec![package(10, 1, 5000.0), package(11, 1, 8000.0), package(20, 2, 3000.0)],
        logins: vec![vendor_login(1, "Lens Light"), vendor_login(2, "Bloom Decor")],
        ..Default::default()
    }
}

#[tokio::test]
async fn package_manager_lists_vendor_packages() {
    let evento = test_evento(state());
    let session = sign_in(&evento, 1).await;

    let mut manager = evento.package_manager(session, VendorId::new(1)).unwrap();
    manager.load().await.unwrap();

    let ids: Vec<_> = manager.packages().iter().map(|a| a.id.get()).collect();
    assert_eq!(ids, [10, 11]);
}

#[tokio::test]
async fn package_manager_rejects_other_vendor() {
    let evento = test_evento(state());
    let session = sign_in(&evento, 1).await;

    let result = evento.package_manager(session, VendorId::new(2));

    assert!(matches!(result, Err(Error::Forbidden(_))));
    assert_eq!(evento.marketplace().calls(), ["login"]);
}

#[tokio::test]
async fn package_manager_add_refetches() {
    let evento = test_evento(state());
    let session = sign_in(&evento, 2).await;
    let mut manager = evento.package_manager(session, VendorId::new(2)).unwrap();
    manager.load().await.unwrap();

    manager.form = PackageForm {
        package_name: "Gold".to_string(),
        description: "Full stage".to_string(),
        price: "12000".to_string(),
    };
    let msg = manager.add().await.unwrap();

    assert_eq!(msg, "Package added");
    assert_eq!(manager.packages().len(), 2);
    assert!(manager.packages().iter().any(|a| a.package_name == "Gold"));
    assert_eq!(manager.form, PackageForm::default());
    assert_eq!(
        evento.marketplace().calls(),
        ["login", "list_managed_packages", "add_package", "list_managed_packages"]
    );
}

#[tokio::test]
async fn package_manager_invalid_price_makes_no_request() {
    let evento = test_evento(state());
    let admin = evento.login_admin(ADMIN_USERNAME, ADMIN_PASSWORD).unwrap();
    let mut manager = evento.package_manager(admin, VendorId::new(2)).unwrap();

    manager.form = PackageForm {
        package_name: "Gold".to_string(),
        description: String::new(),
        price: "a lot".to_string(),
    };
    let err = manager.add().await.unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert!(evento.marketplace().calls().is_empty());
}

#[tokio::test]
async fn package_manager_vendor_removes_only_listed_packages() {
    let evento = test_evento(state());
    let session = sign_in(&evento, 1).await;
    let mut manager = evento.package_manager(session, VendorId::new(1)).unwrap();
    manager.load().await.unwrap();

    let err = manager.remove(PackageId::new(20)).await.unwrap_err();
    assert!(matches!(err, Error::Forbidden(_)));

    let msg = manager.remove(PackageId::new(10)).await.unwrap();
    assert_eq!(msg, "Package removed successfully!");
    assert!(manager.packages().get(PackageId::new(10)).is_none());
    assert!(evento.marketplace().with(|s| s.packages.iter().all(|a| a.id.get() != 10)));
}

#[tokio::test]
async fn package_manager_admin_removes_any_package() {
    let evento = test_evento(state());
    let admin = evento.login_admin(ADMIN_USERNAME, ADMIN_PASSWORD).unwrap();
    let mut manager = evento.package_manager(admin, VendorId::new(2)).unwrap();

    manager.remove(PackageId::new(20)).await.unwrap();

    assert!(manager.packages().is_empty());
    assert_eq!(
        evento.marketplace().calls(),
        ["delete_package", "list_managed_packages"]
    );
}
