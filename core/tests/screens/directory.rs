// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use evento_api::VendorId;
use evento_core::{Error, VendorForm};

use crate::common::{ADMIN_PASSWORD, ADMIN_USERNAME, FakeState, test_evento, vendor};

fn filled_form() -> VendorForm {
    VendorForm {
        name: "Bloom Decor".to_string(),
        username: "bloom".to_string(),
        phone: String::new(),
        email: "bloom@example.com".to_string(),
        password: "pw".to_string(),
        category: "Decorators".to_string(),
        location: "Howrah".to_string(),
    }
}

#[tokio::test]
async fn directory_load_replaces_vendors() {
    // Arrange
    let evento = test_evento(FakeState {
        vendors: vec![vendor(1, "Lens Light"), vendor(2, "Bloom Decor")],
        ..Default::default()
    });
    let admin = evento.login_admin(ADMIN_USERNAME, ADMIN_PASSWORD).unwrap();
    let mut directory = evento.vendor_directory(&admin);

    // Act
    directory.load().await.unwrap();

    // Assert
    assert_eq!(directory.vendors().len(), 2);
    assert!(directory.vendors().get(VendorId::new(2)).is_some());
}

#[tokio::test]
async fn directory_failed_load_keeps_previous_state() {
    let evento = test_evento(FakeState {
        vendors: vec![vendor(1, "Lens Light")],
        ..Default::default()
    });
    let admin = evento.login_admin(ADMIN_USERNAME, ADMIN_PASSWORD).unwrap();
    let mut directory = evento.vendor_directory(&admin);
    directory.load().await.unwrap();

    evento.marketplace().with(|s| s.failing = true);
    let err = directory.load().await.unwrap_err();

    assert_eq!(err.user_message(), "Server is down");
    assert_eq!(directory.vendors().len(), 1);
}

#[tokio::test]
async fn directory_add_with_empty_field_makes_no_request() {
    let evento = test_evento(FakeState::default());
    let admin = evento.login_admin(ADMIN_USERNAME, ADMIN_PASSWORD).unwrap();
    let mut directory = evento.vendor_directory(&admin);
    directory.form = VendorForm {
        password: String::new(),
        ..filled_form()
    };

    let err = directory.add().await.unwrap_err();

    let Error::Validation(err) = err else {
        panic!("expected a validation error");
    };
    assert_eq!(err.field_names().collect::<Vec<_>>(), ["password"]);
    assert!(evento.marketplace().calls().is_empty());
    assert_eq!(directory.form.name, "Bloom Decor", "form is kept on failure");
}

#[tokio::test]
async fn directory_add_appends_with_server_id() {
    let evento = test_evento(FakeState {
        report_ids: true,
        next_id: 41,
        ..Default::default()
    });
    let admin = evento.login_admin(ADMIN_USERNAME, ADMIN_PASSWORD).unwrap();
    let mut directory = evento.vendor_directory(&admin);
    directory.form = filled_form();

    let msg = directory.add().await.unwrap();

    assert_eq!(msg, "Vendor added successfully");
    let added = directory.vendors().get(VendorId::new(41)).unwrap();
    assert_eq!(added.name, "Bloom Decor");
    assert_eq!(added.phone, None);
    assert_eq!(directory.form, VendorForm::default());
    assert_eq!(evento.marketplace().calls(), ["add_vendor"]);
}

#[tokio::test]
async fn directory_add_synthesizes_id_when_server_is_silent() {
    let evento = test_evento(FakeState::default());
    let admin = evento.login_admin(ADMIN_USERNAME, ADMIN_PASSWORD).unwrap();
    let mut directory = evento.vendor_directory(&admin);
    directory.form = filled_form();

    directory.add().await.unwrap();

    let added = directory.vendors().iter().next().unwrap();
    assert!(added.id.get() > 0);
    assert_eq!(added.category.as_deref(), Some("Decorators"));
}

#[tokio::test]
async fn directory_delete_is_idempotent() {
    let evento = test_evento(FakeState {
        vendors: vec![vendor(1, "Lens Light"), vendor(2, "Bloom Decor")],
        ..Default::default()
    });
    let admin = evento.login_admin(ADMIN_USERNAME, ADMIN_PASSWORD).unwrap();
    let mut directory = evento.vendor_directory(&admin);
    directory.load().await.unwrap();

    let msg = directory.delete(VendorId::new(1)).await.unwrap();
    directory.delete(VendorId::new(1)).await.unwrap();

    assert_eq!(msg, "Vendor deleted successfully");
    assert_eq!(directory.vendors().len(), 1);
    assert!(directory.vendors().get(VendorId::new(2)).is_some());
}

#[tokio::test]
async fn directory_failed_delete_keeps_vendor() {
    let evento = test_evento(FakeState {
        vendors: vec![vendor(1, "Lens Light")],
        ..Default::default()
    });
    let admin = evento.login_admin(ADMIN_USERNAME, ADMIN_PASSWORD).unwrap();
    let mut directory = evento.vendor_directory(&admin);
    directory.load().await.unwrap();

    evento.marketplace().with(|s| s.failing = true);
    assert!(directory.delete(VendorId::new(1)).await.is_err());
    assert_eq!(directory.vendors().len(), 1);
}
