// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use evento_api::{ApiError, Credentials, VendorId};
use evento_core::{Config, Error, Evento, LoginForm};

use crate::common::{
    ADMIN_PASSWORD, ADMIN_USERNAME, FakeMarketplace, FakeState, login_email, test_evento,
    vendor_login,
};

#[test]
fn admin_login_checks_configured_credentials() {
    let evento = test_evento(FakeState::default());

    assert!(evento.login_admin(ADMIN_USERNAME, ADMIN_PASSWORD).is_ok());
    assert!(matches!(
        evento.login_admin(ADMIN_USERNAME, "guess"),
        Err(Error::Api(ApiError::Unauthorized))
    ));
}

#[test]
fn admin_login_requires_configuration() {
    let evento =
        Evento::with_marketplace(Config::default(), FakeMarketplace::default()).unwrap();

    let err = evento.login_admin("admin", "admin").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[tokio::test]
async fn vendor_login_returns_session() {
    let evento = test_evento(FakeState {
        logins: vec![vendor_login(7, "Bloom Decor")],
        ..Default::default()
    });

    let session = evento
        .login_vendor(&LoginForm {
            email: login_email(7),
            password: "pw".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(session.id(), VendorId::new(7));
    assert_eq!(session.name(), "Bloom Decor");
}

#[tokio::test]
async fn vendor_login_rejected() {
    let evento = test_evento(FakeState {
        logins: vec![vendor_login(7, "Bloom Decor")],
        ..Default::default()
    });

    let err = evento
        .login_vendor(&LoginForm {
            email: login_email(7),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Api(ApiError::Unauthorized)));
}

#[tokio::test]
async fn vendor_login_empty_form_makes_no_request() {
    let evento = test_evento(FakeState::default());

    let err = evento.login_vendor(&LoginForm::default()).await.unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert!(evento.marketplace().calls().is_empty());
}

#[tokio::test]
async fn vendor_login_from_configuration() {
    let (credentials, identity) = vendor_login(7, "Bloom Decor");
    let config = Config {
        vendor: Some(Credentials {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        }),
        ..Default::default()
    };
    let market = FakeMarketplace::new(FakeState {
        logins: vec![(credentials, identity)],
        ..Default::default()
    });
    let evento = Evento::with_marketplace(config, market).unwrap();

    let session = evento.login_configured_vendor().await.unwrap();
    assert_eq!(session.id(), VendorId::new(7));
}
