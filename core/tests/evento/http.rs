// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use evento_api::{ApiConfig, Category};
use evento_core::{Config, Evento, LoginForm, PackageFilter, RequestedRange};
use jiff::civil::date;
use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn evento_for(server: &MockServer) -> Evento {
    Evento::new(Config {
        api: ApiConfig::with_base_url(server.uri()),
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn browse_against_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/caterers/packages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "package_id": 1, "vendor_id": 1, "package_name": "Veg", "price": "300", "location": "Kolkata" },
            { "package_id": 2, "vendor_id": 2, "package_name": "Non-veg", "price": 450, "location": "Kolkata" }
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/vendor-availability"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "vendor_id": 1, "non_availability_date": "2024-06-10T00:00:00.000Z" }
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/api/package-non-availability/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let evento = evento_for(&mock_server);
    let mut browser = evento.package_browser(Category::Caterers);
    browser.load().await.unwrap();
    browser.filter = PackageFilter {
        range: RequestedRange::new(Some(date(2024, 6, 1)), Some(date(2024, 6, 15))),
        ..Default::default()
    };

    let visible = browser.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].package_name, "Non-veg");
}

#[tokio::test]
async fn vendor_dashboard_against_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": 4, "name": "Bloom Decor", "email": "v@example.com" })),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api2/vendors/4"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": 4, "name": "Bloom Decor", "location": "Howrah" })),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/vendor-packages/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 9, "vendor_id": 4, "package_name": "Gold", "price": "15000.00" }
        ])))
        .mount(&mock_server)
        .await;

    let evento = evento_for(&mock_server);
    let session = evento
        .login_vendor(&LoginForm {
            email: "v@example.com".to_string(),
            password: "pw".to_string(),
        })
        .await
        .unwrap();
    let mut dashboard = evento.vendor_dashboard(&session);
    dashboard.load().await.unwrap();

    assert_eq!(dashboard.vendor().unwrap().location.as_deref(), Some("Howrah"));
    assert_eq!(dashboard.packages().len(), 1);
}

#[tokio::test]
async fn browse_survives_failing_package_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/caterers/packages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "package_id": 1, "vendor_id": 1, "package_name": "Veg", "price": 300, "location": "Kolkata" },
            { "package_id": 2, "vendor_id": 2, "package_name": "Non-veg", "price": 450, "location": "Kolkata" }
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/vendor-availability"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/package-non-availability/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 5, "non_availability_date": "2024-06-10" }
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/package-non-availability/2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "db down" })))
        .mount(&mock_server)
        .await;

    let evento = evento_for(&mock_server);
    let mut browser = evento.package_browser(Category::Caterers);
    browser.load().await.unwrap();

    assert_eq!(browser.listings().len(), 2);
    assert_eq!(browser.records().len(), 1);

    browser.filter = PackageFilter {
        range: RequestedRange::new(Some(date(2024, 6, 1)), Some(date(2024, 6, 15))),
        ..Default::default()
    };
    let visible = browser.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].package_name, "Non-veg");
}
