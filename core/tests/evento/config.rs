// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use evento_api::DEFAULT_BASE_URL;
use evento_core::{Config, Error, Evento};

#[test]
fn config_from_toml_with_all_sections() {
    let config: Config = toml::from_str(
        r#"
[api]
base_url = "http://localhost:5000/"
timeout_secs = 5

[admin]
username = "admin"
password = "secret"

[vendor]
email = "v@example.com"
password = "pw"
"#,
    )
    .unwrap();

    let evento = Evento::new(config).unwrap();
    let config = evento.config();
    assert_eq!(config.api.base_url, "http://localhost:5000");
    assert_eq!(config.api.timeout_secs, 5);
    assert_eq!(config.admin.as_ref().unwrap().username, "admin");
    assert_eq!(config.vendor.as_ref().unwrap().email, "v@example.com");
}

#[test]
fn config_empty_file_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();

    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.api.timeout_secs, 30);
    assert!(config.admin.is_none());
    assert!(config.vendor.is_none());
}

#[test]
fn config_invalid_is_rejected_by_evento() {
    let config: Config = toml::from_str(
        r#"
[api]
timeout_secs = 0
"#,
    )
    .unwrap();

    assert!(matches!(Evento::new(config), Err(Error::Config(_))));
}
