// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use evento_core::{APP_NAME, Config, expand_path, get_config_dir};
use tokio::fs;

const EVENTO_CONFIG_ENV: &str = "EVENTO_CONFIG";
const EVENTO_DEV_ENV: &str = "EVENTO_DEV";

const EVENTO_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const EVENTO_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Locates and parses the configuration file.
///
/// The path given on the command line wins over `EVENTO_CONFIG`, which wins
/// over `$XDG_CONFIG_HOME/evento/config.toml`.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        expand_path(&path)?
    } else if let Ok(env_path) = std::env::var(EVENTO_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({EVENTO_DEV_ENV} is set): config must be explicitly specified via --config or {EVENTO_CONFIG_ENV} environment variable",
            ).into());
        }
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    let content = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?;
    tracing::debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(EVENTO_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if EVENTO_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if EVENTO_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            EVENTO_DEV_ENV,
            val,
            EVENTO_DEV_VALID_TRUE.join(", "),
            EVENTO_DEV_VALID_FALSE.join(", "),
        );
        None
    }
}
