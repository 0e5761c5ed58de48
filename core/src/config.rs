// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::path::{Path, PathBuf};

use evento_api::{ApiConfig, Credentials};

use crate::error::Error;

/// The name of the Evento application.
pub const APP_NAME: &str = "evento";

/// Configuration for the Evento application.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Marketplace API server.
    #[serde(default)]
    pub api: ApiConfig,

    /// Credentials the administrator signs in with. Admin screens are
    /// unavailable when this is absent.
    #[serde(default)]
    pub admin: Option<AdminCredentials>,

    /// Default vendor credentials for the vendor screens.
    #[serde(default)]
    pub vendor: Option<Credentials>,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Error> {
        let base_url = self.api.base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(Error::Config("api.base_url must not be empty".to_string()));
        }
        self.api.base_url = base_url.to_string();

        if self.api.timeout_secs == 0 {
            return Err(Error::Config(
                "api.timeout_secs must be greater than zero".to_string(),
            ));
        }

        if let Some(admin) = &self.admin
            && (admin.username.trim().is_empty() || admin.password.is_empty())
        {
            tracing::warn!("admin credentials are incomplete, admin screens are disabled");
            self.admin = None;
        }

        Ok(())
    }
}

/// Administrator credentials, compared locally.
#[derive(Clone, PartialEq, Eq, serde::Deserialize)]
pub struct AdminCredentials {
    /// Admin user name.
    pub username: String,
    /// Admin password.
    pub password: String,
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Handle tilde (~) and environment variables in the path
pub fn expand_path(path: &Path) -> Result<PathBuf, Error> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path
        .to_str()
        .ok_or_else(|| Error::Config("Invalid path".to_string()))?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

/// The user's configuration directory.
pub fn get_config_dir() -> Result<PathBuf, Error> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| Error::Config("User-specific config directory not found".to_string()))
}

fn get_home_dir() -> Result<PathBuf, Error> {
    dirs::home_dir().ok_or_else(|| Error::Config("User-specific home directory not found".to_string()))
}
