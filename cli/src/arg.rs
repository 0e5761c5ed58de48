// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fmt};

use clap::{Arg, ArgMatches, arg, value_parser};
use evento_api::VendorId;
use evento_core::{AdminSession, Evento, LoginForm, Session, VendorSession};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

/// Value of an argument clap already enforces as required.
pub fn required<T: Clone + Send + Sync + 'static>(
    matches: &ArgMatches,
    id: &str,
) -> Result<T, Box<dyn Error>> {
    matches
        .get_one::<T>(id)
        .cloned()
        .ok_or_else(|| format!("Missing argument: {id}").into())
}

/// All values of a repeatable argument.
pub fn many<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> Vec<T> {
    matches
        .get_many::<T>(id)
        .map(|a| a.cloned().collect())
        .unwrap_or_default()
}

pub fn vendor_flag() -> Arg {
    arg!(--vendor <VENDOR_ID> "Vendor id, defaults to the signed-in vendor")
        .value_parser(value_parser!(VendorId))
}

/// The vendor a command acts on: the `--vendor` flag, or the signed-in
/// vendor. The administrator has no vendor of its own.
pub fn target_vendor(
    session: &Session,
    vendor: Option<VendorId>,
) -> Result<VendorId, Box<dyn Error>> {
    match (vendor, session) {
        (Some(vendor), _) => Ok(vendor),
        (None, Session::Vendor(session)) => Ok(session.id()),
        (None, Session::Admin(_)) => {
            Err("--vendor is required when signed in as the administrator".into())
        }
    }
}

/// Credentials given on the command line or through the environment. When
/// none are given, the ones from the configuration file are used.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthArgs {
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for AuthArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthArgs")
            .field("admin_username", &self.admin_username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl AuthArgs {
    pub fn admin() -> [Arg; 2] {
        [
            arg!(--"admin-username" <USERNAME> "Administrator user name")
                .env("EVENTO_ADMIN_USERNAME"),
            arg!(--"admin-password" <PASSWORD> "Administrator password")
                .env("EVENTO_ADMIN_PASSWORD")
                .hide_env_values(true),
        ]
    }

    pub fn vendor() -> [Arg; 2] {
        [
            arg!(--email <EMAIL> "Vendor login email").env("EVENTO_VENDOR_EMAIL"),
            arg!(--password <PASSWORD> "Vendor login password")
                .env("EVENTO_VENDOR_PASSWORD")
                .hide_env_values(true),
        ]
    }

    /// Reads whichever credential arguments the command defines.
    pub fn from(matches: &ArgMatches) -> Self {
        let get = |id: &str| {
            matches
                .try_get_one::<String>(id)
                .ok()
                .flatten()
                .cloned()
        };

        Self {
            admin_username: get("admin-username"),
            admin_password: get("admin-password"),
            email: get("email"),
            password: get("password"),
        }
    }

    fn has_admin(&self) -> bool {
        self.admin_username.is_some() || self.admin_password.is_some()
    }

    fn has_vendor(&self) -> bool {
        self.email.is_some() || self.password.is_some()
    }

    /// Signs the administrator in.
    pub fn login_admin(&self, evento: &Evento) -> Result<AdminSession, Box<dyn Error>> {
        let session = match (&self.admin_username, &self.admin_password) {
            (Some(username), Some(password)) => evento.login_admin(username, password)?,
            (None, None) => match &evento.config().admin {
                Some(admin) => evento.login_admin(&admin.username, &admin.password)?,
                None => {
                    return Err("Admin credentials required: pass --admin-username and --admin-password, or set [admin] in the config".into());
                }
            },
            _ => return Err("Both --admin-username and --admin-password are required".into()),
        };
        Ok(session)
    }

    /// Signs a vendor in through the marketplace.
    pub async fn login_vendor(&self, evento: &Evento) -> Result<VendorSession, Box<dyn Error>> {
        let session = if self.has_vendor() {
            let form = LoginForm {
                email: self.email.clone().unwrap_or_default(),
                password: self.password.clone().unwrap_or_default(),
            };
            evento.login_vendor(&form).await?
        } else if evento.config().vendor.is_some() {
            evento.login_configured_vendor().await?
        } else {
            return Err("Vendor credentials required: pass --email and --password, or set [vendor] in the config".into());
        };
        Ok(session)
    }

    /// Signs in as the administrator when admin credentials were given,
    /// as a vendor otherwise. Without any, the configured vendor is
    /// preferred over the configured administrator.
    pub async fn login(&self, evento: &Evento) -> Result<Session, Box<dyn Error>> {
        if self.has_admin() {
            self.login_admin(evento).map(Session::from)
        } else if self.has_vendor() || evento.config().vendor.is_some() {
            self.login_vendor(evento).await.map(Session::from)
        } else if evento.config().admin.is_some() {
            self.login_admin(evento).map(Session::from)
        } else {
            Err("Credentials required: pass --email/--password or --admin-username/--admin-password".into())
        }
    }
}
