// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use evento_api::{Category, VendorId};
use evento_core::{Evento, LOCATIONS, VendorForm};

use crate::arg::{AuthArgs, CommonArgs, many};
use crate::table::Table;
use crate::util::OutputFormat;
use crate::vendor_formatter::VendorColumn;

#[derive(Debug, Clone)]
pub struct CmdVendorList {
    pub auth: AuthArgs,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdVendorList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List all vendors")
            .args(AuthArgs::admin())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            auth: AuthArgs::from(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, evento: &Evento) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing vendors...");
        let session = self.auth.login_admin(evento)?;
        let mut directory = evento.vendor_directory(&session);
        directory.load().await?;

        if directory.vendors().is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No vendors found".italic());
            return Ok(());
        }

        let columns = VendorColumn::columns(self.verbose);
        let table = Table::new(&columns, directory.vendors().as_slice(), self.output_format);
        print!("{table}");
        Ok(())
    }
}

#[derive(Clone)]
pub struct CmdVendorNew {
    pub auth: AuthArgs,
    pub form: VendorForm,
}

impl std::fmt::Debug for CmdVendorNew {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmdVendorNew")
            .field("auth", &self.auth)
            .field("name", &self.form.name)
            .field("category", &self.form.category)
            .finish_non_exhaustive()
    }
}

impl CmdVendorNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        let categories = Category::ALL.map(Category::name).join(", ");
        Command::new(Self::NAME)
            .alias("add")
            .about("Register a new vendor")
            .arg(arg!(--name <NAME> "Business name").required(true))
            .arg(arg!(--username <USERNAME> "Login user name").required(true))
            .arg(arg!(--phone <PHONE> "Contact phone").required(true))
            .arg(arg!(--"vendor-email" <EMAIL> "Login email of the new vendor").required(true))
            .arg(arg!(--"vendor-password" <PASSWORD> "Login password of the new vendor").required(true))
            .arg(
                arg!(--category <CATEGORY> "Service category")
                    .required(true)
                    .long_help(format!("Service category, one of: {categories}")),
            )
            .arg(
                arg!(--location <LOCATION> "City the vendor serves")
                    .required(true)
                    .long_help(format!("City the vendor serves, one of: {}", LOCATIONS.join(", "))),
            )
            .args(AuthArgs::admin())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let get = |id: &str| matches.get_one::<String>(id).cloned().unwrap_or_default();
        Self {
            auth: AuthArgs::from(matches),
            form: VendorForm {
                name: get("name"),
                username: get("username"),
                phone: get("phone"),
                email: get("vendor-email"),
                password: get("vendor-password"),
                category: get("category"),
                location: get("location"),
            },
        }
    }

    pub async fn run(self, evento: &Evento) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding vendor...");
        let session = self.auth.login_admin(evento)?;
        let mut directory = evento.vendor_directory(&session);
        directory.form = self.form;

        let message = directory.add().await?;
        println!("{}", message.green());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdVendorDelete {
    pub auth: AuthArgs,
    pub ids: Vec<VendorId>,
}

impl CmdVendorDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete vendors")
            .arg(
                arg!(id: <ID> "Id of the vendor to delete")
                    .value_parser(value_parser!(VendorId))
                    .num_args(1..),
            )
            .args(AuthArgs::admin())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            auth: AuthArgs::from(matches),
            ids: many(matches, "id"),
        }
    }

    pub async fn run(self, evento: &Evento) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting vendors...");
        let session = self.auth.login_admin(evento)?;
        let mut directory = evento.vendor_directory(&session);
        for id in self.ids {
            let message = directory.delete(id).await?;
            println!("{} {}", message.green(), format!("(vendor {id})").italic());
        }
        Ok(())
    }
}
