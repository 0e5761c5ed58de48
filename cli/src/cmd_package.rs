// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use evento_api::{PackageId, VendorId};
use evento_core::{Evento, PackageForm};

use crate::arg::{AuthArgs, CommonArgs, many, target_vendor, vendor_flag};
use crate::package_formatter::PackageColumn;
use crate::table::Table;
use crate::util::OutputFormat;

/// Both kinds of credentials: packages are managed by their vendor or by the
/// administrator.
fn auth_args() -> impl IntoIterator<Item = clap::Arg> {
    AuthArgs::vendor().into_iter().chain(AuthArgs::admin())
}

#[derive(Debug, Clone)]
pub struct CmdPackageList {
    pub auth: AuthArgs,
    pub vendor: Option<VendorId>,
    pub output_format: OutputFormat,
}

impl CmdPackageList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the packages of a vendor")
            .arg(vendor_flag())
            .args(auth_args())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            auth: AuthArgs::from(matches),
            vendor: matches.get_one("vendor").copied(),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, evento: &Evento) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing packages...");
        let session = self.auth.login(evento).await?;
        let vendor = target_vendor(&session, self.vendor)?;
        let mut manager = evento.package_manager(session, vendor)?;
        manager.load().await?;

        if manager.packages().is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No packages found".italic());
            return Ok(());
        }

        let columns = PackageColumn::columns(self.output_format);
        let table = Table::new(&columns, manager.packages().as_slice(), self.output_format);
        print!("{table}");
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdPackageNew {
    pub auth: AuthArgs,
    pub vendor: Option<VendorId>,
    pub form: PackageForm,
}

impl CmdPackageNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a package")
            .arg(arg!(name: <NAME> "Name of the package"))
            .arg(arg!(--price <PRICE> "Price of the package").required(true))
            .arg(arg!(--description <DESCRIPTION> "Description of the package"))
            .arg(vendor_flag())
            .args(auth_args())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let get = |id: &str| matches.get_one::<String>(id).cloned().unwrap_or_default();
        Self {
            auth: AuthArgs::from(matches),
            vendor: matches.get_one("vendor").copied(),
            form: PackageForm {
                package_name: get("name"),
                description: get("description"),
                price: get("price"),
            },
        }
    }

    pub async fn run(self, evento: &Evento) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding package...");
        let session = self.auth.login(evento).await?;
        let vendor = target_vendor(&session, self.vendor)?;
        let mut manager = evento.package_manager(session, vendor)?;
        manager.form = self.form;

        let message = manager.add().await?;
        println!("{}", message.green());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdPackageDelete {
    pub auth: AuthArgs,
    pub vendor: Option<VendorId>,
    pub ids: Vec<PackageId>,
}

impl CmdPackageDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete packages")
            .arg(
                arg!(id: <ID> "Id of the package to delete")
                    .value_parser(value_parser!(PackageId))
                    .num_args(1..),
            )
            .arg(vendor_flag())
            .args(auth_args())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            auth: AuthArgs::from(matches),
            vendor: matches.get_one("vendor").copied(),
            ids: many(matches, "id"),
        }
    }

    pub async fn run(self, evento: &Evento) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting packages...");
        let session = self.auth.login(evento).await?;
        let vendor = target_vendor(&session, self.vendor)?;
        let mut manager = evento.package_manager(session, vendor)?;
        manager.load().await?;

        for id in self.ids {
            let message = manager.remove(id).await?;
            println!("{} {}", message.green(), format!("(package {id})").italic());
        }
        Ok(())
    }
}
