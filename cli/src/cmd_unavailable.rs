// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use evento_api::{PackageId, VendorId};
use evento_core::{DateForm, Evento, Owner, Session};

use crate::arg::{AuthArgs, CommonArgs, target_vendor, vendor_flag};
use crate::availability_formatter::RecordColumn;
use crate::table::Table;
use crate::util::OutputFormat;

fn package_flag() -> Arg {
    arg!(--package <PACKAGE_ID> "Package id, to act on a single package")
        .value_parser(value_parser!(PackageId))
        .conflicts_with("vendor")
}

/// Whose dates a command acts on, when it was named on the command line.
fn named_owner(package: Option<PackageId>, vendor: Option<VendorId>) -> Option<Owner> {
    package
        .map(Owner::Package)
        .or_else(|| vendor.map(Owner::Vendor))
}

#[derive(Debug, Clone)]
pub struct CmdUnavailableList {
    pub auth: AuthArgs,
    pub owner: Option<Owner>,
    pub output_format: OutputFormat,
}

impl CmdUnavailableList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List blocked dates of a vendor or a package")
            .arg(vendor_flag())
            .arg(package_flag())
            .args(AuthArgs::vendor())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            auth: AuthArgs::from(matches),
            owner: named_owner(
                matches.get_one("package").copied(),
                matches.get_one("vendor").copied(),
            ),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, evento: &Evento) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing blocked dates...");
        let owner = match self.owner {
            Some(owner) => owner,
            None => Owner::Vendor(self.auth.login_vendor(evento).await?.id()),
        };

        let mut calendar = evento.calendar(owner);
        calendar.load().await?;

        if calendar.records().is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No blocked dates".italic());
            return Ok(());
        }

        let mut records = calendar.records().as_slice().to_vec();
        records.sort_by_key(|a| a.non_availability_date);
        let columns = RecordColumn::columns();
        print!("{}", Table::new(&columns, &records, self.output_format));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdUnavailableAdd {
    pub auth: AuthArgs,
    pub package: Option<PackageId>,
    pub vendor: Option<VendorId>,
    pub date: String,
}

impl CmdUnavailableAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("new")
            .about("Block a date for a vendor or one of its packages")
            .arg(arg!(date: <DATE> "The date to block, YYYY-MM-DD"))
            .arg(vendor_flag())
            .arg(package_flag())
            .args(AuthArgs::vendor())
            .args(AuthArgs::admin())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            auth: AuthArgs::from(matches),
            package: matches.get_one("package").copied(),
            vendor: matches.get_one("vendor").copied(),
            date: matches.get_one::<String>("date").cloned().unwrap_or_default(),
        }
    }

    pub async fn run(self, evento: &Evento) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "blocking date...");
        let form = DateForm::new(self.date);
        form.validate()?;

        let session: Session = self.auth.login(evento).await?;
        let owner = match named_owner(self.package, self.vendor) {
            Some(owner) => owner,
            None => Owner::Vendor(target_vendor(&session, None)?),
        };

        let mut calendar = evento.calendar(owner);
        calendar.form = form;
        let message = calendar.add(&session).await?;
        println!("{}", message.green());
        Ok(())
    }
}
