// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use evento_api::PackageId;
use evento_core::{BookingForm, Evento};

use crate::arg::{AuthArgs, CommonArgs, required};
use crate::booking_formatter::BookingColumn;
use crate::table::Table;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdBook {
    pub package: PackageId,
    pub form: BookingForm,
}

impl CmdBook {
    pub const NAME: &str = "book";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Book a package")
            .arg(
                arg!(package: <PACKAGE> "Id of the package to book")
                    .value_parser(value_parser!(PackageId)),
            )
            .arg(arg!(--name <NAME> "Your name").required(true))
            .arg(arg!(--email <EMAIL> "Your email").required(true))
            .arg(arg!(--phone <PHONE> "Your phone number").required(true))
            .arg(arg!(--state <STATE> "State of the venue"))
            .arg(arg!(--city <CITY> "City of the venue"))
            .arg(arg!(--area <AREA> "Area of the venue"))
            .arg(arg!(--landmark <LANDMARK> "Landmark near the venue"))
            .arg(arg!(--start <DATE> "First day of the event, YYYY-MM-DD"))
            .arg(arg!(--end <DATE> "Last day of the event, YYYY-MM-DD"))
            .arg(arg!(--advance <AMOUNT> "Advance already paid"))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let get = |id: &str| matches.get_one::<String>(id).cloned().unwrap_or_default();
        Ok(Self {
            package: required(matches, "package")?,
            form: BookingForm {
                name: get("name"),
                email: get("email"),
                phone: get("phone"),
                state: get("state"),
                city: get("city"),
                area: get("area"),
                landmark: get("landmark"),
                start_date: get("start"),
                end_date: get("end"),
                advance_received: get("advance"),
            },
        })
    }

    pub async fn run(self, evento: &Evento) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "booking package...");
        let mut screen = evento.booking(self.package);
        screen.form = self.form;

        let message = screen.submit().await?;
        println!("{}", message.green());
        if let Some(context) = screen.context() {
            let package = context.package_name.as_deref().unwrap_or("package");
            match &context.vendor_name {
                Some(vendor) => println!("{} {package} by {vendor}", "Booked".italic()),
                None => println!("{} {package}", "Booked".italic()),
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdBookingList {
    pub auth: AuthArgs,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdBookingList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the bookings of the signed-in vendor")
            .args(AuthArgs::vendor())
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
        tracing::debug!(?self, "listing bookings...");
        let session = self.auth.login_vendor(evento).await?;
        let mut list = evento.booking_list(&session);
        list.load().await?;

        if list.bookings().is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No bookings yet".italic());
            return Ok(());
        }

        let columns = BookingColumn::columns(self.verbose);
        let table = Table::new(&columns, list.bookings().as_slice(), self.output_format);
        print!("{table}");
        Ok(())
    }
}
