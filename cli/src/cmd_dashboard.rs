// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use evento_core::Evento;

use crate::arg::{AuthArgs, CommonArgs};
use crate::package_formatter::PackageColumn;
use crate::table::Table;
use crate::util::OutputFormat;
use crate::vendor_formatter::VendorColumn;

#[derive(Debug, Clone)]
pub struct CmdDashboard {
    pub auth: AuthArgs,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdDashboard {
    pub const NAME: &str = "dashboard";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the vendor dashboard, with the vendor's details and packages")
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

    /// Show the dashboard of the signed-in vendor.
    pub async fn run(self, evento: &Evento) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating dashboard...");
        let session = self.auth.login_vendor(evento).await?;
        let mut dashboard = evento.vendor_dashboard(&session);
        dashboard.load().await?;

        if self.output_format == OutputFormat::Json {
            let json = serde_json::json!({
                "vendor": dashboard.vendor(),
                "packages": dashboard.packages().as_slice(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
            return Ok(());
        }

        println!("🏷️ {}", "Vendor".bold());
        if let Some(vendor) = dashboard.vendor() {
            let columns = VendorColumn::columns(self.verbose);
            let rows = [vendor.clone()];
            print!("{}", Table::new(&columns, &rows, self.output_format));
        }
        println!();

        println!("📦 {}", "Packages".bold());
        if dashboard.packages().is_empty() {
            println!("{}", "No packages yet".italic());
        } else {
            let columns = PackageColumn::columns(self.output_format);
            let table = Table::new(&columns, dashboard.packages().as_slice(), self.output_format);
            print!("{table}");
        }
        Ok(())
    }
}
