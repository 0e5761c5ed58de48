// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use evento_core::Evento;

use crate::arg::{AuthArgs, CommonArgs};
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdLogin {
    pub auth: AuthArgs,
    pub output_format: OutputFormat,
}

impl CmdLogin {
    pub const NAME: &str = "login";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Verify vendor credentials against the marketplace")
            .args(AuthArgs::vendor())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            auth: AuthArgs::from(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, evento: &Evento) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "signing in...");
        let session = self.auth.login_vendor(evento).await?;
        match self.output_format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(session.identity())?);
            }
            OutputFormat::Table => println!(
                "{} {} (vendor {})",
                "Signed in as".green(),
                session.name().bold(),
                session.id()
            ),
        }
        Ok(())
    }
}
