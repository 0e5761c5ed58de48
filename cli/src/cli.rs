// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use evento_core::{APP_NAME, Evento};
use futures::{FutureExt, future::BoxFuture};
use tracing_subscriber::{EnvFilter, fmt};

use crate::cmd_booking::{CmdBook, CmdBookingList};
use crate::cmd_browse::CmdBrowse;
use crate::cmd_dashboard::CmdDashboard;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_login::CmdLogin;
use crate::cmd_media::{CmdMediaList, CmdMediaUpload};
use crate::cmd_package::{CmdPackageDelete, CmdPackageList, CmdPackageNew};
use crate::cmd_unavailable::{CmdUnavailableAdd, CmdUnavailableList};
use crate::cmd_vendor::{CmdVendorDelete, CmdVendorList, CmdVendorNew};
use crate::config::parse_config;

/// Run the Evento command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    }
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Browse, book and manage event services on the Evento marketplace.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/evento/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/evento/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdBrowse::command())
            .subcommand(CmdBook::command())
            .subcommand(CmdLogin::command())
            .subcommand(CmdDashboard::command())
            .subcommand(
                Command::new("vendor")
                    .alias("v")
                    .about("Manage the vendors of the marketplace, as the administrator")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdVendorList::command())
                    .subcommand(CmdVendorNew::command())
                    .subcommand(CmdVendorDelete::command()),
            )
            .subcommand(
                Command::new("package")
                    .alias("p")
                    .about("Manage the packages of a vendor")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdPackageList::command())
                    .subcommand(CmdPackageNew::command())
                    .subcommand(CmdPackageDelete::command()),
            )
            .subcommand(
                Command::new("booking")
                    .alias("b")
                    .about("Review the bookings made with a vendor")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdBookingList::command()),
            )
            .subcommand(
                Command::new("unavailable")
                    .alias("u")
                    .about("Manage the dates a vendor or a package cannot be booked")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdUnavailableList::command())
                    .subcommand(CmdUnavailableAdd::command()),
            )
            .subcommand(
                Command::new("media")
                    .alias("m")
                    .about("Manage the images and videos of a package")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdMediaList::command())
                    .subcommand(CmdMediaUpload::command()),
            )
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdBrowse::NAME, matches)) => Browse(CmdBrowse::from(matches)?),
            Some((CmdBook::NAME, matches)) => Book(CmdBook::from(matches)?),
            Some((CmdLogin::NAME, matches)) => Login(CmdLogin::from(matches)),
            Some((CmdDashboard::NAME, matches)) => Dashboard(CmdDashboard::from(matches)),
            Some(("vendor", matches)) => match matches.subcommand() {
                Some((CmdVendorList::NAME, matches)) => VendorList(CmdVendorList::from(matches)),
                Some((CmdVendorNew::NAME, matches)) => VendorNew(CmdVendorNew::from(matches)),
                Some((CmdVendorDelete::NAME, matches)) => {
                    VendorDelete(CmdVendorDelete::from(matches))
                }
                other => return Err(unknown("vendor", other)),
            },
            Some(("package", matches)) => match matches.subcommand() {
                Some((CmdPackageList::NAME, matches)) => PackageList(CmdPackageList::from(matches)),
                Some((CmdPackageNew::NAME, matches)) => PackageNew(CmdPackageNew::from(matches)),
                Some((CmdPackageDelete::NAME, matches)) => {
                    PackageDelete(CmdPackageDelete::from(matches))
                }
                other => return Err(unknown("package", other)),
            },
            Some(("booking", matches)) => match matches.subcommand() {
                Some((CmdBookingList::NAME, matches)) => BookingList(CmdBookingList::from(matches)),
                other => return Err(unknown("booking", other)),
            },
            Some(("unavailable", matches)) => match matches.subcommand() {
                Some((CmdUnavailableList::NAME, matches)) => {
                    UnavailableList(CmdUnavailableList::from(matches))
                }
                Some((CmdUnavailableAdd::NAME, matches)) => {
                    UnavailableAdd(CmdUnavailableAdd::from(matches))
                }
                other => return Err(unknown("unavailable", other)),
            },
            Some(("media", matches)) => match matches.subcommand() {
                Some((CmdMediaList::NAME, matches)) => MediaList(CmdMediaList::from(matches)?),
                Some((CmdMediaUpload::NAME, matches)) => {
                    MediaUpload(CmdMediaUpload::from(matches)?)
                }
                other => return Err(unknown("media", other)),
            },
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches)?)
            }
            other => return Err(unknown(APP_NAME, other)),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

fn unknown(parent: &str, subcommand: Option<(&str, &ArgMatches)>) -> Box<dyn Error> {
    match subcommand {
        Some((name, _)) => format!("Unknown command: {parent} {name}").into(),
        None => format!("Missing subcommand for {parent}").into(),
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Browse the packages of a category
    Browse(CmdBrowse),

    /// Book a package
    Book(CmdBook),

    /// Verify vendor credentials
    Login(CmdLogin),

    /// Show the vendor dashboard
    Dashboard(CmdDashboard),

    /// List vendors
    VendorList(CmdVendorList),

    /// Register a vendor
    VendorNew(CmdVendorNew),

    /// Delete vendors
    VendorDelete(CmdVendorDelete),

    /// List packages
    PackageList(CmdPackageList),

    /// Add a package
    PackageNew(CmdPackageNew),

    /// Delete packages
    PackageDelete(CmdPackageDelete),

    /// List bookings
    BookingList(CmdBookingList),

    /// List blocked dates
    UnavailableList(CmdUnavailableList),

    /// Block a date
    UnavailableAdd(CmdUnavailableAdd),

    /// List media
    MediaList(CmdMediaList),

    /// Upload media
    MediaUpload(CmdMediaUpload),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Browse(a)          => Self::run_with(config, |x| a.run(x).boxed()).await,
            Book(a)            => Self::run_with(config, |x| a.run(x).boxed()).await,
            Login(a)           => Self::run_with(config, |x| a.run(x).boxed()).await,
            Dashboard(a)       => Self::run_with(config, |x| a.run(x).boxed()).await,
            VendorList(a)      => Self::run_with(config, |x| a.run(x).boxed()).await,
            VendorNew(a)       => Self::run_with(config, |x| a.run(x).boxed()).await,
            VendorDelete(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            PackageList(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            PackageNew(a)      => Self::run_with(config, |x| a.run(x).boxed()).await,
            PackageDelete(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            BookingList(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            UnavailableList(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            UnavailableAdd(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
            MediaList(a)       => Self::run_with(config, |x| a.run(x).boxed()).await,
            MediaUpload(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Evento) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let evento = Evento::new(config)?;
        f(&evento).await
    }
}
