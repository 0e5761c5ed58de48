// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use evento_api::{Category, PackageId};
use evento_core::{Evento, MediaSource, expand_path};

use crate::arg::{AuthArgs, CommonArgs, required};
use crate::media_formatter::MediaColumn;
use crate::table::Table;
use crate::util::OutputFormat;

fn package_arg() -> clap::Arg {
    arg!(package: <PACKAGE_ID> "The package id").value_parser(value_parser!(PackageId))
}

#[derive(Debug, Clone)]
pub struct CmdMediaList {
    pub package: PackageId,
    pub category: Option<Category>,
    pub output_format: OutputFormat,
}

impl CmdMediaList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the images and videos of a package")
            .arg(package_arg())
            .arg(
                arg!(--category <CATEGORY> "List through the public category gallery")
                    .value_parser(value_parser!(Category)),
            )
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            package: required(matches, "package")?,
            category: matches.get_one("category").copied(),
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, evento: &Evento) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing media...");
        let source = match self.category {
            Some(category) => MediaSource::Category(category),
            None => MediaSource::Manager,
        };
        let mut gallery = evento.media_gallery(self.package, source);
        gallery.load().await?;

        if gallery.media().is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No media uploaded".italic());
            return Ok(());
        }

        let table = Table::new(&MediaColumn::ALL, gallery.media().as_slice(), self.output_format);
        print!("{table}");
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdMediaUpload {
    pub auth: AuthArgs,
    pub package: PackageId,
    pub file: PathBuf,
}

impl CmdMediaUpload {
    pub const NAME: &str = "upload";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Upload an image or a video to a package")
            .arg(package_arg())
            .arg(
                arg!(file: <FILE> "The file to upload")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .args(AuthArgs::vendor())
            .args(AuthArgs::admin())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            auth: AuthArgs::from(matches),
            package: required(matches, "package")?,
            file: required(matches, "file")?,
        })
    }

    pub async fn run(self, evento: &Evento) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "uploading media...");
        let file = expand_path(&self.file)?;
        let session = self.auth.login(evento).await?;

        let mut gallery = evento.media_gallery(self.package, MediaSource::Manager);
        let message = gallery.upload_file(&session, &file).await?;
        println!("{}", message.green());
        Ok(())
    }
}
