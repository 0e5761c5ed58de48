// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use evento_api::Category;
use evento_core::{Evento, PackageFilter, RequestedRange};
use jiff::civil::Date;

use crate::arg::{CommonArgs, required};
use crate::package_formatter::ListingColumn;
use crate::table::Table;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdBrowse {
    pub category: Category,
    pub filter: PackageFilter,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdBrowse {
    pub const NAME: &str = "browse";

    pub fn command() -> Command {
        let categories = Category::ALL.map(Category::slug).join(", ");
        Command::new(Self::NAME)
            .about("Browse the packages of a category, filtered by location, price and dates")
            .arg(
                arg!(category: <CATEGORY> "Category to browse")
                    .long_help(format!("Category to browse, one of: {categories}"))
                    .value_parser(value_parser!(Category)),
            )
            .arg(arg!(--location <LOCATION> "Only packages offered in this location"))
            .arg(
                arg!(--"max-price" <PRICE> "Only packages priced at or below this")
                    .value_parser(parse_max_price),
            )
            .arg(
                arg!(--start <DATE> "First day of the event, YYYY-MM-DD")
                    .value_parser(value_parser!(Date)),
            )
            .arg(
                arg!(--end <DATE> "Last day of the event, YYYY-MM-DD")
                    .value_parser(value_parser!(Date)),
            )
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let range = RequestedRange::new(
            matches.get_one("start").copied(),
            matches.get_one("end").copied(),
        );
        if let Some((start, end)) = range.bounds()
            && start > end
        {
            return Err(format!("Start date {start} is after end date {end}").into());
        }

        Ok(Self {
            category: required(matches, "category")?,
            filter: PackageFilter {
                location: matches.get_one("location").cloned(),
                max_price: matches.get_one("max-price").copied(),
                range,
            },
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        })
    }

    pub async fn run(self, evento: &Evento) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "browsing packages...");
        let mut browser = evento.package_browser(self.category);
        browser.filter = self.filter;
        browser.load().await?;

        let visible = browser.visible();
        if self.output_format == OutputFormat::Table {
            println!("{} {}", "►".green(), self.category.name().italic());
            if visible.is_empty() {
                let prompt = if browser.listings().is_empty() {
                    "No packages in this category"
                } else {
                    "No packages match the filters"
                };
                println!("{}", prompt.italic());
                return Ok(());
            }
        }

        let columns = ListingColumn::columns(self.output_format, self.verbose);
        print!("{}", Table::new(&columns, &visible, self.output_format));
        Ok(())
    }
}

fn parse_max_price(s: &str) -> Result<f64, String> {
    match s.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        Ok(_) => Err("must be a non-negative number".to_string()),
        Err(e) => Err(e.to_string()),
    }
}
