// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of the Evento marketplace client.

mod arg;
mod availability_formatter;
mod booking_formatter;
mod cli;
mod cmd_booking;
mod cmd_browse;
mod cmd_dashboard;
mod cmd_generate_completion;
mod cmd_login;
mod cmd_media;
mod cmd_package;
mod cmd_unavailable;
mod cmd_vendor;
mod config;
mod media_formatter;
mod package_formatter;
mod table;
mod util;
mod vendor_formatter;

pub use crate::cli::{Cli, Commands, run};
