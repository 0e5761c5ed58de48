// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueEnum, ValueHint, arg, value_parser};
use clap_complete::{Generator, generate, generate_to};
use colored::Colorize;
use evento_core::{APP_NAME, expand_path};

use crate::Cli;
use crate::arg::required;

/// Prints the completion script of `evento`, or installs it into a directory
/// under the shell's conventional file name.
#[derive(Debug, Clone)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
    pub dir: Option<PathBuf>,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate shell completion for the specified shell")
            .visible_alias("completion")
            .hide(true)
            .arg(
                arg!(shell: <SHELL> "The shell generator to use")
                    .value_parser(value_parser!(Shell)),
            )
            .arg(
                arg!(--dir <DIR> "Write the script into this directory instead of stdout")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::DirPath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            shell: required(matches, "shell")?,
            dir: matches.get_one("dir").cloned(),
        })
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        let mut cmd = Cli::command();
        match self.dir {
            Some(dir) => {
                let dir = expand_path(&dir)?;
                let path = generate_to(self.shell, &mut cmd, APP_NAME, &dir)?;
                println!("{} {}", "Completion written to".green(), path.display());
            }
            None => generate(self.shell, &mut cmd, APP_NAME, &mut io::stdout()),
        }
        Ok(())
    }
}

/// Shells `evento` can complete in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    fn with_generator<R>(self, f: impl FnOnce(&dyn Generator) -> R) -> R {
        use clap_complete::Shell as ClapShell;

        match self {
            Shell::Bash => f(&ClapShell::Bash),
            Shell::Elvish => f(&ClapShell::Elvish),
            Shell::Fish => f(&ClapShell::Fish),
            Shell::PowerShell => f(&ClapShell::PowerShell),
            Shell::Zsh => f(&ClapShell::Zsh),
            Shell::Nushell => f(&clap_complete_nushell::Nushell),
        }
    }
}

impl Generator for Shell {
    fn file_name(&self, name: &str) -> String {
        self.with_generator(|g| g.file_name(name))
    }

    fn generate(&self, cmd: &Command, buf: &mut dyn io::Write) {
        self.with_generator(|g| g.generate(cmd, buf));
    }
}
