// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! ccs-install [global options] [-d a,b] [command]
//! install [-d a,b]          (default when no command is given)
//! env [--shell sh|csh|json]
//! list
//! options
//! version
//! ```

pub mod global;
pub mod install;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::install::{EnvArgs, InstallArgs};
use clap::{Parser, Subcommand};

/// CCS dependency installer
///
/// Downloads, builds and installs the third-party libraries CCS depends on.
#[derive(Debug, Parser)]
#[command(
    name = "ccs-install",
    author,
    version,
    about = "CCS dependency installer",
    long_about = "ccs-deps Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Downloads, configures, builds and installs the third-party\n\
                  libraries CCS depends on.\n\n\
                  Invoking `ccs-install` installs every dependency listed in\n\
                  `installation_order`. Do `ccs-install install -d hdf5,petsc`\n\
                  to install a subset.",
    after_help = "CONFIGURATION:\n\n\
                  The base document `default_config.yml` is read from the config\n\
                  directory, then `<env>.yml` for the detected or given environment,\n\
                  then the file passed with --config. --install-dir and --build-dir\n\
                  override the merged result."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Selection used when no command is given
    #[command(flatten)]
    pub install: InstallArgs,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Install arguments for the default or explicit `install` command.
    ///
    /// A selection given after `install` wins over one given before it.
    #[must_use]
    pub fn install_args(&self) -> Option<&InstallArgs> {
        match &self.command {
            None => Some(&self.install),
            Some(Command::Install(args)) if args.dependencies.is_empty() => Some(&self.install),
            Some(Command::Install(args)) => Some(args),
            Some(_) => None,
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Prints the merged configuration as YAML.
    Options,

    /// Lists dependencies in installation order.
    List,

    /// Installs dependencies.
    Install(InstallArgs),

    /// Prints the build environment in a shell-sourceable form.
    Env(EnvArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
