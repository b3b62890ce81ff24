// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Install and env command arguments.

use clap::{Args, ValueEnum};

use crate::core::env::shell::ShellFormat;

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, Args)]
pub struct InstallArgs {
    /// Comma-separated dependencies to install, in the given order.
    /// Defaults to every entry of `installation_order`.
    #[arg(short = 'd', long, value_name = "NAMES", value_delimiter = ',')]
    pub dependencies: Vec<String>,
}

/// Arguments for the `env` command.
#[derive(Debug, Clone, Default, Args)]
pub struct EnvArgs {
    /// Output syntax.
    #[arg(long, value_enum, default_value_t = ShellArg::Sh)]
    pub shell: ShellArg,
}

/// Shell syntax accepted by `env --shell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ShellArg {
    /// POSIX shells (sh, bash, zsh)
    #[default]
    Sh,
    /// C shells (csh, tcsh)
    Csh,
    /// JSON object of resolved values
    Json,
}

impl From<ShellArg> for ShellFormat {
    fn from(arg: ShellArg) -> Self {
        match arg {
            ShellArg::Sh => Self::Sh,
            ShellArg::Csh => Self::Csh,
            ShellArg::Json => Self::Json,
        }
    }
}
