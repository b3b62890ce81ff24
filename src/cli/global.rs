// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config-dir DIR   <- where default_config.yml and <env>.yml live
//! --env NAME         <- environment layer (detected when absent)
//! --config FILE      <- user layer
//! --install-dir DIR  <- install_dir override
//! --build-dir DIR    <- build_dir override
//! --debug / -l N     <- console verbosity
//!
//! Precedence: --install-dir/--build-dir > --config > <env>.yml > default_config.yml
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::paths::CONFIG_DIR_ENV;
use crate::logging::LogLevel;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Environment name (e.g. gnu_ubuntu, gnu_macos, cray_A2). Detected when omitted.
    #[arg(short = 'e', long = "env", value_name = "NAME", global = true)]
    pub env: Option<String>,

    /// Path to a custom YAML configuration file merged over the environment layer.
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding default_config.yml and the environment files.
    #[arg(long = "config-dir", value_name = "DIR", env = CONFIG_DIR_ENV, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Installation root, overrides `install_dir`.
    #[arg(long = "install-dir", value_name = "DIR", global = true)]
    pub install_dir: Option<PathBuf>,

    /// Build root, overrides `build_dir`.
    #[arg(long = "build-dir", value_name = "DIR", global = true)]
    pub build_dir: Option<PathBuf>,

    /// Enables debug output (same as --log-level 4).
    #[arg(long, global = true)]
    pub debug: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();

        if let Some(ref dir) = self.install_dir {
            overrides.push(("install_dir", dir.display().to_string()));
        }

        if let Some(ref dir) = self.build_dir {
            overrides.push(("build_dir", dir.display().to_string()));
        }

        overrides
    }

    /// Console level; an explicit --log-level wins over --debug.
    #[must_use]
    pub fn console_level(&self) -> LogLevel {
        match (self.log_level.and_then(LogLevel::from_u8), self.debug) {
            (Some(level), _) => level,
            (None, true) => LogLevel::DEBUG,
            (None, false) => LogLevel::INFO,
        }
    }
}
