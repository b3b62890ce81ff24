// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> load_session --> Command Dispatch
//!   Install (default) | Env | List | Options | Version
//! ```

use std::process::ExitCode;

use ccs_deps::cli::global::GlobalOptions;
use ccs_deps::cli::install::InstallArgs;
use ccs_deps::cli::{self, Command};
use ccs_deps::cmd::config::{load_session, run_options_command};
use ccs_deps::cmd::env::run_env_command;
use ccs_deps::cmd::install::run_install_command;
use ccs_deps::cmd::list::run_list_command;
use ccs_deps::installer::registry::InstallerRegistry;
use ccs_deps::logging::init_logging;
use ccs_deps::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global.console_level();
    let file_level = if console_level.as_u8() > LogLevel::DEBUG.as_u8() {
        console_level
    } else {
        LogLevel::DEBUG
    };

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(true)
        }
        Some(Command::Options) => load_session(&cli.global)
            .and_then(|session| run_options_command(&session.config))
            .map(|()| true),
        Some(Command::List) => load_session(&cli.global).map(|session| {
            run_list_command(&session.config);
            true
        }),
        Some(Command::Env(args)) => load_session(&cli.global)
            .and_then(|session| run_env_command(args, &session))
            .map(|()| true),
        Some(Command::Install(_)) | None => {
            let args = cli.install_args().unwrap_or(&cli.install);
            handle_install_command(args, &cli.global).await
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn handle_install_command(
    args: &InstallArgs,
    global: &GlobalOptions,
) -> ccs_deps::error::Result<bool> {
    let session = load_session(global)?;
    let registry = InstallerRegistry::builtin();
    let summary = run_install_command(args, session, &registry).await?;
    Ok(summary.all_succeeded())
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}
