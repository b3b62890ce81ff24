// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env command: prints the build environment without applying it.

use crate::cli::install::EnvArgs;
use crate::cmd::config::Session;
use crate::core::env::Environment;
use crate::core::env::shell::render;
use crate::error::Result;

/// Renders the environment of `session` to stdout.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn run_env_command(args: &EnvArgs, session: &Session) -> Result<()> {
    let environment = Environment::build(&session.environment, &session.config);
    print!("{}", render(environment.vars(), args.shell.into())?);
    Ok(())
}
