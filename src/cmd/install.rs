// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Install command: the full installation pipeline.
//!
//! ```text
//! select_dependencies(-d, installation_order)   unknown -> fatal
//! registry.validate(selection)                  unknown -> fatal
//! Environment::build -> log_summary -> apply
//! ensure_dir(install_dir), ensure_dir(build_dir)
//! InstallerRunner::run_all -> InstallSummary -> stderr (any log level)
//! ```
//!
//! Nothing touches the filesystem or the process environment until the
//! selection has been validated.

use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, info, warn};

use crate::cli::install::InstallArgs;
use crate::cmd::config::Session;
use crate::config::ConfigDocument;
use crate::core::env::Environment;
use crate::error::{InstallError, Result};
use crate::installer::deps::DEFAULT_INSTALLATION_ORDER;
use crate::installer::registry::InstallerRegistry;
use crate::installer::runner::{InstallSummary, InstallerRunner};
use crate::utility::fs::dirs::ensure_dir;

/// Installation order from the configuration, or the built-in order when the
/// configuration names none.
#[must_use]
pub fn effective_order(config: &ConfigDocument) -> Vec<String> {
    let order = config.installation_order();
    if order.is_empty() {
        DEFAULT_INSTALLATION_ORDER
            .iter()
            .map(ToString::to_string)
            .collect()
    } else {
        order
    }
}

/// Resolves the requested names against the installation order.
///
/// An empty request selects the whole order. Requested names keep the order
/// they were given in; blanks and repeats are dropped.
///
/// # Errors
///
/// Returns [`InstallError::UnknownDependency`] for the first name that is not
/// in `order`.
pub fn select_dependencies(
    requested: &[String],
    order: &[String],
) -> std::result::Result<Vec<String>, InstallError> {
    if requested.iter().all(|name| name.trim().is_empty()) {
        return Ok(order.to_vec());
    }

    let mut selected: Vec<String> = Vec::with_capacity(requested.len());
    for name in requested.iter().map(|name| name.trim()) {
        if name.is_empty() {
            continue;
        }
        if !order.iter().any(|known| known == name) {
            return Err(InstallError::UnknownDependency {
                name: name.to_string(),
                available: order.to_vec(),
            });
        }
        if selected.iter().any(|existing| existing == name) {
            debug!(dependency = name, "duplicate selection ignored");
            continue;
        }
        selected.push(name.to_string());
    }
    Ok(selected)
}

/// Runs the installation pipeline for `session`.
///
/// # Errors
///
/// Returns an error if the selection is invalid or the root directories
/// cannot be created. Failures of individual installers are recorded in the
/// returned summary instead.
pub async fn run_install_command(
    args: &InstallArgs,
    session: Session,
    registry: &InstallerRegistry,
) -> Result<InstallSummary> {
    if session.config.installation_order().is_empty() {
        warn!("installation_order is empty, using the built-in order");
    }
    let order = effective_order(&session.config);
    let selected = select_dependencies(&args.dependencies, &order)?;
    registry.validate(&selected)?;
    info!(dependencies = %selected.join(", "), "Selected dependencies");

    let environment = Environment::build(&session.environment, &session.config);
    environment.log_summary();
    environment.apply();

    ensure_dir(environment.install_dir())
        .await
        .context("failed to create install directory")?;
    ensure_dir(environment.build_dir())
        .await
        .context("failed to create build directory")?;

    let runner = InstallerRunner::new(
        registry,
        Arc::new(session.config),
        Arc::new(environment),
    );
    let summary = runner.run_all(&selected).await?;
    summary.log();
    eprint!("{summary}");
    Ok(summary)
}
