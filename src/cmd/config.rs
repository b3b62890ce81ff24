// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading shared by every command, and the `options` command.

use anyhow::Context;
use tracing::info;

use crate::cli::global::GlobalOptions;
use crate::config::ConfigDocument;
use crate::config::loader::ConfigLoader;
use crate::config::paths::resolve_config_dir;
use crate::core::system::detect_environment;
use crate::error::Result;

/// Environment name and merged configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Session {
    pub environment: String,
    pub config: ConfigDocument,
}

/// Environment name from `--env`, or the detected one.
#[must_use]
pub fn resolve_environment_name(global: &GlobalOptions) -> String {
    global
        .env
        .clone()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(detect_environment)
}

/// Builds the layered loader for `environment` from the global options.
#[must_use]
pub fn build_config_loader(global: &GlobalOptions, environment: &str) -> ConfigLoader {
    let config_dir = resolve_config_dir(global.config_dir.as_deref());
    let mut loader = ConfigLoader::new(config_dir)
        .environment(environment)
        .maybe_custom_file(global.config.as_deref());

    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value);
    }
    loader
}

/// Resolves the environment and loads the merged configuration.
///
/// # Errors
///
/// Returns an error if the base document is missing, any layer fails to
/// parse, or the merged document is invalid.
pub fn load_session(global: &GlobalOptions) -> Result<Session> {
    let environment = resolve_environment_name(global);
    info!(environment = %environment, "Using environment");

    let loader = build_config_loader(global, &environment);
    let config = loader.load().with_context(|| {
        format!(
            "failed to load configuration from {}",
            loader.config_dir().display()
        )
    })?;

    Ok(Session {
        environment,
        config,
    })
}

/// Prints the merged configuration as YAML.
///
/// # Errors
///
/// Returns an error if the document cannot be serialized.
pub fn run_options_command(config: &ConfigDocument) -> Result<()> {
    print!("{}", config.to_yaml_string()?);
    Ok(())
}
