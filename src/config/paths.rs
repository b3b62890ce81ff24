// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path resolution for configuration files and default directories.
//!
//! ```text
//! config dir search (first containing default_config.yml wins):
//!   --config-dir / $CCS_DEPS_CONFIG_DIR
//!   ./config
//!   <exe dir>/config
//!   <exe dir>/../share/ccs-deps/config
//!   <crate source>/config
//!
//! defaults:
//!   install_dir  ~/ccs-deps
//!   build_dir    <temp dir>/build-ccs-deps
//! ```

use std::path::{Path, PathBuf};

/// Environment variable naming the configuration directory.
pub const CONFIG_DIR_ENV: &str = "CCS_DEPS_CONFIG_DIR";

/// File name of the base configuration document.
pub const BASE_CONFIG_FILE: &str = "default_config.yml";

/// Directory name used under the home directory for installs.
const DEFAULT_INSTALL_DIR_NAME: &str = "ccs-deps";

/// Directory name used under the temp directory for builds.
const DEFAULT_BUILD_DIR_NAME: &str = "build-ccs-deps";

/// File name of the environment-specific document for `environment`.
#[must_use]
pub fn environment_config_file(environment: &str) -> String {
    format!("{environment}.yml")
}

/// Candidate configuration directories in search order.
#[must_use]
pub fn config_dir_candidates(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(dir) = explicit {
        candidates.push(dir.to_path_buf());
    }

    candidates.push(PathBuf::from("config"));

    if let Ok(exe) = std::env::current_exe()
        && let Some(exe_dir) = exe.parent()
    {
        candidates.push(exe_dir.join("config"));
        candidates.push(exe_dir.join("../share/ccs-deps/config"));
    }

    candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join("config"));
    candidates
}

/// Resolves the configuration directory.
///
/// An explicit directory is returned as-is, even when it holds no base
/// document.
#[must_use]
pub fn resolve_config_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    config_dir_candidates(None)
        .into_iter()
        .find(|dir| dir.join(BASE_CONFIG_FILE).is_file())
        .unwrap_or_else(|| PathBuf::from("config"))
}

/// Expands a leading `~` to the user's home directory.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from(path));
    }

    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }

    PathBuf::from(path)
}

/// Default installation root under the user's home directory.
///
/// Falls back to the temp directory when no home directory can be determined.
#[must_use]
pub fn default_install_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(DEFAULT_INSTALL_DIR_NAME)
}

/// Default build root under the platform temp directory.
#[must_use]
pub fn default_build_dir() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_BUILD_DIR_NAME)
}
