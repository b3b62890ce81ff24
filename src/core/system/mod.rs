// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Deployment environment detection.
//!
//! ```text
//! HostFacts::probe()            (reads /opt/cray, /proc/version, /etc/os-release)
//!        |
//!        v
//! classify(&facts) -> Option<&str>
//!   macos                          -> gnu_macos
//!   linux + cray marker            -> cray_A2
//!   linux + ID in {ubuntu, debian} -> gnu_ubuntu
//!   anything else                  -> None (fallback gnu_ubuntu, warned)
//! ```

use std::path::Path;
use tracing::{debug, warn};

/// Environment used when the host cannot be classified.
pub const FALLBACK_ENVIRONMENT: &str = "gnu_ubuntu";

const CRAY_DIR: &str = "/opt/cray";
const PROC_VERSION: &str = "/proc/version";
const OS_RELEASE: &str = "/etc/os-release";

/// Facts about the host that decide the deployment environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostFacts {
    /// Operating system as reported by `std::env::consts::OS`.
    pub os: String,
    /// Whether the Cray programming environment directory exists.
    pub cray_dir: bool,
    /// Contents of `/proc/version`, if readable.
    pub proc_version: Option<String>,
    /// Contents of `/etc/os-release`, if readable.
    pub os_release: Option<String>,
}

impl HostFacts {
    /// Gathers facts from the running system.
    #[must_use]
    pub fn probe() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            cray_dir: Path::new(CRAY_DIR).is_dir(),
            proc_version: std::fs::read_to_string(PROC_VERSION).ok(),
            os_release: std::fs::read_to_string(OS_RELEASE).ok(),
        }
    }
}

/// Extracts the `ID` field from `os-release` content.
#[must_use]
pub fn os_release_id(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        line.trim()
            .strip_prefix("ID=")
            .map(|id| id.trim_matches(|c| c == '"' || c == '\'').to_ascii_lowercase())
    })
}

/// Maps host facts to a known environment name.
#[must_use]
pub fn classify(facts: &HostFacts) -> Option<&'static str> {
    match facts.os.as_str() {
        "macos" => Some("gnu_macos"),
        "linux" => {
            let cray_kernel = facts
                .proc_version
                .as_deref()
                .is_some_and(|version| version.to_ascii_lowercase().contains("cray"));
            if facts.cray_dir || cray_kernel {
                return Some("cray_A2");
            }
            match facts.os_release.as_deref().and_then(os_release_id).as_deref() {
                Some("ubuntu" | "debian") => Some("gnu_ubuntu"),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Detects the deployment environment of the running host.
#[must_use]
pub fn detect_environment() -> String {
    let facts = HostFacts::probe();
    classify(&facts).map_or_else(
        || {
            warn!(
                os = %facts.os,
                fallback = FALLBACK_ENVIRONMENT,
                "Could not detect environment, using fallback"
            );
            FALLBACK_ENVIRONMENT.to_string()
        },
        |name| {
            debug!(environment = name, "detected environment");
            name.to_string()
        },
    )
}
