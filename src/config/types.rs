// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed views over configuration values.
//!
//! ```text
//! dependencies:
//!   hdf5:                      --> DependencyConfig
//!     version: "1.14.4.3"          version: Some("1.14.4.3")
//!     install_dir: ~/hdf5          install_dir: Some("~/hdf5")
//!     configure_options: [..]      configure_options: Some([..])
//!
//! Compiler: Cc | Cxx | Fc  ->  key "cc"/"cxx"/"fc", var "CC"/"CXX"/"FC"
//! ```
//!
//! Scalars are stringified on the way in (`version: 3.22` -> `"3.22"`), so
//! every downstream consumer deals only in strings.

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

/// Converts a YAML scalar into its string form.
///
/// Returns `None` for null, sequences and mappings.
#[must_use]
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    scalar_to_string(&value)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom("expected a scalar value"))
}

fn optional_scalar_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::Sequence(items) => items
            .iter()
            .map(|item| {
                scalar_to_string(item)
                    .ok_or_else(|| serde::de::Error::custom("list entries must be scalars"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        _ => Err(serde::de::Error::custom("expected a list")),
    }
}

/// Per-dependency configuration block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyConfig {
    /// Upstream version (tag suffix) to build.
    #[serde(
        deserialize_with = "optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,
    /// Explicit installation directory for this dependency.
    #[serde(
        deserialize_with = "optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub install_dir: Option<String>,
    /// Flags that replace the installer's default configure flags.
    #[serde(
        deserialize_with = "optional_scalar_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub configure_options: Option<Vec<String>>,
    /// Packages to install (Python tooling only).
    #[serde(
        deserialize_with = "optional_scalar_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub packages: Option<Vec<String>>,
    /// Patch files applied to the sources before configuring.
    #[serde(
        deserialize_with = "optional_scalar_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub patches: Option<Vec<String>>,
}

impl DependencyConfig {
    /// Returns `configure_options` if set, otherwise the given defaults.
    #[must_use]
    pub fn configure_options_or(&self, defaults: &[&str]) -> Vec<String> {
        self.configure_options.clone().unwrap_or_else(|| {
            defaults
                .iter()
                .map(std::string::ToString::to_string)
                .collect()
        })
    }
}

/// Compiler roles drawn from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compiler {
    /// C compiler (`cc`).
    Cc,
    /// C++ compiler (`cxx`).
    Cxx,
    /// Fortran compiler (`fc`).
    Fc,
}

impl Compiler {
    /// All compiler roles in a stable order.
    pub const ALL: [Self; 3] = [Self::Cc, Self::Cxx, Self::Fc];

    /// Configuration key for this compiler.
    #[must_use]
    pub const fn config_key(self) -> &'static str {
        match self {
            Self::Cc => "cc",
            Self::Cxx => "cxx",
            Self::Fc => "fc",
        }
    }

    /// Environment variable carrying this compiler.
    #[must_use]
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Cc => "CC",
            Self::Cxx => "CXX",
            Self::Fc => "FC",
        }
    }

    /// MPI wrapper used when the configuration names no compiler.
    #[must_use]
    pub const fn default_executable(self) -> &'static str {
        match self {
            Self::Cc => "mpicc",
            Self::Cxx => "mpicxx",
            Self::Fc => "mpifort",
        }
    }
}

impl std::fmt::Display for Compiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.config_key())
    }
}
