// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration documents.
//!
//! ```text
//! default_config.yml ──┐
//! <env>.yml (opt) ─────┼─ deep_merge ──> ConfigDocument ──> validate()
//! --config FILE (opt) ─┤
//! CLI overrides ───────┘
//!
//! Recognized keys:
//!   install_dir, build_dir       (string, ~ expanded)
//!   cc, cxx, fc                  (compiler executables)
//!   parallel_jobs                (positive integer, default 16)
//!   installation_order           (list of dependency names)
//!   dependencies.<name>          (DependencyConfig)
//! ```
//!
//! The document stays an open YAML tree; typed accessors read the recognized
//! keys and fall back to defaults. Unknown keys are carried along untouched.

pub mod loader;
pub mod merge;
pub mod paths;
pub mod types;


use serde_yaml::{Mapping, Value};

use crate::error::ConfigError;
use types::{Compiler, DependencyConfig, scalar_to_string};

/// Build parallelism used when `parallel_jobs` is not configured.
pub const DEFAULT_PARALLEL_JOBS: u32 = 16;

/// A merged configuration document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    root: Mapping,
}

impl ConfigDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing mapping.
    #[must_use]
    pub const fn from_mapping(root: Mapping) -> Self {
        Self { root }
    }

    /// Builds a document from a parsed YAML value.
    ///
    /// A null root (empty file) yields an empty document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the root is not a mapping.
    pub fn from_value(value: Value, origin: &str) -> Result<Self, ConfigError> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Mapping(root) => Ok(Self { root }),
            other => Err(ConfigError::ParseError {
                path: origin.to_string(),
                message: format!("expected a mapping at the document root, found {}", kind_of(&other)),
            }),
        }
    }

    /// Parses a document from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` on malformed YAML or a non-mapping root.
    pub fn from_yaml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let value: Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
        Self::from_value(value, origin)
    }

    /// Returns the root mapping.
    #[must_use]
    pub const fn as_mapping(&self) -> &Mapping {
        &self.root
    }

    /// Returns the document as a YAML value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Mapping(self.root.clone())
    }

    /// Serializes the document back to YAML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the tree cannot be serialized.
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(&self.root).map_err(|e| ConfigError::InvalidValue {
            key: "<document>".to_string(),
            message: e.to_string(),
        })
    }

    /// Returns a new document with `overlay` deep-merged on top.
    #[must_use]
    pub fn merged(&self, overlay: &Self) -> Self {
        match merge::deep_merge(&self.to_value(), &overlay.to_value()) {
            Value::Mapping(root) => Self { root },
            _ => overlay.clone(),
        }
    }

    /// Returns a top-level value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Looks up a dotted path such as `dependencies.hdf5.version`.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = current.as_mapping()?.get(segment)?;
        }
        Some(current)
    }

    /// Returns a top-level scalar as a string.
    #[must_use]
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_to_string)
    }

    /// Configured `install_dir`, unexpanded.
    #[must_use]
    pub fn install_dir(&self) -> Option<String> {
        self.get_string("install_dir")
    }

    /// Configured `build_dir`, unexpanded.
    #[must_use]
    pub fn build_dir(&self) -> Option<String> {
        self.get_string("build_dir")
    }

    /// Configured compiler executable, or its MPI wrapper default.
    #[must_use]
    pub fn compiler(&self, compiler: Compiler) -> String {
        self.get_string(compiler.config_key())
            .unwrap_or_else(|| compiler.default_executable().to_string())
    }

    /// Build parallelism hint.
    #[must_use]
    pub fn parallel_jobs(&self) -> u32 {
        self.get("parallel_jobs")
            .and_then(parse_parallel_jobs)
            .unwrap_or(DEFAULT_PARALLEL_JOBS)
    }

    /// Names listed in `installation_order`.
    #[must_use]
    pub fn installation_order(&self) -> Vec<String> {
        self.get("installation_order")
            .and_then(Value::as_sequence)
            .map(|items| items.iter().filter_map(scalar_to_string).collect())
            .unwrap_or_default()
    }

    /// Dependency blocks in document order.
    #[must_use]
    pub fn dependencies(&self) -> Vec<(String, DependencyConfig)> {
        self.get("dependencies")
            .and_then(Value::as_mapping)
            .map(|deps| {
                deps.iter()
                    .filter_map(|(name, block)| {
                        let name = scalar_to_string(name)?;
                        Some((name, parse_dependency(block).unwrap_or_default()))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Configuration block for one dependency (empty if absent).
    #[must_use]
    pub fn dependency(&self, name: &str) -> DependencyConfig {
        self.get("dependencies")
            .and_then(Value::as_mapping)
            .and_then(|deps| deps.get(name))
            .and_then(|block| parse_dependency(block).ok())
            .unwrap_or_default()
    }

    /// Checks the recognized keys for type errors.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for key in ["install_dir", "build_dir", "cc", "cxx", "fc"] {
            if let Some(value) = self.get(key)
                && !value.is_null()
                && scalar_to_string(value).is_none()
            {
                return Err(invalid(key, format!("expected a scalar, found {}", kind_of(value))));
            }
        }

        if let Some(value) = self.get("parallel_jobs")
            && parse_parallel_jobs(value).is_none()
        {
            return Err(invalid(
                "parallel_jobs",
                format!("expected a positive integer, found {}", describe(value)),
            ));
        }

        if let Some(value) = self.get("installation_order") {
            let Some(items) = value.as_sequence() else {
                return Err(invalid(
                    "installation_order",
                    format!("expected a list, found {}", kind_of(value)),
                ));
            };
            if let Some(bad) = items.iter().find(|item| !item.is_string()) {
                return Err(invalid(
                    "installation_order",
                    format!("entries must be names, found {}", kind_of(bad)),
                ));
            }
        }

        if let Some(value) = self.get("dependencies") {
            let Some(deps) = value.as_mapping() else {
                return Err(invalid(
                    "dependencies",
                    format!("expected a mapping, found {}", kind_of(value)),
                ));
            };
            for (name, block) in deps {
                let name = scalar_to_string(name).unwrap_or_default();
                if !block.is_null() && !block.is_mapping() {
                    return Err(invalid(
                        &format!("dependencies.{name}"),
                        format!("expected a mapping, found {}", kind_of(block)),
                    ));
                }
                parse_dependency(block)
                    .map_err(|e| invalid(&format!("dependencies.{name}"), e.to_string()))?;
            }
        }

        Ok(())
    }
}

fn parse_dependency(block: &Value) -> Result<DependencyConfig, serde_yaml::Error> {
    if block.is_null() {
        return Ok(DependencyConfig::default());
    }
    serde_yaml::from_value(block.clone())
}

fn parse_parallel_jobs(value: &Value) -> Option<u32> {
    let jobs = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }?;
    (jobs > 0).then_some(jobs)
}

fn invalid(key: &str, message: String) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn describe(value: &Value) -> String {
    scalar_to_string(value).map_or_else(|| kind_of(value).to_string(), |s| format!("'{s}'"))
}
