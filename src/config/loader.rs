// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from layered YAML files.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new(config_dir)
//!   .environment("gnu_ubuntu")     <config_dir>/gnu_ubuntu.yml   (optional, warn)
//!   .custom_file(path)             --config FILE                 (optional, silent)
//!   .set("install_dir", ..)        CLI overrides                 (last)
//!        |
//!        v
//!    load()
//!      base   <config_dir>/default_config.yml  (required)
//!      merge  base <- env <- custom <- overrides
//!      validate()
//!        |
//!        v
//!    ConfigDocument
//! ```

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use tracing::{debug, info, warn};

use super::ConfigDocument;
use super::paths::{BASE_CONFIG_FILE, environment_config_file};
use crate::error::ConfigError;

/// Which layer a configuration file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// The required base document.
    Base,
    /// The document named after the target environment.
    Environment,
    /// A user-supplied override document.
    Custom,
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Environment => write!(f, "environment"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// Builder for loading configuration from layered sources.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    environment: Option<String>,
    custom_file: Option<PathBuf>,
    overrides: Mapping,
}

impl ConfigLoader {
    /// Creates a loader reading from `config_dir`.
    #[must_use]
    pub fn new(config_dir: impl AsRef<Path>) -> Self {
        Self {
            config_dir: config_dir.as_ref().to_path_buf(),
            environment: None,
            custom_file: None,
            overrides: Mapping::new(),
        }
    }

    /// Sets the target environment whose document is layered over the base.
    #[must_use]
    pub fn environment(mut self, name: impl Into<String>) -> Self {
        self.environment = Some(name.into());
        self
    }

    /// Sets a user-supplied document layered over the environment document.
    #[must_use]
    pub fn custom_file(mut self, path: impl AsRef<Path>) -> Self {
        self.custom_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Like [`Self::custom_file`], for an optional path.
    #[must_use]
    pub fn maybe_custom_file(mut self, path: Option<&Path>) -> Self {
        self.custom_file = path.map(Path::to_path_buf);
        self
    }

    /// Sets a top-level override applied after every file layer.
    #[must_use]
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.overrides
            .insert(Value::String(key.to_string()), value.into());
        self
    }

    /// Returns the configuration directory.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the required base document.
    #[must_use]
    pub fn base_path(&self) -> PathBuf {
        self.config_dir.join(BASE_CONFIG_FILE)
    }

    /// Path of the environment document, if an environment is set.
    #[must_use]
    pub fn environment_path(&self) -> Option<PathBuf> {
        self.environment
            .as_deref()
            .map(|env| self.config_dir.join(environment_config_file(env)))
    }

    /// Candidate layer files in merge order, with whether each exists.
    #[must_use]
    pub fn layers(&self) -> Vec<(LayerKind, PathBuf, bool)> {
        let mut layers = vec![(LayerKind::Base, self.base_path())];
        if let Some(path) = self.environment_path() {
            layers.push((LayerKind::Environment, path));
        }
        if let Some(path) = &self.custom_file {
            layers.push((LayerKind::Custom, path.clone()));
        }
        layers
            .into_iter()
            .map(|(kind, path)| {
                let exists = path.is_file();
                (kind, path, exists)
            })
            .collect()
    }

    /// Loads, merges and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The base document does not exist (`ConfigurationMissing`).
    /// - Any present layer cannot be read or parsed.
    /// - The merged document fails validation.
    pub fn load(&self) -> Result<ConfigDocument, ConfigError> {
        let base_path = self.base_path();
        let mut document =
            read_layer(&base_path)?.ok_or_else(|| ConfigError::ConfigurationMissing {
                path: base_path.display().to_string(),
            })?;
        info!(path = %base_path.display(), "Loaded base configuration");

        if let Some(env_path) = self.environment_path() {
            match read_layer(&env_path)? {
                Some(layer) => {
                    document = document.merged(&layer);
                    info!(path = %env_path.display(), "Loaded environment configuration");
                }
                None => {
                    warn!(
                        path = %env_path.display(),
                        "Environment configuration not found, using base configuration only"
                    );
                }
            }
        }

        if let Some(custom_path) = &self.custom_file {
            match read_layer(custom_path)? {
                Some(layer) => {
                    document = document.merged(&layer);
                    info!(path = %custom_path.display(), "Loaded custom configuration");
                }
                None => {
                    debug!(path = %custom_path.display(), "Custom configuration not found, skipping");
                }
            }
        }

        if !self.overrides.is_empty() {
            document = document.merged(&ConfigDocument::from_mapping(self.overrides.clone()));
        }

        document.validate()?;
        Ok(document)
    }
}

/// Reads one layer; `Ok(None)` when the file does not exist.
fn read_layer(path: &Path) -> Result<Option<ConfigDocument>, ConfigError> {
    if !path.is_file() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.display().to_string(),
        source,
    })?;

    ConfigDocument::from_yaml_str(&content, &path.display().to_string()).map(Some)
}
