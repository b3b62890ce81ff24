// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sequential installer execution with per-dependency outcomes.
//!
//! ```text
//! run_all(names)
//!   registry.validate(names)          unknown -> Err(UnknownDependency), nothing runs
//!   for name in names:
//!     installer = registry.create(InstallContext)
//!     catch_unwind(installer.run())
//!       Ok(Ok(true))   -> SUCCESS
//!       Ok(Ok(false))  -> FAILED
//!       Ok(Err(e))     -> ERROR   (error chain logged)
//!       Err(panic)     -> ERROR
//!   -> InstallSummary (insertion ordered)
//! ```

use std::any::Any;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::InstallContext;
use super::registry::InstallerRegistry;
use crate::config::ConfigDocument;
use crate::core::env::Environment;
use crate::error::InstallError;

/// Result of installing one dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    /// All stages ran and the installation verified.
    Success,
    /// All stages ran but verification failed.
    Failed,
    /// A stage returned an error or panicked.
    Error,
}

impl Outcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcomes in the order the dependencies were attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InstallSummary {
    outcomes: IndexMap<String, Outcome>,
}

impl InstallSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: impl Into<String>, outcome: Outcome) {
        self.outcomes.insert(name.into(), outcome);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Outcome> {
        self.outcomes.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Outcome)> {
        self.outcomes.iter().map(|(name, outcome)| (name.as_str(), *outcome))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// True when every recorded outcome is [`Outcome::Success`].
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.values().all(|o| *o == Outcome::Success)
    }

    /// Records one `name: OUTCOME` event per dependency.
    ///
    /// Console output of the summary goes through [`Display`](fmt::Display),
    /// which is independent of the log level.
    pub fn log(&self) {
        for (name, outcome) in self.iter() {
            match outcome {
                Outcome::Success => debug!(dependency = name, %outcome, "summary"),
                Outcome::Failed | Outcome::Error => warn!(dependency = name, %outcome, "summary"),
            }
        }
    }
}

impl fmt::Display for InstallSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Installation summary:")?;
        for (name, outcome) in self.iter() {
            writeln!(f, "  {name}: {outcome}")?;
        }
        Ok(())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string())
}

/// Runs installers one after another, isolating their failures.
#[derive(Debug)]
pub struct InstallerRunner<'a> {
    registry: &'a InstallerRegistry,
    config: Arc<ConfigDocument>,
    environment: Arc<Environment>,
}

impl<'a> InstallerRunner<'a> {
    #[must_use]
    pub const fn new(
        registry: &'a InstallerRegistry,
        config: Arc<ConfigDocument>,
        environment: Arc<Environment>,
    ) -> Self {
        Self {
            registry,
            config,
            environment,
        }
    }

    /// Installs `names` in order.
    ///
    /// A failing dependency is recorded and the remaining ones still run.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::UnknownDependency`] before running anything if
    /// a name is not registered.
    pub async fn run_all(&self, names: &[String]) -> Result<InstallSummary, InstallError> {
        self.registry.validate(names)?;

        let mut summary = InstallSummary::new();
        for (index, name) in names.iter().enumerate() {
            info!(dependency = %name, "[{}/{}] {name}", index + 1, names.len());
            let outcome = self.run_one(name).await;
            summary.record(name.clone(), outcome);
        }
        Ok(summary)
    }

    async fn run_one(&self, name: &str) -> Outcome {
        let ctx = InstallContext::new(
            name,
            Arc::clone(&self.config),
            Arc::clone(&self.environment),
        );

        let attempt = async {
            let installer = self
                .registry
                .create(ctx)
                .ok_or_else(|| anyhow::anyhow!("no installer registered for '{name}'"))?;
            installer.run().await
        };

        match AssertUnwindSafe(attempt).catch_unwind().await {
            Ok(Ok(true)) => Outcome::Success,
            Ok(Ok(false)) => Outcome::Failed,
            Ok(Err(e)) => {
                error!(dependency = %name, error = %format!("{e:#}"), "Installation failed");
                Outcome::Error
            }
            Err(payload) => {
                error!(
                    dependency = %name,
                    panic = %panic_message(payload.as_ref()),
                    "Installer panicked"
                );
                Outcome::Error
            }
        }
    }
}
