// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dependency installers.
//!
//! # Architecture
//!
//! ```text
//! InstallerRunner
//!      |  validate names against InstallerRegistry
//!      v
//! InstallerRegistry --factory--> Box<dyn Installer>
//!      |                              |
//!      |                        InstallContext
//!      |                  (config, environment, dirs, jobs)
//!      v
//!   Installer::run()
//!     prepare -> download -> configure -> build -> install -> cleanup
//!     verify() -> Ok(true) | Ok(false)
//!      |
//!      v
//!   Tools: fetch::retrieve, git, cmake, make, configure, patch
//! ```
//!
//! # Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Installer`] | Six-stage lifecycle implemented once per dependency |
//! | [`Stage`] | Lifecycle stage, in execution order |
//! | [`InstallContext`] | Resolved directories, version and compilers for one dependency |
//! | [`registry::InstallerRegistry`] | Name to factory map |
//! | [`runner::InstallerRunner`] | Sequential execution with outcome tracking |
//!
//! ## Adding a New Dependency
//!
//! 1. Create a module under `deps/` with a struct holding an [`InstallContext`]
//! 2. Implement [`Installer`] for it
//! 3. Register its factory in [`registry::InstallerRegistry::builtin`]

pub mod deps;
pub mod registry;
pub mod runner;
pub mod tools;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use futures_util::future::BoxFuture;
use tracing::{debug, info, warn};

use crate::config::ConfigDocument;
use crate::config::types::{Compiler, DependencyConfig};
use crate::core::env::Environment;
use crate::core::env::environment::{dependency_install_dir, env_key, version_key};
use crate::error::Result;
use crate::utility::fs::dirs::{is_non_empty_dir, remove_dir_if_exists};

/// Installer lifecycle stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Prepare,
    Download,
    Configure,
    Build,
    Install,
    Cleanup,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Self; 6] = [
        Self::Prepare,
        Self::Download,
        Self::Configure,
        Self::Build,
        Self::Install,
        Self::Cleanup,
    ];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Prepare => "prepare",
            Self::Download => "download",
            Self::Configure => "configure",
            Self::Build => "build",
            Self::Install => "install",
            Self::Cleanup => "cleanup",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything an installer needs to know about its dependency.
///
/// Values already present in the [`Environment`] win over the raw
/// configuration, so `<NAME>_VERSION` and `<NAME>` exported by the user
/// redirect a single installer.
#[derive(Debug, Clone)]
pub struct InstallContext {
    name: String,
    config: Arc<ConfigDocument>,
    environment: Arc<Environment>,
    settings: DependencyConfig,
    version: Option<String>,
    install_dir: PathBuf,
    source_dir: PathBuf,
    parallel_jobs: u32,
}

impl InstallContext {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        config: Arc<ConfigDocument>,
        environment: Arc<Environment>,
    ) -> Self {
        let name = name.into();
        let settings = config.dependency(&name);
        let version = environment
            .get(&version_key(&name))
            .map(str::to_string)
            .or_else(|| settings.version.clone());
        let install_dir = environment.get(&env_key(&name)).map_or_else(
            || {
                dependency_install_dir(
                    environment.install_dir(),
                    &name,
                    environment.cmp(),
                    version.as_deref(),
                )
            },
            PathBuf::from,
        );
        let source_dir = environment.build_dir().join(&name);
        let parallel_jobs = config.parallel_jobs();

        Self {
            name,
            config,
            environment,
            settings,
            version,
            install_dir,
            source_dir,
            parallel_jobs,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn config(&self) -> &Arc<ConfigDocument> {
        &self.config
    }

    #[must_use]
    pub const fn environment(&self) -> &Arc<Environment> {
        &self.environment
    }

    /// The `dependencies.<name>` block.
    #[must_use]
    pub const fn settings(&self) -> &DependencyConfig {
        &self.settings
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Version to build, or `default` when none is configured.
    #[must_use]
    pub fn version_or(&self, default: &str) -> String {
        self.version.clone().unwrap_or_else(|| default.to_string())
    }

    /// Installation prefix for this dependency.
    #[must_use]
    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    /// Source and build tree, `<build_dir>/<name>`.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    #[must_use]
    pub const fn parallel_jobs(&self) -> u32 {
        self.parallel_jobs
    }

    /// Compiler family (`gnu`, `cray`).
    #[must_use]
    pub fn cmp(&self) -> &str {
        self.environment.cmp()
    }

    /// Compiler executable from the environment, falling back to the configuration.
    #[must_use]
    pub fn compiler(&self, compiler: Compiler) -> String {
        self.environment
            .get(compiler.env_var())
            .map_or_else(|| self.config.compiler(compiler), str::to_string)
    }

    /// Directory of another dependency, as exported in the environment.
    #[must_use]
    pub fn dependency_dir(&self, dependency: &str) -> Option<PathBuf> {
        self.environment.get(&env_key(dependency)).map(PathBuf::from)
    }
}

/// Lifecycle of one dependency installation.
///
/// Stage futures are boxed so the trait stays dyn-compatible and installers
/// can be stored as `Box<dyn Installer>` in the registry.
///
/// # Example
///
/// ```ignore
/// impl Installer for RcmInstaller {
///     fn context(&self) -> &InstallContext { &self.ctx }
///     fn download(&self) -> BoxFuture<'_, Result<()>> { Box::pin(self.do_download()) }
///     fn configure(&self) -> BoxFuture<'_, Result<()>> { Box::pin(async { Ok(()) }) }
///     fn build(&self) -> BoxFuture<'_, Result<()>> { Box::pin(self.do_build()) }
///     fn install(&self) -> BoxFuture<'_, Result<()>> { Box::pin(self.do_install()) }
/// }
/// ```
pub trait Installer: Send + Sync {
    fn context(&self) -> &InstallContext;

    fn name(&self) -> &str {
        self.context().name()
    }

    /// Runs before the sources are fetched. No-op by default.
    fn prepare(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async { Ok(()) })
    }

    /// Fetches the sources into [`InstallContext::source_dir`].
    fn download(&self) -> BoxFuture<'_, Result<()>>;

    fn configure(&self) -> BoxFuture<'_, Result<()>>;

    fn build(&self) -> BoxFuture<'_, Result<()>>;

    fn install(&self) -> BoxFuture<'_, Result<()>>;

    /// Removes the source tree.
    fn cleanup(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            let dir = self.context().source_dir();
            if remove_dir_if_exists(dir).await? {
                debug!(dependency = self.name(), dir = %dir.display(), "Removed source tree");
            }
            Ok(())
        })
    }

    /// Checks the installation. Defaults to a non-empty install directory.
    fn verify(&self) -> BoxFuture<'_, bool> {
        Box::pin(is_non_empty_dir(self.context().install_dir()))
    }

    /// Dispatches one stage.
    fn run_stage(&self, stage: Stage) -> BoxFuture<'_, Result<()>> {
        match stage {
            Stage::Prepare => self.prepare(),
            Stage::Download => self.download(),
            Stage::Configure => self.configure(),
            Stage::Build => self.build(),
            Stage::Install => self.install(),
            Stage::Cleanup => self.cleanup(),
        }
    }

    /// Runs every stage in order, then [`verify`](Installer::verify).
    ///
    /// The first failing stage aborts the rest and its error is returned.
    fn run(&self) -> BoxFuture<'_, Result<bool>> {
        Box::pin(async move {
            let name = self.name();
            info!(dependency = name, dir = %self.context().install_dir().display(), "Installing");

            for stage in Stage::ALL {
                info!(dependency = name, stage = %stage, "Running stage");
                self.run_stage(stage)
                    .await
                    .with_context(|| format!("{name}: {stage} stage failed"))?;
            }

            let verified = self.verify().await;
            if verified {
                info!(dependency = name, "Installation verified");
            } else {
                warn!(
                    dependency = name,
                    dir = %self.context().install_dir().display(),
                    "Installation verification failed"
                );
            }
            Ok(verified)
        })
    }
}

#[cfg(test)]
mod tests;
