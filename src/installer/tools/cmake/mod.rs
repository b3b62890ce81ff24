// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `CMake` tool for configure/build/install operations.
//!
//! ```text
//! CmakeTool
//! Operations: Configure | Build | Install
//! Builder: source_dir/build_dir/install_prefix/build_type/definition/arg/jobs
//! Child env: env_remove() for variables that confuse find_package
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use anyhow::Context;
use tracing::{debug, info};

use super::{BoxFuture, Tool};
use crate::core::process::builder::ProcessBuilder;

/// `CMake` operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CmakeOperation {
    /// Configure a `CMake` build directory.
    #[default]
    Configure,
    /// Build targets in a configured build directory.
    Build,
    /// Install artifacts from a build directory.
    Install,
}

impl CmakeOperation {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Configure => "configure",
            Self::Build => "build",
            Self::Install => "install",
        }
    }
}

/// `CMake` tool for configure/build/install operations.
#[derive(Debug, Clone, Default)]
pub struct CmakeTool {
    source_dir: Option<PathBuf>,
    build_dir: Option<PathBuf>,
    install_prefix: Option<PathBuf>,
    build_type: Option<String>,
    definitions: BTreeMap<String, String>,
    extra_args: Vec<String>,
    jobs: Option<u32>,
    env_removals: Vec<String>,
    operation: CmakeOperation,
}

impl CmakeTool {
    /// Creates a new `CmakeTool` with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            source_dir: None,
            build_dir: None,
            install_prefix: None,
            build_type: None,
            definitions: BTreeMap::new(),
            extra_args: Vec::new(),
            jobs: None,
            env_removals: Vec::new(),
            operation: CmakeOperation::Configure,
        }
    }

    #[must_use]
    pub fn source_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.source_dir = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn build_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.build_dir = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn install_prefix(mut self, path: impl AsRef<Path>) -> Self {
        self.install_prefix = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn build_type(mut self, build_type: impl Into<String>) -> Self {
        self.build_type = Some(build_type.into());
        self
    }

    /// Adds a `-DKEY=VALUE` cache definition.
    #[must_use]
    pub fn definition(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.definitions.insert(key.into(), value.into());
        self
    }

    /// Appends raw configure arguments after the definitions.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub const fn jobs(mut self, jobs: u32) -> Self {
        self.jobs = Some(jobs);
        self
    }

    /// Removes an inherited environment variable for the cmake child.
    #[must_use]
    pub fn env_remove(mut self, key: impl Into<String>) -> Self {
        self.env_removals.push(key.into());
        self
    }

    #[must_use]
    pub const fn configure_op(mut self) -> Self {
        self.operation = CmakeOperation::Configure;
        self
    }

    #[must_use]
    pub const fn build_op(mut self) -> Self {
        self.operation = CmakeOperation::Build;
        self
    }

    #[must_use]
    pub const fn install_op(mut self) -> Self {
        self.operation = CmakeOperation::Install;
        self
    }

    fn build_dir_required(&self) -> Result<&Path> {
        self.build_dir
            .as_deref()
            .context("CmakeTool: build_dir is required")
    }

    fn source_dir_required(&self) -> Result<&Path> {
        self.source_dir
            .as_deref()
            .context("CmakeTool: source_dir is required")
    }

    /// Arguments for the configured operation.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory required by the operation is missing.
    pub fn args_for_operation(&self) -> Result<Vec<String>> {
        match self.operation {
            CmakeOperation::Configure => self.configure_args(),
            CmakeOperation::Build => self.build_args(),
            CmakeOperation::Install => self.install_args(),
        }
    }

    fn configure_args(&self) -> Result<Vec<String>> {
        let mut definitions = self.definitions.clone();

        if let Some(ref prefix) = self.install_prefix {
            definitions
                .entry("CMAKE_INSTALL_PREFIX".to_string())
                .or_insert_with(|| prefix.display().to_string());
        }
        if let Some(ref build_type) = self.build_type {
            definitions
                .entry("CMAKE_BUILD_TYPE".to_string())
                .or_insert_with(|| build_type.clone());
        }

        let mut args = vec![
            "-S".to_string(),
            self.source_dir_required()?.display().to_string(),
            "-B".to_string(),
            self.build_dir_required()?.display().to_string(),
        ];
        args.extend(
            definitions
                .into_iter()
                .map(|(key, value)| format!("-D{key}={value}")),
        );
        args.extend(self.extra_args.iter().cloned());
        Ok(args)
    }

    fn build_args(&self) -> Result<Vec<String>> {
        let mut args = vec![
            "--build".to_string(),
            self.build_dir_required()?.display().to_string(),
            "--parallel".to_string(),
        ];
        if let Some(jobs) = self.jobs {
            args.push(jobs.to_string());
        }
        Ok(args)
    }

    fn install_args(&self) -> Result<Vec<String>> {
        let mut args = vec![
            "--install".to_string(),
            self.build_dir_required()?.display().to_string(),
        ];
        if let Some(ref prefix) = self.install_prefix {
            args.push("--prefix".to_string());
            args.push(prefix.display().to_string());
        }
        Ok(args)
    }

    async fn do_run(&self) -> Result<()> {
        let args = self.args_for_operation()?;
        let operation = self.operation.as_str();

        let mut builder = ProcessBuilder::which("cmake")?.args(&args);
        for key in &self.env_removals {
            builder = builder.env_remove(key);
        }
        if self.operation == CmakeOperation::Configure {
            let build = self.build_dir_required()?;
            tokio::fs::create_dir_all(build)
                .await
                .with_context(|| format!("failed to create {}", build.display()))?;
            builder = builder.cwd(build);
        }

        debug!(operation, "Running CMake");
        builder
            .run()
            .await
            .with_context(|| format!("CMake {operation} failed"))?;

        info!(operation, "CMake {operation} completed successfully");
        Ok(())
    }
}

impl Tool for CmakeTool {
    fn name(&self) -> &'static str {
        "cmake"
    }

    fn run(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(self.do_run())
    }
}

#[cfg(test)]
mod tests;
