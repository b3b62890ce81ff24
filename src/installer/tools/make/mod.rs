// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Autotools-style build tools.
//!
//! ```text
//! ConfigureScript  <dir>/<script> [args]        (script: configure | autogen.sh)
//! MakeTool         make [-jN] [targets] [VAR=value]
//! Both run with cwd = dir and optional per-child env_var() overrides.
//! ```

use std::path::{Path, PathBuf};

use crate::error::Result;
use anyhow::Context;
use tracing::{debug, info};

use super::{BoxFuture, Tool};
use crate::core::process::builder::ProcessBuilder;

/// Runs `make` in a directory.
///
/// # Example
///
/// ```ignore
/// MakeTool::new("/build/parmetis/metis")
///     .target("config")
///     .variable("shared", "1")
///     .variable("cc", "mpicc")
///     .run()
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct MakeTool {
    dir: PathBuf,
    jobs: Option<u32>,
    targets: Vec<String>,
    variables: Vec<(String, String)>,
    env: Vec<(String, String)>,
}

impl MakeTool {
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            jobs: None,
            targets: Vec::new(),
            variables: Vec::new(),
            env: Vec::new(),
        }
    }

    #[must_use]
    pub const fn jobs(mut self, jobs: u32) -> Self {
        self.jobs = Some(jobs);
        self
    }

    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.targets.push(target.into());
        self
    }

    /// Adds a `NAME=value` make variable.
    #[must_use]
    pub fn variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.push((name.into(), value.into()));
        self
    }

    /// Sets an environment variable for the make child only.
    #[must_use]
    pub fn env_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Arguments passed to `make`.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(jobs) = self.jobs {
            args.push(format!("-j{jobs}"));
        }
        args.extend(self.targets.iter().cloned());
        args.extend(
            self.variables
                .iter()
                .map(|(name, value)| format!("{name}={value}")),
        );
        args
    }

    async fn do_run(&self) -> Result<()> {
        let mut builder = ProcessBuilder::which("make")?
            .args(self.args())
            .cwd(&self.dir);
        for (key, value) in &self.env {
            builder = builder.env_var(key, value);
        }

        debug!(dir = %self.dir.display(), targets = ?self.targets, "Running make");
        builder
            .run()
            .await
            .with_context(|| format!("make failed in {}", self.dir.display()))?;
        Ok(())
    }
}

impl Tool for MakeTool {
    fn name(&self) -> &'static str {
        "make"
    }

    fn run(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(self.do_run())
    }
}

/// Runs a configure-style script shipped in a source tree.
#[derive(Debug, Clone)]
pub struct ConfigureScript {
    dir: PathBuf,
    script: String,
    args: Vec<String>,
    env: Vec<(String, String)>,
}

impl ConfigureScript {
    /// Creates a runner for `<dir>/configure`.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            script: "configure".to_string(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    /// Uses a different script name (e.g. `autogen.sh`).
    #[must_use]
    pub fn script(mut self, script: impl Into<String>) -> Self {
        self.script = script.into();
        self
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Sets an environment variable for the script only.
    #[must_use]
    pub fn env_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Full path of the script.
    #[must_use]
    pub fn script_path(&self) -> PathBuf {
        self.dir.join(&self.script)
    }

    /// Returns true if the script exists in the source tree.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.script_path().is_file()
    }

    /// Arguments passed to the script.
    #[must_use]
    pub fn args_slice(&self) -> &[String] {
        &self.args
    }

    async fn do_run(&self) -> Result<()> {
        let script = self.script_path();
        let mut builder = ProcessBuilder::new(&script)
            .name(self.script.clone())
            .args(&self.args)
            .cwd(&self.dir);
        for (key, value) in &self.env {
            builder = builder.env_var(key, value);
        }

        info!(script = %script.display(), "Running {}", self.script);
        builder
            .run()
            .await
            .with_context(|| format!("{} failed in {}", self.script, self.dir.display()))?;
        Ok(())
    }
}

impl Tool for ConfigureScript {
    fn name(&self) -> &str {
        &self.script
    }

    fn run(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(self.do_run())
    }
}

#[cfg(test)]
mod tests;
