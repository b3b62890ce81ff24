// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git tool for fetching dependency sources.
//!
//! ```text
//! GitTool
//!   url, path, branch, commit, depth
//!   run():  git clone [--depth N] [--branch B] <url> <path>
//!           git -C <path> checkout <commit>     (commit only, full clone)
//! ```

use std::path::{Path, PathBuf};

use crate::error::Result;
use anyhow::Context;
use tracing::{debug, info};

use super::{BoxFuture, Tool};
use crate::core::process::builder::ProcessBuilder;

/// Git tool for cloning a repository at a branch, tag or commit.
///
/// # Example
///
/// ```ignore
/// GitTool::new()
///     .url("https://github.com/HDFGroup/hdf5.git")
///     .path("/tmp/build-ccs-deps/hdf5")
///     .branch("hdf5_1.14.4.3")
///     .depth(1)
///     .run()
///     .await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct GitTool {
    url: Option<String>,
    path: Option<PathBuf>,
    branch: Option<String>,
    commit: Option<String>,
    depth: Option<u32>,
}

impl GitTool {
    /// Creates a new `GitTool` with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            url: None,
            path: None,
            branch: None,
            commit: None,
            depth: None,
        }
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Branch or tag to clone.
    #[must_use]
    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Commit to check out after cloning. Forces a full clone.
    #[must_use]
    pub fn commit(mut self, commit: impl Into<String>) -> Self {
        self.commit = Some(commit.into());
        self
    }

    /// History depth for shallow clones.
    #[must_use]
    pub const fn depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    fn path_required(&self) -> Result<&Path> {
        self.path.as_deref().context("GitTool: path is required")
    }

    /// Arguments for `git clone`.
    ///
    /// # Errors
    ///
    /// Returns an error if the url or path is missing.
    pub fn clone_args(&self) -> Result<Vec<String>> {
        let url = self.url.as_deref().context("GitTool: url is required")?;
        let path = self.path_required()?;

        let mut args = vec!["clone".to_string()];
        if let Some(depth) = self.depth
            && self.commit.is_none()
        {
            args.push("--depth".to_string());
            args.push(depth.to_string());
        }
        if let Some(branch) = &self.branch {
            args.push("--branch".to_string());
            args.push(branch.clone());
        }
        args.push(url.to_string());
        args.push(path.display().to_string());
        Ok(args)
    }

    /// Arguments for checking out the pinned commit, if one is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is missing.
    pub fn checkout_args(&self) -> Result<Option<Vec<String>>> {
        let Some(commit) = &self.commit else {
            return Ok(None);
        };
        let path = self.path_required()?;
        Ok(Some(vec![
            "-C".to_string(),
            path.display().to_string(),
            "checkout".to_string(),
            commit.clone(),
        ]))
    }

    async fn do_clone(&self) -> Result<()> {
        let args = self.clone_args()?;
        info!(url = ?self.url, branch = ?self.branch, "Cloning repository");

        ProcessBuilder::which("git")?
            .args(&args)
            .run()
            .await
            .context("git clone failed")?;

        if let Some(args) = self.checkout_args()? {
            debug!(commit = ?self.commit, "Checking out commit");
            ProcessBuilder::which("git")?
                .args(&args)
                .run()
                .await
                .context("git checkout failed")?;
        }
        Ok(())
    }
}

impl Tool for GitTool {
    fn name(&self) -> &'static str {
        "git"
    }

    fn run(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(self.do_clone())
    }
}

#[cfg(test)]
mod tests;
