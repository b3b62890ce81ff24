// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tool abstractions used by installer stages.
//!
//! ```text
//! Installer stage --> Tool --> ProcessBuilder::which(<program>)
//!   GitTool          git clone / checkout
//!   CmakeTool        cmake -S -B / --build / --install
//!   MakeTool         make [-jN] [targets] [VAR=value]
//!   ConfigureScript  <dir>/configure [args]
//!   PatchTool        patch -p1 -i <file>
//!   fetch::retrieve  git -> wget -> curl -> built-in download
//! ```
//!
//! Every tool exposes its argument list as a pure function so that command
//! lines can be checked without the external program installed.

use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use tracing::info;

use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;

pub mod cmake;
pub mod fetch;
pub mod git;
pub mod make;

/// Trait for tools that execute external processes.
///
/// Tools are the building blocks of installer stages. Each tool encapsulates
/// one external operation (git clone, cmake configure, make, ...).
pub trait Tool: Send + Sync {
    /// Returns the name of this tool (e.g., "git", "cmake", "make").
    fn name(&self) -> &str;

    /// Executes the tool's operation.
    fn run(&self) -> BoxFuture<'_, Result<()>>;
}

/// Applies a patch file with `patch -p1 -i <file>` inside a source tree.
#[derive(Debug, Clone)]
pub struct PatchTool {
    dir: PathBuf,
    patch_file: PathBuf,
}

impl PatchTool {
    #[must_use]
    pub fn new(dir: impl AsRef<Path>, patch_file: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            patch_file: patch_file.as_ref().to_path_buf(),
        }
    }

    /// Arguments passed to `patch`.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        vec![
            "-p1".to_string(),
            "-i".to_string(),
            self.patch_file.display().to_string(),
        ]
    }
}

impl Tool for PatchTool {
    fn name(&self) -> &'static str {
        "patch"
    }

    fn run(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            info!(patch = %self.patch_file.display(), dir = %self.dir.display(), "Applying patch");
            ProcessBuilder::which("patch")?
                .args(self.args())
                .cwd(&self.dir)
                .run()
                .await?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests;
