// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Source retrieval with ordered fallbacks.
//!
//! ```text
//! retrieve(name, &SourceSpec, dest)
//!   for method in [Git, Wget, Curl, Builtin]:
//!     skip if no source location exists for it
//!     reset_dir(dest)
//!     Git     -> GitTool clone (+ checkout)
//!     Wget    -> wget -O <dest>.tar.gz <archive>  ┐
//!     Curl    -> curl -fL -o <dest>.tar.gz <archive> ├─> extract_tar_gz (strip top dir)
//!     Builtin -> net::Downloader                  ┘
//!     ok  -> return method
//!     err -> record "<method>: <error>" and continue
//!   all failed -> InstallError::RetrievalFailed { name, attempts }
//! ```

pub mod archive;

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::Tool;
use super::git::GitTool;
use crate::core::process::builder::ProcessBuilder;
use crate::error::{InstallError, Result};
use crate::net::Downloader;
use crate::utility::fs::dirs::reset_dir;

/// Which git revision to fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GitRef {
    /// The repository's default branch.
    #[default]
    Default,
    /// A branch or tag, passed to `git clone --branch`.
    Branch(String),
    /// A commit, checked out after a full clone.
    Commit(String),
}

/// Where a dependency's sources come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSpec {
    repository: Option<String>,
    reference: GitRef,
    depth: Option<u32>,
    archive_url: Option<String>,
}

impl SourceSpec {
    /// Sources from a git repository.
    #[must_use]
    pub fn git(repository: impl Into<String>) -> Self {
        Self {
            repository: Some(repository.into()),
            ..Self::default()
        }
    }

    /// Sources from a `.tar.gz` archive only.
    #[must_use]
    pub fn archive_only(url: impl Into<String>) -> Self {
        Self {
            archive_url: Some(url.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.reference = GitRef::Branch(branch.into());
        self
    }

    #[must_use]
    pub fn commit(mut self, commit: impl Into<String>) -> Self {
        self.reference = GitRef::Commit(commit.into());
        self
    }

    #[must_use]
    pub const fn depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Fallback `.tar.gz` archive used when cloning fails.
    #[must_use]
    pub fn archive(mut self, url: impl Into<String>) -> Self {
        self.archive_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    #[must_use]
    pub const fn reference(&self) -> &GitRef {
        &self.reference
    }

    #[must_use]
    pub fn archive_url(&self) -> Option<&str> {
        self.archive_url.as_deref()
    }

    /// Returns true if a source location exists for `method`.
    #[must_use]
    pub const fn supports(&self, method: RetrievalMethod) -> bool {
        match method {
            RetrievalMethod::Git => self.repository.is_some(),
            RetrievalMethod::Wget | RetrievalMethod::Curl | RetrievalMethod::Builtin => {
                self.archive_url.is_some()
            }
        }
    }

    /// The clone described by this spec.
    #[must_use]
    pub fn git_tool(&self, dest: &Path) -> Option<GitTool> {
        let repository = self.repository.as_ref()?;
        let mut tool = GitTool::new().url(repository).path(dest);
        if let Some(depth) = self.depth {
            tool = tool.depth(depth);
        }
        tool = match &self.reference {
            GitRef::Default => tool,
            GitRef::Branch(branch) => tool.branch(branch),
            GitRef::Commit(commit) => tool.commit(commit),
        };
        Some(tool)
    }
}

/// One way of obtaining sources, in fallback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalMethod {
    Git,
    Wget,
    Curl,
    Builtin,
}

impl RetrievalMethod {
    /// All methods in the order they are tried.
    pub const ALL: [Self; 4] = [Self::Git, Self::Wget, Self::Curl, Self::Builtin];
}

impl fmt::Display for RetrievalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Git => "git",
            Self::Wget => "wget",
            Self::Curl => "curl",
            Self::Builtin => "built-in download",
        })
    }
}

/// Path the archive is downloaded to before extraction into `dest`.
#[must_use]
pub fn archive_path(dest: &Path) -> PathBuf {
    let mut name = dest
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tar.gz");
    dest.with_file_name(name)
}

/// Arguments for downloading `url` to `output` with an external tool.
#[must_use]
pub fn download_args(method: RetrievalMethod, url: &str, output: &Path) -> Vec<String> {
    let output = output.display().to_string();
    match method {
        RetrievalMethod::Wget => vec!["-O".to_string(), output, url.to_string()],
        RetrievalMethod::Curl => vec!["-fL".to_string(), "-o".to_string(), output, url.to_string()],
        RetrievalMethod::Git | RetrievalMethod::Builtin => Vec::new(),
    }
}

async fn download_archive(method: RetrievalMethod, url: &str, output: &Path) -> Result<()> {
    match method {
        RetrievalMethod::Wget | RetrievalMethod::Curl => {
            let program = if method == RetrievalMethod::Wget { "wget" } else { "curl" };
            ProcessBuilder::which(program)?
                .args(download_args(method, url, output))
                .run()
                .await?;
        }
        RetrievalMethod::Builtin => {
            Downloader::new().url(url).file(output).download().await?;
        }
        RetrievalMethod::Git => {}
    }
    Ok(())
}

async fn attempt(method: RetrievalMethod, spec: &SourceSpec, dest: &Path) -> Result<()> {
    if method == RetrievalMethod::Git {
        if let Some(tool) = spec.git_tool(dest) {
            tool.run().await?;
        }
        return Ok(());
    }

    let Some(url) = spec.archive_url() else {
        return Ok(());
    };
    let archive = archive_path(dest);
    let result = async {
        download_archive(method, url, &archive).await?;
        archive::extract_tar_gz(&archive, dest).await?;
        Ok::<(), anyhow::Error>(())
    }
    .await;
    let _ = tokio::fs::remove_file(&archive).await;
    result
}

/// Fetches sources for `name` into `dest`, trying each method in turn.
///
/// `dest` is emptied before every attempt. Returns the method that worked.
///
/// # Errors
///
/// Returns [`InstallError::RetrievalFailed`] listing every attempt's error if
/// no method succeeds.
pub async fn retrieve(name: &str, spec: &SourceSpec, dest: &Path) -> Result<RetrievalMethod> {
    let mut attempts = Vec::new();

    for method in RetrievalMethod::ALL {
        if !spec.supports(method) {
            continue;
        }

        reset_dir(dest).await?;
        info!(dependency = name, method = %method, dest = %dest.display(), "Retrieving sources");

        match attempt(method, spec, dest).await {
            Ok(()) => return Ok(method),
            Err(e) => {
                warn!(dependency = name, method = %method, error = %format!("{e:#}"), "Retrieval attempt failed");
                attempts.push(format!("{method}: {e:#}"));
            }
        }
    }

    Err(InstallError::RetrievalFailed {
        name: name.to_string(),
        attempts,
    }
    .into())
}

#[cfg(test)]
mod tests;
