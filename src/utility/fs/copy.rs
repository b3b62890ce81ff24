// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tokio::fs;
use wax::{Glob, Program};

/// Recursively copies all contents from src directory to dst directory.
///
/// Creates dst if it doesn't exist.
///
/// # Example
/// ```no_run
/// use ccs_deps::utility::fs::copy::copy_dir_contents_async;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// copy_dir_contents_async(Path::new("build/modules"), Path::new("/opt/fyaml/modules")).await?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if any IO operation fails (creating directory, reading, copying).
pub async fn copy_dir_contents_async(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)
        .await
        .with_context(|| format!("failed to create directory {}", dst.display()))?;

    let mut entries = fs::read_dir(src)
        .await
        .with_context(|| format!("failed to read directory {}", src.display()))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("failed to read entry from {}", src.display()))?
    {
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            Box::pin(copy_dir_contents_async(&src_path, &dst_path)).await?;
        } else {
            fs::copy(&src_path, &dst_path).await.with_context(|| {
                format!(
                    "failed to copy {} to {}",
                    src_path.display(),
                    dst_path.display()
                )
            })?;
        }
    }

    Ok(())
}

/// Copies top-level files of `src` whose names match a glob into `dst`.
///
/// Does not recurse. Returns the destination paths of the copied files in
/// name order; `dst` is only created when something matches.
///
/// # Example
/// ```no_run
/// use ccs_deps::utility::fs::copy::copy_matching_files_async;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// copy_matching_files_async(Path::new("build/src"), Path::new("/opt/fyaml/lib"), "*.{so,dylib}")
///     .await?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if the pattern is invalid or any IO operation fails.
pub async fn copy_matching_files_async(
    src: &Path,
    dst: &Path,
    pattern: &str,
) -> Result<Vec<PathBuf>> {
    let glob =
        Glob::new(pattern).map_err(|e| anyhow::anyhow!("invalid glob pattern '{pattern}': {e}"))?;

    let mut entries = fs::read_dir(src)
        .await
        .with_context(|| format!("failed to read directory {}", src.display()))?;

    let mut matches = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("failed to read entry from {}", src.display()))?
    {
        let name = PathBuf::from(entry.file_name());
        if entry.path().is_file() && glob.is_match(name.as_path()) {
            matches.push(name);
        }
    }
    matches.sort();

    if !matches.is_empty() {
        fs::create_dir_all(dst)
            .await
            .with_context(|| format!("failed to create directory {}", dst.display()))?;
    }

    let mut copied = Vec::with_capacity(matches.len());
    for name in matches {
        let src_path = src.join(&name);
        let dst_path = dst.join(&name);
        fs::copy(&src_path, &dst_path).await.with_context(|| {
            format!(
                "failed to copy {} to {}",
                src_path.display(),
                dst_path.display()
            )
        })?;
        copied.push(dst_path);
    }

    Ok(copied)
}
