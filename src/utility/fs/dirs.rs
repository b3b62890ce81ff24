// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{FsError, Result};
use std::path::Path;
use tokio::fs;

fn io_error(path: &Path, source: std::io::Error) -> FsError {
    FsError::IoError {
        path: path.display().to_string(),
        source,
    }
}

/// Creates a directory and all of its parents.
///
/// # Errors
///
/// Returns [`FsError::IoError`] if the directory cannot be created.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| io_error(path, e))?;
    Ok(())
}

/// Removes a directory tree. A missing directory is not an error.
///
/// Returns whether anything was removed.
///
/// # Errors
///
/// Returns [`FsError::IoError`] if an existing directory cannot be removed.
pub async fn remove_dir_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(io_error(path, e).into()),
    }
}

/// Removes a directory tree if present and recreates it empty.
///
/// # Errors
///
/// Returns [`FsError::IoError`] if removal or creation fails.
pub async fn reset_dir(path: &Path) -> Result<()> {
    remove_dir_if_exists(path).await?;
    ensure_dir(path).await
}

/// Returns true if `path` is a directory with at least one entry.
pub async fn is_non_empty_dir(path: &Path) -> bool {
    match fs::read_dir(path).await {
        Ok(mut entries) => matches!(entries.next_entry().await, Ok(Some(_))),
        Err(_) => false,
    }
}
