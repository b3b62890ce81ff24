// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `.tar.gz` extraction with the top-level directory stripped.

use std::fs::File;
use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use flate2::read::GzDecoder;
use tar::Archive;
use tracing::debug;

use crate::error::Result;

/// Drops the first component of an archive path.
///
/// Returns `None` for the top-level directory itself and for paths that
/// would escape the destination.
#[must_use]
pub fn strip_top_level(path: &Path) -> Option<PathBuf> {
    let mut components = path.components();
    components.next()?;
    let rest: PathBuf = components.collect();
    let safe = rest
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    (safe && !rest.as_os_str().is_empty()).then_some(rest)
}

fn extract_blocking(archive: &Path, dest: &Path) -> Result<usize> {
    let file = File::open(archive)
        .with_context(|| format!("failed to open archive {}", archive.display()))?;
    let mut tar = Archive::new(GzDecoder::new(file));
    std::fs::create_dir_all(dest)
        .with_context(|| format!("failed to create {}", dest.display()))?;

    let mut count = 0;
    for entry in tar
        .entries()
        .with_context(|| format!("failed to read archive {}", archive.display()))?
    {
        let mut entry = entry.context("corrupt archive entry")?;
        let path = entry.path().context("invalid path in archive")?.into_owned();
        let Some(relative) = strip_top_level(&path) else {
            continue;
        };

        let target = dest.join(&relative);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        entry
            .unpack(&target)
            .with_context(|| format!("failed to extract {}", relative.display()))?;
        count += 1;
    }
    Ok(count)
}

/// Extracts a gzip-compressed tarball into `dest`, stripping the top-level directory.
///
/// Returns the number of extracted entries.
///
/// # Errors
///
/// Returns an error if the archive cannot be read or an entry cannot be written.
pub async fn extract_tar_gz(archive: &Path, dest: &Path) -> Result<usize> {
    let archive = archive.to_path_buf();
    let dest = dest.to_path_buf();
    let count = tokio::task::spawn_blocking(move || extract_blocking(&archive, &dest))
        .await
        .context("archive extraction task failed")??;
    debug!(entries = count, "extracted archive");
    Ok(count)
}
