// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! RCM-f90 installer.
//!
//! ```text
//! download   asimovpp/RCM-f90 (default branch, depth 1)
//! configure  (plain Makefile)
//! build      make -jN CMP=<cmp>
//! install    lib/ include/ -> <prefix>, replacing previous copies
//! ```

use std::path::Path;

use crate::error::Result;
use futures_util::future::BoxFuture;
use tracing::{debug, info};

use super::{github, github_archive, parallel_make};
use crate::installer::tools::Tool;
use crate::installer::tools::fetch::{SourceSpec, retrieve};
use crate::installer::tools::make::MakeTool;
use crate::installer::{InstallContext, Installer};
use crate::utility::fs::copy::copy_dir_contents_async;
use crate::utility::fs::dirs::{ensure_dir, remove_dir_if_exists};

pub const NAME: &str = "rcm_f90";
const REPOSITORY: &str = "asimovpp/RCM-f90";

/// Build products copied into the prefix.
const INSTALLED_DIRS: &[&str] = &["lib", "include"];

#[derive(Debug)]
pub struct RcmF90Installer {
    ctx: InstallContext,
}

impl RcmF90Installer {
    #[must_use]
    pub const fn new(ctx: InstallContext) -> Self {
        Self { ctx }
    }

    #[must_use]
    pub fn source() -> SourceSpec {
        SourceSpec::git(github(REPOSITORY))
            .depth(1)
            .archive(github_archive(REPOSITORY, "HEAD"))
    }

    #[must_use]
    pub fn build_tool(&self) -> MakeTool {
        parallel_make(&self.ctx, self.ctx.source_dir()).variable("CMP", self.ctx.cmp())
    }

    /// Replaces `<prefix>/lib` and `<prefix>/include` with the build's copies.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be removed or copied.
    pub async fn copy_artifacts(source: &Path, prefix: &Path) -> Result<()> {
        ensure_dir(prefix).await?;
        for name in INSTALLED_DIRS {
            let from = source.join(name);
            if !from.is_dir() {
                debug!(dir = %from.display(), "Nothing to install");
                continue;
            }
            let to = prefix.join(name);
            remove_dir_if_exists(&to).await?;
            copy_dir_contents_async(&from, &to).await?;
        }
        Ok(())
    }

    async fn do_download(&self) -> Result<()> {
        info!("Downloading RCM-f90");
        retrieve(NAME, &Self::source(), self.ctx.source_dir()).await?;
        Ok(())
    }
}

impl Installer for RcmF90Installer {
    fn context(&self) -> &InstallContext {
        &self.ctx
    }

    fn download(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(self.do_download())
    }

    fn configure(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async { Ok(()) })
    }

    fn build(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move { self.build_tool().run().await })
    }

    fn install(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(Self::copy_artifacts(
            self.ctx.source_dir(),
            self.ctx.install_dir(),
        ))
    }
}

#[cfg(test)]
mod tests;
