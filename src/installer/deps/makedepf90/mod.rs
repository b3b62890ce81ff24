// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! makedepf90 installer.
//!
//! ```text
//! download   salsa.debian.org science-team/makedepf90, master tarball fallback
//! configure  ./configure --prefix CC=<cc>
//! build      make -jN
//! install    <src>/makedepf90 -> <prefix>/bin/makedepf90
//! ```

use std::path::{Path, PathBuf};

use crate::error::{FsError, InstallError, Result};
use anyhow::Context;
use futures_util::future::BoxFuture;
use tracing::info;

use super::parallel_make;
use crate::config::types::Compiler;
use crate::installer::tools::Tool;
use crate::installer::tools::fetch::{SourceSpec, retrieve};
use crate::installer::tools::make::ConfigureScript;
use crate::installer::{InstallContext, Installer};
use crate::utility::fs::dirs::ensure_dir;

pub const NAME: &str = "makedepf90";
const REPOSITORY: &str = "https://salsa.debian.org/science-team/makedepf90.git";
const ARCHIVE: &str =
    "https://salsa.debian.org/science-team/makedepf90/-/archive/master/makedepf90-master.tar.gz";
const BINARY: &str = "makedepf90";

#[derive(Debug)]
pub struct Makedepf90Installer {
    ctx: InstallContext,
}

impl Makedepf90Installer {
    #[must_use]
    pub const fn new(ctx: InstallContext) -> Self {
        Self { ctx }
    }

    #[must_use]
    pub fn source() -> SourceSpec {
        SourceSpec::git(REPOSITORY).archive(ARCHIVE)
    }

    #[must_use]
    pub fn configure_args(&self) -> Vec<String> {
        let mut args = vec![
            format!("--prefix={}", self.ctx.install_dir().display()),
            format!("CC={}", self.ctx.compiler(Compiler::Cc)),
        ];
        args.extend(self.ctx.settings().configure_options_or(&[]));
        args
    }

    /// Copies the built binary into `<prefix>/bin`.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::MissingArtifact`] if the build produced no binary.
    pub async fn install_binary(source: &Path, prefix: &Path) -> Result<PathBuf> {
        let binary = source.join(BINARY);
        if !binary.is_file() {
            return Err(InstallError::MissingArtifact {
                path: binary.display().to_string(),
            }
            .into());
        }

        let bin_dir = prefix.join("bin");
        ensure_dir(&bin_dir).await?;
        let target = bin_dir.join(BINARY);
        tokio::fs::copy(&binary, &target)
            .await
            .map_err(|e| FsError::IoError {
                path: target.display().to_string(),
                source: e,
            })
            .with_context(|| format!("failed to install {}", binary.display()))?;
        Ok(target)
    }

    async fn do_download(&self) -> Result<()> {
        info!("Downloading makedepf90");
        retrieve(NAME, &Self::source(), self.ctx.source_dir()).await?;
        Ok(())
    }

    async fn do_install(&self) -> Result<()> {
        let target = Self::install_binary(self.ctx.source_dir(), self.ctx.install_dir()).await?;
        info!(path = %target.display(), "Installed makedepf90");
        Ok(())
    }
}

impl Installer for Makedepf90Installer {
    fn context(&self) -> &InstallContext {
        &self.ctx
    }

    fn download(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(self.do_download())
    }

    fn configure(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            ConfigureScript::new(self.ctx.source_dir())
                .args(self.configure_args())
                .run()
                .await
        })
    }

    fn build(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move { parallel_make(&self.ctx, self.ctx.source_dir()).run().await })
    }

    fn install(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(self.do_install())
    }
}
