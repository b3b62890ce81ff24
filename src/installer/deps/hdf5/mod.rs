// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! HDF5 installer.
//!
//! ```text
//! download   HDFGroup/hdf5 @ hdf5_<version> (depth 1), tag tarball fallback
//! configure  [autogen.sh] ./configure --prefix CC CXX FC <options>
//! build      make -jN
//! install    make install
//! ```

use crate::error::Result;
use futures_util::future::BoxFuture;
use tracing::info;

use super::{github, github_tag_archive, parallel_make};
use crate::config::types::Compiler;
use crate::installer::tools::Tool;
use crate::installer::tools::fetch::{SourceSpec, retrieve};
use crate::installer::tools::make::{ConfigureScript, MakeTool};
use crate::installer::{InstallContext, Installer};

pub const NAME: &str = "hdf5";
pub const DEFAULT_VERSION: &str = "1.14.4.3";
const REPOSITORY: &str = "HDFGroup/hdf5";
const DEFAULT_CONFIGURE_OPTIONS: &[&str] = &["--enable-parallel"];

/// Builds parallel HDF5 with autotools.
#[derive(Debug)]
pub struct Hdf5Installer {
    ctx: InstallContext,
}

impl Hdf5Installer {
    #[must_use]
    pub const fn new(ctx: InstallContext) -> Self {
        Self { ctx }
    }

    fn version(&self) -> String {
        self.ctx.version_or(DEFAULT_VERSION)
    }

    /// Where the sources come from.
    #[must_use]
    pub fn source(&self) -> SourceSpec {
        let tag = format!("hdf5_{}", self.version());
        SourceSpec::git(github(REPOSITORY))
            .branch(&tag)
            .depth(1)
            .archive(github_tag_archive(REPOSITORY, &tag))
    }

    /// Arguments for `./configure`.
    #[must_use]
    pub fn configure_args(&self) -> Vec<String> {
        let mut args = vec![format!("--prefix={}", self.ctx.install_dir().display())];
        args.extend(
            Compiler::ALL
                .iter()
                .map(|&c| format!("{}={}", c.env_var(), self.ctx.compiler(c))),
        );
        args.extend(
            self.ctx
                .settings()
                .configure_options_or(DEFAULT_CONFIGURE_OPTIONS),
        );
        args
    }

    async fn do_download(&self) -> Result<()> {
        info!(version = %self.version(), "Downloading HDF5");
        retrieve(NAME, &self.source(), self.ctx.source_dir()).await?;
        Ok(())
    }

    async fn do_configure(&self) -> Result<()> {
        let source_dir = self.ctx.source_dir();
        let configure = ConfigureScript::new(source_dir).args(self.configure_args());

        // Git checkouts ship without a generated configure script.
        if !configure.exists() {
            ConfigureScript::new(source_dir)
                .script("autogen.sh")
                .run()
                .await?;
        }
        configure.run().await
    }

    async fn do_build(&self) -> Result<()> {
        parallel_make(&self.ctx, self.ctx.source_dir()).run().await
    }

    async fn do_install(&self) -> Result<()> {
        MakeTool::new(self.ctx.source_dir())
            .target("install")
            .run()
            .await
    }
}

impl Installer for Hdf5Installer {
    fn context(&self) -> &InstallContext {
        &self.ctx
    }

    fn download(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(self.do_download())
    }

    fn configure(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(self.do_configure())
    }

    fn build(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(self.do_build())
    }

    fn install(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(self.do_install())
    }
}

#[cfg(test)]
mod tests;
