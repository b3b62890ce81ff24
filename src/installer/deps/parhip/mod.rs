// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! ParHIP installer (distributed from KaHIP).
//!
//! ```text
//! download   KaHIP/KaHIP @ v<version> (depth 1)
//! configure  cmake Release with compilers
//! build      cmake --build --parallel N
//! install    cmake --install
//! ```

use crate::error::Result;
use futures_util::future::BoxFuture;
use tracing::info;

use super::{cmake, github, github_tag_archive, with_compilers};
use crate::installer::tools::Tool;
use crate::installer::tools::cmake::CmakeTool;
use crate::installer::tools::fetch::{SourceSpec, retrieve};
use crate::installer::{InstallContext, Installer};

pub const NAME: &str = "parhip";
pub const DEFAULT_VERSION: &str = "3.16";
const REPOSITORY: &str = "KaHIP/KaHIP";

#[derive(Debug)]
pub struct ParhipInstaller {
    ctx: InstallContext,
}

impl ParhipInstaller {
    #[must_use]
    pub const fn new(ctx: InstallContext) -> Self {
        Self { ctx }
    }

    fn version(&self) -> String {
        self.ctx.version_or(DEFAULT_VERSION)
    }

    #[must_use]
    pub fn source(&self) -> SourceSpec {
        let tag = format!("v{}", self.version());
        SourceSpec::git(github(REPOSITORY))
            .branch(&tag)
            .depth(1)
            .archive(github_tag_archive(REPOSITORY, &tag))
    }

    #[must_use]
    pub fn configure_tool(&self) -> CmakeTool {
        with_compilers(cmake(&self.ctx), &self.ctx)
            .build_type("Release")
            .args(self.ctx.settings().configure_options.clone().unwrap_or_default())
            .configure_op()
    }

    async fn do_download(&self) -> Result<()> {
        info!(version = %self.version(), "Downloading KaHIP");
        retrieve(NAME, &self.source(), self.ctx.source_dir()).await?;
        Ok(())
    }
}

impl Installer for ParhipInstaller {
    fn context(&self) -> &InstallContext {
        &self.ctx
    }

    fn download(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(self.do_download())
    }

    fn configure(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move { self.configure_tool().run().await })
    }

    fn build(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move { cmake(&self.ctx).build_op().run().await })
    }

    fn install(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move { cmake(&self.ctx).install_op().run().await })
    }
}

#[cfg(test)]
mod tests;
