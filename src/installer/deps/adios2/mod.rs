// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! ADIOS2 installer.
//!
//! ```text
//! download   ornladios/ADIOS2 @ v<version> (depth 1)
//! configure  cmake -S <src> -B <src>/build  compilers + ADIOS2_* defaults + HDF5_ROOT
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

pub const NAME: &str = "adios2";
pub const DEFAULT_VERSION: &str = "2.10.2";
const REPOSITORY: &str = "ornladios/ADIOS2";

/// Feature switches applied unless `configure_options` overrides them.
const DEFAULT_DEFINITIONS: &[(&str, &str)] = &[
    ("ADIOS2_USE_SST", "OFF"),
    ("ADIOS2_USE_Fortran", "ON"),
    ("ADIOS2_USE_MPI", "ON"),
    ("ADIOS2_USE_HDF5", "ON"),
    ("ADIOS2_USE_Python", "OFF"),
    ("ADIOS2_USE_ZeroMQ", "OFF"),
    ("BUILD_SHARED_LIBS", "ON"),
];

#[derive(Debug)]
pub struct Adios2Installer {
    ctx: InstallContext,
}

impl Adios2Installer {
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

    /// CMake configure step. `configure_options` are passed as extra arguments
    /// after the defaults, so `-DADIOS2_USE_SST=ON` there wins.
    #[must_use]
    pub fn configure_tool(&self) -> CmakeTool {
        let mut tool = with_compilers(cmake(&self.ctx), &self.ctx);
        for (key, value) in DEFAULT_DEFINITIONS {
            tool = tool.definition(*key, *value);
        }
        if let Some(hdf5_root) = self.ctx.environment().get("HDF5_ROOT") {
            tool = tool.definition("HDF5_ROOT", hdf5_root);
        }
        tool.args(self.ctx.settings().configure_options.clone().unwrap_or_default())
            .configure_op()
    }

    async fn do_download(&self) -> Result<()> {
        info!(version = %self.version(), "Downloading ADIOS2");
        retrieve(NAME, &self.source(), self.ctx.source_dir()).await?;
        Ok(())
    }
}

impl Installer for Adios2Installer {
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
