// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! PETSc installer.
//!
//! ```text
//! download   petsc/petsc @ v<version> (depth 1)
//! configure  ./configure --with-cc --with-cxx --with-fc --prefix <options>
//! build      make -jN
//! install    make install
//! PETSC_DIR=<source> is passed to every child
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

pub const NAME: &str = "petsc";
pub const DEFAULT_VERSION: &str = "3.22.2";
const REPOSITORY: &str = "petsc/petsc";
const DEFAULT_CONFIGURE_OPTIONS: &[&str] = &[
    "--download-fblaslapack=yes",
    "--with-fortran-datatypes=1",
    "--with-fortran-interfaces=1",
    "--with-fortran-bindings=1",
    "--with-fortran-kernels=1",
    "--with-debugging=1",
];

#[derive(Debug)]
pub struct PetscInstaller {
    ctx: InstallContext,
}

impl PetscInstaller {
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
    pub fn configure_args(&self) -> Vec<String> {
        let mut args: Vec<String> = Compiler::ALL
            .iter()
            .map(|&c| format!("--with-{c}={}", self.ctx.compiler(c)))
            .collect();
        args.push(format!("--prefix={}", self.ctx.install_dir().display()));
        args.extend(
            self.ctx
                .settings()
                .configure_options_or(DEFAULT_CONFIGURE_OPTIONS),
        );
        args
    }

    fn petsc_dir(&self) -> String {
        self.ctx.source_dir().display().to_string()
    }

    async fn do_download(&self) -> Result<()> {
        info!(version = %self.version(), "Downloading PETSc");
        retrieve(NAME, &self.source(), self.ctx.source_dir()).await?;
        Ok(())
    }

    async fn do_configure(&self) -> Result<()> {
        ConfigureScript::new(self.ctx.source_dir())
            .args(self.configure_args())
            .env_var("PETSC_DIR", self.petsc_dir())
            .run()
            .await
    }

    async fn do_build(&self) -> Result<()> {
        parallel_make(&self.ctx, self.ctx.source_dir())
            .env_var("PETSC_DIR", self.petsc_dir())
            .run()
            .await
    }

    async fn do_install(&self) -> Result<()> {
        MakeTool::new(self.ctx.source_dir())
            .target("install")
            .env_var("PETSC_DIR", self.petsc_dir())
            .run()
            .await
    }
}

impl Installer for PetscInstaller {
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
