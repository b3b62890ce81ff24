// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! fortran-yaml-c installer.
//!
//! The upstream project has no complete install target, so the Fortran
//! modules and shared libraries are copied out of the build tree.
//!
//! ```text
//! configure  cmake  BUILD_SHARED_LIBS=ON CMAKE_POLICY_VERSION_MINIMUM=3.5
//!                   (HDF5_ROOT HDF5_DIR PETSC_ROOT PETSC_DIR removed)
//! build      cmake --build --parallel N
//! install    build/modules/*            -> <prefix>/modules
//!            build/src/*.{so,dylib}     -> <prefix>/lib
//!            build/_deps/libyaml-build{,/src,/lib}/libyaml.{so,dylib} -> <prefix>/lib
//!            no libyaml found           -> cmake --install
//! ```

use std::path::{Path, PathBuf};

use crate::error::Result;
use futures_util::future::BoxFuture;
use tracing::{info, warn};

use super::{cmake, cmake_build_dir, github, github_tag_archive};
use crate::installer::tools::Tool;
use crate::installer::tools::cmake::CmakeTool;
use crate::installer::tools::fetch::{SourceSpec, retrieve};
use crate::installer::{InstallContext, Installer};
use crate::utility::fs::copy::{copy_dir_contents_async, copy_matching_files_async};
use crate::utility::fs::dirs::ensure_dir;

pub const NAME: &str = "fyaml_c";
pub const DEFAULT_VERSION: &str = "0.2.5";
const REPOSITORY: &str = "Nicholaswogan/fortran-yaml-c";

/// Variables that make the bundled CMake scripts pick up unrelated packages.
const REMOVED_ENV: &[&str] = &["HDF5_ROOT", "HDF5_DIR", "PETSC_ROOT", "PETSC_DIR"];

const SHARED_LIBRARIES: &str = "*.{so,dylib}";
const LIBYAML: &str = "libyaml.{so,dylib}";

/// Where libyaml may end up inside the build tree, relative to `build/`.
const LIBYAML_DIRS: &[&str] = &[
    "_deps/libyaml-build",
    "_deps/libyaml-build/src",
    "_deps/libyaml-build/lib",
];

#[derive(Debug)]
pub struct FyamlCInstaller {
    ctx: InstallContext,
}

impl FyamlCInstaller {
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
        let mut tool = cmake(&self.ctx)
            .definition("BUILD_SHARED_LIBS", "ON")
            .definition("CMAKE_POLICY_VERSION_MINIMUM", "3.5")
            .args(self.ctx.settings().configure_options.clone().unwrap_or_default());
        for key in REMOVED_ENV {
            tool = tool.env_remove(*key);
        }
        tool.configure_op()
    }

    /// Copies build products into the prefix.
    ///
    /// Returns `false` if libyaml was not found in the build tree.
    ///
    /// # Errors
    ///
    /// Returns an error if a copy fails.
    pub async fn copy_artifacts(build_dir: &Path, prefix: &Path) -> Result<bool> {
        let lib_dir = prefix.join("lib");
        let modules_dir = prefix.join("modules");
        ensure_dir(&lib_dir).await?;
        ensure_dir(&modules_dir).await?;

        let modules = build_dir.join("modules");
        if modules.is_dir() {
            copy_dir_contents_async(&modules, &modules_dir).await?;
        } else {
            warn!(dir = %modules.display(), "No Fortran modules in build tree");
        }

        let src = build_dir.join("src");
        if src.is_dir() {
            let copied = copy_matching_files_async(&src, &lib_dir, SHARED_LIBRARIES).await?;
            info!(count = copied.len(), "Copied shared libraries");
        }

        for dir in LIBYAML_DIRS.iter().map(|d| build_dir.join(d)) {
            if dir.is_dir() && !copy_matching_files_async(&dir, &lib_dir, LIBYAML).await?.is_empty() {
                info!(dir = %dir.display(), "Copied libyaml");
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn build_dir(&self) -> PathBuf {
        cmake_build_dir(&self.ctx)
    }

    async fn do_download(&self) -> Result<()> {
        info!(version = %self.version(), "Downloading fortran-yaml-c");
        retrieve(NAME, &self.source(), self.ctx.source_dir()).await?;
        Ok(())
    }

    async fn do_install(&self) -> Result<()> {
        let found_libyaml = Self::copy_artifacts(&self.build_dir(), self.ctx.install_dir()).await?;
        if !found_libyaml {
            warn!("libyaml not found in build tree, falling back to cmake --install");
            cmake(&self.ctx).install_op().run().await?;
        }
        Ok(())
    }
}

impl Installer for FyamlCInstaller {
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
        Box::pin(self.do_install())
    }
}
