// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! ParMETIS installer.
//!
//! ParMETIS is built from three KarypisLab repositories, each installed into
//! the same prefix so the next one can find it:
//!
//! ```text
//! <build>/parmetis/
//!   gklib     GKlib @ 8bd6bad750b2b0d908   make config cc prefix          (CFLAGS=-fPIC)
//!   metis     METIS                        make config shared=1 cc prefix gklib_path i64=1
//!   parmetis  ParMETIS                     make config shared=1 cc prefix gklib_path metis_path
//!
//! configure  apply `patches` to gklib (patch -p1 -i)
//! build      per component: make config ..., make -jN install
//! ```

use std::path::PathBuf;

use crate::error::Result;
use futures_util::future::BoxFuture;
use tracing::info;

use super::{github, github_archive, parallel_make};
use crate::config::paths::expand_tilde;
use crate::config::types::Compiler;
use crate::installer::tools::fetch::{SourceSpec, retrieve};
use crate::installer::tools::make::MakeTool;
use crate::installer::tools::{PatchTool, Tool};
use crate::installer::{InstallContext, Installer};

pub const NAME: &str = "parmetis";

/// GKlib revision known to build METIS 5.2 and ParMETIS 4.
const GKLIB_COMMIT: &str = "8bd6bad750b2b0d908";

/// Branch the METIS and ParMETIS tarballs are taken from.
const KARYPISLAB_BRANCH: &str = "refs/heads/master";

/// One of the three source trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Gklib,
    Metis,
    Parmetis,
}

impl Component {
    /// Build order.
    pub const ALL: [Self; 3] = [Self::Gklib, Self::Metis, Self::Parmetis];

    /// Directory name under the parmetis source tree.
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Gklib => "gklib",
            Self::Metis => "metis",
            Self::Parmetis => "parmetis",
        }
    }

    #[must_use]
    pub fn source(self) -> SourceSpec {
        match self {
            Self::Gklib => SourceSpec::git(github("KarypisLab/GKlib"))
                .commit(GKLIB_COMMIT)
                .archive(github_archive("KarypisLab/GKlib", GKLIB_COMMIT)),
            Self::Metis => SourceSpec::git(github("KarypisLab/METIS"))
                .archive(github_archive("KarypisLab/METIS", KARYPISLAB_BRANCH)),
            Self::Parmetis => SourceSpec::git(github("KarypisLab/ParMETIS"))
                .archive(github_archive("KarypisLab/ParMETIS", KARYPISLAB_BRANCH)),
        }
    }
}

#[derive(Debug)]
pub struct ParmetisInstaller {
    ctx: InstallContext,
}

impl ParmetisInstaller {
    #[must_use]
    pub const fn new(ctx: InstallContext) -> Self {
        Self { ctx }
    }

    #[must_use]
    pub fn component_dir(&self, component: Component) -> PathBuf {
        self.ctx.source_dir().join(component.dir_name())
    }

    /// Variables passed to `make config` for a component.
    #[must_use]
    pub fn config_variables(&self, component: Component) -> Vec<(&'static str, String)> {
        let prefix = self.ctx.install_dir().display().to_string();
        let cc = self.ctx.compiler(Compiler::Cc);
        match component {
            Component::Gklib => vec![("cc", cc), ("prefix", prefix)],
            Component::Metis => vec![
                ("shared", "1".to_string()),
                ("cc", cc),
                ("prefix", prefix.clone()),
                ("gklib_path", prefix),
                ("i64", "1".to_string()),
            ],
            Component::Parmetis => vec![
                ("shared", "1".to_string()),
                ("cc", cc),
                ("prefix", prefix.clone()),
                ("gklib_path", prefix.clone()),
                ("metis_path", prefix),
            ],
        }
    }

    /// `make config ...` for a component.
    #[must_use]
    pub fn config_tool(&self, component: Component) -> MakeTool {
        let mut tool = MakeTool::new(self.component_dir(component)).target("config");
        for (name, value) in self.config_variables(component) {
            tool = tool.variable(name, value);
        }
        if component == Component::Gklib {
            tool = tool.env_var("CFLAGS", "-fPIC");
        }
        tool
    }

    /// Patch files from `patches`, applied to GKlib.
    #[must_use]
    pub fn patches(&self) -> Vec<PatchTool> {
        let gklib = self.component_dir(Component::Gklib);
        self.ctx
            .settings()
            .patches
            .iter()
            .flatten()
            .map(|patch| PatchTool::new(&gklib, expand_tilde(patch)))
            .collect()
    }

    async fn do_download(&self) -> Result<()> {
        for component in Component::ALL {
            info!(component = component.dir_name(), "Downloading");
            retrieve(
                component.dir_name(),
                &component.source(),
                &self.component_dir(component),
            )
            .await?;
        }
        Ok(())
    }

    async fn do_configure(&self) -> Result<()> {
        for patch in self.patches() {
            patch.run().await?;
        }
        Ok(())
    }

    async fn do_build(&self) -> Result<()> {
        for component in Component::ALL {
            info!(component = component.dir_name(), "Building");
            self.config_tool(component).run().await?;
            let mut make = parallel_make(&self.ctx, &self.component_dir(component)).target("install");
            if component == Component::Gklib {
                make = make.env_var("CFLAGS", "-fPIC");
            }
            make.run().await?;
        }
        Ok(())
    }
}

impl Installer for ParmetisInstaller {
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

    /// Each component is installed during `build` since the next one links
    /// against it.
    fn install(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            info!(prefix = %self.ctx.install_dir().display(), "ParMETIS installed with its build");
            Ok(())
        })
    }
}
