// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Installers for each supported dependency.
//!
//! ```text
//! name         sources                          build system
//! hdf5         HDFGroup/hdf5 hdf5_<v>           autotools
//! adios2       ornladios/ADIOS2 v<v>            cmake
//! petsc        petsc/petsc v<v>                 configure + make
//! parmetis     KarypisLab GKlib/METIS/ParMETIS  make config
//! parhip       KaHIP/KaHIP v<v>                 cmake
//! rcm_f90      asimovpp/RCM-f90                 make, copied install
//! fyaml_c      fortran-yaml-c v<v>              cmake, copied install
//! makedepf90   salsa.debian.org makedepf90      autotools, copied install
//! python_deps  (none)                           venv + pip
//! ```

pub mod adios2;
pub mod fyaml_c;
pub mod hdf5;
pub mod makedepf90;
pub mod parhip;
pub mod parmetis;
pub mod petsc;
pub mod python_deps;
pub mod rcm_f90;

use std::path::{Path, PathBuf};

use crate::config::types::Compiler;
use crate::installer::InstallContext;
use crate::installer::tools::cmake::CmakeTool;
use crate::installer::tools::make::MakeTool;

pub use adios2::Adios2Installer;
pub use fyaml_c::FyamlCInstaller;
pub use hdf5::Hdf5Installer;
pub use makedepf90::Makedepf90Installer;
pub use parhip::ParhipInstaller;
pub use parmetis::ParmetisInstaller;
pub use petsc::PetscInstaller;
pub use python_deps::PythonDepsInstaller;
pub use rcm_f90::RcmF90Installer;

/// Installation order used when the configuration lists none.
pub const DEFAULT_INSTALLATION_ORDER: [&str; 9] = [
    hdf5::NAME,
    adios2::NAME,
    petsc::NAME,
    parmetis::NAME,
    parhip::NAME,
    rcm_f90::NAME,
    fyaml_c::NAME,
    makedepf90::NAME,
    python_deps::NAME,
];

/// Clone URL of a GitHub repository (`owner/name`).
#[must_use]
pub fn github(repository: &str) -> String {
    format!("https://github.com/{repository}.git")
}

/// Tarball URL of a GitHub tag.
#[must_use]
pub fn github_tag_archive(repository: &str, tag: &str) -> String {
    format!("https://github.com/{repository}/archive/refs/tags/{tag}.tar.gz")
}

/// Tarball URL of a branch head or commit (`refs/heads/master`, `HEAD`, a sha).
#[must_use]
pub fn github_archive(repository: &str, rev: &str) -> String {
    format!("https://github.com/{repository}/archive/{rev}.tar.gz")
}

/// `make` in `dir` using the configured parallelism.
#[must_use]
pub fn parallel_make(ctx: &InstallContext, dir: &Path) -> MakeTool {
    MakeTool::new(dir).jobs(ctx.parallel_jobs())
}

/// Out-of-tree CMake build directory, `<source>/build`.
#[must_use]
pub fn cmake_build_dir(ctx: &InstallContext) -> PathBuf {
    ctx.source_dir().join("build")
}

/// CMake tool over the dependency's source tree, installing into its prefix.
#[must_use]
pub fn cmake(ctx: &InstallContext) -> CmakeTool {
    CmakeTool::new()
        .source_dir(ctx.source_dir())
        .build_dir(cmake_build_dir(ctx))
        .install_prefix(ctx.install_dir())
        .jobs(ctx.parallel_jobs())
}

/// Adds `CMAKE_<LANG>_COMPILER` definitions for every compiler role.
#[must_use]
pub fn with_compilers(tool: CmakeTool, ctx: &InstallContext) -> CmakeTool {
    Compiler::ALL.into_iter().fold(tool, |tool, compiler| {
        let lang = match compiler {
            Compiler::Cc => "C",
            Compiler::Cxx => "CXX",
            Compiler::Fc => "Fortran",
        };
        tool.definition(format!("CMAKE_{lang}_COMPILER"), ctx.compiler(compiler))
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::Path;
    use std::sync::Arc;

    use crate::config::ConfigDocument;
    use crate::core::env::Environment;
    use crate::installer::InstallContext;

    /// Context rooted in `root` with extra configuration YAML appended.
    pub(crate) fn context(root: &Path, name: &str, extra_yaml: &str) -> InstallContext {
        let yaml = format!(
            "install_dir: {}\nbuild_dir: {}\nparallel_jobs: 8\n{extra_yaml}",
            root.join("install").display(),
            root.join("build").display()
        );
        let config = Arc::new(ConfigDocument::from_yaml_str(&yaml, "<test>").unwrap());
        let environment = Arc::new(Environment::build("gnu_ubuntu", &config));
        InstallContext::new(name, config, environment)
    }
}

#[cfg(test)]
mod tests;
