// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build environment derived from the merged configuration.
//!
//! ```text
//! Environment::build("gnu_ubuntu", &config)
//!   INSTALL_DIR   install_dir  | ~/ccs-deps
//!   BUILD_DIR     build_dir    | <temp>/build-ccs-deps
//!   CC CXX FC     cc cxx fc    | mpicc mpicxx mpifort
//!   CMP           "gnu_ubuntu" -> "gnu"
//!   for each dependencies.<name>:
//!     <NAME>_VERSION   version (if set)
//!     <NAME>           install_dir | INSTALL_DIR/<name>-<cmp>[-v<version>]
//!   HDF5_ROOT          = HDF5
//!   LD_LIBRARY_PATH    += <PETSC|FYAML_C|PARHIP|PARMETIS|RCM_F90>/lib
//!   PATH               += <MAKEDEPF90|PYTHON_DEPS>/bin
//!
//! apply()  once, before the first child process is spawned
//! ```

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use super::container::Env;
use super::types::EnvFlags;
use crate::config::ConfigDocument;
use crate::config::paths::{default_build_dir, default_install_dir, expand_tilde};
use crate::config::types::Compiler;

/// Dependencies whose `lib` directory is put on the dynamic loader path.
const LIBRARY_PATH_DEPENDENCIES: &[&str] = &["petsc", "fyaml_c", "parhip", "parmetis", "rcm_f90"];

/// Dependencies whose `bin` directory is put on `PATH`.
const BINARY_PATH_DEPENDENCIES: &[&str] = &["makedepf90", "python_deps"];

/// Set once the environment has been copied into the live process.
static APPLIED: AtomicBool = AtomicBool::new(false);

/// Environment variable name for a dependency (`fyaml_c` -> `FYAML_C`).
#[must_use]
pub fn env_key(dependency: &str) -> String {
    dependency.replace('-', "_").to_ascii_uppercase()
}

/// Version variable name for a dependency (`hdf5` -> `HDF5_VERSION`).
#[must_use]
pub fn version_key(dependency: &str) -> String {
    format!("{}_VERSION", env_key(dependency))
}

/// Compiler family of an environment name (`cray_A2` -> `cray`).
#[must_use]
pub fn compiler_family(environment: &str) -> String {
    environment
        .split('_')
        .next()
        .filter(|family| !family.is_empty())
        .unwrap_or("gnu")
        .to_string()
}

/// Conventional installation directory for a dependency.
#[must_use]
pub fn dependency_install_dir(
    install_root: &Path,
    dependency: &str,
    cmp: &str,
    version: Option<&str>,
) -> PathBuf {
    let dir_name = version.map_or_else(
        || format!("{dependency}-{cmp}"),
        |version| format!("{dependency}-{cmp}-v{version}"),
    );
    install_root.join(dir_name)
}

/// String-valued environment for installer child processes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    name: String,
    cmp: String,
    install_dir: PathBuf,
    build_dir: PathBuf,
    vars: Env,
}

impl Environment {
    /// Builds the environment for `environment_name` from a merged configuration.
    ///
    /// This never fails: missing keys take their defaults and every scalar is
    /// stringified.
    #[must_use]
    pub fn build(environment_name: &str, config: &ConfigDocument) -> Self {
        let install_dir = config
            .install_dir()
            .map_or_else(default_install_dir, |dir| expand_tilde(&dir));
        let build_dir = config
            .build_dir()
            .map_or_else(default_build_dir, |dir| expand_tilde(&dir));
        let cmp = compiler_family(environment_name);

        let mut vars = Env::new();
        vars.set("INSTALL_DIR", install_dir.display().to_string());
        vars.set("BUILD_DIR", build_dir.display().to_string());
        for compiler in Compiler::ALL {
            vars.set(compiler.env_var(), config.compiler(compiler));
        }
        vars.set("CMP", cmp.clone());

        for (name, dependency) in config.dependencies() {
            if let Some(version) = &dependency.version {
                vars.set(version_key(&name), version.clone());
            }

            let dir = dependency.install_dir.as_deref().map_or_else(
                || dependency_install_dir(&install_dir, &name, &cmp, dependency.version.as_deref()),
                expand_tilde,
            );
            vars.set(env_key(&name), dir.display().to_string());
        }

        if let Some(hdf5) = vars.get("HDF5").map(str::to_string) {
            vars.set("HDF5_ROOT", hdf5);
        }

        if let Some(lib_dirs) = joined_subdirs(&vars, LIBRARY_PATH_DEPENDENCIES, "lib") {
            vars.set_with_flags("LD_LIBRARY_PATH", lib_dirs, EnvFlags::Prepend);
        }
        if let Some(bin_dirs) = joined_subdirs(&vars, BINARY_PATH_DEPENDENCIES, "bin") {
            vars.prepend_path(bin_dirs);
        }

        Self {
            name: environment_name.to_string(),
            cmp,
            install_dir,
            build_dir,
            vars,
        }
    }

    /// Deployment environment name (e.g. `gnu_ubuntu`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compiler family (e.g. `gnu`, `cray`).
    #[must_use]
    pub fn cmp(&self) -> &str {
        &self.cmp
    }

    /// Root installation directory.
    #[must_use]
    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    /// Root build directory.
    #[must_use]
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Defined value of a variable.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key)
    }

    /// All variable definitions.
    #[must_use]
    pub const fn vars(&self) -> &Env {
        &self.vars
    }

    /// Logs every definition at info level.
    pub fn log_summary(&self) {
        info!(environment = %self.name, cmp = %self.cmp, "Environment variables:");
        for (key, entry) in self.vars.iter() {
            match entry.flags() {
                EnvFlags::Replace => info!("  {key}={}", entry.value()),
                EnvFlags::Prepend => info!("  {key}={}:${key}", entry.value()),
            }
        }
    }

    /// Copies every definition into the live process environment.
    ///
    /// Prepend entries are combined with the current value. Only the first
    /// call has an effect; later calls log a warning and return `false`.
    pub fn apply(&self) -> bool {
        if APPLIED.swap(true, Ordering::SeqCst) {
            warn!("Environment already applied to this process, ignoring");
            return false;
        }

        let resolved = self.vars.resolved(|key| std::env::var(key).ok());
        for (key, value) in &resolved {
            debug!(key = %key, value = %value, "set");
            // SAFETY: called from the single-threaded entry point before any
            // child process or blocking task is spawned, so no other thread
            // reads or writes the environment concurrently.
            unsafe {
                std::env::set_var(key, value);
            }
        }
        true
    }
}

/// Joins `<dir>/<subdir>` for each dependency that has a directory defined.
fn joined_subdirs(vars: &Env, dependencies: &[&str], subdir: &str) -> Option<String> {
    let dirs: Vec<String> = dependencies
        .iter()
        .filter_map(|dep| vars.get(&env_key(dep)))
        .map(|dir| Path::new(dir).join(subdir).display().to_string())
        .collect();
    (!dirs.is_empty()).then(|| dirs.join(super::types::PATH_SEPARATOR))
}
