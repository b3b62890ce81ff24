// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Installer registry mapping dependency names to factories.
//!
//! ```text
//! "hdf5"   --> |ctx| Box::new(Hdf5Installer::new(ctx))
//! "petsc"  --> |ctx| Box::new(PetscInstaller::new(ctx))
//! ...
//! validate(["hdf5", "frobnicate"]) --> UnknownDependency { "frobnicate", available }
//! ```

use std::sync::Arc;

use indexmap::IndexMap;

use super::deps::{
    Adios2Installer, FyamlCInstaller, Hdf5Installer, Makedepf90Installer, ParhipInstaller,
    ParmetisInstaller, PetscInstaller, PythonDepsInstaller, RcmF90Installer, adios2, fyaml_c,
    hdf5, makedepf90, parhip, parmetis, petsc, python_deps, rcm_f90,
};
use super::{InstallContext, Installer};
use crate::error::InstallError;

/// Builds an installer for one run.
pub type InstallerFactory = Arc<dyn Fn(InstallContext) -> Box<dyn Installer> + Send + Sync>;

/// Name to factory map, in registration order.
#[derive(Clone, Default)]
pub struct InstallerRegistry {
    factories: IndexMap<String, InstallerFactory>,
}

impl std::fmt::Debug for InstallerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallerRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl InstallerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in installer.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(hdf5::NAME, |ctx| Box::new(Hdf5Installer::new(ctx)));
        registry.register(adios2::NAME, |ctx| Box::new(Adios2Installer::new(ctx)));
        registry.register(petsc::NAME, |ctx| Box::new(PetscInstaller::new(ctx)));
        registry.register(parmetis::NAME, |ctx| Box::new(ParmetisInstaller::new(ctx)));
        registry.register(parhip::NAME, |ctx| Box::new(ParhipInstaller::new(ctx)));
        registry.register(rcm_f90::NAME, |ctx| Box::new(RcmF90Installer::new(ctx)));
        registry.register(fyaml_c::NAME, |ctx| Box::new(FyamlCInstaller::new(ctx)));
        registry.register(makedepf90::NAME, |ctx| {
            Box::new(Makedepf90Installer::new(ctx))
        });
        registry.register(python_deps::NAME, |ctx| {
            Box::new(PythonDepsInstaller::new(ctx))
        });
        registry
    }

    /// Registers a factory, replacing any previous one for `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(InstallContext) -> Box<dyn Installer> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }

    /// Instantiates the installer for `ctx.name()`.
    #[must_use]
    pub fn create(&self, ctx: InstallContext) -> Option<Box<dyn Installer>> {
        self.factories.get(ctx.name()).map(|factory| factory(ctx))
    }

    /// Checks that every name is registered.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::UnknownDependency`] for the first unknown name.
    pub fn validate(&self, names: &[String]) -> Result<(), InstallError> {
        match names.iter().find(|name| !self.contains(name)) {
            Some(unknown) => Err(InstallError::UnknownDependency {
                name: unknown.clone(),
                available: self.names(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests;
