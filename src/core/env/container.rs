// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable container.
//!
//! # Architecture
//!
//! ```text
//! Env
//!   vars: BTreeMap<String, EnvEntry>   (sorted, deterministic output)
//!   set / set_with_flags / prepend_path
//!   resolve(key, inherited) / resolved(lookup)
//! ```

use super::types::{EnvEntry, EnvFlags, PATH_SEPARATOR};
use std::collections::BTreeMap;

/// An ordered set of environment variable definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: BTreeMap<String, EnvEntry>,
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Sets an environment variable, replacing any previous definition.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.set_with_flags(key, value, EnvFlags::Replace)
    }

    /// Sets an environment variable with specific flags.
    ///
    /// Prepending to an existing definition places the new value in front of
    /// the old one and keeps the old entry's flags.
    pub fn set_with_flags(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        flags: EnvFlags,
    ) -> &mut Self {
        let key = key.into();
        let value = value.into();

        match (flags, self.vars.get_mut(&key)) {
            (EnvFlags::Prepend, Some(existing)) => {
                let combined = format!("{value}{PATH_SEPARATOR}{}", existing.value());
                *existing.value_mut() = combined;
            }
            _ => {
                self.vars.insert(key, EnvEntry::new(value, flags));
            }
        }
        self
    }

    /// Prepends a directory to `PATH`.
    pub fn prepend_path(&mut self, dir: impl Into<String>) -> &mut Self {
        self.set_with_flags("PATH", dir, EnvFlags::Prepend)
    }

    /// Returns the defined value of a variable, without inherited parts.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(EnvEntry::value)
    }

    /// Returns the full entry for a variable.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&EnvEntry> {
        self.vars.get(key)
    }

    /// Returns true if the variable is defined.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Iterates over all definitions in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnvEntry)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of defined variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if no variables are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Resolves every entry against inherited values from `lookup`.
    pub fn resolved<F>(&self, lookup: F) -> BTreeMap<String, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.vars
            .iter()
            .map(|(key, entry)| {
                let inherited = match entry.flags() {
                    EnvFlags::Prepend => lookup(key),
                    EnvFlags::Replace => None,
                };
                (key.clone(), entry.resolve(inherited.as_deref()))
            })
            .collect()
    }
}
