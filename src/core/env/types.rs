// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! # Architecture
//!
//! ```text
//! EnvFlags: Replace | Prepend
//! EnvEntry: { value, flags }
//!   Replace  -> value
//!   Prepend  -> value + ":" + inherited (if any)
//! ```

/// Separator for path-list variables.
pub const PATH_SEPARATOR: &str = ":";

/// How an entry combines with a value inherited from the parent process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvFlags {
    /// Replace the inherited value (default)
    #[default]
    Replace,
    /// Prepend to the inherited value as a path list
    Prepend,
}

/// One environment variable definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    value: String,
    flags: EnvFlags,
}

impl EnvEntry {
    pub(super) const fn new(value: String, flags: EnvFlags) -> Self {
        Self { value, flags }
    }

    /// The value as defined, before combining with an inherited value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// How this entry combines with an inherited value.
    #[must_use]
    pub const fn flags(&self) -> EnvFlags {
        self.flags
    }

    pub(super) const fn value_mut(&mut self) -> &mut String {
        &mut self.value
    }

    /// Resolves the final value given what the parent process holds.
    #[must_use]
    pub fn resolve(&self, inherited: Option<&str>) -> String {
        match (self.flags, inherited) {
            (EnvFlags::Prepend, Some(existing)) if !existing.is_empty() => {
                format!("{}{PATH_SEPARATOR}{existing}", self.value)
            }
            _ => self.value.clone(),
        }
    }
}
