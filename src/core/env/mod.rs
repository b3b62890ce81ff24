// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! ConfigDocument ──► Environment::build ──► Env (BTreeMap<String, EnvEntry>)
//!                                             │
//!                      ┌──────────────────────┼────────────────────┐
//!                      ▼                      ▼                    ▼
//!                  apply()          shell::render(Sh|Csh|Json)   ProcessBuilder
//!              (live process)          (sourceable output)      (child env)
//! ```
//!
//! - **Strings only**: every value is stringified when the environment is built
//! - **Pure build**: path-list entries are stored as prepends and only
//!   resolved against the inherited value when applied or rendered

pub mod container;
pub mod environment;
pub mod shell;
pub mod types;


pub use container::Env;
pub use environment::Environment;
