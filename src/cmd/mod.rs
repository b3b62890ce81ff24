// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> config::load_session --> cmd::run_* handlers
//!   install, env, list, options
//! ```

pub mod config;
pub mod env;
pub mod install;
pub mod list;
