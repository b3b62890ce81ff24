// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment, process and host management.
//!
//! ```text
//!              core
//!               |
//!     +---------+---------+
//!     |         |         |
//!     v         v         v
//!    env     process    system
//!     |         |         |
//! Environment Builder  detect_environment
//!  Env/Shell  Output   HostFacts
//! ```

pub mod env;
pub mod process;
pub mod system;
