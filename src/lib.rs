// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        install / env / list / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  YAML layers, deep merge  |
//!              '-------------+-------------'
//!                            v
//!                        installer
//!              registry --> runner --> deps
//!                            |       (hdf5, petsc, ..)
//!                            v
//!                          tools
//!             fetch / git / cmake / make / patch
//!                            |
//!                            v
//!                           net
//!                      HTTP download
//!
//!   +--------------------------------------------+
//!   |  core   process, env, system detection     |
//!   +--------------------------------------------+
//!   |  foundation   error, logging, utility      |
//!   +--------------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod installer;
pub mod logging;
pub mod net;
pub mod utility;
