// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and management.
//!
//! ```text
//! ProcessBuilder::which("make")
//!   .args() .cwd() .env_var() .env_remove() .capture_stdout()
//!   .run()
//!       --> tokio::process::Command (inherits the applied environment)
//!           stdout/stderr reader tasks, lines forwarded to debug log
//!       --> ProcessOutput { exit_code, stdout, stderr }
//!       --> ProcessError::CommandFailed { command, code, output_tail }
//! ```

pub mod builder;
mod io;
mod runner;

pub use builder::{ProcessBuilder, ProcessFlags, ProcessOutput, StreamFlags};
