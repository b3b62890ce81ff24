// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities for staging sources and installing artifacts.
//!
//! ```text
//! copy:  copy_dir_contents_async()     recursive directory copy
//!        copy_matching_files_async()   top-level files matching a wax glob
//! dirs:  ensure_dir()                  create_dir_all with path context
//!        reset_dir()                   remove then recreate
//!        remove_dir_if_exists()        cleanup helper
//!        is_non_empty_dir()            install verification
//! ```

pub mod copy;
pub mod dirs;
