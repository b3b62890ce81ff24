// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   copy:  copy_dir_contents_async(), copy_matching_files_async()
//!   dirs:  ensure_dir(), reset_dir(), remove_dir_if_exists(), is_non_empty_dir()
//! ```

pub mod fs;
