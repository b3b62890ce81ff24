// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;
use crate::installer::deps::test_support::context;
use crate::installer::tools::fetch::GitRef;
use std::fs;

#[test]
fn test_source_default_branch() {
    let source = RcmF90Installer::source();
    assert_eq!(source.repository(), Some("https://github.com/asimovpp/RCM-f90.git"));
    assert_eq!(source.reference(), &GitRef::Default);
    assert_eq!(
        source.archive_url(),
        Some("https://github.com/asimovpp/RCM-f90/archive/HEAD.tar.gz")
    );
}

#[test]
fn test_build_passes_compiler_family() {
    let dir = tempfile::tempdir().unwrap();
    let installer = RcmF90Installer::new(context(dir.path(), NAME, ""));

    assert_eq!(installer.build_tool().args(), ["-j8", "CMP=gnu"]);
}

#[tokio::test]
async fn test_copy_artifacts_replaces_previous_install() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("src");
    fs::create_dir_all(source.join("lib")).unwrap();
    fs::create_dir_all(source.join("include")).unwrap();
    fs::write(source.join("lib/librcm.a"), "new").unwrap();
    fs::write(source.join("include/rcm.mod"), "mod").unwrap();
    let prefix = dir.path().join("prefix");
    fs::create_dir_all(prefix.join("lib")).unwrap();
    fs::write(prefix.join("lib/stale.a"), "old").unwrap();

    RcmF90Installer::copy_artifacts(&source, &prefix).await.unwrap();

    assert_eq!(fs::read_to_string(prefix.join("lib/librcm.a")).unwrap(), "new");
    assert!(prefix.join("include/rcm.mod").is_file());
    assert!(!prefix.join("lib/stale.a").exists());
}
