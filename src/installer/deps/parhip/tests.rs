// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;
use crate::installer::deps::test_support::context;
use crate::installer::tools::fetch::GitRef;

#[test]
fn test_source_tag() {
    let dir = tempfile::tempdir().unwrap();
    let installer = ParhipInstaller::new(context(dir.path(), NAME, ""));

    let source = installer.source();
    assert_eq!(source.repository(), Some("https://github.com/KaHIP/KaHIP.git"));
    assert_eq!(source.reference(), &GitRef::Branch("v3.16".to_string()));
}

#[test]
fn test_configure_is_release_build() {
    let dir = tempfile::tempdir().unwrap();
    let installer = ParhipInstaller::new(context(dir.path(), NAME, ""));

    let args = installer.configure_tool().args_for_operation().unwrap();
    assert!(args.contains(&"-DCMAKE_BUILD_TYPE=Release".to_string()));
    assert!(args.contains(&"-DCMAKE_C_COMPILER=mpicc".to_string()));
    let prefix = dir.path().join("install/parhip-gnu");
    assert!(args.contains(&format!("-DCMAKE_INSTALL_PREFIX={}", prefix.display())));
}
