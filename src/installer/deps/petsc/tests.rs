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
    let installer = PetscInstaller::new(context(
        dir.path(),
        NAME,
        "dependencies:\n  petsc: {version: 3.22}\n",
    ));

    assert_eq!(
        installer.source().reference(),
        &GitRef::Branch("v3.22".to_string())
    );
}

#[test]
fn test_configure_args() {
    let dir = tempfile::tempdir().unwrap();
    let installer = PetscInstaller::new(context(
        dir.path(),
        NAME,
        "cc: cc\ncxx: CC\nfc: ftn\ndependencies:\n  petsc: {version: '3.22.2', configure_options: [--with-debugging=0]}\n",
    ));

    let prefix = dir.path().join("install/petsc-gnu-v3.22.2");
    assert_eq!(
        installer.configure_args(),
        [
            "--with-cc=cc".to_string(),
            "--with-cxx=CC".to_string(),
            "--with-fc=ftn".to_string(),
            format!("--prefix={}", prefix.display()),
            "--with-debugging=0".to_string(),
        ]
    );
}

#[test]
fn test_configure_args_default_options() {
    let dir = tempfile::tempdir().unwrap();
    let installer = PetscInstaller::new(context(dir.path(), NAME, ""));

    let args = installer.configure_args();
    assert_eq!(args.len(), 4 + DEFAULT_CONFIGURE_OPTIONS.len());
    assert_eq!(args[4], "--download-fblaslapack=yes");
    assert_eq!(args.last().map(String::as_str), Some("--with-debugging=1"));
}
