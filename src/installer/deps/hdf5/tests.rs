// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;
use crate::installer::deps::test_support::context;
use crate::installer::tools::fetch::GitRef;

#[test]
fn test_source_uses_version_tag() {
    let dir = tempfile::tempdir().unwrap();
    let installer = Hdf5Installer::new(context(
        dir.path(),
        NAME,
        "dependencies:\n  hdf5: {version: '1.14.5'}\n",
    ));

    let source = installer.source();
    assert_eq!(source.repository(), Some("https://github.com/HDFGroup/hdf5.git"));
    assert_eq!(source.reference(), &GitRef::Branch("hdf5_1.14.5".to_string()));
    assert_eq!(
        source.archive_url(),
        Some("https://github.com/HDFGroup/hdf5/archive/refs/tags/hdf5_1.14.5.tar.gz")
    );
}

#[test]
fn test_source_defaults_version() {
    let dir = tempfile::tempdir().unwrap();
    let installer = Hdf5Installer::new(context(dir.path(), NAME, ""));

    assert_eq!(
        installer.source().reference(),
        &GitRef::Branch(format!("hdf5_{DEFAULT_VERSION}"))
    );
}

#[test]
fn test_configure_args_default_options() {
    let dir = tempfile::tempdir().unwrap();
    let installer = Hdf5Installer::new(context(
        dir.path(),
        NAME,
        "dependencies:\n  hdf5: {version: '1.14.4.3'}\n",
    ));

    let prefix = dir.path().join("install/hdf5-gnu-v1.14.4.3");
    assert_eq!(
        installer.configure_args(),
        [
            format!("--prefix={}", prefix.display()),
            "CC=mpicc".to_string(),
            "CXX=mpicxx".to_string(),
            "FC=mpifort".to_string(),
            "--enable-parallel".to_string(),
        ]
    );
}

#[test]
fn test_configure_options_replace_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let installer = Hdf5Installer::new(context(
        dir.path(),
        NAME,
        "cc: cc\ndependencies:\n  hdf5: {configure_options: [--enable-fortran, --enable-parallel]}\n",
    ));

    let args = installer.configure_args();
    assert!(args.contains(&"CC=cc".to_string()));
    assert_eq!(args[args.len() - 2..], ["--enable-fortran", "--enable-parallel"]);
}
