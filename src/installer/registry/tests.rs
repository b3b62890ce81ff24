// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;
use crate::installer::deps::DEFAULT_INSTALLATION_ORDER;
use crate::installer::deps::test_support::context;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_builtin_registers_default_order() {
    let registry = InstallerRegistry::builtin();
    assert_eq!(registry.names(), DEFAULT_INSTALLATION_ORDER);
}

#[test]
fn test_validate_accepts_known_names() {
    let registry = InstallerRegistry::builtin();
    assert!(registry.validate(&names(&["petsc", "hdf5"])).is_ok());
    assert!(registry.validate(&[]).is_ok());
}

#[test]
fn test_validate_reports_first_unknown() {
    let registry = InstallerRegistry::builtin();

    let err = registry
        .validate(&names(&["hdf5", "frobnicate", "nope"]))
        .unwrap_err();

    match err {
        InstallError::UnknownDependency { name, available } => {
            assert_eq!(name, "frobnicate");
            assert_eq!(available, DEFAULT_INSTALLATION_ORDER);
        }
        other => panic!("expected UnknownDependency, got {other:?}"),
    }
}

#[test]
fn test_create_uses_context_name() {
    let dir = tempfile::tempdir().unwrap();
    let registry = InstallerRegistry::builtin();

    let installer = registry.create(context(dir.path(), "rcm_f90", "")).unwrap();
    assert_eq!(installer.name(), "rcm_f90");
    assert!(registry.create(context(dir.path(), "frobnicate", "")).is_none());
}

#[test]
fn test_register_extends_registry() {
    let mut registry = InstallerRegistry::new();
    assert!(!registry.contains("hdf5"));

    registry.register("custom", |ctx| Box::new(Hdf5Installer::new(ctx)));

    assert!(registry.contains("custom"));
    assert_eq!(registry.names(), ["custom"]);
}
