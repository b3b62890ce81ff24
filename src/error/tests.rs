// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, DepsError, DepsResult, InstallError, ProcessError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::ConfigurationMissing {
        path: "config/default_config.yml".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"base configuration not found: config/default_config.yml");
}

#[test]
fn test_unknown_dependency_lists_available() {
    let err = InstallError::UnknownDependency {
        name: "frobnicate".to_string(),
        available: vec!["hdf5".to_string(), "petsc".to_string()],
    };
    insta::assert_snapshot!(err.to_string(), @"unknown dependency 'frobnicate' (available: hdf5, petsc)");
}

#[test]
fn test_retrieval_failed_joins_attempts() {
    let err = InstallError::RetrievalFailed {
        name: "hdf5".to_string(),
        attempts: vec!["git: not found".to_string(), "curl: exit 22".to_string()],
    };
    assert_eq!(
        err.to_string(),
        "could not retrieve sources for 'hdf5': git: not found; curl: exit 22"
    );
}

#[test]
fn test_boxed_conversion() {
    let err: DepsError = ProcessError::CommandFailed {
        command: "make -j16".to_string(),
        code: 2,
        output_tail: Vec::new(),
    }
    .into();
    assert!(matches!(err, DepsError::Process(_)));
    assert_eq!(
        err.to_string(),
        "process error: command 'make -j16' failed with exit code 2"
    );
}

#[test]
fn test_deps_error_size() {
    // Box<str> variants are 16 bytes (fat pointer) plus discriminant
    let size = std::mem::size_of::<DepsError>();
    assert!(size <= 24, "DepsError is {size} bytes, expected <= 24");
}

#[test]
fn test_deps_result_size() {
    let size = std::mem::size_of::<DepsResult<()>>();
    assert!(size <= 24, "DepsResult<()> is {size} bytes, expected <= 24");
}
