// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{CmakeOperation, CmakeTool};

#[test]
fn test_cmake_builder_defaults() {
    let tool = CmakeTool::new();
    assert_eq!(tool.operation, CmakeOperation::Configure);
    assert!(tool.args_for_operation().is_err());
}

#[test]
fn test_cmake_configure_args() {
    let tool = CmakeTool::new()
        .source_dir("/build/parhip")
        .build_dir("/build/parhip/build")
        .install_prefix("/opt/parhip")
        .build_type("Release")
        .definition("CMAKE_C_COMPILER", "mpicc")
        .args(["-DUSER_FLAG=ON"])
        .configure_op();

    insta::assert_debug_snapshot!(tool.args_for_operation().unwrap(), @r#"
    [
        "-S",
        "/build/parhip",
        "-B",
        "/build/parhip/build",
        "-DCMAKE_BUILD_TYPE=Release",
        "-DCMAKE_C_COMPILER=mpicc",
        "-DCMAKE_INSTALL_PREFIX=/opt/parhip",
        "-DUSER_FLAG=ON",
    ]
    "#);
}

#[test]
fn test_cmake_explicit_definition_wins_over_prefix() {
    let tool = CmakeTool::new()
        .source_dir("/s")
        .build_dir("/b")
        .install_prefix("/opt/a")
        .definition("CMAKE_INSTALL_PREFIX", "/opt/b");

    let args = tool.args_for_operation().unwrap();
    assert!(args.contains(&"-DCMAKE_INSTALL_PREFIX=/opt/b".to_string()));
    assert!(!args.contains(&"-DCMAKE_INSTALL_PREFIX=/opt/a".to_string()));
}

#[test]
fn test_cmake_build_and_install_args() {
    let build = CmakeTool::new().build_dir("/b").jobs(8).build_op();
    let install = CmakeTool::new().build_dir("/b").install_op();

    assert_eq!(
        build.args_for_operation().unwrap(),
        ["--build", "/b", "--parallel", "8"]
    );
    assert_eq!(install.args_for_operation().unwrap(), ["--install", "/b"]);
}
