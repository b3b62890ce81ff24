// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::GitTool;

#[test]
fn test_git_shallow_branch_clone_args() {
    let tool = GitTool::new()
        .url("https://github.com/HDFGroup/hdf5.git")
        .path("/build/hdf5")
        .branch("hdf5_1.14.4.3")
        .depth(1);

    insta::assert_debug_snapshot!(tool.clone_args().unwrap(), @r#"
    [
        "clone",
        "--depth",
        "1",
        "--branch",
        "hdf5_1.14.4.3",
        "https://github.com/HDFGroup/hdf5.git",
        "/build/hdf5",
    ]
    "#);
    assert!(tool.checkout_args().unwrap().is_none());
}

#[test]
fn test_git_commit_forces_full_clone() {
    let tool = GitTool::new()
        .url("https://github.com/KarypisLab/GKlib.git")
        .path("/build/parmetis/gklib")
        .commit("8bd6bad750b2b0d908")
        .depth(1);

    assert_eq!(
        tool.clone_args().unwrap(),
        [
            "clone",
            "https://github.com/KarypisLab/GKlib.git",
            "/build/parmetis/gklib"
        ]
    );
    assert_eq!(
        tool.checkout_args().unwrap().unwrap(),
        ["-C", "/build/parmetis/gklib", "checkout", "8bd6bad750b2b0d908"]
    );
}

#[test]
fn test_git_missing_url_is_error() {
    let tool = GitTool::new().path("/build/x");
    assert!(tool.clone_args().is_err());
}
