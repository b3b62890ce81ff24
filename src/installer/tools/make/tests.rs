// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigureScript, MakeTool};
use crate::installer::tools::Tool;
use std::path::Path;

#[test]
fn test_make_args_order() {
    let config = MakeTool::new("/b/metis")
        .target("config")
        .variable("shared", "1")
        .variable("cc", "mpicc");
    let parallel = MakeTool::new("/b/rcm").jobs(16).variable("CMP", "gnu");
    let install = MakeTool::new("/b/hdf5").target("install");

    assert_eq!(config.args(), ["config", "shared=1", "cc=mpicc"]);
    assert_eq!(parallel.args(), ["-j16", "CMP=gnu"]);
    assert_eq!(install.args(), ["install"]);
    assert_eq!(install.name(), "make");
}

#[test]
fn test_configure_script_paths() {
    let configure = ConfigureScript::new("/b/hdf5").arg("--prefix=/opt/hdf5");
    let autogen = ConfigureScript::new("/b/hdf5").script("autogen.sh");

    assert_eq!(configure.script_path(), Path::new("/b/hdf5/configure"));
    assert_eq!(configure.args_slice(), ["--prefix=/opt/hdf5"]);
    assert_eq!(autogen.script_path(), Path::new("/b/hdf5/autogen.sh"));
    assert_eq!(autogen.name(), "autogen.sh");
    assert!(!configure.exists());
}
