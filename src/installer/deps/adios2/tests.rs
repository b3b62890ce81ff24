// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;
use crate::installer::deps::test_support::context;
use crate::installer::tools::fetch::GitRef;

fn definitions(args: &[String]) -> Vec<&str> {
    args.iter()
        .filter_map(|a| a.strip_prefix("-D"))
        .collect()
}

#[test]
fn test_source_tag() {
    let dir = tempfile::tempdir().unwrap();
    let installer = Adios2Installer::new(context(dir.path(), NAME, ""));

    let source = installer.source();
    assert_eq!(source.repository(), Some("https://github.com/ornladios/ADIOS2.git"));
    assert_eq!(source.reference(), &GitRef::Branch("v2.10.2".to_string()));
}

#[test]
fn test_configure_definitions() {
    let dir = tempfile::tempdir().unwrap();
    let installer = Adios2Installer::new(context(
        dir.path(),
        NAME,
        "dependencies:\n  hdf5: {install_dir: /opt/hdf5}\n  adios2: {version: '2.10.2'}\n",
    ));

    let args = installer.configure_tool().args_for_operation().unwrap();
    let defs = definitions(&args);

    for expected in [
        "ADIOS2_USE_SST=OFF",
        "ADIOS2_USE_Fortran=ON",
        "ADIOS2_USE_MPI=ON",
        "ADIOS2_USE_HDF5=ON",
        "ADIOS2_USE_Python=OFF",
        "ADIOS2_USE_ZeroMQ=OFF",
        "BUILD_SHARED_LIBS=ON",
        "HDF5_ROOT=/opt/hdf5",
        "CMAKE_C_COMPILER=mpicc",
        "CMAKE_Fortran_COMPILER=mpifort",
    ] {
        assert!(defs.contains(&expected), "missing {expected} in {args:?}");
    }
    let prefix = dir.path().join("install/adios2-gnu-v2.10.2");
    assert!(defs.contains(&format!("CMAKE_INSTALL_PREFIX={}", prefix.display()).as_str()));
}

#[test]
fn test_configure_options_are_appended() {
    let dir = tempfile::tempdir().unwrap();
    let installer = Adios2Installer::new(context(
        dir.path(),
        NAME,
        "dependencies:\n  adios2: {configure_options: [-DADIOS2_USE_SST=ON]}\n",
    ));

    let args = installer.configure_tool().args_for_operation().unwrap();
    assert_eq!(args.last().map(String::as_str), Some("-DADIOS2_USE_SST=ON"));
}

#[test]
fn test_build_and_install_use_build_dir() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path(), NAME, "");
    let build = dir.path().join("build/adios2/build").display().to_string();

    assert_eq!(
        cmake(&ctx).build_op().args_for_operation().unwrap(),
        ["--build".to_string(), build.clone(), "--parallel".to_string(), "8".to_string()]
    );
    assert_eq!(
        cmake(&ctx).install_op().args_for_operation().unwrap()[..2],
        ["--install".to_string(), build]
    );
}
