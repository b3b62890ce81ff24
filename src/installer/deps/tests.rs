// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::test_support::context;
use super::*;

#[test]
fn test_default_installation_order() {
    assert_eq!(
        DEFAULT_INSTALLATION_ORDER,
        [
            "hdf5",
            "adios2",
            "petsc",
            "parmetis",
            "parhip",
            "rcm_f90",
            "fyaml_c",
            "makedepf90",
            "python_deps"
        ]
    );
}

#[test]
fn test_github_urls() {
    assert_eq!(github("KaHIP/KaHIP"), "https://github.com/KaHIP/KaHIP.git");
    assert_eq!(
        github_tag_archive("HDFGroup/hdf5", "hdf5_1.14.4.3"),
        "https://github.com/HDFGroup/hdf5/archive/refs/tags/hdf5_1.14.4.3.tar.gz"
    );
}

#[test]
fn test_cmake_with_compilers() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path(), "demo", "cc: gcc\ncxx: g++\nfc: gfortran\n");

    let args = with_compilers(cmake(&ctx), &ctx)
        .configure_op()
        .args_for_operation()
        .unwrap();

    let source = dir.path().join("build/demo");
    let prefix = dir.path().join("install/demo-gnu");
    assert_eq!(
        args,
        [
            "-S".to_string(),
            source.display().to_string(),
            "-B".to_string(),
            source.join("build").display().to_string(),
            "-DCMAKE_CXX_COMPILER=g++".to_string(),
            "-DCMAKE_C_COMPILER=gcc".to_string(),
            "-DCMAKE_Fortran_COMPILER=gfortran".to_string(),
            format!("-DCMAKE_INSTALL_PREFIX={}", prefix.display()),
        ]
    );
}

#[test]
fn test_parallel_make_uses_configured_jobs() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path(), "demo", "");

    assert_eq!(parallel_make(&ctx, ctx.source_dir()).args(), ["-j8"]);
}

#[test]
fn test_every_source_has_a_download_fallback() {
    use crate::installer::tools::fetch::{RetrievalMethod, SourceSpec};

    let dir = tempfile::tempdir().unwrap();
    let ctx = |name| context(dir.path(), name, "");
    let mut sources: Vec<(String, SourceSpec)> = vec![
        ("hdf5".into(), Hdf5Installer::new(ctx(hdf5::NAME)).source()),
        ("adios2".into(), Adios2Installer::new(ctx(adios2::NAME)).source()),
        ("petsc".into(), PetscInstaller::new(ctx(petsc::NAME)).source()),
        ("parhip".into(), ParhipInstaller::new(ctx(parhip::NAME)).source()),
        ("fyaml_c".into(), FyamlCInstaller::new(ctx(fyaml_c::NAME)).source()),
        ("rcm_f90".into(), RcmF90Installer::source()),
        ("makedepf90".into(), Makedepf90Installer::source()),
    ];
    sources.extend(
        parmetis::Component::ALL
            .iter()
            .map(|&component| (format!("{component:?}"), component.source())),
    );

    for (name, source) in sources {
        let methods: Vec<_> = RetrievalMethod::ALL
            .into_iter()
            .filter(|&method| source.supports(method))
            .collect();
        assert!(
            methods.contains(&RetrievalMethod::Git),
            "{name} has no git source"
        );
        assert!(
            methods.iter().any(|&method| method != RetrievalMethod::Git),
            "{name} can only be cloned: {methods:?}"
        );
    }
}

#[test]
fn test_github_archive_url() {
    assert_eq!(
        github_archive("KarypisLab/METIS", "refs/heads/master"),
        "https://github.com/KarypisLab/METIS/archive/refs/heads/master.tar.gz"
    );
}
