// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;
use crate::installer::deps::test_support::context;

#[test]
fn test_default_packages() {
    let dir = tempfile::tempdir().unwrap();
    let installer = PythonDepsInstaller::new(context(dir.path(), NAME, ""));

    assert_eq!(installer.packages(), ["pyyaml", "lit", "flinter", "fprettify"]);
}

#[test]
fn test_configured_packages_replace_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let installer = PythonDepsInstaller::new(context(
        dir.path(),
        NAME,
        "dependencies:\n  python_deps: {packages: [fypp, numpy]}\n",
    ));

    assert_eq!(installer.packages(), ["fypp", "numpy"]);
}

#[test]
fn test_activation_script_contents() {
    let venv = Path::new("/opt/ccs/python_deps-gnu");

    insta::assert_snapshot!(activate_sh(venv), @r#"
    #!/bin/bash
    # Add Python venv bin directory to PATH
    export PATH="/opt/ccs/python_deps-gnu/bin:$PATH"
    "#);
    insta::assert_snapshot!(activate_csh(venv), @r#"
    #!/bin/csh
    # Add Python venv bin directory to PATH
    setenv PATH "/opt/ccs/python_deps-gnu/bin:$PATH"
    "#);
}

#[cfg(unix)]
#[tokio::test]
async fn test_activation_scripts_are_executable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    PythonDepsInstaller::write_activation_scripts(dir.path())
        .await
        .unwrap();

    for name in ["activate.sh", "activate.csh"] {
        let mode = std::fs::metadata(dir.path().join(name))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755, "{name}");
    }
}

#[tokio::test]
async fn test_cleanup_keeps_install_dir() {
    let dir = tempfile::tempdir().unwrap();
    let installer = PythonDepsInstaller::new(context(dir.path(), NAME, ""));
    std::fs::create_dir_all(installer.context().source_dir()).unwrap();

    installer.cleanup().await.unwrap();

    assert!(installer.context().source_dir().exists());
}
