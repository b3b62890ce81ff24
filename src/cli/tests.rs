// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::install::ShellArg;
use crate::cli::{Cli, Command};
use crate::core::env::shell::ShellFormat;
use crate::logging::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["ccs-install"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.global.console_level(), LogLevel::INFO);
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["ccs-install", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_install_dependencies_comma_separated() {
    let cli = Cli::try_parse_from(["ccs-install", "install", "-d", "hdf5,petsc"]).unwrap();
    match cli.command {
        Some(Command::Install(args)) => assert_eq!(args.dependencies, ["hdf5", "petsc"]),
        other => panic!("expected install, got {other:?}"),
    }
}

#[test]
fn test_parse_install_dependencies_repeated() {
    let cli = Cli::try_parse_from([
        "ccs-install",
        "install",
        "--dependencies",
        "parmetis",
        "--dependencies",
        "hdf5",
    ])
    .unwrap();
    match cli.command {
        Some(Command::Install(args)) => assert_eq!(args.dependencies, ["parmetis", "hdf5"]),
        other => panic!("expected install, got {other:?}"),
    }
}

#[test]
fn test_parse_global_options_after_command() {
    let cli = Cli::try_parse_from([
        "ccs-install",
        "env",
        "--env",
        "cray_A2",
        "--install-dir",
        "/opt/ccs",
        "--build-dir",
        "/tmp/b",
        "-c",
        "mine.yml",
    ])
    .unwrap();

    assert_eq!(cli.global.env.as_deref(), Some("cray_A2"));
    assert_eq!(cli.global.config, Some(PathBuf::from("mine.yml")));
    assert_eq!(
        cli.global.to_config_overrides(),
        [
            ("install_dir", "/opt/ccs".to_string()),
            ("build_dir", "/tmp/b".to_string()),
        ]
    );
}

#[test]
fn test_parse_env_shell() {
    let cli = Cli::try_parse_from(["ccs-install", "env", "--shell", "csh"]).unwrap();
    match cli.command {
        Some(Command::Env(args)) => {
            assert_eq!(args.shell, ShellArg::Csh);
            assert_eq!(ShellFormat::from(args.shell), ShellFormat::Csh);
        }
        other => panic!("expected env, got {other:?}"),
    }

    let cli = Cli::try_parse_from(["ccs-install", "env"]).unwrap();
    match cli.command {
        Some(Command::Env(args)) => assert_eq!(args.shell, ShellArg::Sh),
        other => panic!("expected env, got {other:?}"),
    }
}

#[test]
fn test_parse_env_rejects_unknown_shell() {
    assert!(Cli::try_parse_from(["ccs-install", "env", "--shell", "fish"]).is_err());
}

#[test]
fn test_console_level_precedence() {
    let cli = Cli::try_parse_from(["ccs-install", "--debug"]).unwrap();
    assert_eq!(cli.global.console_level(), LogLevel::DEBUG);

    let cli = Cli::try_parse_from(["ccs-install", "--debug", "-l", "1"]).unwrap();
    assert_eq!(cli.global.console_level(), LogLevel::ERROR);
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["ccs-install", "-l", "6"]).is_err());
}

#[test]
fn test_unknown_command_is_error() {
    assert!(Cli::try_parse_from(["ccs-install", "build"]).is_err());
}

#[test]
fn test_parse_dependencies_without_command() {
    let cli = Cli::try_parse_from(["ccs-install", "--dependencies", "hdf5,petsc"]).unwrap();

    assert!(cli.command.is_none());
    let args = cli.install_args().unwrap();
    assert_eq!(args.dependencies, ["hdf5", "petsc"]);
}

#[test]
fn test_install_args_prefer_subcommand_selection() {
    let cli = Cli::try_parse_from(["ccs-install", "-d", "hdf5", "install", "-d", "petsc"]).unwrap();
    assert_eq!(cli.install_args().unwrap().dependencies, ["petsc"]);

    let cli = Cli::try_parse_from(["ccs-install", "-d", "hdf5", "install"]).unwrap();
    assert_eq!(cli.install_args().unwrap().dependencies, ["hdf5"]);

    let cli = Cli::try_parse_from(["ccs-install", "list"]).unwrap();
    assert!(cli.install_args().is_none());
}
