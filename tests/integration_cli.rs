// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use std::path::PathBuf;
use venvctl::cli::{Cli, Command};

// =============================================================================
// Activate Command
// =============================================================================

#[test]
fn cli_activate() {
    let cli = Cli::try_parse_from(["venvctl", "activate", "myenv"]).unwrap();
    match cli.command {
        Some(Command::Activate(args)) => {
            assert_eq!(args.environment_name, "myenv");
            assert!(!args.spawn_shell);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn cli_activate_spawn_shell() {
    let cli = Cli::try_parse_from(["venvctl", "activate", "myenv", "--spawn-shell"]).unwrap();
    match cli.command {
        Some(Command::Activate(args)) => assert!(args.spawn_shell),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn cli_activate_requires_name() {
    let result = Cli::try_parse_from(["venvctl", "activate"]);
    assert!(result.is_err());
}

// =============================================================================
// Delete Command
// =============================================================================

#[test]
fn cli_delete() {
    let cli = Cli::try_parse_from(["venvctl", "delete", "old"]).unwrap();
    match cli.command {
        Some(Command::Delete(args)) => assert_eq!(args.environment_name, "old"),
        other => panic!("unexpected command: {other:?}"),
    }
}

// =============================================================================
// Install Command
// =============================================================================

#[test]
fn cli_install_comma_separated_packages() {
    let cli = Cli::try_parse_from(["venvctl", "install", "numpy,pandas,scipy"]).unwrap();
    match cli.command {
        Some(Command::Install(args)) => {
            assert_eq!(args.packages, vec!["numpy", "pandas", "scipy"]);
            assert!(args.environment.is_none());
            assert!(!args.activate);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn cli_install_with_environment_and_activate() {
    let cli = Cli::try_parse_from(["venvctl", "install", "numpy", "-e", "myenv", "-a"]).unwrap();
    match cli.command {
        Some(Command::Install(args)) => {
            assert_eq!(args.environment.as_deref(), Some("myenv"));
            assert!(args.activate);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn cli_install_requires_packages() {
    let result = Cli::try_parse_from(["venvctl", "install"]);
    assert!(result.is_err());
}

// =============================================================================
// Scripts Command
// =============================================================================

#[test]
fn cli_scripts_list() {
    let cli = Cli::try_parse_from(["venvctl", "scripts"]).unwrap();
    match cli.command {
        Some(Command::Scripts(args)) => assert!(args.path.is_none()),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn cli_scripts_path_lookup() {
    let cli = Cli::try_parse_from(["venvctl", "scripts", "--path", "activate"]).unwrap();
    match cli.command {
        Some(Command::Scripts(args)) => assert_eq!(args.path.as_deref(), Some("activate")),
        other => panic!("unexpected command: {other:?}"),
    }
}

// =============================================================================
// Spyder Command
// =============================================================================

#[test]
fn cli_spyder() {
    let cli = Cli::try_parse_from(["venvctl", "spyder", "myenv"]).unwrap();
    match cli.command {
        Some(Command::Spyder(args)) => assert_eq!(args.environment_name, "myenv"),
        other => panic!("unexpected command: {other:?}"),
    }
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_root() {
    let cli = Cli::try_parse_from(["venvctl", "-r", "/data/envs", "activate", "myenv"]).unwrap();
    assert_eq!(cli.global.root, Some(PathBuf::from("/data/envs")));
}

#[test]
fn cli_global_options_multiple_configs() {
    let cli = Cli::try_parse_from([
        "venvctl",
        "-c",
        "base.toml",
        "-c",
        "override.toml",
        "options",
    ])
    .unwrap();
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("base.toml"), PathBuf::from("override.toml")]
    );
}

#[test]
fn cli_global_options_log_levels() {
    let cli = Cli::try_parse_from([
        "venvctl",
        "-l",
        "5",
        "--file-log-level",
        "3",
        "activate",
        "myenv",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.file_log_level, Some(3));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn cli_invalid_log_level() {
    // Log level must be 0-5
    let result = Cli::try_parse_from(["venvctl", "-l", "10", "activate", "myenv"]);
    assert!(result.is_err());
}

#[test]
fn cli_unknown_command() {
    let result = Cli::try_parse_from(["venvctl", "frobnicate"]);
    assert!(result.is_err());
}
