// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use std::path::Path;

use venvctl::config::Config;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_minimal() {
    let toml = r#"
[paths]
root = "/data/envs"
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(config.paths.root().unwrap(), Path::new("/data/envs"));
}

#[test]
fn config_parse_full() {
    let toml = r#"
[paths]
root = "/data/envs"

[tools]
spyder = "/opt/spyder/bin/spyder"

[pip]
upgrade = false
no_cache = false
extra_args = ["--quiet"]
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(
        config.tools.spyder.as_deref(),
        Some(Path::new("/opt/spyder/bin/spyder"))
    );
    assert!(!config.pip.upgrade);
    assert!(!config.pip.no_cache);
    assert_eq!(config.pip.extra_args, vec!["--quiet"]);
}

#[test]
fn config_unknown_section_rejected() {
    let toml = r#"
[nonsense]
key = "value"
"#;
    assert!(Config::parse(toml).is_err());
}

// =============================================================================
// Root Resolution
// =============================================================================

#[test]
fn config_root_missing_error() {
    let config = Config::parse("[pip]\nupgrade = true\n").unwrap();
    assert!(config.paths.root().is_err());
}

// =============================================================================
// Builder Pattern
// =============================================================================

#[test]
fn config_builder_layered() {
    // Base layer
    let config = Config::builder()
        .add_toml_str(
            r#"
[paths]
root = "/base/envs"

[pip]
upgrade = true
"#,
        )
        // Override layer
        .add_toml_str(
            r#"
[paths]
root = "/override/envs"
"#,
        )
        .build()
        .unwrap();

    assert_eq!(config.paths.root().unwrap(), Path::new("/override/envs"));
    assert!(config.pip.upgrade);
}

#[test]
fn config_builder_set_override() {
    let config = Config::builder()
        .add_toml_str(
            r#"
[paths]
root = "/from/file"
"#,
        )
        .set("paths.root", "/from/cli")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.paths.root().unwrap(), Path::new("/from/cli"));
}

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_from_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("venvctl.toml");
    std::fs::write(&path, "[paths]\nroot = \"/file/envs\"\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.paths.root().unwrap(), Path::new("/file/envs"));
}

#[test]
fn config_missing_required_file_error() {
    let result = Config::from_file("/no/such/venvctl.toml");
    assert!(result.is_err());
}

#[test]
fn config_optional_file_missing_is_fine() {
    let config = Config::builder()
        .add_toml_file_optional("/no/such/venvctl.toml")
        .build()
        .unwrap();
    assert!(config.paths.root().is_err());
}

// =============================================================================
// Default Values
// =============================================================================

#[test]
fn config_default_values() {
    let config = Config::default();
    assert!(config.paths.root.is_none());
    assert!(config.tools.spyder.is_none());
    assert!(config.pip.upgrade);
    assert!(config.pip.no_cache);
    assert!(config.pip.extra_args.is_empty());
}

// =============================================================================
// Pip Invocation
// =============================================================================

#[test]
fn config_pip_install_args() {
    let config = Config::default();
    assert_eq!(
        config.pip.install_args(),
        vec!["-m", "pip", "install", "--upgrade", "--no-cache-dir"]
    );

    let toml = r#"
[pip]
upgrade = false
no_cache = false
extra_args = ["--quiet"]
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(config.pip.install_args(), vec!["-m", "pip", "install", "--quiet"]);
}
