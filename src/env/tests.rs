// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::EnvRoot;
use crate::config::Config;
use crate::config::layout::EnvLayout;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates `<root>/<name>` with the interpreter and activation files laid
/// out for the host platform.
fn make_env(root: &Path, name: &str) {
    let layout = EnvLayout::host();
    for rel in [layout.python(), layout.activate()] {
        let path = root.join(name).join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();
    }
}

#[test]
fn test_exists_requires_both_files() {
    let tmp = TempDir::new().unwrap();
    let envs = EnvRoot::new(tmp.path(), EnvLayout::host());

    make_env(tmp.path(), "complete");
    assert!(envs.exists("complete"));

    // Interpreter present but no activation script.
    let python = envs.python("partial");
    fs::create_dir_all(python.parent().unwrap()).unwrap();
    fs::write(&python, "").unwrap();
    assert!(!envs.exists("partial"));

    assert!(!envs.exists("absent"));
}

#[test]
fn test_exists_rejects_directories() {
    let tmp = TempDir::new().unwrap();
    let envs = EnvRoot::new(tmp.path(), EnvLayout::host());

    // Both paths exist but as directories, not regular files.
    fs::create_dir_all(envs.python("dirs")).unwrap();
    fs::create_dir_all(envs.activate("dirs")).unwrap();
    assert!(!envs.exists("dirs"));
}

#[test]
fn test_require_existing_iff_exists() {
    let tmp = TempDir::new().unwrap();
    let envs = EnvRoot::new(tmp.path(), EnvLayout::host());
    make_env(tmp.path(), "myenv");

    assert!(envs.require_existing("myenv").is_ok());
    assert!(envs.require_existing("other").is_err());
}

#[test]
fn test_require_missing_iff_not_exists() {
    let tmp = TempDir::new().unwrap();
    let envs = EnvRoot::new(tmp.path(), EnvLayout::host());
    make_env(tmp.path(), "myenv");

    assert!(envs.require_missing("myenv").is_err());
    assert!(envs.require_missing("other").is_ok());
}

#[test]
fn test_path_derivation() {
    let envs = EnvRoot::new("/data/envs", EnvLayout::unix());
    assert_eq!(
        envs.python("myenv"),
        Path::new("/data/envs/myenv/bin/python")
    );
    assert_eq!(
        envs.activate("myenv"),
        Path::new("/data/envs/myenv/bin/activate")
    );
    assert_eq!(
        envs.spyder("myenv"),
        Path::new("/data/envs/myenv/bin/spyder")
    );
    assert_eq!(
        envs.spyder_config_dir("myenv"),
        Path::new("/data/envs/myenv/.spyder-config")
    );
}

#[test]
fn test_from_config_requires_root() {
    let config = Config::default();
    assert!(EnvRoot::from_config(&config).is_err());

    let config = Config::parse("[paths]\nroot = \"/data/envs\"\n").unwrap();
    let envs = EnvRoot::from_config(&config).unwrap();
    assert_eq!(envs.root(), Path::new("/data/envs"));
}
