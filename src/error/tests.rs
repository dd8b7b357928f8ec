// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, EnvError, VenvError, VenvResult, usage_error};

#[test]
fn test_missing_key_display() {
    let err = ConfigError::MissingKey {
        section: "paths".to_string(),
        key: "root".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"variable 'root' is not defined in section '[paths]' of the configuration"
    );
}

#[test]
fn test_env_error_display() {
    let not_found = EnvError::NotFound {
        name: "myenv".to_string(),
    };
    let already = EnvError::AlreadyExists {
        name: "myenv".to_string(),
    };
    insta::assert_snapshot!(not_found.to_string(), @r#"environment "myenv" does not exist"#);
    insta::assert_snapshot!(already.to_string(), @r#"environment "myenv" already exists"#);
}

#[test]
fn test_error_kinds() {
    let cases: Vec<(&str, VenvError)> = vec![
        (
            "config",
            ConfigError::MissingKey {
                section: "paths".to_string(),
                key: "root".to_string(),
            }
            .into(),
        ),
        (
            "environment",
            EnvError::NotFound {
                name: "e".to_string(),
            }
            .into(),
        ),
        ("usage", usage_error("must pass environment to activate")),
    ];

    for (expected, err) in cases {
        assert_eq!(err.kind(), expected, "kind for {err}");
    }
}

#[test]
fn test_kind_survives_anyhow() {
    let err: anyhow::Error = VenvError::from(EnvError::ScriptNotFound {
        name: "listenvs".to_string(),
    })
    .into();
    let kind = err.downcast_ref::<VenvError>().map(VenvError::kind);
    assert_eq!(kind, Some("environment"));
}

#[test]
fn test_venv_error_size() {
    // Box<str> variants are 16 bytes (fat pointer), plus discriminant
    let size = std::mem::size_of::<VenvError>();
    assert!(size <= 24, "VenvError is {size} bytes, expected <= 24");
}

#[test]
fn test_venv_result_size() {
    let size = std::mem::size_of::<VenvResult<()>>();
    assert!(size <= 24, "VenvResult<()> is {size} bytes, expected <= 24");
}
