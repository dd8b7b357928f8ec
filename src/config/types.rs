// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// `[paths]` section: filesystem locations consumed by every command.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Root directory containing all virtual environments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

impl PathsConfig {
    /// Get the environments root, returning an error if not set or empty.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` naming `paths.root` when the
    /// variable is absent or blank.
    pub fn root(&self) -> std::result::Result<&Path, ConfigError> {
        self.root
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| ConfigError::MissingKey {
                section: "paths".to_string(),
                key: "root".to_string(),
            })
    }
}

/// `[tools]` section: overrides for companion executables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// Absolute path to the Spyder executable. When unset, Spyder is
    /// resolved inside the target environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spyder: Option<PathBuf>,
}

/// `[pip]` section: installer invocation tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipConfig {
    /// Pass `--upgrade` to pip.
    pub upgrade: bool,
    /// Pass `--no-cache-dir` to pip.
    pub no_cache: bool,
    /// Additional arguments appended before the package list.
    pub extra_args: Vec<String>,
}

impl Default for PipConfig {
    fn default() -> Self {
        Self {
            upgrade: true,
            no_cache: true,
            extra_args: Vec::new(),
        }
    }
}

impl PipConfig {
    /// Arguments for `python -m pip install` ahead of the package list.
    #[must_use]
    pub fn install_args(&self) -> Vec<String> {
        let mut args = vec!["-m".to_string(), "pip".to_string(), "install".to_string()];
        if self.upgrade {
            args.push("--upgrade".to_string());
        }
        if self.no_cache {
            args.push("--no-cache-dir".to_string());
        }
        args.extend(self.extra_args.iter().cloned());
        args
    }
}
