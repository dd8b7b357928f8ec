// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for venvctl.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. local venvctl.toml (cwd)
//! 3. --config FILE(s)
//! 4. VENVCTL_* env vars
//! 5. CLI overrides (--root)
//! ```
//!
//! # Environment Variable Mapping
//!
//! Nested keys use a double underscore, keeping single underscores inside
//! key names intact:
//!
//! ```text
//! VENVCTL_PATHS__ROOT=/envs     → paths.root = "/envs"
//! VENVCTL_PIP__NO_CACHE=false   → pip.no_cache = false
//! ```
//!
//! The configuration itself is a small immutable mapping; the
//! platform-dependent relative paths live in [`layout::EnvLayout`] and are
//! attached when an environment root is constructed.

pub mod layout;
pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
pub use types::{PathsConfig, PipConfig, ToolsConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Filesystem locations.
    pub paths: PathsConfig,
    /// Companion tool overrides.
    pub tools: ToolsConfig,
    /// Installer invocation tuning.
    pub pip: PipConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use venvctl::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("venvctl.toml")
    ///     .with_env_prefix("VENVCTL")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display.
    ///
    /// Returns a vector of formatted strings representing all configuration
    /// options. Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert(
            "paths.root".to_string(),
            self.paths
                .root
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert(
            "tools.spyder".to_string(),
            self.tools
                .spyder
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("pip.upgrade".to_string(), self.pip.upgrade.to_string());
        options.insert("pip.no_cache".to_string(), self.pip.no_cache.to_string());
        options.insert(
            "pip.extra_args".to_string(),
            self.pip.extra_args.join(" "),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
