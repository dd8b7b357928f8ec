// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment locator: derives paths inside an environments root and
//! exposes the existence predicates commands validate against.
//!
//! ```text
//! EnvRoot { root, layout }
//!   dir/python/activate/spyder(name) --> PathBuf
//!   exists(name)          = python file AND activate file present
//!   require_existing(name)  fails iff !exists(name)
//!   require_missing(name)   fails iff  exists(name)
//! ```
//!
//! An environment reference is derived, never stored: nothing is cached
//! between invocations.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::config::layout::EnvLayout;
use crate::error::{EnvError, Result};

#[cfg(test)]
mod tests;

/// The directory containing all virtual environments, together with the
/// platform layout used to resolve executables inside each one.
#[derive(Debug, Clone)]
pub struct EnvRoot {
    root: PathBuf,
    layout: EnvLayout,
}

impl EnvRoot {
    /// Creates a locator over `root` with an explicit layout.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, layout: EnvLayout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    /// Creates a locator from the loaded configuration using the host layout.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` when `paths.root` is not configured,
    /// so commands fail before doing any work.
    pub fn from_config(config: &Config) -> Result<Self> {
        let root = config.paths.root()?;
        Ok(Self::new(root, EnvLayout::host()))
    }

    /// The environments root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of the named environment.
    #[must_use]
    pub fn dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Interpreter executable of the named environment.
    #[must_use]
    pub fn python(&self, name: &str) -> PathBuf {
        self.dir(name).join(self.layout.python())
    }

    /// Activation script of the named environment.
    #[must_use]
    pub fn activate(&self, name: &str) -> PathBuf {
        self.dir(name).join(self.layout.activate())
    }

    /// Spyder executable of the named environment.
    #[must_use]
    pub fn spyder(&self, name: &str) -> PathBuf {
        self.dir(name).join(self.layout.spyder())
    }

    /// Per-environment Spyder configuration directory.
    ///
    /// Spyder cannot keep separate PYTHONPATH settings per environment on
    /// its own; each environment gets its own configuration directory that
    /// is passed via `--conf-dir`.
    #[must_use]
    pub fn spyder_config_dir(&self, name: &str) -> PathBuf {
        self.dir(name).join(".spyder-config")
    }

    /// True iff both the interpreter and the activation script are regular
    /// files under `<root>/<name>/`.
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.python(name).is_file() && self.activate(name).is_file()
    }

    /// Validates that the named environment exists.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::NotFound` iff [`exists`](Self::exists) is false.
    pub fn require_existing(&self, name: &str) -> Result<()> {
        if self.exists(name) {
            Ok(())
        } else {
            Err(EnvError::NotFound {
                name: name.to_string(),
            }
            .into())
        }
    }

    /// Validates that the named environment does not exist.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::AlreadyExists` iff [`exists`](Self::exists) is true.
    pub fn require_missing(&self, name: &str) -> Result<()> {
        if self.exists(name) {
            Err(EnvError::AlreadyExists {
                name: name.to_string(),
            }
            .into())
        } else {
            Ok(())
        }
    }
}
