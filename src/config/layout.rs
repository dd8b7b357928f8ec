// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Platform-dependent layout of a virtual environment directory.
//!
//! ```text
//! <root>/<name>/
//!   Windows: Scripts\python.exe  Scripts\activate.bat  Scripts\spyder.exe
//!   Unix:    bin/python          bin/activate          bin/spyder
//! ```

use std::path::{Path, PathBuf};

/// Relative paths of the executables inside one environment directory.
///
/// Assembled once at startup; commands only ever read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvLayout {
    python: PathBuf,
    activate: PathBuf,
    spyder: PathBuf,
}

impl EnvLayout {
    /// Layout for the operating-system family this binary runs on.
    #[must_use]
    pub fn host() -> Self {
        if cfg!(windows) {
            Self::windows()
        } else {
            Self::unix()
        }
    }

    /// Windows-family layout. Public so tests can pin a platform.
    #[must_use]
    pub fn windows() -> Self {
        Self {
            python: ["Scripts", "python.exe"].iter().collect(),
            activate: ["Scripts", "activate.bat"].iter().collect(),
            spyder: ["Scripts", "spyder.exe"].iter().collect(),
        }
    }

    /// Unix-family layout. Public so tests can pin a platform.
    #[must_use]
    pub fn unix() -> Self {
        Self {
            python: ["bin", "python"].iter().collect(),
            activate: ["bin", "activate"].iter().collect(),
            spyder: ["bin", "spyder"].iter().collect(),
        }
    }

    /// Interpreter path relative to an environment directory.
    #[must_use]
    pub fn python(&self) -> &Path {
        &self.python
    }

    /// Activation-script path relative to an environment directory.
    #[must_use]
    pub fn activate(&self) -> &Path {
        &self.activate
    }

    /// Spyder executable path relative to an environment directory.
    #[must_use]
    pub fn spyder(&self) -> &Path {
        &self.spyder
    }
}

impl Default for EnvLayout {
    fn default() -> Self {
        Self::host()
    }
}
