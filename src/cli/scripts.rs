// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scripts command arguments.

use clap::Args;

/// Arguments for the `scripts` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ScriptsArgs {
    /// Resolve the named utility script on PATH and print its full path
    /// instead of listing the available utilities.
    #[arg(long = "path", value_name = "NAME")]
    pub path: Option<String>,
}
