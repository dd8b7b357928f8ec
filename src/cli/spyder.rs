// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Spyder command arguments.

use clap::Args;

/// Arguments for the `spyder` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SpyderArgs {
    /// Name of the environment to start Spyder in.
    #[arg(value_name = "ENVIRONMENT")]
    pub environment_name: String,
}
