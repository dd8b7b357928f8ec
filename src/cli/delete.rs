// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Delete command arguments.

use clap::Args;

/// Arguments for the `delete` command.
#[derive(Debug, Clone, Default, Args)]
pub struct DeleteArgs {
    /// Name of the environment to be deleted.
    #[arg(value_name = "ENVIRONMENT")]
    pub environment_name: String,
}
