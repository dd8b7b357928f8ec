// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Activate command arguments.

use clap::Args;

/// Arguments for the `activate` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ActivateArgs {
    /// Name of the environment to be activated.
    #[arg(value_name = "ENVIRONMENT")]
    pub environment_name: String,

    /// Spawn an interactive shell with the environment active instead of
    /// printing the activation line. Used by internal chaining; hidden
    /// from users.
    #[arg(long = "spawn-shell", hide = true)]
    pub spawn_shell: bool,
}
