// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Delete command implementation.

use anyhow::Context;
use tracing::info;

use crate::cli::delete::DeleteArgs;
use crate::config::Config;
use crate::env::EnvRoot;
use crate::error::Result;

/// Main handler for the delete command.
///
/// Validation happens before any filesystem mutation: deleting an
/// environment that does not exist fails without side effects.
///
/// # Errors
///
/// Fails when `paths.root` is not configured, the environment does not
/// exist, or the directory tree cannot be removed.
pub fn run_delete_command(args: &DeleteArgs, config: &Config) -> Result<()> {
    let envs = EnvRoot::from_config(config)?;
    envs.require_existing(&args.environment_name)?;

    let dir = envs.dir(&args.environment_name);
    std::fs::remove_dir_all(&dir)
        .with_context(|| format!("failed to remove {}", dir.display()))?;

    info!(environment = %args.environment_name, path = %dir.display(), "environment deleted");
    Ok(())
}
