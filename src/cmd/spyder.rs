// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Spyder command implementation.
//!
//! Validation order: environment exists, then Spyder is installed in it,
//! then launch. The IDE is detached so the invocation returns immediately.

use tracing::info;

use crate::cli::spyder::SpyderArgs;
use crate::config::Config;
use crate::env::EnvRoot;
use crate::error::{EnvError, Result};
use crate::process::ProcessBuilder;

/// Main handler for the spyder command.
///
/// # Errors
///
/// Fails when `paths.root` is not configured, the environment does not
/// exist, or Spyder is not installed in it.
pub fn run_spyder_command(args: &SpyderArgs, config: &Config) -> Result<()> {
    let envs = EnvRoot::from_config(config)?;
    envs.require_existing(&args.environment_name)?;

    let spyder_path = config
        .tools
        .spyder
        .clone()
        .unwrap_or_else(|| envs.spyder(&args.environment_name));

    if !spyder_path.is_file() {
        return Err(EnvError::ToolNotInstalled {
            tool: "Spyder".to_string(),
            name: args.environment_name.clone(),
        }
        .into());
    }

    // Spyder cannot keep per-environment PYTHONPATH settings on its own;
    // point it at a configuration directory inside the environment.
    let conf_dir = envs.spyder_config_dir(&args.environment_name);

    ProcessBuilder::new(&spyder_path)
        .arg("--conf-dir")
        .arg(&conf_dir)
        .name("spyder")
        .spawn_detached()?;

    info!(
        environment = %args.environment_name,
        spyder = %spyder_path.display(),
        "spyder launched"
    );
    Ok(())
}
