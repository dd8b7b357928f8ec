// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Install command implementation.
//!
//! ```text
//! validate flags --> resolve interpreter --> pip install (streamed)
//!                                               |
//!                                 --activate?   v
//!                              activate body, spawn-shell mode
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::cli::activate::ActivateArgs;
use crate::cli::install::InstallArgs;
use crate::cmd::activate::run_activate_command;
use crate::config::Config;
use crate::env::EnvRoot;
use crate::error::{Result, usage_error};
use crate::process::ProcessBuilder;

/// Main handler for the install command.
///
/// # Errors
///
/// Fails when `--activate` is given without `--environment`, when the
/// named environment does not exist, or when pip exits with a non-zero
/// status. A failed install leaves the environment in whatever state pip
/// left it; there is no rollback.
pub async fn run_install_command(args: &InstallArgs, config: &Config) -> Result<()> {
    // Flag validation comes first so nothing runs on a bad combination.
    if args.activate && args.environment.is_none() {
        return Err(usage_error("must pass --environment to activate after install").into());
    }

    let envs = EnvRoot::from_config(config)?;
    let packages = normalize_packages(&args.packages)?;

    let python = match &args.environment {
        Some(name) => {
            envs.require_existing(name)?;
            envs.python(name)
        }
        // No environment named: install into whatever `python` is active.
        None => PathBuf::from("python"),
    };

    match python_version(&python).await {
        Ok(version) => {
            info!(python = %python.display(), %version, packages = ?packages, "installing");
        }
        Err(e) => debug!(python = %python.display(), error = %e, "could not query version"),
    }

    let mut pip_args = config.pip.install_args();
    pip_args.extend(packages);

    ProcessBuilder::new(&python)
        .args(&pip_args)
        .name("pip")
        .inherit_stdio()
        .run()
        .await?;

    if args.activate
        && let Some(name) = &args.environment
    {
        let activate = ActivateArgs {
            environment_name: name.clone(),
            spawn_shell: true,
        };
        run_activate_command(&activate, config).await?;
    }

    Ok(())
}

/// Trims the comma-split package list and rejects an effectively empty one.
pub(crate) fn normalize_packages(raw: &[String]) -> Result<Vec<String>> {
    let packages: Vec<String> = raw
        .iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();

    if packages.is_empty() {
        return Err(usage_error("no packages given").into());
    }
    Ok(packages)
}

/// Asks an interpreter for its version, capture-mode.
async fn python_version(python: &Path) -> Result<String> {
    let output = ProcessBuilder::new(python)
        .args(["-c", "import platform; print(platform.python_version())"])
        .capture_output()
        .run()
        .await?;
    Ok(output.stdout_trimmed().to_string())
}
