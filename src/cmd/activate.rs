// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Activate command implementation.
//!
//! A child process cannot mutate the calling shell's variables, so the
//! default mode prints the activation-script path on stdout for the parent
//! shell to `source` (or `call`). The hidden `--spawn-shell` mode
//! instead starts a fresh interactive shell that sources the activation
//! script; the user leaves it with `exit` rather than `deactivate`.

use std::path::Path;

use crate::cli::activate::ActivateArgs;
use crate::config::Config;
use crate::env::EnvRoot;
use crate::error::Result;
use crate::process::{ProcessBuilder, ProcessFlags};

/// Main handler for the activate command.
///
/// # Errors
///
/// Fails when `paths.root` is not configured, the environment does not
/// exist, or the interactive shell cannot be spawned.
pub async fn run_activate_command(args: &ActivateArgs, config: &Config) -> Result<()> {
    let envs = EnvRoot::from_config(config)?;
    envs.require_existing(&args.environment_name)?;

    let activate_path = envs.activate(&args.environment_name);

    if args.spawn_shell {
        spawn_shell(&activate_path).await
    } else {
        // Exactly one line on stdout; everything else goes to stderr.
        println!("{}", activation_line(&activate_path));
        Ok(())
    }
}

/// The line a calling shell captures via substitution: the activation
/// script path, nothing else. Windows batch callers `call` it; Unix
/// callers `source` it.
#[must_use]
pub fn activation_line(activate_path: &Path) -> String {
    activate_path.display().to_string()
}

/// Starts an interactive shell with the environment active and waits for
/// the user to exit it.
async fn spawn_shell(activate_path: &Path) -> Result<()> {
    let shell = if cfg!(windows) {
        ProcessBuilder::new("cmd")
            .arg("/k")
            .arg(activate_path)
            .name("shell")
    } else {
        ProcessBuilder::new("/usr/bin/env")
            .args(["bash", "--rcfile"])
            .arg(activate_path)
            .name("shell")
    };

    // The user's last command decides the shell's exit status; it is not
    // a failure of the activation itself.
    shell
        .flag(ProcessFlags::ALLOW_FAILURE)
        .inherit_stdio()
        .run()
        .await?;
    Ok(())
}
