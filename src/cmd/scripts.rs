// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scripts command implementation.

use std::path::{Path, PathBuf};

use clap::CommandFactory;

use crate::cli::Cli;
use crate::cli::scripts::ScriptsArgs;
use crate::error::{EnvError, Result};
use crate::process::ProcessBuilder;

/// Main handler for the scripts command.
///
/// # Errors
///
/// Returns `EnvError::ScriptNotFound` when `--path` names a utility that
/// cannot be resolved on PATH.
pub fn run_scripts_command(args: &ScriptsArgs) -> Result<()> {
    if let Some(name) = &args.path {
        let path = find_script(name)?;
        println!("{}", path.display());
        return Ok(());
    }

    for (name, about) in available_scripts() {
        println!("{name:<10} {about}");
    }
    Ok(())
}

/// The utilities this binary provides, with their one-line descriptions.
fn available_scripts() -> Vec<(String, String)> {
    Cli::command()
        .get_subcommands()
        .filter(|c| !c.is_hide_set())
        .map(|c| {
            (
                c.get_name().to_string(),
                c.get_about().map(ToString::to_string).unwrap_or_default(),
            )
        })
        .collect()
}

/// Resolves a utility script by name on PATH.
///
/// An explicit extension is tried verbatim; a bare name tries the name
/// itself, then `.sh`, then `.py`.
pub(crate) fn find_script(name: &str) -> Result<PathBuf> {
    let candidates: Vec<String> = if Path::new(name).extension().is_some() {
        vec![name.to_string()]
    } else {
        ["", ".sh", ".py"]
            .iter()
            .map(|ext| format!("{name}{ext}"))
            .collect()
    };

    candidates
        .iter()
        .find_map(|candidate| ProcessBuilder::find(candidate))
        .ok_or_else(|| {
            EnvError::ScriptNotFound {
                name: name.to_string(),
            }
            .into()
        })
}
