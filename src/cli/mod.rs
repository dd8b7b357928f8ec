// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for venvctl using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! venvctl [global options] <command>
//! activate <env> [--spawn-shell]
//! delete <env>
//! install <packages> [-e env] [-a]
//! scripts [--path NAME]
//! spyder <env>
//! options
//! configs
//! ```

pub mod activate;
pub mod delete;
pub mod global;
pub mod install;
pub mod scripts;
pub mod spyder;


use crate::cli::activate::ActivateArgs;
use crate::cli::delete::DeleteArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::install::InstallArgs;
use crate::cli::scripts::ScriptsArgs;
use crate::cli::spyder::SpyderArgs;
use clap::{Parser, Subcommand};

/// Python virtual environment utilities.
///
/// Thin commands for activating, deleting, and installing packages into
/// local Python virtual environments, plus launching Spyder bound to one.
#[derive(Debug, Parser)]
#[command(
    name = "venvctl",
    author,
    version,
    about = "Python virtual environment utilities",
    after_help = "CONFIGURATION:\n\n\
                  venvctl reads an optional `venvctl.toml` from the current\n\
                  directory, any files given with --config (later files win),\n\
                  and VENVCTL_* environment variables. The environments root\n\
                  must be supplied as `[paths] root` or with --root.\n\n\
                  `activate` and `scripts --path` print shell-consumable\n\
                  values on stdout; diagnostics always go to stderr."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Activates a Python environment.
    Activate(ActivateArgs),

    /// Deletes a Python environment.
    Delete(DeleteArgs),

    /// Installs and upgrades packages in a Python environment.
    Install(InstallArgs),

    /// Lists the utilities available.
    Scripts(ScriptsArgs),

    /// Starts Spyder within the given environment.
    Spyder(SpyderArgs),

    /// Lists all options and their values from the configuration.
    Options,

    /// Lists the configuration files used by venvctl.
    Configs,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
