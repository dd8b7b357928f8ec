// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Install command arguments.

use clap::Args;

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, Args)]
#[command(after_help = "EXAMPLES:\n\n\
                        venvctl install pandas\n\
                        venvctl install -e myenv \"pandas, matplotlib\"\n\
                        venvctl install -e myenv pandas==2.2.0 -a")]
pub struct InstallArgs {
    /// Comma-separated list of packages to install and upgrade
    /// (versions accepted as "package==version").
    #[arg(value_name = "PACKAGES", value_delimiter = ',', required = true)]
    pub packages: Vec<String>,

    /// Name of the environment to install in
    /// (default: currently active environment).
    #[arg(short = 'e', long = "environment", value_name = "ENVIRONMENT")]
    pub environment: Option<String>,

    /// Activate the environment after installation.
    #[arg(short = 'a', long = "activate")]
    pub activate: bool,
}
