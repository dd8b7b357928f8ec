// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Activate | Delete | Install | Scripts | Spyder | Options | Configs
//! ```

use std::process::ExitCode;

use venvctl::cli::global::GlobalOptions;
use venvctl::cli::{self, Command};
use venvctl::cmd::activate::run_activate_command;
use venvctl::cmd::config::{run_configs_command, run_options_command};
use venvctl::cmd::delete::run_delete_command;
use venvctl::cmd::install::run_install_command;
use venvctl::cmd::scripts::run_scripts_command;
use venvctl::cmd::spyder::run_spyder_command;
use venvctl::config::Config;
use venvctl::config::loader::ConfigLoader;
use venvctl::error;
use venvctl::logging::init_logging;
use venvctl::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Activate(args)) => match load_config(&cli.global) {
            Ok(config) => run_activate_command(args, &config).await,
            Err(e) => Err(e),
        },
        Some(Command::Delete(args)) => {
            load_config(&cli.global).and_then(|config| run_delete_command(args, &config))
        }
        Some(Command::Install(args)) => match load_config(&cli.global) {
            Ok(config) => run_install_command(args, &config).await,
            Err(e) => Err(e),
        },
        Some(Command::Scripts(args)) => run_scripts_command(args),
        Some(Command::Spyder(args)) => {
            load_config(&cli.global).and_then(|config| run_spyder_command(args, &config))
        }
        Some(Command::Options) => {
            load_config(&cli.global).map(|config| run_options_command(&config))
        }
        Some(Command::Configs) => {
            let loader = build_config_loader(&cli.global);
            run_configs_command(&loader.format_loaded_files());
            Ok(())
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(error::usage_error("no command specified").into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error::report(&e);
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional("venvctl.toml");
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    loader.with_env_prefix("VENVCTL")
}

fn load_config(global: &GlobalOptions) -> venvctl::error::Result<Config> {
    let mut loader = build_config_loader(global);
    if let Some(root) = &global.root {
        loader = loader.set("paths.root", root.display().to_string())?;
    }
    loader.build()
}
