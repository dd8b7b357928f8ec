// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            VenvError
//!                |
//!   +------+----+----+-------+
//!   |      |         |       |
//!   v      v         v       v
//!  Cfg    Env      Proc   Usage/Io/Other
//!  Box    Box      Box      Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Config  ReadError, ParseError, MissingKey, InvalidValue
//!   Env     NotFound, AlreadyExists, ToolNotInstalled, ScriptNotFound
//!   Process ExecutableNotFound, SpawnFailed, NonZeroExit, OutputError
//!
//! All variants boxed => VenvError stays small on the stack.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`VenvError`].
pub type VenvResult<T> = std::result::Result<T, VenvError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum VenvError {
    /// Configuration error.
    #[error("{0}")]
    Config(#[from] Box<ConfigError>),

    /// Environment lookup/validation error.
    #[error("{0}")]
    Env(#[from] Box<EnvError>),

    /// Process execution error.
    #[error("{0}")]
    Process(#[from] Box<ProcessError>),

    /// Invalid combination of command-line arguments.
    #[error("{0}")]
    Usage(Box<str>),

    /// I/O error.
    #[error("{0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl VenvError {
    /// Short kind name used by the top-level error reporter.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Env(_) => "environment",
            Self::Process(_) => "process",
            Self::Usage(_) => "usage",
            Self::Io(_) => "io",
            Self::Other(_) => "error",
        }
    }
}

/// Create a [`VenvError::Usage`] for an invalid argument combination.
pub fn usage_error(message: impl Into<String>) -> VenvError {
    VenvError::Usage(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for VenvError {
                fn from(err: $error) -> Self {
                    VenvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    EnvError => Env,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("variable '{key}' is not defined in section '[{section}]' of the configuration")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Environment Errors ---

/// Environment lookup and validation errors.
#[derive(Debug, Error)]
pub enum EnvError {
    /// Referenced environment does not exist under the environments root.
    #[error("environment \"{name}\" does not exist")]
    NotFound { name: String },

    /// Environment already present where a fresh one was expected.
    #[error("environment \"{name}\" already exists")]
    AlreadyExists { name: String },

    /// A companion tool is not installed inside the environment.
    #[error("{tool} must be installed in environment \"{name}\"")]
    ToolNotInstalled { tool: String, name: String },

    /// A utility script could not be resolved by name.
    #[error("script \"{name}\" not found")]
    ScriptNotFound { name: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Failed to read process output.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },
}

/// Formats any propagated failure as a single colored line on stderr.
///
/// This is the only error boundary in the binary; every command failure
/// funnels through here and terminates the process with a non-zero status.
pub fn report(err: &anyhow::Error) {
    const RED: &str = "\x1b[91m";
    const RESET: &str = "\x1b[0m";

    let kind = err.downcast_ref::<VenvError>().map_or_else(
        || {
            if err.downcast_ref::<ConfigError>().is_some() {
                "config"
            } else if err.downcast_ref::<EnvError>().is_some() {
                "environment"
            } else if err.downcast_ref::<ProcessError>().is_some() {
                "process"
            } else {
                "error"
            }
        },
        VenvError::kind,
    );

    eprintln!("{RED}{kind} error:{RESET} {err:#}");
}

#[cfg(test)]
mod tests;
