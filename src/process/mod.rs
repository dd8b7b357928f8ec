// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scoped wrapper around external process invocation.
//!
//! ```text
//! ProcessBuilder
//!   capture_output() --> run() --> ProcessOutput::stdout_trimmed()
//!   inherit_stdio()  --> run() --> streamed to the user
//!   spawn_detached()          --> child keeps running, no wait
//!
//! Windows family: invoked through `cmd /C` (batch scripts are not
//! directly executable). Elsewhere: direct argument vector.
//! ```

pub mod builder;
mod runner;

#[cfg(test)]
mod tests;

pub use builder::{ProcessBuilder, ProcessFlags, ProcessOutput, StreamFlags};
