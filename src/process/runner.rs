// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run()                          spawn_detached()
//!   |                                |
//!   v                                v
//! build_command()               std::process::Command
//! args, cwd, stdio              stdio null, no wait
//!   |
//!   v
//! spawn() --> drain streams --> wait
//!   |
//!   v
//! validate exit_code (skip if ALLOW_FAILURE)
//!   |
//!   v
//! ProcessOutput { exit_code, stdout, stderr }
//! ```

use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, error, trace};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput, StreamFlags};
use crate::error::{ProcessError, Result};

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging).
    fn command_line(&self) -> String {
        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            use std::fmt::Write as _;
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns and runs the process, waiting for completion.
    ///
    /// This is the main entry point for executing a process.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails.
    /// - The process exits with a non-zero status and `ALLOW_FAILURE` is
    ///   not set. The capture conveniences set it, so captured runs return
    ///   their output and the caller decides.
    pub async fn run(self) -> Result<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command();

        let mut child = command.spawn().map_err(|source| ProcessError::SpawnFailed {
            command: cmd_line.clone(),
            source,
        })?;

        trace!(process = %name, pid = ?child.id(), "spawned");

        let stdout_handle = spawn_reader(child.stdout.take(), self.stdout_flags(), &name, "stdout");
        let stderr_handle = spawn_reader(child.stderr.take(), self.stderr_flags(), &name, "stderr");

        let exit_status = child.wait().await?;

        let output = ProcessOutput::new(
            exit_status.code().unwrap_or(-1),
            await_reader(stdout_handle).await,
            await_reader(stderr_handle).await,
        );

        if !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE) && !output.success() {
            if !output.stderr().is_empty() {
                error!(process = %name, stderr = %output.stderr(), "process error output");
            }
            return Err(ProcessError::NonZeroExit {
                command: name,
                code: output.exit_code(),
            }
            .into());
        }

        trace!(process = %name, exit_code = output.exit_code(), "completed");
        Ok(output)
    }

    /// Spawns the process and returns immediately without waiting.
    ///
    /// Used for children that outlive the invocation, like an IDE or an
    /// interactive shell the user exits on their own. The child's streams
    /// are detached from this process.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError::SpawnFailed` if the child cannot be started.
    pub fn spawn_detached(self) -> Result<()> {
        let cmd_line = self.command_line();
        debug!(cmd = %cmd_line, "spawn detached");

        let mut command = self.build_std_command();
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // The child is deliberately not waited on.
        command
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line,
                source,
            })?;
        Ok(())
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::from(self.build_std_command());

        command.stdin(Stdio::null());
        command.stdout(Self::stdio_from_flags(self.stdout_flags()));
        command.stderr(Self::stdio_from_flags(self.stderr_flags()));

        // Kill on drop for safety
        command.kill_on_drop(true);

        command
    }

    /// Builds the program/args/cwd part shared by both execution paths.
    ///
    /// On the Windows family the invocation goes through `cmd /C`: batch
    /// scripts (activate.bat and friends) are not directly executable.
    fn build_std_command(&self) -> std::process::Command {
        #[cfg(windows)]
        let mut command = {
            let mut command = std::process::Command::new("cmd");
            command.arg("/C").arg(self.program());
            command.args(self.args_slice());
            command
        };

        #[cfg(not(windows))]
        let mut command = {
            let mut command = std::process::Command::new(self.program());
            command.args(self.args_slice());
            command
        };

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        command
    }

    /// Converts `StreamFlags` to Stdio configuration.
    fn stdio_from_flags(flags: StreamFlags) -> Stdio {
        if flags.contains(StreamFlags::INHERIT) {
            Stdio::inherit()
        } else if flags.contains(StreamFlags::BIT_BUCKET) {
            Stdio::null()
        } else {
            Stdio::piped()
        }
    }
}

/// Spawns a task draining one piped stream, collecting it when requested.
fn spawn_reader<R>(
    stream: Option<R>,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &'static str,
) -> Option<JoinHandle<String>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    if !flags.intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING) {
        return None;
    }
    let name = process_name.to_string();
    stream.map(|stream| {
        tokio::spawn(async move {
            let mut lines = BufReader::new(stream).lines();
            let mut collected = String::new();
            while let Ok(Some(line)) = lines.next_line().await {
                if flags.contains(StreamFlags::FORWARD_TO_LOG) {
                    trace!(process = %name, stream = %stream_name, line = %line, "output");
                }
                if flags.contains(StreamFlags::KEEP_IN_STRING) {
                    if !collected.is_empty() {
                        collected.push('\n');
                    }
                    collected.push_str(&line);
                }
            }
            collected
        })
    })
}

/// Waits for a reader task, returning whatever it collected.
async fn await_reader(handle: Option<JoinHandle<String>>) -> String {
    match handle {
        Some(handle) => handle.await.unwrap_or_default(),
        None => String::new(),
    }
}
