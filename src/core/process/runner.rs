// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and exit code validation.
//!
//! ```text
//! run() / run_with_cancellation(token)
//!              |
//!              v
//!     build_command()  args, cwd, stdio
//!              |
//!              v
//!          spawn()  ---- io::Error ----> ProcessError::SpawnFailed
//!              |
//!              v
//!          run_child
//!              |
//!              v
//!    validate exit_code (skip if ALLOW_FAILURE or interrupted)
//!              |
//!              v
//!       ProcessOutput { exit_code, stdout, stderr, interrupted }
//! ```

use std::fmt::Write as _;
use std::process::Stdio;

use tokio::process::{Child, Command};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput, StreamFlags};
use crate::error::{ProcessError, Result};

impl ProcessBuilder {
    /// Returns the display name for this process.
    pub(super) fn display_name(&self) -> String {
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
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut cmd = self.program().display().to_string();
        for arg in self.arguments() {
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
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails.
    /// - The process exits non-zero and `ALLOW_FAILURE` is not set.
    /// - Reading its captured output fails.
    pub async fn run(self) -> Result<ProcessOutput> {
        let (name, cmd_line, mut child) = self.spawn()?;
        let output = self.run_child(&name, &cmd_line, &mut child, None).await?;
        self.validate(&name, &cmd_line, output)
    }

    /// Spawns and runs the process, killing it when `token` is cancelled.
    ///
    /// An interrupted process returns `Ok` with `is_interrupted() == true`
    /// regardless of its exit code.
    ///
    /// # Errors
    ///
    /// Same as [`ProcessBuilder::run`], except that interrupted processes
    /// never fail the exit code check.
    pub async fn run_with_cancellation(self, token: CancellationToken) -> Result<ProcessOutput> {
        if token.is_cancelled() {
            return Ok(ProcessOutput::new(-1, String::new(), String::new(), true));
        }

        let (name, cmd_line, mut child) = self.spawn()?;
        let output = self
            .run_child(&name, &cmd_line, &mut child, Some(token))
            .await?;
        self.validate(&name, &cmd_line, output)
    }

    fn spawn(&self) -> Result<(String, String, Child)> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let child = self
            .build_command()
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })
            .map_err(crate::error::SetupError::from)?;

        trace!(process = %name, pid = ?child.id(), "spawned");
        Ok((name, cmd_line, child))
    }

    fn validate(&self, name: &str, cmd_line: &str, output: ProcessOutput) -> Result<ProcessOutput> {
        if !output.is_interrupted()
            && !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE)
            && !output.success()
        {
            if !output.stderr().is_empty() {
                error!(process = %name, stderr = %output.stderr(), "process error output");
            }
            return Err(crate::error::SetupError::from(ProcessError::NonZeroExit {
                command: cmd_line.to_string(),
                code: output.exit_code(),
            })
            .into());
        }

        trace!(
            process = %name,
            exit_code = output.exit_code(),
            interrupted = output.is_interrupted(),
            "completed"
        );
        Ok(output)
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.arguments());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        command.stdin(if self.stdout_flags().contains(StreamFlags::INHERIT) {
            Stdio::inherit()
        } else {
            Stdio::null()
        });
        command.stdout(Self::stdio_from_flags(self.stdout_flags()));
        command.stderr(Self::stdio_from_flags(self.stderr_flags()));
        command.kill_on_drop(true);

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
