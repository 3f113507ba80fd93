// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell-level helpers over [`ProcessBuilder`].
//!
//! ```text
//! run_command(cmd)       sh -c cmd, inherited stdio     --> exit code
//! validate_command(cmd)  sh -c "{ cmd\n} 2>&1", captured --> (code == 0, output minus one line break)
//! tool_installed(tool)   tool --version, discarded       --> spawned && code == 0
//! ```

use std::path::Path;

use tracing::{debug, info};

use super::builder::{ProcessBuilder, ProcessFlags};
use crate::error::Result;

/// Runs `cmd` through the platform shell with the console attached.
///
/// # Errors
///
/// Returns an error only if the shell itself cannot be spawned. A non-zero
/// exit is reported through the returned code.
pub async fn run_command(cmd: &str) -> Result<i32> {
    info!(cmd = %cmd, "running command");
    let output = ProcessBuilder::raw(cmd)
        .name("shell")
        .inherit_stdio()
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await?;
    debug!(cmd = %cmd, exit_code = output.exit_code(), "command finished");
    Ok(output.exit_code())
}

/// Runs `cmd` with stderr folded into stdout and returns whether it exited
/// with status 0 together with everything it printed.
///
/// The output is returned as written, minus one trailing line break. Bytes
/// that are not valid UTF-8 are replaced rather than dropped.
///
/// # Errors
///
/// Returns an error if the shell cannot be spawned or its output cannot be
/// read.
pub async fn validate_command(cmd: &str) -> Result<(bool, String)> {
    let output = ProcessBuilder::raw_merged(cmd)
        .name("shell")
        .capture_stdout()
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await?;

    let text = strip_line_break(output.stdout()).to_string();
    debug!(cmd = %cmd, exit_code = output.exit_code(), "validated command");
    Ok((output.success(), text))
}

/// Removes one trailing `\n` (or `\r\n`), leaving any earlier ones.
pub(super) fn strip_line_break(text: &str) -> &str {
    text.strip_suffix('\n')
        .map_or(text, |rest| rest.strip_suffix('\r').unwrap_or(rest))
}

/// Returns true if `tool --version` runs and exits with status 0.
///
/// A tool that cannot be spawned at all counts as not installed.
pub async fn tool_installed(tool: impl AsRef<Path>) -> bool {
    let tool = tool.as_ref();
    let installed = ProcessBuilder::new(tool)
        .arg("--version")
        .quiet()
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await
        .is_ok_and(|output| output.success());

    debug!(tool = %tool.display(), installed, "tool probe");
    installed
}
