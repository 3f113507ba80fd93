// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `exec` command.

use tracing::info;

use crate::cli::setup::ExecArgs;
use crate::core::process::{run_command, validate_command};
use crate::error::Result;

/// Runs the command through the shell.
///
/// Without `--capture` the command shares the console; with it, stdout and
/// stderr are collected and printed once it exits.
///
/// # Errors
///
/// Returns an error if the command exits non-zero or the shell cannot be
/// spawned.
pub async fn run_exec_command(args: &ExecArgs, dry_run: bool) -> Result<()> {
    let command = args.command_line();

    if dry_run {
        info!(cmd = %command, "[dry-run] Would run command");
        return Ok(());
    }

    if args.capture {
        let (ok, output) = validate_command(&command).await?;
        if !output.is_empty() {
            println!("{output}");
        }
        if !ok {
            anyhow::bail!("command failed: {command}");
        }
    } else {
        let status = run_command(&command).await?;
        if status != 0 {
            anyhow::bail!("command exited with status {status}: {command}");
        }
    }

    Ok(())
}
