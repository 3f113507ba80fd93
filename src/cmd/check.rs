// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `check` command.

use crate::cli::setup::{CheckArgs, CheckTarget};
use crate::core::platform::OperatingSystem;
use crate::core::user::ensure_user_exists;
use crate::error::{Result, bail_out};
use crate::tools::ToolContext;
use crate::tools::cmake::CmakeTool;

/// Verifies one prerequisite and prints the outcome.
///
/// # Errors
///
/// Returns the failing check's error: unknown platform, cmake not runnable,
/// or missing user.
pub async fn run_check_command(args: &CheckArgs, ctx: &ToolContext) -> Result<()> {
    match &args.target {
        CheckTarget::Platform => {
            let os = OperatingSystem::detect()?;
            println!("{os}");
        }
        CheckTarget::Cmake => {
            if !CmakeTool::is_installed(ctx).await {
                return Err(bail_out("cmake is not installed or not runnable").into());
            }
            println!("cmake is installed");
        }
        CheckTarget::User { name } => {
            ensure_user_exists(name).await?;
            println!("user {name} exists");
        }
    }
    Ok(())
}
