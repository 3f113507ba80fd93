// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `compile` command.

use tracing::info;

use crate::cli::setup::CompileArgs;
use crate::error::Result;
use crate::tools::cmake::CmakeTool;
use crate::tools::{Tool, ToolContext};

/// Optionally configures, then builds the engine.
///
/// A build that exits non-zero is logged by the tool and still returns `Ok`.
///
/// # Errors
///
/// Returns an error if cmake cannot be run, configure fails, or the run is
/// interrupted.
pub async fn run_compile_command(args: &CompileArgs, ctx: &ToolContext) -> Result<()> {
    let tool = CmakeTool::from_config(ctx.config());

    if args.configure {
        tool.clone().configure_op().run(ctx).await?;
    }

    let status = tool.build(ctx).await?;
    info!(status, "compile finished");
    Ok(())
}
