// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `clone` command.

use crate::cli::setup::CloneArgs;
use crate::error::Result;
use crate::tools::git::GitTool;
use crate::tools::{Tool, ToolContext};

/// Clones `args.url` inside `args.dir` (or the current directory).
///
/// # Errors
///
/// Returns `GitError::CloneFailed` if git exits non-zero, or an error if git
/// cannot be run.
pub async fn run_clone_command(args: &CloneArgs, ctx: &ToolContext) -> Result<()> {
    let mut tool = GitTool::new().url(&args.url);
    if let Some(dir) = &args.dir {
        tool = tool.path(dir);
    }
    tool.run(ctx).await
}
