// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! External tools the installer shells out to.
//!
//! ```text
//! command --> ToolContext --> Tool::run --> ProcessBuilder
//!   CmakeTool  configure | build
//!   GitTool    clone
//! ToolContext: config, cancel token (Ctrl+C), dry-run flag
//! ```

use std::path::Path;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::core::process::ProcessBuilder;
use crate::error::{Result, SetupError};

pub mod cmake;
pub mod git;

/// Everything a tool needs while it runs.
#[derive(Clone)]
pub struct ToolContext {
    /// Cancelled by the Ctrl+C handler; running children are killed.
    cancel_token: CancellationToken,

    /// When true, tools log what they would do and spawn nothing.
    dry_run: bool,

    config: Arc<Config>,
}

impl ToolContext {
    #[must_use]
    pub const fn new(config: Arc<Config>, cancel_token: CancellationToken, dry_run: bool) -> Self {
        Self {
            cancel_token,
            dry_run,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    #[must_use]
    pub const fn cancel_token(&self) -> &CancellationToken {
        &self.cancel_token
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

/// A tool that runs one external operation.
///
/// Implementations spawn through `ProcessBuilder::run_with_cancellation()`
/// and honour `ctx.is_dry_run()`.
pub trait Tool: Send + Sync {
    /// Short name, e.g. "git" or "cmake".
    fn name(&self) -> &str;

    /// Runs the configured operation.
    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>>;
}

/// Resolves a tool executable: the configured override if set, otherwise
/// `name` looked up on PATH.
pub(crate) fn tool_builder(configured: &Path, name: &str) -> Result<ProcessBuilder> {
    if configured.as_os_str().is_empty() {
        ProcessBuilder::which(name).map_err(|e| SetupError::from(e).into())
    } else {
        Ok(ProcessBuilder::new(configured))
    }
}

#[cfg(test)]
pub(crate) mod test_utils;
