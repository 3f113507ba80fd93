// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git tool for fetching engine repositories.
//!
//! ```text
//! GitTool::new().url(..).path(..)
//!   path is a dir   --> git clone <url>   (child cwd = path)
//!   path missing    --> warn, clone in the current directory
//!   output discarded, success = exit status 0
//! ```
//!
//! The installer's own working directory is never changed; only the child
//! process is started inside the target directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info, warn};

use super::{BoxFuture, Tool, ToolContext, tool_builder};
use crate::core::process::ProcessFlags;
use crate::error::{GitError, Result, SetupError};

/// Git tool for repository operations.
#[derive(Debug, Clone, Default)]
pub struct GitTool {
    url: Option<String>,
    path: Option<PathBuf>,
}

impl GitTool {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            url: None,
            path: None,
        }
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Directory the clone runs in; the repository lands in a child of it.
    #[must_use]
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    fn url_required(&self) -> Result<&str> {
        self.url.as_deref().context("GitTool: url is required")
    }

    /// Directory the child should start in, if any.
    ///
    /// A configured path that is not an existing directory yields `None`.
    fn clone_dir(&self) -> Option<&Path> {
        let path = self.path.as_deref()?;
        if path.is_dir() {
            Some(path)
        } else {
            warn!(
                path = %path.display(),
                "clone target directory does not exist, cloning in the current directory"
            );
            None
        }
    }

    /// Runs `git clone <url>` and reports whether it exited with status 0.
    ///
    /// # Errors
    ///
    /// Returns an error if no URL is set, git cannot be found, or the clone is
    /// interrupted. A git that is found but cannot be run yields
    /// `GitError::CommandFailed`. A clone that merely fails returns `Ok(false)`.
    pub async fn clone_repository(&self, ctx: &ToolContext) -> Result<bool> {
        let url = self.url_required()?;
        let dir = self.clone_dir();

        if ctx.is_dry_run() {
            info!(
                url = %url,
                dir = %dir.map_or_else(|| ".".to_string(), |d| d.display().to_string()),
                "[dry-run] Would clone repository"
            );
            return Ok(true);
        }

        let mut builder = tool_builder(&ctx.config().tools.git, "git")?
            .args(["clone", url])
            .quiet()
            .flag(ProcessFlags::ALLOW_FAILURE);
        if let Some(dir) = dir {
            builder = builder.cwd(dir);
        }

        let command = builder.command_line();
        debug!(url = %url, "cloning repository");
        let output = builder
            .run_with_cancellation(ctx.cancel_token().clone())
            .await
            .map_err(|e| {
                SetupError::from(GitError::CommandFailed {
                    command,
                    message: format!("{e:#}"),
                })
            })?;

        if output.is_interrupted() {
            anyhow::bail!("git clone of {url} was interrupted");
        }

        let cloned = output.success();
        if cloned {
            info!(url = %url, "repository cloned");
        } else {
            warn!(url = %url, status = output.exit_code(), "git clone failed");
        }
        Ok(cloned)
    }
}

impl Tool for GitTool {
    fn name(&self) -> &'static str {
        "git"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            if self.clone_repository(ctx).await? {
                Ok(())
            } else {
                Err(SetupError::from(GitError::CloneFailed {
                    url: self.url.clone().unwrap_or_default(),
                    message: "git exited with a non-zero status".to_string(),
                })
                .into())
            }
        })
    }
}

#[cfg(test)]
mod tests;
