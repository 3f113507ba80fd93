// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `CMake` tool for configuring and building the engine.
//!
//! ```text
//! CmakeTool
//! Operations: Configure | Build
//!   configure  cmake -S <source> -B <build>
//!   build      cmake --build <build> --config <cfg> --target <target>
//!              console attached, exit status logged and returned
//! Defaults: build = <cwd>/build, config = Debug, target = all
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info, warn};

use super::{BoxFuture, Tool, ToolContext, tool_builder};
use crate::config::Config;
use crate::config::types::BuildConfiguration;
use crate::core::process::{ProcessBuilder, ProcessFlags, tool_installed};
use crate::error::Result;

/// `CMake` operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CmakeOperation {
    /// Generate the build directory.
    Configure,
    /// Build a target in a configured build directory.
    #[default]
    Build,
}

/// `CMake` tool for configure/build operations.
#[derive(Debug, Clone)]
pub struct CmakeTool {
    source_dir: Option<PathBuf>,
    build_dir: Option<PathBuf>,
    configuration: BuildConfiguration,
    target: String,
    operation: CmakeOperation,
}

impl CmakeTool {
    /// Build op with the stock settings: `<cwd>/build`, Debug, `all`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source_dir: None,
            build_dir: None,
            configuration: BuildConfiguration::Debug,
            target: "all".to_string(),
            operation: CmakeOperation::Build,
        }
    }

    /// Takes directories, configuration and target from `[build]`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .source_dir(config.source_dir())
            .build_dir(config.build_dir())
            .configuration(config.build.configuration)
            .target(config.build.target.clone())
    }

    #[must_use]
    pub fn source_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.source_dir = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn build_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.build_dir = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub const fn configuration(mut self, configuration: BuildConfiguration) -> Self {
        self.configuration = configuration;
        self
    }

    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    #[must_use]
    pub const fn configure_op(mut self) -> Self {
        self.operation = CmakeOperation::Configure;
        self
    }

    #[must_use]
    pub const fn build_op(mut self) -> Self {
        self.operation = CmakeOperation::Build;
        self
    }

    #[must_use]
    pub const fn operation(&self) -> CmakeOperation {
        self.operation
    }

    fn resolved_source_dir(&self) -> Result<PathBuf> {
        match &self.source_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("failed to read the current directory"),
        }
    }

    fn resolved_build_dir(&self) -> Result<PathBuf> {
        match &self.build_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(self.resolved_source_dir()?.join("build")),
        }
    }

    /// Arguments of the build invocation, without the program.
    ///
    /// # Errors
    ///
    /// Fails only when the build directory must be derived from an
    /// unreadable current directory.
    pub fn build_args(&self) -> Result<Vec<String>> {
        Ok(vec![
            "--build".to_string(),
            self.resolved_build_dir()?.display().to_string(),
            "--config".to_string(),
            self.configuration.to_string(),
            "--target".to_string(),
            self.target.clone(),
        ])
    }

    /// Arguments of the configure invocation, without the program.
    ///
    /// # Errors
    ///
    /// Same as [`CmakeTool::build_args`].
    pub fn configure_args(&self) -> Result<Vec<String>> {
        Ok(vec![
            "-S".to_string(),
            self.resolved_source_dir()?.display().to_string(),
            "-B".to_string(),
            self.resolved_build_dir()?.display().to_string(),
        ])
    }

    fn cmake_builder(ctx: &ToolContext) -> Result<ProcessBuilder> {
        tool_builder(&ctx.config().tools.cmake, "cmake")
    }

    /// Whether `cmake --version` runs and exits with status 0.
    pub async fn is_installed(ctx: &ToolContext) -> bool {
        let cmake = &ctx.config().tools.cmake;
        if cmake.as_os_str().is_empty() {
            tool_installed("cmake").await
        } else {
            tool_installed(cmake).await
        }
    }

    /// Generates the build directory.
    ///
    /// # Errors
    ///
    /// Returns an error if cmake cannot be found or spawned, exits non-zero,
    /// or is interrupted.
    pub async fn configure(&self, ctx: &ToolContext) -> Result<()> {
        let args = self.configure_args()?;

        if ctx.is_dry_run() {
            info!(args = %args.join(" "), "[dry-run] Would configure CMake");
            return Ok(());
        }

        debug!("configuring CMake");
        let output = Self::cmake_builder(ctx)?
            .args(&args)
            .inherit_stdio()
            .run_with_cancellation(ctx.cancel_token().clone())
            .await
            .context("failed to run CMake configure")?;

        if output.is_interrupted() {
            anyhow::bail!("CMake configure was interrupted");
        }

        info!("CMake configure completed");
        Ok(())
    }

    /// Builds the configured target with the console attached.
    ///
    /// The exit status is returned as-is; a non-zero status is logged, not
    /// turned into an error. Dry runs report 0.
    ///
    /// # Errors
    ///
    /// Returns an error if cmake cannot be found or spawned, or is interrupted.
    pub async fn build(&self, ctx: &ToolContext) -> Result<i32> {
        let args = self.build_args()?;

        if ctx.is_dry_run() {
            info!(args = %args.join(" "), "[dry-run] Would build with CMake");
            return Ok(0);
        }

        debug!(target = %self.target, configuration = %self.configuration, "building with CMake");
        let output = Self::cmake_builder(ctx)?
            .args(&args)
            .inherit_stdio()
            .flag(ProcessFlags::ALLOW_FAILURE)
            .run_with_cancellation(ctx.cancel_token().clone())
            .await
            .context("failed to run CMake build")?;

        if output.is_interrupted() {
            anyhow::bail!("CMake build was interrupted");
        }

        let status = output.exit_code();
        if status == 0 {
            info!("CMake build completed");
        } else {
            warn!(status, "CMake build exited with a non-zero status");
        }
        Ok(status)
    }
}

impl Default for CmakeTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for CmakeTool {
    fn name(&self) -> &'static str {
        "cmake"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            match self.operation {
                CmakeOperation::Configure => self.configure(ctx).await,
                CmakeOperation::Build => self.build(ctx).await.map(|_| ()),
            }
        })
    }
}

#[cfg(test)]
mod tests;
