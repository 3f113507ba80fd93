// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `install` command.
//!
//! ```text
//! detect platform           unknown OS      --> fatal
//! check install.user        missing account --> fatal (unless skipped)
//! require cmake             not runnable    --> fatal (if required)
//! folders: private + public
//! copy [paths] resources --> <install_root>/YeagerEngine/Resources
//! --compile: cmake build (status logged, not fatal)
//! ```

use std::path::PathBuf;

use tracing::{info, warn};

use super::folders::create_trees;
use crate::cli::setup::{InstallArgs, TreeChoice};
use crate::config::Config;
use crate::core::platform::{OperatingSystem, path_compatible};
use crate::core::user::ensure_user_exists;
use crate::error::{Result, bail_out};
use crate::layout::{Layout, PRIVATE_FOLDERS};
use crate::tools::ToolContext;
use crate::tools::cmake::CmakeTool;
use crate::utility::fs::copy_dir_contents_async;

/// Runs every installation step in order, stopping at the first error.
///
/// # Errors
///
/// Returns an error if the platform is unknown, the configured user is
/// missing, cmake is required but not runnable, or a folder or copy fails.
pub async fn run_install_command(args: &InstallArgs, ctx: &ToolContext) -> Result<()> {
    let config = ctx.config();
    let dry = ctx.is_dry_run();

    let os = OperatingSystem::detect()?;
    info!(os = %os, dry, "starting installation");

    if args.skip_user_check || config.install.user.is_empty() {
        info!("skipping user check");
    } else {
        ensure_user_exists(&config.install.user).await?;
    }

    if config.install.require_cmake && !dry && !CmakeTool::is_installed(ctx).await {
        return Err(bail_out("cmake is required but is not installed or not runnable").into());
    }

    create_trees(TreeChoice::All, config, dry).await?;

    if let Some(resources) = &config.paths.resources {
        let dst = resources_dir(config)?;
        let shown = dst.display().to_string();
        if dry {
            info!(
                src = %resources.display(),
                dst = %path_compatible(os, &shown),
                "[dry-run] Would copy resources"
            );
        } else {
            let copied = copy_dir_contents_async(resources, &dst).await?;
            info!(files = copied, dst = %path_compatible(os, &shown), "resources copied");
        }
    }

    if args.compile {
        let status = CmakeTool::from_config(config).build(ctx).await?;
        if status != 0 {
            warn!(status, "engine build did not succeed, the folders are still in place");
        }
    }

    info!("installation complete");
    Ok(())
}

/// `<install_root>/YeagerEngine/Resources`.
fn resources_dir(config: &Config) -> Result<PathBuf> {
    Ok(Layout::Private
        .base(config)?
        .join(PRIVATE_FOLDERS.name())
        .join("Resources"))
}
