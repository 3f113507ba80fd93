// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `exists` and `copy` commands.

use tracing::info;

use crate::cli::setup::{CopyArgs, ExistsArgs};
use crate::error::Result;
use crate::utility::fs::{ItemKind, copy_dir_contents_async, copy_files_async, verify_item_exists};

/// Prints `Dir`, `File` or `Missing` for the path.
pub fn run_exists_command(args: &ExistsArgs) -> ItemKind {
    let kind = verify_item_exists(&args.path);
    println!("{kind}");
    kind
}

/// Copies `src` into `dst`, recursively unless `--flat`.
///
/// # Errors
///
/// Returns the `FsError` of the first failing entry.
pub async fn run_copy_command(args: &CopyArgs, dry_run: bool) -> Result<()> {
    if dry_run {
        info!(
            src = %args.src.display(),
            dst = %args.dst.display(),
            flat = args.flat,
            "[dry-run] Would copy"
        );
        return Ok(());
    }

    let copied = if args.flat {
        copy_files_async(&args.src, &args.dst, args.announce).await?
    } else {
        copy_dir_contents_async(&args.src, &args.dst).await?
    };

    info!(
        src = %args.src.display(),
        dst = %args.dst.display(),
        files = copied,
        "copy finished"
    );
    Ok(())
}
