// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use tokio::fs;
use tracing::{debug, info};

use crate::error::{FsError, SetupResult};

/// Recursively copies the contents of `src` into `dst`.
///
/// `dst` is created if missing and merged into if present; existing files
/// are overwritten. Nothing is rolled back on failure.
///
/// # Example
/// ```no_run
/// use yeager_setup::utility::fs::copy::copy_dir_contents_async;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// copy_dir_contents_async(Path::new("assets"), Path::new("YeagerEngine/Resources")).await?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns `FsError::PermissionDenied { src, dst }` when the OS refuses
/// access, `FsError::NotFound` for a vanished source, and `FsError::IoError`
/// otherwise.
pub async fn copy_dir_contents_async(src: &Path, dst: &Path) -> SetupResult<u64> {
    fs::create_dir_all(dst)
        .await
        .map_err(|e| FsError::from_copy(src, dst, e))?;

    let mut entries = fs::read_dir(src)
        .await
        .map_err(|e| FsError::from_copy(src, dst, e))?;

    let mut copied = 0;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| FsError::from_copy(src, dst, e))?
    {
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copied += Box::pin(copy_dir_contents_async(&src_path, &dst_path)).await?;
        } else {
            fs::copy(&src_path, &dst_path)
                .await
                .map_err(|e| FsError::from_copy(&src_path, &dst_path, e))?;
            debug!(src = %src_path.display(), dst = %dst_path.display(), "copied");
            copied += 1;
        }
    }

    Ok(copied)
}

/// Copies the files directly inside `src` into `dst`, without recursing.
///
/// `dst` is created if missing. Subdirectories of `src` are skipped. With
/// `announce`, every copied file is logged at info level.
///
/// # Errors
///
/// Same classification as [`copy_dir_contents_async`].
pub async fn copy_files_async(src: &Path, dst: &Path, announce: bool) -> SetupResult<u64> {
    fs::create_dir_all(dst)
        .await
        .map_err(|e| FsError::from_copy(src, dst, e))?;

    let mut entries = fs::read_dir(src)
        .await
        .map_err(|e| FsError::from_copy(src, dst, e))?;

    let mut copied = 0;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| FsError::from_copy(src, dst, e))?
    {
        let src_path = entry.path();
        if !src_path.is_file() {
            debug!(path = %src_path.display(), "skipping non-file entry");
            continue;
        }

        let dst_path = dst.join(entry.file_name());
        fs::copy(&src_path, &dst_path)
            .await
            .map_err(|e| FsError::from_copy(&src_path, &dst_path, e))?;
        if announce {
            info!(file = %entry.file_name().to_string_lossy(), dst = %dst.display(), "copied file");
        }
        copied += 1;
    }

    Ok(copied)
}
