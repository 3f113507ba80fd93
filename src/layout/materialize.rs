// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Creating a declared tree on disk.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};

use super::FolderSpec;
use crate::error::{FsError, LayoutError, SetupResult};

/// What [`materialize`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Folders created by this run (or that a dry run would create).
    pub created: usize,
    /// Folders that already existed.
    pub already_present: usize,
    /// Every folder of the tree in walk order, as absolute paths.
    pub paths: Vec<PathBuf>,
}

impl MaterializeReport {
    /// Total number of folders in the tree.
    #[must_use]
    pub fn total(&self) -> usize {
        self.created + self.already_present
    }
}

/// Ensures a directory exists for every node of `tree` under `base`.
///
/// The root lands at `base/<root name>` and each child inside its parent.
/// Existing directories are left alone, so running twice is harmless. With
/// `dry_run`, the folders that would be created are logged and nothing is
/// touched.
///
/// # Errors
///
/// Returns `LayoutError::InvalidName` before touching the disk if the tree
/// is not well formed, and an `FsError` if a directory cannot be created.
pub async fn materialize(
    tree: &FolderSpec,
    base: &Path,
    dry_run: bool,
) -> SetupResult<MaterializeReport> {
    if let Some(bad) = tree.first_malformed() {
        return Err(LayoutError::InvalidName {
            name: bad.name().to_string(),
        }
        .into());
    }

    let mut report = MaterializeReport::default();

    for (_, relative) in tree.walk() {
        let path = base.join(relative);

        if path.is_dir() {
            debug!(path = %path.display(), "folder already present");
            report.already_present += 1;
        } else if dry_run {
            info!(path = %path.display(), "[dry-run] Would create folder");
            report.created += 1;
        } else {
            fs::create_dir_all(&path)
                .await
                .map_err(|source| FsError::IoError {
                    path: path.display().to_string(),
                    source,
                })?;
            debug!(path = %path.display(), "created folder");
            report.created += 1;
        }

        report.paths.push(path);
    }

    info!(
        root = %base.join(tree.name()).display(),
        created = report.created,
        already_present = report.already_present,
        "folder tree ready"
    );
    Ok(report)
}
