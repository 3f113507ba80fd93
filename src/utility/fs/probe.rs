// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;
use std::path::Path;

/// What, if anything, lives at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Dir,
    File,
    Missing,
}

impl ItemKind {
    /// `(exists, kind)`: `(true, Some("Dir"))`, `(true, Some("File"))` or
    /// `(false, None)`.
    #[must_use]
    pub const fn as_pair(self) -> (bool, Option<&'static str>) {
        match self {
            Self::Dir => (true, Some("Dir")),
            Self::File => (true, Some("File")),
            Self::Missing => (false, None),
        }
    }

    #[must_use]
    pub const fn exists(self) -> bool {
        !matches!(self, Self::Missing)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_pair().1.unwrap_or("Missing"))
    }
}

/// True if `path` is an existing directory (symlinks followed).
#[must_use]
pub fn verify_dir_exists(path: &Path) -> bool {
    path.is_dir()
}

/// True if `path` is an existing regular file (symlinks followed).
#[must_use]
pub fn verify_file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Classifies `path`. A directory wins over a file.
#[must_use]
pub fn verify_item_exists(path: &Path) -> ItemKind {
    if verify_dir_exists(path) {
        ItemKind::Dir
    } else if verify_file_exists(path) {
        ItemKind::File
    } else {
        ItemKind::Missing
    }
}
