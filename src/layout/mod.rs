// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Declared application folder trees.
//!
//! ```text
//! FolderSpec { name, children: &'static [FolderSpec] }
//!
//! PRIVATE_FOLDERS  --> <install_root>/YeagerEngine/...
//! PUBLIC_FOLDERS   --> <user_root>/YeagerEngine/...
//!
//! walk()          depth-first pre-order, declaration order
//! materialize()   create_dir per node, idempotent, dry-run aware
//! ```
//!
//! The names and nesting are an on-disk contract shared with the engine.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;

mod declared;
pub mod materialize;

pub use declared::{PRIVATE_FOLDERS, PUBLIC_FOLDERS};
pub use materialize::{MaterializeReport, materialize};

/// One directory and the directories declared beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FolderSpec {
    name: &'static str,
    children: &'static [FolderSpec],
}

impl FolderSpec {
    #[must_use]
    pub const fn new(name: &'static str, children: &'static [FolderSpec]) -> Self {
        Self { name, children }
    }

    /// A folder without children.
    #[must_use]
    pub const fn leaf(name: &'static str) -> Self {
        Self::new(name, &[])
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn children(&self) -> &'static [FolderSpec] {
        self.children
    }

    /// Pre-order traversal yielding every node with its path relative to
    /// the directory the tree is materialised in.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(self, PathBuf::from(self.name))],
        }
    }

    /// True if every name in the tree is usable as a single path segment:
    /// non-empty, not `.` or `..`, and free of `/` and `\`.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.first_malformed().is_none()
    }

    /// First node, in walk order, whose name is empty, `.` or `..`, or
    /// contains `/` or `\`.
    #[must_use]
    pub fn first_malformed(&self) -> Option<&FolderSpec> {
        self.walk()
            .map(|(node, _)| node)
            .find(|node| !is_segment(node.name))
    }

    /// Number of folders in the tree, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.walk().count()
    }

    /// A tree always has its root.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

fn is_segment(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Iterator returned by [`FolderSpec::walk`].
pub struct Walk<'a> {
    stack: Vec<(&'a FolderSpec, PathBuf)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a FolderSpec, PathBuf);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, path) = self.stack.pop()?;
        for child in node.children.iter().rev() {
            self.stack.push((child, path.join(child.name)));
        }
        Some((node, path))
    }
}

/// Which of the two trees, and where it belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Install-time application folders, under the install root.
    Private,
    /// Per-user data folders, under the user root.
    Public,
}

impl Layout {
    pub const ALL: [Self; 2] = [Self::Private, Self::Public];

    #[must_use]
    pub const fn tree(self) -> &'static FolderSpec {
        match self {
            Self::Private => &PRIVATE_FOLDERS,
            Self::Public => &PUBLIC_FOLDERS,
        }
    }

    /// Directory the tree's root folder is created in.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured paths were never resolved.
    pub fn base(self, config: &Config) -> Result<&Path> {
        match self {
            Self::Private => config.paths.install_root(),
            Self::Public => config.paths.user_root(),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Private => f.write_str("private"),
            Self::Public => f.write_str("public"),
        }
    }
}
