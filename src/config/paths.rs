// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! install_root/            (default: current directory)
//!   YeagerEngine/          private tree
//!     Resources/  <------- resources (copied on install)
//! user_root/               (default: home directory)
//!   YeagerEngine/          public tree
//! ```
//!
//! Relative paths are resolved against the current directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Base directories for the two folder trees.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Base of the private (installation-owned) tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_root: Option<PathBuf>,
    /// Base of the public (user data) tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_root: Option<PathBuf>,
    /// Resource directory copied into the private tree on install.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<PathBuf>,
}

impl PathsConfig {
    /// Resolve relative paths against `cwd` and fill in defaults.
    ///
    /// `home` is used for `user_root` when it is not set; pass `None` when
    /// the home directory cannot be determined.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if `user_root` is unset and no
    /// home directory is available.
    pub fn resolve(&mut self, cwd: &Path, home: Option<&Path>) -> Result<()> {
        let absolutize = |path: &mut Option<PathBuf>| {
            if let Some(p) = path
                && p.is_relative()
            {
                *p = cwd.join(&*p);
            }
        };

        absolutize(&mut self.install_root);
        absolutize(&mut self.user_root);
        absolutize(&mut self.resources);

        if self.install_root.is_none() {
            self.install_root = Some(cwd.to_path_buf());
        }

        if self.user_root.is_none() {
            let home = home.ok_or_else(|| ConfigError::MissingKey {
                section: "paths".to_string(),
                key: "user_root".to_string(),
            })?;
            self.user_root = Some(home.to_path_buf());
        }

        Ok(())
    }

    /// Get the private tree base, returning an error if not resolved.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if `install_root` is not set.
    pub fn install_root(&self) -> Result<&Path> {
        self.install_root.as_deref().ok_or_else(|| {
            ConfigError::MissingKey {
                section: "paths".to_string(),
                key: "install_root".to_string(),
            }
            .into()
        })
    }

    /// Get the public tree base, returning an error if not resolved.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if `user_root` is not set.
    pub fn user_root(&self) -> Result<&Path> {
        self.user_root.as_deref().ok_or_else(|| {
            ConfigError::MissingKey {
                section: "paths".to_string(),
                key: "user_root".to_string(),
            }
            .into()
        })
    }
}

/// The current user's home directory, if the platform reports one.
#[must_use]
pub fn home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}
