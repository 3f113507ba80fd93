// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for yeager-setup.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. yeager.toml (cwd, optional)
//! 3. --ini FILE (repeatable)
//! 4. YEAGER_* env vars
//! 5. --set section/key=value
//! 6. CLI flags (--dry, --install-root, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! YEAGER_GLOBAL_DRY=true          → global.dry = true
//! YEAGER_PATHS_USER_ROOT=/home/me → paths.user_root = "/home/me"
//! YEAGER_BUILD_TARGET=engine      → build.target = "engine"
//! ```

pub mod loader;
pub mod paths;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{BuildConfig, GlobalConfig, InstallConfig, ToolsConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Tree base directories.
    pub paths: PathsConfig,
    /// Engine build settings.
    pub build: BuildConfig,
    /// Tool paths.
    pub tools: ToolsConfig,
    /// Installer behaviour.
    pub install: InstallConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use yeager_setup::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("setup/default.toml")
    ///     .add_toml_file_optional("yeager.toml")
    ///     .with_env_prefix("YEAGER")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolve all paths against `cwd` and `home`.
    ///
    /// # Errors
    ///
    /// Returns an error if path resolution fails (e.g. no `user_root` and no
    /// home directory).
    pub fn resolve_and_validate(&mut self, cwd: &Path, home: Option<&Path>) -> Result<()> {
        self.paths.resolve(cwd, home)?;

        match &self.build.source_dir {
            Some(source) if source.is_relative() => {
                self.build.source_dir = Some(cwd.join(source));
            }
            None => self.build.source_dir = Some(cwd.to_path_buf()),
            _ => {}
        }

        Ok(())
    }

    /// Engine source directory (resolved, falls back to `.`).
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        self.build
            .source_dir
            .as_deref()
            .unwrap_or_else(|| Path::new("."))
    }

    /// `CMake` binary directory, joined onto the source directory when relative.
    #[must_use]
    pub fn build_dir(&self) -> PathBuf {
        if self.build.build_dir.is_absolute() {
            self.build.build_dir.clone()
        } else {
            self.source_dir().join(&self.build.build_dir)
        }
    }

    /// Format configuration options for display.
    ///
    /// Returns one `section/key = value` line per option, ordered by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_paths_options(&mut options);
        self.format_build_options(&mut options);
        self.format_tools_options(&mut options);
        self.format_install_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global/dry".into(), self.global.dry.to_string());
        options.insert(
            "global/output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global/file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global/log_file".into(),
            self.global.log_file.display().to_string(),
        );
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        let fmt = |p: &Option<PathBuf>| {
            p.as_ref()
                .map_or_else(String::new, |p| p.display().to_string())
        };

        options.insert("paths/install_root".into(), fmt(&self.paths.install_root));
        options.insert("paths/user_root".into(), fmt(&self.paths.user_root));
        options.insert("paths/resources".into(), fmt(&self.paths.resources));
    }

    fn format_build_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "build/source_dir".into(),
            self.source_dir().display().to_string(),
        );
        options.insert(
            "build/build_dir".into(),
            self.build.build_dir.display().to_string(),
        );
        options.insert(
            "build/configuration".into(),
            self.build.configuration.to_string(),
        );
        options.insert("build/target".into(), self.build.target.clone());
    }

    fn format_tools_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("tools/cmake".into(), self.tools.cmake.display().to_string());
        options.insert("tools/git".into(), self.tools.git.display().to_string());
    }

    fn format_install_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("install/user".into(), self.install.user.clone());
        options.insert(
            "install/require_cmake".into(),
            self.install.require_cmake.to_string(),
        );
    }
}
