// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for yeager-setup.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, PathsConfig, BuildConfig, ToolsConfig, InstallConfig
//! ```
//!
//! # Build Configuration
//!
//! ```text
//! BuildConfiguration: Debug (default) | Release | RelWithDebInfo | MinSizeRel
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// `CMake` build configuration (`--config` value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum BuildConfiguration {
    #[default]
    Debug,
    Release,
    RelWithDebInfo,
    MinSizeRel,
}

impl std::fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debug => write!(f, "Debug"),
            Self::Release => write!(f, "Release"),
            Self::RelWithDebInfo => write!(f, "RelWithDebInfo"),
            Self::MinSizeRel => write!(f, "MinSizeRel"),
        }
    }
}

impl std::str::FromStr for BuildConfiguration {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "release" => Ok(Self::Release),
            "relwithdebinfo" => Ok(Self::RelWithDebInfo),
            "minsizerel" => Ok(Self::MinSizeRel),
            _ => Err(ConfigError::InvalidValue {
                section: "build".to_string(),
                key: "configuration".to_string(),
                message: format!(
                    "expected 'Debug', 'Release', 'RelWithDebInfo' or 'MinSizeRel', got '{s}'"
                ),
            }),
        }
    }
}

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log what would happen without touching the filesystem or spawning tools.
    pub dry: bool,
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file (empty = no log file).
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::new(),
        }
    }
}

/// Engine build settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Engine source directory (default: current directory).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dir: Option<PathBuf>,
    /// `CMake` binary directory, relative to `source_dir` unless absolute.
    pub build_dir: PathBuf,
    /// Build configuration passed as `--config`.
    pub configuration: BuildConfiguration,
    /// Target passed as `--target`.
    pub target: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: None,
            build_dir: PathBuf::from("build"),
            configuration: BuildConfiguration::Debug,
            target: "all".to_string(),
        }
    }
}

/// External tool paths. Empty means "look up on PATH".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// Path to cmake.
    pub cmake: PathBuf,
    /// Path to git.
    pub git: PathBuf,
}

/// Installer behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallConfig {
    /// OS account that must exist before installing (empty = skip check).
    pub user: String,
    /// Abort the install when cmake is not runnable.
    pub require_cmake: bool,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            user: String::new(),
            require_cmake: true,
        }
    }
}
