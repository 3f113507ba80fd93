// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!             SetupError (~24 bytes)
//!                     |
//!   +------+-----+----+----+-----+-----+------+
//!   |      |     |    |    |     |     |      |
//!   v      v     v    v    v     v     v      v
//! Bail   Plat   Git  Cfg  Proc   Fs  Layout   Io
//! Box<str> Box  Box  Box  Box   Box   Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Platform UnknownOs, UserNotFound
//!   Git      CloneFailed, CommandFailed
//!   Config   ReadError, ParseError, MissingKey, InvalidValue, NotFound
//!   Process  ExecutableNotFound, SpawnFailed, NonZeroExit, OutputError
//!   Fs       NotFound, PermissionDenied, IoError
//!   Layout   InvalidName
//!
//! All variants boxed => SetupError fits in 24 bytes.
//! ```

use std::path::Path;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SetupError`].
pub type SetupResult<T> = std::result::Result<T, SetupError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Host platform is unusable (unknown OS, missing account).
    #[error("platform error: {0}")]
    Platform(#[from] Box<PlatformError>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Folder layout error.
    #[error("layout error: {0}")]
    Layout(#[from] Box<LayoutError>),

    /// I/O error outside a copy, such as waiting on a child.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Create a fatal [`SetupError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> SetupError {
    SetupError::Bailed(message.into().into_boxed_str())
}

impl SetupError {
    /// Returns true for errors the installer cannot recover from.
    ///
    /// These are the environment failures: unknown host, missing account,
    /// permission denied while copying.
    #[must_use]
    pub fn is_environment(&self) -> bool {
        match self {
            Self::Bailed(_) | Self::Platform(_) => true,
            Self::Fs(fs) => matches!(**fs, FsError::PermissionDenied { .. }),
            _ => false,
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SetupError {
                fn from(err: $error) -> Self {
                    SetupError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    PlatformError => Platform,
    GitError => Git,
    ConfigError => Config,
    ProcessError => Process,
    FsError => Fs,
    LayoutError => Layout,
    std::io::Error => Io,
}

// --- Platform Errors ---

/// Host environment errors.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The host operating system is not Linux, macOS or Windows.
    #[error("unknown operating system: {name}")]
    UnknownOs { name: String },

    /// A required OS user account does not exist.
    #[error("user {user} does not exist")]
    UserNotFound { user: String },
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git could not be run at all.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Clone operation failed.
    #[error("failed to clone {url}: {message}")]
    CloneFailed { url: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Failed to read process output.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied while copying.
    #[error("permissions error on {src} to {dst}")]
    PermissionDenied { src: String, dst: String },

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classifies an I/O error raised while copying `src` into `dst`.
    #[must_use]
    pub fn from_copy(src: &Path, dst: &Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                src: src.display().to_string(),
                dst: dst.display().to_string(),
            },
            std::io::ErrorKind::NotFound => Self::NotFound(src.display().to_string()),
            _ => Self::IoError {
                path: src.display().to_string(),
                source,
            },
        }
    }
}

// --- Layout Errors ---

/// Folder layout errors.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A folder name is empty, `.` or `..`, or contains `/` or `\`.
    #[error("invalid folder name '{name}'")]
    InvalidName { name: String },
}

#[cfg(test)]
mod tests;
