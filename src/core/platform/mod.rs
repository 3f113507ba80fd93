// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Host platform detection and path normalization.
//!
//! ```text
//! OperatingSystem::detect()  (once, in main)
//!        |
//!        v
//!  Linux | Darwin | Windows   other --> PlatformError::UnknownOs
//!        |
//!        v
//! path_compatible(os, "a/b/c")
//!   Windows        --> "a\b\c"
//!   anything else  --> "a/b/c"
//! ```

use std::borrow::Cow;
use std::fmt;

use tracing::debug;

use crate::error::{PlatformError, SetupResult};

/// Host operating system family.
///
/// `Undefined` is the value before detection has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatingSystem {
    Windows,
    Linux,
    Darwin,
    #[default]
    Undefined,
}

impl OperatingSystem {
    /// Detects the operating system this binary runs on.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::UnknownOs` on any host other than Linux,
    /// macOS or Windows.
    pub fn detect() -> SetupResult<Self> {
        let os = Self::from_os_name(std::env::consts::OS)?;
        debug!(os = %os, "detected platform");
        Ok(os)
    }

    /// Maps a `std::env::consts::OS` style name to a platform.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::UnknownOs` for unrecognized names.
    pub fn from_os_name(name: &str) -> SetupResult<Self> {
        match name {
            "linux" => Ok(Self::Linux),
            "macos" => Ok(Self::Darwin),
            "windows" => Ok(Self::Windows),
            other => Err(PlatformError::UnknownOs {
                name: other.to_string(),
            }
            .into()),
        }
    }

    /// Native path separator.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Windows => '\\',
            _ => '/',
        }
    }

    #[must_use]
    pub const fn is_posix(self) -> bool {
        matches!(self, Self::Linux | Self::Darwin)
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Windows => "Windows",
            Self::Linux => "Linux",
            Self::Darwin => "Darwin",
            Self::Undefined => "Undefined",
        };
        f.write_str(name)
    }
}

/// Rewrites a forward-slash path with the separator of `os`.
///
/// Only Windows changes anything; every other value (including `Undefined`)
/// returns the input borrowed and unchanged.
#[must_use]
pub fn path_compatible(os: OperatingSystem, path: &str) -> Cow<'_, str> {
    if os == OperatingSystem::Windows && path.contains('/') {
        Cow::Owned(path.replace('/', "\\"))
    } else {
        Cow::Borrowed(path)
    }
}
