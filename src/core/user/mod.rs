// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! OS account lookup.
//!
//! POSIX hosts ask `id -u <name>`; other hosts have nothing to check.

use tracing::debug;

use crate::error::Result;

#[cfg(unix)]
use crate::core::process::{ProcessBuilder, ProcessFlags};
#[cfg(unix)]
use crate::error::{PlatformError, SetupError};

/// Fails with [`PlatformError::UserNotFound`] unless `user` names an
/// existing account.
///
/// # Errors
///
/// Returns `PlatformError::UserNotFound` when the lookup fails, or a process
/// error when `id` itself cannot be spawned.
#[cfg(unix)]
pub async fn ensure_user_exists(user: &str) -> Result<()> {
    if user.is_empty() || user.starts_with('-') {
        return Err(user_not_found(user).into());
    }

    let output = ProcessBuilder::new("id")
        .args(["-u", user])
        .capture_stdout()
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await?;

    if !output.success() {
        return Err(user_not_found(user).into());
    }

    debug!(user = %user, uid = %output.stdout().trim(), "user exists");
    Ok(())
}

/// Account lookup is a POSIX concern; elsewhere every name passes.
///
/// # Errors
///
/// Never fails on this platform.
#[cfg(not(unix))]
pub async fn ensure_user_exists(user: &str) -> Result<()> {
    debug!(user = %user, "skipping user check on this platform");
    Ok(())
}

#[cfg(unix)]
fn user_not_found(user: &str) -> SetupError {
    PlatformError::UserNotFound {
        user: user.to_string(),
    }
    .into()
}
