// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{ConfigError, FsError, PlatformError, SetupError, SetupResult, bail_out};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "paths".to_string(),
        key: "install_root".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required config key 'install_root' in section '[paths]'"
    );
}

#[test]
fn test_platform_error_display() {
    let err: SetupError = PlatformError::UnknownOs {
        name: "haiku".to_string(),
    }
    .into();
    insta::assert_snapshot!(err.to_string(), @"platform error: unknown operating system: haiku");
}

#[test]
fn test_fs_error_from_copy_classifies_kind() {
    let src = Path::new("/src");
    let dst = Path::new("/dst");

    let denied = FsError::from_copy(
        src,
        dst,
        std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    );
    assert!(matches!(denied, FsError::PermissionDenied { .. }));
    insta::assert_snapshot!(denied.to_string(), @"permissions error on /src to /dst");

    let missing = FsError::from_copy(src, dst, std::io::Error::from(std::io::ErrorKind::NotFound));
    assert!(matches!(missing, FsError::NotFound(_)));

    let other = FsError::from_copy(src, dst, std::io::Error::other("disk on fire"));
    assert!(matches!(other, FsError::IoError { .. }));
}

#[test]
fn test_environment_errors() {
    let user: SetupError = PlatformError::UserNotFound {
        user: "yeager".to_string(),
    }
    .into();
    assert!(user.is_environment());
    assert!(bail_out("stop").is_environment());

    let denied: SetupError = FsError::PermissionDenied {
        src: "a".to_string(),
        dst: "b".to_string(),
    }
    .into();
    assert!(denied.is_environment());

    let missing: SetupError = FsError::NotFound("a".to_string()).into();
    assert!(!missing.is_environment());
}

#[test]
fn test_io_error_boxes_into_setup_error() {
    let err = SetupError::from(std::io::Error::other("wait failed"));
    assert!(matches!(err, SetupError::Io(_)));
    assert!(!err.is_environment());
    insta::assert_snapshot!(err.to_string(), @"io error: wait failed");
}

#[test]
fn test_setup_error_size() {
    // Box<str> (Bailed) is 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<SetupError>();
    assert!(size <= 24, "SetupError is {size} bytes, expected <= 24");
}

#[test]
fn test_setup_result_size() {
    let size = std::mem::size_of::<SetupResult<()>>();
    assert!(size <= 24, "SetupResult<()> is {size} bytes, expected <= 24");
}
