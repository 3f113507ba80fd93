// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::loader::ConfigLoader;
use crate::error::{ConfigError, SetupError};
use super::{Config, PathsConfig};
use crate::config::types::BuildConfiguration;
use crate::logging::LogLevel;
use std::path::{Path, PathBuf};

const CWD: &str = "/work/engine";
const HOME: &str = "/home/dev";

fn load(toml: &str) -> Config {
    ConfigLoader::new()
        .add_toml_str(toml)
        .build_in(Path::new(CWD), Some(Path::new(HOME)))
        .expect("config should load")
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.build.configuration, BuildConfiguration::Debug);
    assert_eq!(config.build.target, "all");
    assert_eq!(config.build.build_dir, PathBuf::from("build"));
    assert!(config.install.require_cmake);
    assert!(config.install.user.is_empty());
}

#[test]
fn test_build_configuration_parse() {
    let parsed: Vec<String> = ["debug", "Release", "relwithdebinfo", "MINSIZEREL", "fast"]
        .iter()
        .map(|s| match s.parse::<BuildConfiguration>() {
            Ok(c) => c.to_string(),
            Err(_) => "error".to_string(),
        })
        .collect();
    insta::assert_snapshot!(parsed.join(","), @"Debug,Release,RelWithDebInfo,MinSizeRel,error");
}

#[test]
fn test_paths_default_to_cwd_and_home() {
    let config = load("");
    assert_eq!(config.paths.install_root.as_deref(), Some(Path::new(CWD)));
    assert_eq!(config.paths.user_root.as_deref(), Some(Path::new(HOME)));
    assert_eq!(config.source_dir(), Path::new(CWD));
    assert_eq!(config.build_dir(), Path::new(CWD).join("build"));
}

#[test]
fn test_relative_paths_resolve_against_cwd() {
    let config = load(
        r#"
[paths]
install_root = "dist"
resources = "assets/Resources"

[build]
source_dir = "engine"
build_dir = "out"
"#,
    );
    assert_eq!(
        config.paths.install_root.as_deref(),
        Some(Path::new(CWD).join("dist").as_path())
    );
    assert_eq!(
        config.paths.resources.as_deref(),
        Some(Path::new(CWD).join("assets/Resources").as_path())
    );
    assert_eq!(config.build_dir(), Path::new(CWD).join("engine").join("out"));
}

#[test]
fn test_missing_home_requires_user_root() {
    let mut paths = PathsConfig::default();
    let err = paths
        .resolve(Path::new(CWD), None)
        .expect_err("user_root cannot be resolved");
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required config key 'user_root' in section '[paths]'"
    );

    let mut explicit = PathsConfig {
        user_root: Some(PathBuf::from("/srv/yeager")),
        ..PathsConfig::default()
    };
    explicit
        .resolve(Path::new(CWD), None)
        .expect("explicit user_root needs no home");
    assert_eq!(explicit.user_root().unwrap(), Path::new("/srv/yeager"));
}

#[test]
fn test_unknown_field_rejected() {
    let result = ConfigLoader::new()
        .add_toml_str("[build]\nparallel = true\n")
        .build_in(Path::new(CWD), Some(Path::new(HOME)));
    assert!(result.is_err());
}

#[test]
fn test_set_option_overrides() {
    let config = ConfigLoader::new()
        .add_toml_str("[build]\ntarget = \"engine\"\n")
        .set_option("build/target=editor")
        .unwrap()
        .set_option("global/dry=true")
        .unwrap()
        .set_option("global/output_log_level=5")
        .unwrap()
        .build_in(Path::new(CWD), Some(Path::new(HOME)))
        .unwrap();

    assert_eq!(config.build.target, "editor");
    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::TRACE);
}

#[test]
fn test_set_option_malformed() {
    for bad in ["build/target", "target=editor", "/target=x", "build/=x"] {
        assert!(
            ConfigLoader::new().set_option(bad).is_err(),
            "'{bad}' should be rejected"
        );
    }
}

#[test]
fn test_format_options() {
    let config = load(
        r#"
[install]
user = "yeager"
"#,
    );
    let options: Vec<String> = config
        .format_options()
        .iter()
        .map(|line| line.trim_end().to_string())
        .collect();
    insta::assert_snapshot!(options.join("\n"), @r"
    build/build_dir         = build
    build/configuration     = Debug
    build/source_dir        = /work/engine
    build/target            = all
    global/dry              = false
    global/file_log_level   = 5
    global/log_file         =
    global/output_log_level = 3
    install/require_cmake   = true
    install/user            = yeager
    paths/install_root      = /work/engine
    paths/resources         =
    paths/user_root         = /home/dev
    tools/cmake             =
    tools/git               =
    ");
}

#[test]
fn test_loaded_files_listing() {
    let loader = ConfigLoader::new()
        .add_toml_str("")
        .add_toml_file_optional("/definitely/not/here/yeager.toml");
    insta::assert_snapshot!(loader.format_loaded_files().join("\n"), @"1. [string] <string>");
}

fn config_error(err: &anyhow::Error) -> &ConfigError {
    match err.downcast_ref::<SetupError>() {
        Some(SetupError::Config(config)) => config.as_ref(),
        other => panic!("expected a config error, got {other:?}"),
    }
}

#[test]
fn test_missing_required_file_is_not_found() {
    let err = ConfigLoader::new()
        .add_toml_file("/definitely/not/here/yeager.toml")
        .build_in(Path::new(CWD), Some(Path::new(HOME)))
        .expect_err("required file is missing");

    assert!(matches!(config_error(&err), ConfigError::NotFound(_)));
    insta::assert_snapshot!(
        err.to_string(),
        @"config error: config file not found: /definitely/not/here/yeager.toml"
    );
}

#[test]
fn test_directory_as_required_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConfigLoader::new()
        .add_toml_file(dir.path())
        .build_in(Path::new(CWD), Some(Path::new(HOME)))
        .expect_err("a directory is not a config file");
    assert!(matches!(config_error(&err), ConfigError::NotFound(_)));
}

#[test]
fn test_broken_toml_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("yeager.toml");
    std::fs::write(&path, "[build\ntarget = ").unwrap();

    let err = ConfigLoader::new()
        .add_toml_file(&path)
        .build_in(Path::new(CWD), Some(Path::new(HOME)))
        .expect_err("file is not valid TOML");

    let ConfigError::ParseError { path: reported, .. } = config_error(&err) else {
        panic!("expected a parse error, got {err:#}");
    };
    assert!(reported.ends_with("yeager.toml"));
    assert!(err.to_string().starts_with("config error: failed to parse config file"));
}

#[test]
fn test_broken_toml_string_is_parse_error() {
    let err = ConfigLoader::new()
        .add_toml_str("global = [")
        .build_in(Path::new(CWD), Some(Path::new(HOME)))
        .expect_err("string is not valid TOML");
    assert!(matches!(
        config_error(&err),
        ConfigError::ParseError { path, .. } if path == "<string>"
    ));
}

#[cfg(unix)]
#[test]
fn test_unreadable_required_file_is_read_error() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let locked = dir.path().join("locked");
    std::fs::create_dir(&locked).unwrap();
    std::fs::write(locked.join("yeager.toml"), "").unwrap();
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

    let readable = std::fs::metadata(locked.join("yeager.toml"));
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
    if readable.is_ok() {
        // root ignores directory permissions
        return;
    }

    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
    let result = ConfigLoader::new()
        .add_toml_file(locked.join("yeager.toml"))
        .build_in(Path::new(CWD), Some(Path::new(HOME)));
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

    let err = result.expect_err("file metadata is unreadable");
    assert!(matches!(config_error(&err), ConfigError::ReadError { .. }));
}
