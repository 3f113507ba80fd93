// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;

use anyhow::Result;
use tokio_util::sync::CancellationToken;

use super::{CmakeOperation, CmakeTool};
use crate::config::Config;
use crate::config::types::BuildConfiguration;
use crate::tools::test_utils::run_with_logs;
use crate::tools::{Tool, ToolContext};

fn dry_ctx() -> ToolContext {
    ToolContext::new(Arc::new(Config::default()), CancellationToken::new(), true)
}

#[test]
fn test_cmake_defaults() {
    let tool = CmakeTool::new();
    assert_eq!(tool.operation(), CmakeOperation::Build);

    let args = tool.build_args().unwrap();
    let expected_build = std::env::current_dir().unwrap().join("build");
    assert_eq!(args[0], "--build");
    assert_eq!(args[1], expected_build.display().to_string());
    assert_eq!(&args[2..], ["--config", "Debug", "--target", "all"]);
}

#[test]
fn test_cmake_from_config() {
    let mut config = Config::parse(
        r#"
[build]
source_dir = "/src/yeager"
build_dir = "out"
configuration = "Release"
target = "Editor"
"#,
    )
    .unwrap();
    config
        .resolve_and_validate(std::path::Path::new("/work"), Some(std::path::Path::new("/home/dev")))
        .unwrap();

    let tool = CmakeTool::from_config(&config);
    let build = std::path::Path::new("/src/yeager").join("out").display().to_string();
    assert_eq!(
        tool.build_args().unwrap(),
        ["--build", build.as_str(), "--config", "Release", "--target", "Editor"]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn test_cmake_build_dry_run() -> Result<()> {
    let (status, logs) = run_with_logs(|| async {
        CmakeTool::new()
            .build_dir("/tmp/build")
            .configuration(BuildConfiguration::RelWithDebInfo)
            .build(&dry_ctx())
            .await
    })
    .await?;

    assert_eq!(status, 0);
    insta::assert_snapshot!(
        logs,
        @"[dry-run] Would build with CMake args=--build /tmp/build --config RelWithDebInfo --target all"
    );
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn test_cmake_configure_dry_run() -> Result<()> {
    let ((), logs) = run_with_logs(|| async {
        let tool = CmakeTool::new()
            .source_dir("/tmp/source")
            .build_dir("/tmp/source/build")
            .configure_op();
        tool.run(&dry_ctx()).await
    })
    .await?;

    insta::assert_snapshot!(
        logs,
        @"[dry-run] Would configure CMake args=-S /tmp/source -B /tmp/source/build"
    );
    Ok(())
}

#[cfg(unix)]
fn fake_cmake(dir: &std::path::Path, exit_code: i32) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("cmake");
    std::fs::write(&path, format!("#!/bin/sh\nexit {exit_code}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
fn ctx_with_cmake(cmake: std::path::PathBuf) -> ToolContext {
    let mut config = Config::default();
    config.tools.cmake = cmake;
    ToolContext::new(Arc::new(config), CancellationToken::new(), false)
}

#[cfg(unix)]
#[tokio::test]
async fn test_cmake_build_returns_failing_status() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = ctx_with_cmake(fake_cmake(dir.path(), 3));

    let status = CmakeTool::new()
        .build_dir(dir.path())
        .build(&ctx)
        .await
        .expect("a failing build is not an error");
    assert_eq!(status, 3);
}

#[cfg(unix)]
#[tokio::test]
async fn test_cmake_is_installed_with_override() {
    let dir = tempfile::tempdir().unwrap();
    assert!(CmakeTool::is_installed(&ctx_with_cmake(fake_cmake(dir.path(), 0))).await);

    let broken = tempfile::tempdir().unwrap();
    assert!(!CmakeTool::is_installed(&ctx_with_cmake(fake_cmake(broken.path(), 1))).await);
    assert!(!CmakeTool::is_installed(&ctx_with_cmake(dir.path().join("missing"))).await);
}

#[cfg(unix)]
#[tokio::test]
async fn test_cmake_configure_failure_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = ctx_with_cmake(fake_cmake(dir.path(), 1));

    let err = CmakeTool::new()
        .source_dir(dir.path())
        .configure_op()
        .run(&ctx)
        .await
        .expect_err("configure failure propagates");
    assert!(format!("{err:#}").contains("failed to run CMake configure"));
}

#[test]
fn test_cmake_name() {
    assert_eq!(CmakeTool::new().name(), "cmake");
}
