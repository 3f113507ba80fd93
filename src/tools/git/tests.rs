// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tokio_util::sync::CancellationToken;

use super::GitTool;
use crate::config::Config;
use crate::error::{GitError, SetupError};
use crate::core::process::ProcessBuilder;
use crate::tools::test_utils::run_with_logs;
use crate::tools::{Tool, ToolContext};

fn ctx(dry_run: bool) -> ToolContext {
    ToolContext::new(Arc::new(Config::default()), CancellationToken::new(), dry_run)
}

#[tokio::test(flavor = "current_thread")]
async fn test_clone_dry_run() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let (cloned, logs) = run_with_logs(|| async {
        GitTool::new()
            .url("https://example.com/yeager/engine.git")
            .path(dir.path())
            .clone_repository(&ctx(true))
            .await
    })
    .await?;

    assert!(cloned);
    let logs = logs.replace(&dir.path().display().to_string(), "<dir>");
    insta::assert_snapshot!(
        logs,
        @"[dry-run] Would clone repository url=https://example.com/yeager/engine.git dir=<dir>"
    );
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn test_clone_missing_dir_warns() -> Result<()> {
    let (cloned, logs) = run_with_logs(|| async {
        GitTool::new()
            .url("https://example.com/yeager/engine.git")
            .path("/nonexistent/yeager/target")
            .clone_repository(&ctx(true))
            .await
    })
    .await?;

    assert!(cloned);
    insta::assert_snapshot!(logs, @r"
    clone target directory does not exist, cloning in the current directory path=/nonexistent/yeager/target
    [dry-run] Would clone repository url=https://example.com/yeager/engine.git dir=.
    ");
    Ok(())
}

#[tokio::test]
async fn test_clone_requires_url() {
    let err = GitTool::new()
        .clone_repository(&ctx(true))
        .await
        .expect_err("url is required");
    insta::assert_snapshot!(err.to_string(), @"GitTool: url is required");
}

async fn git(args: &[&str], cwd: &Path) {
    ProcessBuilder::new("git")
        .args(args)
        .cwd(cwd)
        .quiet()
        .run()
        .await
        .expect("git setup command");
}

#[tokio::test]
async fn test_clone_local_repository() {
    if !ProcessBuilder::exists("git") {
        return;
    }

    let origin = tempfile::tempdir().unwrap();
    git(&["init", "--quiet", "engine"], origin.path()).await;

    let target = tempfile::tempdir().unwrap();
    let url = origin.path().join("engine").display().to_string();
    let cloned = GitTool::new()
        .url(&url)
        .path(target.path())
        .clone_repository(&ctx(false))
        .await
        .unwrap();

    assert!(cloned);
    assert!(target.path().join("engine").join(".git").is_dir());
}

#[tokio::test]
async fn test_failed_clone_reports_false_and_run_errors() {
    if !ProcessBuilder::exists("git") {
        return;
    }

    let target = tempfile::tempdir().unwrap();
    let missing = target.path().join("no-such-repository");
    let tool = GitTool::new()
        .url(missing.display().to_string())
        .path(target.path());

    assert!(!tool.clone_repository(&ctx(false)).await.unwrap());

    let err = tool.run(&ctx(false)).await.expect_err("run turns failure into an error");
    assert!(err.to_string().starts_with("git error: failed to clone"));
}

#[tokio::test]
async fn test_unrunnable_git_is_a_command_failure() {
    let mut config = Config::default();
    config.tools.git = "/nonexistent/yeager/bin/git".into();
    let ctx = ToolContext::new(Arc::new(config), CancellationToken::new(), false);

    let err = GitTool::new()
        .url("https://example.com/yeager/engine.git")
        .clone_repository(&ctx)
        .await
        .expect_err("git cannot be spawned");

    let setup = err.downcast_ref::<SetupError>().expect("typed error");
    assert!(matches!(setup, SetupError::Git(git) if matches!(**git, GitError::CommandFailed { .. })));
    assert!(err.to_string().starts_with(
        "git error: git command failed: /nonexistent/yeager/bin/git clone https://example.com/yeager/engine.git"
    ));
}
