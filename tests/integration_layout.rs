// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end tests for creating the engine folder trees.

use yeager_setup::cli::setup::TreeChoice;
use yeager_setup::cmd::folders::render_layout;
use yeager_setup::config::Config;
use yeager_setup::layout::{Layout, PRIVATE_FOLDERS, PUBLIC_FOLDERS, materialize};

#[tokio::test]
async fn layout_both_trees_under_configured_roots() {
    let install = tempfile::tempdir().unwrap();
    let user = tempfile::tempdir().unwrap();

    let config = Config::builder()
        .set_option(&format!("paths/install_root={}", install.path().display()))
        .unwrap()
        .set_option(&format!("paths/user_root={}", user.path().display()))
        .unwrap()
        .build_in(install.path(), None)
        .unwrap();

    for layout in Layout::ALL {
        let base = layout.base(&config).unwrap();
        let report = materialize(layout.tree(), base, false).await.unwrap();
        assert_eq!(report.total(), layout.tree().len());
    }

    assert!(install.path().join("YeagerEngine/Resources/Fonts/Editor").is_dir());
    assert!(install.path().join("YeagerEngine/Templates/EmptyScene/Assets/Skybox").is_dir());
    assert!(user.path().join("YeagerEngine/Logs/CrashReport").is_dir());
    assert!(user.path().join("YeagerEngine/Versions/1.0.0-dev").is_dir());
}

#[tokio::test]
async fn layout_second_run_creates_nothing() {
    let temp = tempfile::tempdir().unwrap();

    let first = materialize(&PRIVATE_FOLDERS, temp.path(), false).await.unwrap();
    let second = materialize(&PRIVATE_FOLDERS, temp.path(), false).await.unwrap();

    assert_eq!(first.created, PRIVATE_FOLDERS.len());
    assert_eq!(second.created, 0);
    assert_eq!(second.already_present, PRIVATE_FOLDERS.len());
    assert_eq!(first.paths, second.paths);
}

#[tokio::test]
async fn layout_dry_run_leaves_disk_alone() {
    let temp = tempfile::tempdir().unwrap();

    let report = materialize(&PUBLIC_FOLDERS, temp.path(), true).await.unwrap();

    assert_eq!(report.created, PUBLIC_FOLDERS.len());
    assert!(!temp.path().join("YeagerEngine").exists());
}

#[test]
fn layout_text_rendering_of_public_tree() {
    let text = render_layout(TreeChoice::Public, false).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("[public]"));
    assert_eq!(lines.next(), Some("YeagerEngine"));
    assert_eq!(text.lines().count(), PUBLIC_FOLDERS.len() + 1);
    assert!(text.lines().any(|line| line == "YeagerEngine/Logs/CrashReport"));
}

#[test]
fn layout_json_has_one_key_per_tree() {
    let json = render_layout(TreeChoice::All, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let object = value.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    insta::assert_debug_snapshot!(keys, @r#"
    [
        "private",
        "public",
    ]
    "#);
    assert_eq!(object["public"]["name"], "YeagerEngine");
}
