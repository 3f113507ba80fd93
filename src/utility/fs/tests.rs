// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use tempfile::TempDir;

use super::{ItemKind, copy_dir_contents_async, copy_files_async, verify_item_exists};
use crate::error::{FsError, SetupError};

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// src/{a.txt, b.cfg, nested/c.txt, nested/deeper/d.txt}
fn populate(root: &Path) {
    std::fs::create_dir_all(root.join("nested/deeper")).unwrap();
    std::fs::write(root.join("a.txt"), "a").unwrap();
    std::fs::write(root.join("b.cfg"), "b").unwrap();
    std::fs::write(root.join("nested/c.txt"), "c").unwrap();
    std::fs::write(root.join("nested/deeper/d.txt"), "d").unwrap();
}

fn listing(root: &Path) -> Vec<String> {
    fn visit(root: &Path, dir: &Path, out: &mut Vec<String>) {
        for entry in std::fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            let rel = path.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/");
            if path.is_dir() {
                out.push(format!("{rel}/"));
                visit(root, &path, out);
            } else {
                out.push(rel);
            }
        }
    }
    let mut out = Vec::new();
    visit(root, root, &mut out);
    out.sort();
    out
}

#[test]
fn test_verify_item_exists() {
    let temp = temp_dir();
    let file = temp.path().join("engine.toml");
    std::fs::write(&file, "").unwrap();

    let kinds = [
        verify_item_exists(temp.path()).as_pair(),
        verify_item_exists(&file).as_pair(),
        verify_item_exists(&temp.path().join("missing")).as_pair(),
    ];
    insta::assert_debug_snapshot!(kinds, @r#"
    [
        (
            true,
            Some(
                "Dir",
            ),
        ),
        (
            true,
            Some(
                "File",
            ),
        ),
        (
            false,
            None,
        ),
    ]
    "#);
}

#[test]
fn test_item_kind_display() {
    let names: Vec<String> = [ItemKind::Dir, ItemKind::File, ItemKind::Missing]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(names, ["Dir", "File", "Missing"]);
    assert!(ItemKind::File.exists());
    assert!(!ItemKind::Missing.exists());
}

#[tokio::test]
async fn test_copy_files_is_flat() {
    let src = temp_dir();
    let dst = temp_dir();
    populate(src.path());
    let target = dst.path().join("created/on/demand");

    let copied = copy_files_async(src.path(), &target, false).await.unwrap();

    assert_eq!(copied, 2);
    assert_eq!(listing(&target), ["a.txt", "b.cfg"]);
}

#[tokio::test]
async fn test_copy_files_missing_source() {
    let dst = temp_dir();
    let err = copy_files_async(Path::new("/nonexistent/yeager/src"), dst.path(), true)
        .await
        .expect_err("source does not exist");
    assert!(matches!(err, SetupError::Fs(ref fs) if matches!(**fs, FsError::NotFound(_))));
}

#[tokio::test]
async fn test_copy_dir_contents_recursive_merge() {
    let src = temp_dir();
    let dst = temp_dir();
    populate(src.path());
    std::fs::write(dst.path().join("kept.txt"), "kept").unwrap();
    std::fs::write(dst.path().join("a.txt"), "old").unwrap();

    let copied = copy_dir_contents_async(src.path(), dst.path()).await.unwrap();

    assert_eq!(copied, 4);
    insta::assert_debug_snapshot!(listing(dst.path()), @r#"
    [
        "a.txt",
        "b.cfg",
        "kept.txt",
        "nested/",
        "nested/c.txt",
        "nested/deeper/",
        "nested/deeper/d.txt",
    ]
    "#);
    assert_eq!(std::fs::read_to_string(dst.path().join("a.txt")).unwrap(), "a");
}

#[cfg(unix)]
#[tokio::test]
async fn test_copy_dir_contents_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let src = temp_dir();
    let dst = temp_dir();
    let secret = src.path().join("secret.bin");
    std::fs::write(&secret, "x").unwrap();
    std::fs::set_permissions(&secret, std::fs::Permissions::from_mode(0o000)).unwrap();

    // root ignores file modes
    if std::fs::read(&secret).is_ok() {
        return;
    }

    let err = copy_dir_contents_async(src.path(), dst.path())
        .await
        .expect_err("unreadable file");
    assert!(err.is_environment());
    let message = err
        .to_string()
        .replace(&src.path().display().to_string(), "<src>")
        .replace(&dst.path().display().to_string(), "<dst>");
    insta::assert_snapshot!(
        message,
        @"filesystem error: permissions error on <src>/secret.bin to <dst>/secret.bin"
    );
}
