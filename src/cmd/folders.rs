// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `folders` and `layout` commands.

use std::fmt::Write as _;

use anyhow::Context;
use serde_json::{Map, Value};
use tracing::info;

use crate::cli::setup::{FoldersArgs, LayoutArgs, TreeChoice};
use crate::config::Config;
use crate::error::Result;
use crate::layout::materialize;

/// Creates the selected trees under their configured bases.
///
/// # Errors
///
/// Returns an error if a base is unresolved or a folder cannot be created.
pub async fn run_folders_command(args: &FoldersArgs, config: &Config) -> Result<()> {
    create_trees(args.tree, config, config.global.dry).await
}

pub(crate) async fn create_trees(choice: TreeChoice, config: &Config, dry_run: bool) -> Result<()> {
    for &layout in choice.layouts() {
        let base = layout.base(config)?;
        let report = materialize(layout.tree(), base, dry_run).await?;
        info!(
            tree = %layout,
            base = %base.display(),
            created = report.created,
            total = report.total(),
            "folders ready"
        );
    }
    Ok(())
}

/// Prints the declared trees.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn run_layout_command(args: &LayoutArgs) -> Result<()> {
    println!("{}", render_layout(args.tree, args.json)?);
    Ok(())
}

/// Text: one `[tree]` header followed by its relative paths, per tree.
/// JSON: an object keyed by tree name holding the nested declaration.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render_layout(choice: TreeChoice, json: bool) -> Result<String> {
    if json {
        let mut trees = Map::new();
        for &layout in choice.layouts() {
            trees.insert(
                layout.to_string(),
                serde_json::to_value(layout.tree()).context("failed to serialize folder tree")?,
            );
        }
        return serde_json::to_string_pretty(&Value::Object(trees))
            .context("failed to serialize folder tree");
    }

    let mut out = String::new();
    for (i, &layout) in choice.layouts().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "[{layout}]");
        for (_, path) in layout.tree().walk() {
            let _ = writeln!(out, "{}", path.to_string_lossy().replace('\\', "/"));
        }
    }
    Ok(out.trim_end().to_string())
}
