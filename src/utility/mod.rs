// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   probe: verify_item_exists() --> ItemKind { Dir, File, Missing }
//!   copy:  copy_files_async()        flat, top-level files only
//!          copy_dir_contents_async() recursive merge
//! ```

pub mod fs;
