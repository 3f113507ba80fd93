// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem probes and async copy helpers.
//!
//! ```text
//! probe: verify_item_exists(path)   dir checked before file
//!        verify_dir_exists / verify_file_exists
//! copy:  copy_files_async(src, dst, announce)
//!        copy_dir_contents_async(src, dst)
//!        io errors --> FsError { PermissionDenied | NotFound | IoError }
//! ```

pub mod copy;
pub mod probe;

pub use copy::{copy_dir_contents_async, copy_files_async};
pub use probe::{ItemKind, verify_dir_exists, verify_file_exists, verify_item_exists};

#[cfg(test)]
mod tests;
