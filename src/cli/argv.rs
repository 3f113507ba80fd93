// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bounds-checked access to raw process arguments.

use tracing::warn;

/// Returns `args[index]`, or `None` with a warning when out of range.
#[must_use]
pub fn safe_from_argv(args: &[String], index: usize) -> Option<&str> {
    let arg = args.get(index).map(String::as_str);
    if arg.is_none() {
        warn!(argc = args.len(), index, "requested argument is out of range");
    }
    arg
}

/// [`safe_from_argv`] over the arguments this process was started with.
#[must_use]
pub fn nth_arg(index: usize) -> Option<String> {
    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    safe_from_argv(&args, index).map(str::to_owned)
}
