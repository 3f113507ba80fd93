// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   install, folders/layout, compile, clone,
//!   exists/copy, exec, check, options/inis
//! ```

pub mod check;
pub mod clone;
pub mod compile;
pub mod config;
pub mod exec;
pub mod folders;
pub mod fs;
pub mod install;
