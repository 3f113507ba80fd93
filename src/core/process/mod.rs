// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and management.
//!
//! ```text
//! ProcessBuilder::new("cmake")
//!   .args() .cwd() .capture_stdout() .inherit_stdio()
//!   .run() / .run_with_cancellation()
//!       --> tokio::process::Command (kill_on_drop)
//!           stream stdout/stderr
//!       --> ProcessOutput { exit_code, stdout, stderr }
//!
//! shell: run_command, validate_command, tool_installed
//! ```

pub mod builder;
mod io;
mod runner;
pub mod shell;

pub use builder::{ProcessBuilder, ProcessFlags, ProcessOutput, StreamFlags};
pub use shell::{run_command, tool_installed, validate_command};
