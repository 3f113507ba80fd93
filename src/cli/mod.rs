// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for yeager-setup using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! yeager-setup [global options] <command>
//! version | options | inis
//! install [--compile] [--skip-user-check]
//! folders [--tree private|public|all]
//! layout  [--tree ..] [--json]
//! compile [--configure]
//! clone <URL> [DIR]
//! exists <PATH>
//! copy <SRC> <DST> [--flat] [--announce]
//! exec [--capture] <COMMAND>...
//! check {platform|cmake|user <NAME>}
//! ```

pub mod argv;
pub mod global;
pub mod setup;


use clap::{Parser, Subcommand};

use crate::cli::global::GlobalOptions;
use crate::cli::setup::{
    CheckArgs, CloneArgs, CompileArgs, CopyArgs, ExecArgs, ExistsArgs, FoldersArgs, InstallArgs,
    LayoutArgs,
};

/// Yeager Engine setup tool
///
/// Creates the engine's folder layout and drives cmake and git.
#[derive(Debug, Parser)]
#[command(
    name = "yeager-setup",
    author,
    version,
    about = "Yeager Engine setup tool",
    long_about = "yeager-setup Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Prepares a machine for the Yeager Engine: creates the private\n\
                  application folders under the install root and the public\n\
                  folders under the user's home, copies resources and builds the\n\
                  engine with cmake. See `yeager-setup <command> --help` for more\n\
                  information about a command.",
    after_help = "CONFIGURATION:\n\n\
                  yeager-setup reads `yeager.toml` from the current directory if it\n\
                  exists, then every --ini file in order, then YEAGER_* environment\n\
                  variables (e.g. YEAGER_PATHS__USER_ROOT), then --set overrides.\n\
                  Use --no-default-inis to skip `yeager.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files that were loaded.
    Inis,

    /// Runs the full installation.
    Install(InstallArgs),

    /// Creates the folder trees.
    Folders(FoldersArgs),

    /// Prints the declared folder trees.
    Layout(LayoutArgs),

    /// Builds the engine with cmake.
    Compile(CompileArgs),

    /// Clones a git repository.
    Clone(CloneArgs),

    /// Tells whether a path is a directory, a file or missing.
    Exists(ExistsArgs),

    /// Copies a directory's contents.
    Copy(CopyArgs),

    /// Runs a shell command.
    Exec(ExecArgs),

    /// Checks a prerequisite.
    Check(CheckArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
