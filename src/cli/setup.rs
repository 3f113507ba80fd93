// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the setup commands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::layout::Layout;

/// Which declared tree(s) a command works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TreeChoice {
    /// Application folders under the install root.
    Private,
    /// User folders under the user root.
    Public,
    /// Both trees, private first.
    #[default]
    All,
}

impl TreeChoice {
    #[must_use]
    pub fn layouts(self) -> &'static [Layout] {
        match self {
            Self::Private => &[Layout::Private],
            Self::Public => &[Layout::Public],
            Self::All => &Layout::ALL,
        }
    }
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, Args)]
pub struct InstallArgs {
    /// Builds the engine with cmake once the folders are in place.
    #[arg(long)]
    pub compile: bool,

    /// Skips the check that `install.user` exists.
    #[arg(long = "skip-user-check")]
    pub skip_user_check: bool,
}

/// Arguments for the `folders` command.
#[derive(Debug, Clone, Default, Args)]
pub struct FoldersArgs {
    /// Tree(s) to create.
    #[arg(long, value_enum, default_value_t = TreeChoice::All)]
    pub tree: TreeChoice,
}

/// Arguments for the `layout` command.
#[derive(Debug, Clone, Default, Args)]
pub struct LayoutArgs {
    /// Tree(s) to print.
    #[arg(long, value_enum, default_value_t = TreeChoice::All)]
    pub tree: TreeChoice,

    /// Prints the nested declaration as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `compile` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CompileArgs {
    /// Runs `cmake -S <source> -B <build>` before building.
    #[arg(long)]
    pub configure: bool,
}

/// Arguments for the `clone` command.
#[derive(Debug, Clone, Args)]
pub struct CloneArgs {
    /// Repository URL.
    #[arg(value_name = "URL")]
    pub url: String,

    /// Directory to clone inside (default: current directory).
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

/// Arguments for the `exists` command.
#[derive(Debug, Clone, Args)]
pub struct ExistsArgs {
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Arguments for the `copy` command.
#[derive(Debug, Clone, Args)]
pub struct CopyArgs {
    #[arg(value_name = "SRC")]
    pub src: PathBuf,

    #[arg(value_name = "DST")]
    pub dst: PathBuf,

    /// Copies only the files directly inside SRC.
    #[arg(long)]
    pub flat: bool,

    /// Logs every copied file (with --flat).
    #[arg(long, requires = "flat")]
    pub announce: bool,
}

/// Arguments for the `exec` command.
#[derive(Debug, Clone, Args)]
pub struct ExecArgs {
    /// Captures stdout and stderr and prints them after the command exits.
    #[arg(long)]
    pub capture: bool,

    /// Command line for the shell. Several words are joined with single
    /// spaces and split again by the shell, so quote the whole command
    /// (`exec -- 'echo "a  b"'`) to keep inner quoting and spacing.
    #[arg(value_name = "COMMAND", required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl ExecArgs {
    /// The string handed to `sh -c`. A single word is passed unchanged.
    #[must_use]
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    #[command(subcommand)]
    pub target: CheckTarget,
}

/// Prerequisites `check` can verify.
#[derive(Debug, Clone, Subcommand)]
pub enum CheckTarget {
    /// Prints the detected operating system.
    Platform,
    /// Verifies that cmake runs.
    Cmake,
    /// Verifies that an OS account exists.
    User {
        #[arg(value_name = "NAME")]
        name: String,
    },
}
