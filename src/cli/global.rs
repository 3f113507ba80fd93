// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --ini FILE          additional config files (can repeat)
//! --dry               log instead of touching disk or spawning tools
//! --log-level N       console verbosity (0-6)
//! --file-log-level N  file verbosity (falls back to --log-level)
//! --install-root DIR  paths.install_root override
//! --user-root DIR     paths.user_root override
//! --set KEY=VAL       direct config override
//!
//! Precedence: CLI flags > --set > env > --ini > yeager.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'i', long = "ini", value_name = "FILE", action = clap::ArgAction::Append)]
    pub inis: Vec<PathBuf>,

    /// Logs what would be created, copied or run without doing it.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Directory that receives the private application folders.
    #[arg(long = "install-root", value_name = "DIR")]
    pub install_root: Option<PathBuf>,

    /// Directory that receives the public user folders (default: home).
    #[arg(long = "user-root", value_name = "DIR")]
    pub user_root: Option<PathBuf>,

    /// Sets an option, such as 'build/configuration=Release'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Does not load `yeager.toml` from the current directory.
    #[arg(long = "no-default-inis")]
    pub no_default_inis: bool,
}

impl GlobalOptions {
    /// Converts command-line options to `section/key=value` overrides,
    /// `--set` first so explicit flags win.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(level) = self.log_level {
            overrides.push(format!("global/output_log_level={level}"));
        }

        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(format!("global/file_log_level={level}"));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(format!("global/log_file={}", path.display()));
        }

        if self.dry {
            overrides.push("global/dry=true".to_string());
        }

        if let Some(ref root) = self.install_root {
            overrides.push(format!("paths/install_root={}", root.display()));
        }

        if let Some(ref root) = self.user_root {
            overrides.push(format!("paths/user_root={}", root.display()));
        }

        overrides
    }
}
