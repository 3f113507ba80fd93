// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        install / folders / compile
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              layout       tools    utility
//!           FolderSpec   cmake, git  fs probe/copy
//!           materialize
//!
//!   +-----------------------------------------+
//!   |  core   platform, process, user         |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod layout;
pub mod logging;
pub mod tools;
pub mod utility;
