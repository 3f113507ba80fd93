// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Host-facing building blocks.
//!
//! ```text
//!              core
//!               |
//!     +---------+---------+
//!     |         |         |
//!     v         v         v
//!  platform  process     user
//!     |         |         |
//!   detect   Builder   id -u <name>
//!   path_    shell
//!   compatible
//! ```

pub mod platform;
pub mod process;
pub mod user;
