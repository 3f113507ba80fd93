// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder with configuration options.
//!
//! ```text
//! ProcessBuilder
//!  • new/which/raw/raw_merged/exists/find
//!  • args/cwd/flags/name
//!  • capture_stdout, quiet, inherit_stdio
//!
//! ProcessFlags: ALLOW_FAILURE
//! StreamFlags: FORWARD_TO_LOG (default), BIT_BUCKET, KEEP_IN_STRING, INHERIT
//! ```

use bitflags::bitflags;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::{OnceLock, RwLock};

use crate::error::ProcessError;

/// Static cache for executable paths resolved via `which`.
static EXECUTABLE_CACHE: OnceLock<RwLock<BTreeMap<String, PathBuf>>> = OnceLock::new();

fn exe_cache() -> &'static RwLock<BTreeMap<String, PathBuf>> {
    EXECUTABLE_CACHE.get_or_init(|| RwLock::new(BTreeMap::new()))
}

bitflags! {
    /// Flags controlling process execution behavior.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProcessFlags: u32 {
        /// Don't fail if the process exits with a non-zero status
        const ALLOW_FAILURE = 0x01;
    }
}

bitflags! {
    /// Flags controlling stream handling for stdout/stderr.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StreamFlags: u32 {
        /// Forward output to tracing logs
        const FORWARD_TO_LOG = 0x01;
        /// Discard output (send to /dev/null)
        const BIT_BUCKET = 0x02;
        /// Keep output in a string for later retrieval
        const KEEP_IN_STRING = 0x04;
        /// Inherit from parent process
        const INHERIT = 0x08;
    }
}

impl Default for StreamFlags {
    fn default() -> Self {
        Self::FORWARD_TO_LOG
    }
}

/// Output from a completed process.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    exit_code: i32,
    stdout: String,
    stderr: String,
    interrupted: bool,
}

impl ProcessOutput {
    pub(super) const fn new(
        exit_code: i32,
        stdout: String,
        stderr: String,
        interrupted: bool,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            interrupted,
        }
    }

    /// Returns the process exit code (0 = success, -1 = killed by a signal).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Returns captured stdout (if `KEEP_IN_STRING` was set).
    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Returns captured stderr (if `KEEP_IN_STRING` was set).
    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Returns whether the process was interrupted.
    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    /// Returns true if the process exited successfully (code 0).
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Builder for configuring and running a process.
#[derive(Debug)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    flags: ProcessFlags,
    stdout: StreamFlags,
    stderr: StreamFlags,
    /// Display name for logging
    name: Option<String>,
}

impl ProcessBuilder {
    /// Creates a new `ProcessBuilder` for the given program.
    ///
    /// The program can be an absolute path, relative path, or just the executable name.
    /// If just a name is given, it will be resolved via PATH when `run()` is called.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
            flags: ProcessFlags::empty(),
            stdout: StreamFlags::default(),
            stderr: StreamFlags::default(),
            name: None,
        }
    }

    /// Creates a `ProcessBuilder` after resolving the program via PATH.
    ///
    /// Results are cached for subsequent lookups of the same program.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError::ExecutableNotFound` if the executable is not found in PATH.
    pub fn which(program: &str) -> std::result::Result<Self, ProcessError> {
        Self::find(program)
            .map(Self::new)
            .ok_or_else(|| ProcessError::ExecutableNotFound {
                name: program.to_string(),
            })
    }

    /// Checks if an executable exists in PATH.
    #[must_use]
    pub fn exists(program: &str) -> bool {
        Self::find(program).is_some()
    }

    /// Finds the full path to an executable in PATH.
    ///
    /// Results are cached for subsequent lookups.
    /// Returns `None` if the executable is not found.
    #[must_use]
    pub fn find(program: &str) -> Option<PathBuf> {
        {
            let cache = exe_cache()
                .read()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(path) = cache.get(program) {
                return Some(path.clone());
            }
        }

        which::which(program).map_or(None, |path| {
            {
                let mut cache = exe_cache()
                    .write()
                    .unwrap_or_else(std::sync::PoisonError::into_inner);
                cache.insert(program.to_string(), path.clone());
            }
            Some(path)
        })
    }

    /// Creates a `ProcessBuilder` from a raw command string.
    ///
    /// On Windows, this executes the command via `PowerShell` (`pwsh -NoProfile -Command`).
    /// On Unix, this executes via `/bin/sh -c`.
    pub fn raw(command: impl Into<String>) -> Self {
        let cmd = command.into();
        #[cfg(windows)]
        {
            Self::new("pwsh").args(["-NoProfile", "-NonInteractive", "-Command"]).arg(cmd)
        }
        #[cfg(not(windows))]
        {
            Self::new("/bin/sh").arg("-c").arg(cmd)
        }
    }

    /// Like [`ProcessBuilder::raw`], but the shell folds stderr into stdout
    /// so both arrive interleaved on one stream.
    pub fn raw_merged(command: impl AsRef<str>) -> Self {
        let cmd = command.as_ref();
        #[cfg(windows)]
        {
            Self::raw(format!("& {{ {cmd} }} 2>&1"))
        }
        #[cfg(not(windows))]
        {
            Self::raw(format!("{{ {cmd}\n}} 2>&1"))
        }
    }

    /// Adds an argument to the command.
    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Adds multiple arguments to the command.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|a| a.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    /// Sets the working directory.
    #[must_use]
    pub fn cwd(mut self, path: impl AsRef<Path>) -> Self {
        self.cwd = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds a process flag.
    #[must_use]
    pub fn flag(mut self, flag: ProcessFlags) -> Self {
        self.flags |= flag;
        self
    }

    /// Convenience: capture stdout to string.
    #[must_use]
    pub const fn capture_stdout(mut self) -> Self {
        self.stdout = StreamFlags::KEEP_IN_STRING;
        self
    }

    /// Convenience: discard all output.
    #[must_use]
    pub const fn quiet(mut self) -> Self {
        self.stdout = StreamFlags::BIT_BUCKET;
        self.stderr = StreamFlags::BIT_BUCKET;
        self
    }

    /// Convenience: inherit stdout/stderr from parent.
    #[must_use]
    pub const fn inherit_stdio(mut self) -> Self {
        self.stdout = StreamFlags::INHERIT;
        self.stderr = StreamFlags::INHERIT;
        self
    }

    /// Sets a display name for logging.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns a reference to the program path.
    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    /// Returns the arguments.
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// Returns the working directory, if set.
    #[must_use]
    pub const fn working_dir(&self) -> Option<&PathBuf> {
        self.cwd.as_ref()
    }

    pub(super) const fn process_flags(&self) -> ProcessFlags {
        self.flags
    }

    pub(super) const fn stdout_flags(&self) -> StreamFlags {
        self.stdout
    }

    pub(super) const fn stderr_flags(&self) -> StreamFlags {
        self.stderr
    }

    pub(super) fn name_override(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
