// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .with_env_prefix()
//!   .set() / .set_option("section/key=value")
//!        |
//!        v
//!    build() / build_in(cwd, home) --> Config
//! ```

use std::path::{Path, PathBuf};

use super::Config;
use super::paths::home_dir;
use crate::error::{ConfigError, Result, SetupError};

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` environment variables,
    /// e.g. `YEAGER_PATHS__USER_ROOT`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Applies a `section/key=value` override as given to `--set`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if the option is not of the form
    /// `section/key=value`.
    pub fn set_option(self, option: &str) -> Result<Self> {
        let (key, value) = parse_option(option)?;
        self.set(&key, value)
    }

    /// Builds the configuration, resolving paths against the current
    /// directory and the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be determined.
    /// - Required configuration files are missing (`ConfigError::NotFound`)
    ///   or unreadable (`ConfigError::ReadError`).
    /// - Configuration files have invalid TOML syntax (`ConfigError::ParseError`).
    /// - Environment variables cannot be parsed.
    /// - The merged configuration cannot be deserialized into the `Config` struct.
    pub fn build(self) -> Result<Config> {
        let cwd = std::env::current_dir().map_err(SetupError::from)?;
        let home = home_dir();
        self.build_in(&cwd, home.as_deref())
    }

    /// Builds the configuration, resolving relative paths against `cwd`.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigLoader::build`], minus the current directory lookup.
    pub fn build_in(self, cwd: &Path, home: Option<&Path>) -> Result<Config> {
        self.check_required_files()?;

        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let cfg = builder.build().map_err(classify_source_error)?;
        let mut config: Config = cfg.try_deserialize().map_err(classify_source_error)?;
        config.resolve_and_validate(cwd, home)?;
        Ok(config)
    }

    /// Required files must exist and be readable before any source is merged.
    fn check_required_files(&self) -> std::result::Result<(), SetupError> {
        for (kind, path) in &self.files {
            if kind != "file" {
                continue;
            }
            let shown = path.display().to_string();
            match std::fs::metadata(path) {
                Ok(meta) if meta.is_file() => {}
                Ok(_) => return Err(ConfigError::NotFound(shown).into()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    return Err(ConfigError::NotFound(shown).into());
                }
                Err(source) => {
                    return Err(ConfigError::ReadError {
                        path: shown,
                        source,
                    }
                    .into());
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps TOML syntax errors to `ConfigError::ParseError`; anything else
/// keeps the `config` crate's own message.
fn classify_source_error(err: config::ConfigError) -> anyhow::Error {
    match err {
        config::ConfigError::FileParse { uri, cause } => SetupError::from(ConfigError::ParseError {
            path: uri.unwrap_or_else(|| "<string>".to_string()),
            message: cause.to_string(),
        })
        .into(),
        other => anyhow::Error::new(other).context("invalid configuration"),
    }
}

/// Splits `section/key=value` into a dotted config key and its value.
fn parse_option(option: &str) -> std::result::Result<(String, String), ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidValue {
        section: "cli".to_string(),
        key: "set".to_string(),
        message: format!("{message}: '{option}'"),
    };

    let (path, value) = option
        .split_once('=')
        .ok_or_else(|| invalid("expected section/key=value"))?;
    let (section, key) = path
        .split_once('/')
        .ok_or_else(|| invalid("expected section/key"))?;

    let section = section.trim();
    let key = key.trim();
    if section.is_empty() || key.is_empty() {
        return Err(invalid("empty section or key"));
    }

    Ok((format!("{section}.{key}"), value.trim().to_string()))
}
