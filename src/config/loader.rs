// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .with_repo_root()
//!   .add_toml_file_optional(envdoc.toml)
//!   .add_toml_file(--config)
//!   .with_env_prefix("ENVDOC")
//!   .with_legacy_vars(std::env::vars())
//!   .set(--set)
//!        |
//!        v
//!    build() --> Config (paths resolved)
//! ```
//!
//! Overrides applied with `set` and `with_legacy_vars` are evaluated in call
//! order; later calls win.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::Config;
use crate::error::{ConfigError, Result};

/// Process environment variables honored for compatibility with older CI
/// setups, and the keys they override.
///
/// A variable that is set but empty still counts for `IMAGE_TAG`: the
/// snapshot records `"image_tag": ""`, distinguishing "set to nothing" from
/// "unset" (`null`). Empty path variables are skipped so they never resolve
/// to the repository root itself.
pub const LEGACY_VARS: [(&str, &str); 3] = [
    ("OUTPUT_PATH", "paths.output"),
    ("ENV_SOURCES_DIR", "paths.sources_dir"),
    ("IMAGE_TAG", "generate.image_tag"),
];

/// Name of the optional configuration file in the repository root.
pub const DEFAULT_CONFIG_FILE: &str = "envdoc.toml";

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    repo_root: PathBuf,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            repo_root: PathBuf::from("."),
            files: Vec::new(),
        }
    }

    /// Sets the directory relative paths are resolved against.
    #[must_use]
    pub fn with_repo_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.repo_root = root.as_ref().to_path_buf();
        self
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

    /// Reads `PREFIX_SECTION__KEY` variables at build time.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Applies the [`LEGACY_VARS`] found in `vars`.
    ///
    /// The variables are passed in explicitly so tests never depend on the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be stored.
    pub fn with_legacy_vars<I, K, V>(mut self, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in vars {
            let Some((_, key)) = LEGACY_VARS
                .iter()
                .find(|(legacy, _)| *legacy == name.as_ref())
            else {
                continue;
            };
            let value = value.into();
            if value.is_empty() && key.starts_with("paths.") {
                debug!(var = name.as_ref(), "ignoring empty legacy path variable");
                continue;
            }
            debug!(var = name.as_ref(), key, "applying legacy environment variable");
            self = self.set(key, value)?;
            self.files
                .push(("env".to_string(), PathBuf::from(name.as_ref())));
        }
        Ok(self)
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
            .map_err(|e| ConfigError::ParseError {
                message: format!("cannot set '{key}': {e}"),
            })?;
        Ok(self)
    }

    /// Applies a `KEY=VALUE` override string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if the string has no `=` or an
    /// empty key.
    pub fn set_option(self, option: &str) -> Result<Self> {
        let (key, value) = parse_override(option)?;
        self.set(key, value.to_string())
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - The merged configuration cannot be deserialized into the `Config` struct.
    /// - A date format or discovery glob is invalid.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__"),
            ),
            None => self.builder,
        };
        let cfg = builder.build().map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        let mut config: Config = cfg.try_deserialize().map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.resolve_and_validate(&self.repo_root)?;
        Ok(config)
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

/// Split `section.key=value` into key and value.
///
/// # Errors
///
/// Returns a `ConfigError::InvalidValue` if there is no `=` or the key is
/// empty.
pub fn parse_override(option: &str) -> std::result::Result<(&str, &str), ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidValue {
        section: "cli".to_string(),
        key: "set".to_string(),
        message: message.to_string(),
    };
    let (key, value) = option
        .split_once('=')
        .ok_or_else(|| invalid(&format!("expected KEY=VALUE, got '{option}'")))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(invalid(&format!("empty key in '{option}'")));
    }
    Ok((key, value.trim()))
}
