// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envdoc.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envdoc.toml (repo root, optional)
//! 3. --config FILE
//! 4. ENVDOC_* env vars
//! 5. OUTPUT_PATH / ENV_SOURCES_DIR / IMAGE_TAG
//! 6. --set KEY=VALUE
//! 7. command flags (--output, --sources-dir, --image-tag)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVDOC_PATHS__OUTPUT=out.json      → paths.output = "out.json"
//! ENVDOC_GENERATE__IMAGE_TAG=v1.2    → generate.image_tag = "v1.2"
//! ENV_SOURCES_DIR=/tmp/extract       → paths.sources_dir = "/tmp/extract"
//! ```

pub mod loader;
pub mod paths;
pub mod types;


use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{DiscoveryConfig, GenerateConfig, SamplesConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Repository root every relative path is resolved against.
    #[serde(skip)]
    pub repo_root: PathBuf,
    pub paths: PathsConfig,
    pub samples: SamplesConfig,
    pub discovery: DiscoveryConfig,
    pub generate: GenerateConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envdoc::config::Config;
    ///
    /// let config = Config::builder()
    ///     .with_repo_root("/srv/pzserver")
    ///     .add_toml_file_optional("/srv/pzserver/envdoc.toml")
    ///     .with_env_prefix("ENVDOC")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string, resolved against `.`.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolve paths against `root` and validate the remaining settings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for an unusable date format or
    /// discovery glob.
    pub fn resolve_and_validate(&mut self, root: &Path) -> Result<()> {
        self.repo_root = root.to_path_buf();
        self.paths.resolve(root);
        for sample in self
            .samples
            .ini_files
            .iter_mut()
            .chain(self.samples.lua_files.iter_mut())
        {
            *sample = paths::resolve_path(root, sample);
        }

        validate_date_format(&self.generate.date_format)?;
        validate_glob("ini_glob", &self.discovery.ini_glob)?;
        validate_glob("lua_glob", &self.discovery.lua_glob)?;
        Ok(())
    }

    /// Format configuration options for display, one `key = value` per line.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert("repo_root", self.repo_root.display().to_string());
        options.insert("paths.entry", self.paths.entry.display().to_string());
        options.insert(
            "paths.env_template",
            self.paths.env_template.display().to_string(),
        );
        options.insert("paths.output", self.paths.output.display().to_string());
        options.insert(
            "paths.sources_dir",
            self.paths.sources_dir.display().to_string(),
        );
        options.insert("samples.ini_files", join(&self.samples.ini_files));
        options.insert("samples.lua_files", join(&self.samples.lua_files));
        options.insert("discovery.ini_glob", self.discovery.ini_glob.clone());
        options.insert("discovery.lua_glob", self.discovery.lua_glob.clone());
        options.insert(
            "discovery.include_hidden",
            self.discovery.include_hidden.to_string(),
        );
        options.insert(
            "discovery.respect_gitignore",
            self.discovery.respect_gitignore.to_string(),
        );
        options.insert(
            "generate.image_tag",
            self.generate.image_tag.clone().unwrap_or_default(),
        );
        options.insert("generate.date_format", self.generate.date_format.clone());

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}

fn join(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn validate_date_format(format: &str) -> std::result::Result<(), ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidValue {
        section: "generate".to_string(),
        key: "date_format".to_string(),
        message: message.to_string(),
    };
    if format.is_empty() {
        return Err(invalid("must not be empty"));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid(&format!("'{format}' is not a valid strftime format")));
    }
    Ok(())
}

fn validate_glob(key: &str, pattern: &str) -> std::result::Result<(), ConfigError> {
    wax::Glob::new(pattern)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidValue {
            section: "discovery".to_string(),
            key: key.to_string(),
            message: format!("invalid glob pattern '{pattern}': {e}"),
        })
}
