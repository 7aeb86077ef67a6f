// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for envdoc.
//!
//! ```text
//! Config: PathsConfig, SamplesConfig, DiscoveryConfig, GenerateConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bundled sample files used when no extracted image sources exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplesConfig {
    pub ini_files: Vec<PathBuf>,
    pub lua_files: Vec<PathBuf>,
}

impl Default for SamplesConfig {
    fn default() -> Self {
        Self {
            ini_files: vec![
                PathBuf::from("smoke/sample.ini"),
                PathBuf::from("smoke/expected.ini"),
            ],
            lua_files: vec![
                PathBuf::from("smoke/sample_sandbox.lua"),
                PathBuf::from("smoke/expected_sandbox.lua"),
            ],
        }
    }
}

/// How the extracted sources directory is searched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// Glob (relative to the sources directory) selecting INI files.
    pub ini_glob: String,
    /// Glob (relative to the sources directory) selecting Lua files.
    pub lua_glob: String,
    /// Descend into hidden files and directories.
    pub include_hidden: bool,
    /// Honor `.gitignore` files inside the sources directory.
    pub respect_gitignore: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            ini_glob: "**/*.ini".to_string(),
            lua_glob: "**/*.lua".to_string(),
            include_hidden: true,
            respect_gitignore: false,
        }
    }
}

/// Snapshot metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Image tag recorded verbatim in the snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_tag: Option<String>,
    /// `chrono` format string for `generated_at` (UTC).
    pub date_format: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            image_tag: None,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}
