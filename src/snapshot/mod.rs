// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Documentation snapshot and the aggregator that builds it.
//!
//! ```text
//! external refs ----+
//! template keys ----+--> Aggregator::build() --> DocumentationSnapshot
//! ini overrides ----+        documented flag       (write-once)
//! table overrides --+        sort by name
//! provenance -------+
//! ```
//!
//! Field order of [`DocumentationSnapshot`] is the serialized key order.

use std::collections::BTreeSet;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::extract::ini::IniOverride;
use crate::extract::naming::{INI_PREFIX, SANDBOX_PREFIX};
use crate::extract::sandbox::TableOverride;


/// Where the INI and Lua samples came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceMode {
    /// Samples bundled with the repository.
    #[default]
    RepoSamples,
    /// Files extracted from a server image.
    ImageExtract,
}

impl std::fmt::Display for SourceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RepoSamples => write!(f, "repo_samples"),
            Self::ImageExtract => write!(f, "image_extract"),
        }
    }
}

/// Provenance of every scanned input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SourceInfo {
    pub entry: String,
    pub env_template: String,
    pub source_mode: SourceMode,
    pub ini_files: Vec<String>,
    pub lua_files: Vec<String>,
}

/// A variable the entry script reads from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandcraftedEnvVar {
    pub name: String,
    pub source: String,
    /// Whether the template documents this variable.
    pub documented: bool,
}

/// One of the two override naming conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamingPattern {
    pub prefix: &'static str,
    pub description: &'static str,
}

/// The fixed naming convention catalog.
pub const NAMING_PATTERNS: [NamingPattern; 2] = [
    NamingPattern {
        prefix: INI_PREFIX,
        description: "Override server INI keys. Use INIVARS_Key=Value or INIVARS_Section__Key=Value.",
    },
    NamingPattern {
        prefix: SANDBOX_PREFIX,
        description: "Override SandboxVars Lua keys. Use '_' as path separator and '__' for a literal underscore.",
    },
];

/// The complete inventory of override points.
///
/// Built once by [`Aggregator::build`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentationSnapshot {
    generated_at: String,
    sources: SourceInfo,
    image_tag: Option<String>,
    handcrafted_env: Vec<HandcraftedEnvVar>,
    ini_env: Vec<IniOverride>,
    lua_env: Vec<TableOverride>,
    patterns: Vec<NamingPattern>,
}

impl DocumentationSnapshot {
    #[must_use]
    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    #[must_use]
    pub const fn sources(&self) -> &SourceInfo {
        &self.sources
    }

    #[must_use]
    pub fn image_tag(&self) -> Option<&str> {
        self.image_tag.as_deref()
    }

    #[must_use]
    pub fn handcrafted_env(&self) -> &[HandcraftedEnvVar] {
        &self.handcrafted_env
    }

    #[must_use]
    pub fn ini_env(&self) -> &[IniOverride] {
        &self.ini_env
    }

    #[must_use]
    pub fn lua_env(&self) -> &[TableOverride] {
        &self.lua_env
    }

    #[must_use]
    pub fn patterns(&self) -> &[NamingPattern] {
        &self.patterns
    }

    /// Handcrafted variables the template does not document.
    pub fn undocumented(&self) -> impl Iterator<Item = &HandcraftedEnvVar> {
        self.handcrafted_env.iter().filter(|var| !var.documented)
    }
}

/// Inputs for a snapshot, gathered by the caller.
#[derive(Debug, Clone, Builder)]
pub struct Aggregator {
    #[builder(setters(name = with_generated_at), into)]
    generated_at: String,
    #[builder(setters(name = with_sources))]
    sources: SourceInfo,
    #[builder(setters(name = with_image_tag), into)]
    image_tag: Option<String>,
    #[builder(setters(name = with_external_refs), default)]
    external_refs: BTreeSet<String>,
    #[builder(setters(name = with_documented_keys), default)]
    documented_keys: BTreeSet<String>,
    #[builder(setters(name = with_ini_overrides), default)]
    ini_overrides: Vec<IniOverride>,
    #[builder(setters(name = with_table_overrides), default)]
    table_overrides: Vec<TableOverride>,
}

impl Aggregator {
    /// Assemble the snapshot.
    #[must_use]
    pub fn build(self) -> DocumentationSnapshot {
        let entry = self.sources.entry.clone();

        // BTreeSet iteration is already sorted by name.
        let handcrafted_env = self
            .external_refs
            .into_iter()
            .map(|name| HandcraftedEnvVar {
                documented: self.documented_keys.contains(&name),
                source: entry.clone(),
                name,
            })
            .collect();

        let mut ini_env = self.ini_overrides;
        ini_env.sort_by(|a, b| a.env_name.cmp(&b.env_name));

        let mut lua_env = self.table_overrides;
        lua_env.sort_by(|a, b| a.env_name.cmp(&b.env_name));

        DocumentationSnapshot {
            generated_at: self.generated_at,
            sources: self.sources,
            image_tag: self.image_tag,
            handcrafted_env,
            ini_env,
            lua_env,
            patterns: NAMING_PATTERNS.to_vec(),
        }
    }
}
