// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Source discovery and loading.
//!
//! ```text
//! Config
//!   |
//!   v
//! SourcePlan::discover()
//!   sources_dir has *.ini / *.lua?  yes --> image_extract (walk + glob)
//!                                   no  --> repo_samples  (configured list)
//!   |
//!   v
//! SourcePlan::load()
//!   entry       required  (missing --> SourceError::NotFound)
//!   template    optional
//!   ini / lua   optional  (missing --> skipped)
//!   any other read failure --> SourceError::Unavailable
//! ```

pub mod encoding;
pub mod walk;

#[cfg(test)]
mod tests;

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::SourceError;
use crate::extract::SourceDocument;
use crate::snapshot::{SourceInfo, SourceMode};

use encoding::decode_text;
use walk::{WalkOptions, find_files};

/// The files a run will scan, before any of them is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePlan {
    root: PathBuf,
    mode: SourceMode,
    entry: PathBuf,
    env_template: PathBuf,
    ini_files: Vec<PathBuf>,
    lua_files: Vec<PathBuf>,
}

/// Loaded texts, ready for the extractors.
#[derive(Debug, Clone)]
pub struct LoadedSources {
    pub entry: SourceDocument,
    /// `None` when the template does not exist.
    pub env_template: Option<SourceDocument>,
    pub ini: Vec<SourceDocument>,
    pub lua: Vec<SourceDocument>,
}

impl SourcePlan {
    /// Decide which files to scan.
    ///
    /// # Errors
    ///
    /// Returns a `SourceError::Discovery` if the extracted sources directory
    /// exists but cannot be searched.
    pub fn discover(config: &Config) -> Result<Self, SourceError> {
        let sources_dir = &config.paths.sources_dir;
        let (mode, ini_files, lua_files) = if sources_dir.is_dir() {
            let options = WalkOptions::from(&config.discovery);
            let ini_files = find_files(sources_dir, &config.discovery.ini_glob, &options)?;
            let lua_files = find_files(sources_dir, &config.discovery.lua_glob, &options)?;
            if ini_files.is_empty() && lua_files.is_empty() {
                debug!(dir = %sources_dir.display(), "sources directory holds no config files");
                repo_samples(config)
            } else {
                (SourceMode::ImageExtract, ini_files, lua_files)
            }
        } else {
            repo_samples(config)
        };

        info!(
            mode = %mode,
            ini = ini_files.len(),
            lua = lua_files.len(),
            "selected config sources"
        );

        Ok(Self {
            root: config.repo_root.clone(),
            mode,
            entry: config.paths.entry.clone(),
            env_template: config.paths.env_template.clone(),
            ini_files,
            lua_files,
        })
    }

    #[must_use]
    pub const fn mode(&self) -> SourceMode {
        self.mode
    }

    /// Identifier recorded for `path` in the snapshot.
    #[must_use]
    pub fn id(&self, path: &Path) -> String {
        source_id(&self.root, path)
    }

    /// Provenance record for the snapshot. Planned files are listed even if
    /// they turn out to be missing.
    #[must_use]
    pub fn source_info(&self) -> SourceInfo {
        SourceInfo {
            entry: self.id(&self.entry),
            env_template: self.id(&self.env_template),
            source_mode: self.mode,
            ini_files: self.ini_files.iter().map(|p| self.id(p)).collect(),
            lua_files: self.lua_files.iter().map(|p| self.id(p)).collect(),
        }
    }

    /// Read every planned file.
    ///
    /// # Errors
    ///
    /// Returns a `SourceError::NotFound` if the entry script is missing and a
    /// `SourceError::Unavailable` if any existing file cannot be read.
    pub fn load(&self) -> Result<LoadedSources, SourceError> {
        let entry = self
            .read_optional(&self.entry)?
            .ok_or_else(|| SourceError::NotFound(self.entry.clone()))?;
        let env_template = self.read_optional(&self.env_template)?;
        if env_template.is_none() {
            debug!(path = %self.env_template.display(), "no env template; nothing is documented");
        }

        Ok(LoadedSources {
            entry,
            env_template,
            ini: self.read_all(&self.ini_files)?,
            lua: self.read_all(&self.lua_files)?,
        })
    }

    fn read_all(&self, paths: &[PathBuf]) -> Result<Vec<SourceDocument>, SourceError> {
        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            if let Some(document) = self.read_optional(path)? {
                documents.push(document);
            }
        }
        Ok(documents)
    }

    fn read_optional(&self, path: &Path) -> Result<Option<SourceDocument>, SourceError> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "source absent, skipping");
                return Ok(None);
            }
            Err(source) => {
                return Err(SourceError::Unavailable {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let (text, encoding) = decode_text(&bytes);
        if encoding.is_fallback() {
            warn!(path = %path.display(), ?encoding, "file is not UTF-8, decoded as legacy code page");
        }
        Ok(Some(SourceDocument::new(self.id(path), text.into_owned())))
    }
}

fn repo_samples(config: &Config) -> (SourceMode, Vec<PathBuf>, Vec<PathBuf>) {
    (
        SourceMode::RepoSamples,
        config.samples.ini_files.clone(),
        config.samples.lua_files.clone(),
    )
}

/// Path relative to `root` with `/` separators, or `path` itself (with `/`
/// separators) when it lies outside `root`.
#[must_use]
pub fn source_id(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = relative
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| match c {
            Component::RootDir => String::new(),
            other => other.as_os_str().to_string_lossy().into_owned(),
        })
        .collect();
    let joined = parts.join("/");
    if joined.is_empty() {
        relative.display().to_string()
    } else {
        joined
    }
}
