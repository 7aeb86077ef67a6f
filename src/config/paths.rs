// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! repo_root/
//!   scripts/entry.sh     (entry)
//!   .env.template        (env_template)
//!   docs/env.json        (output)
//!   docs/env_sources/    (sources_dir, extracted image files)
//! ```
//!
//! Relative paths are resolved against the repository root.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Input and output locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Shell entry script scanned for environment references.
    pub entry: PathBuf,
    /// Template documenting the supported variables.
    pub env_template: PathBuf,
    /// Destination of the generated JSON.
    pub output: PathBuf,
    /// Directory holding files extracted from a server image.
    pub sources_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            entry: PathBuf::from("scripts/entry.sh"),
            env_template: PathBuf::from(".env.template"),
            output: PathBuf::from("docs/env.json"),
            sources_dir: PathBuf::from("docs/env_sources"),
        }
    }
}

impl PathsConfig {
    /// Resolve every relative path against `root`.
    pub fn resolve(&mut self, root: &Path) {
        for path in [
            &mut self.entry,
            &mut self.env_template,
            &mut self.output,
            &mut self.sources_dir,
        ] {
            *path = resolve_path(root, path);
        }
    }
}

/// Join `path` onto `root` unless it is already absolute.
#[must_use]
pub fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        root.join(path)
    } else {
        path.to_path_buf()
    }
}
