// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Server INI keys and their `INIVARS_` override names.
//!
//! ```text
//! per document (section reset to "")
//!   blank / ; / #     skip
//!   [Section] ...     section = "Section"
//!   key = value       record (section, key)
//!   anything else     skip
//! ```

use serde::Serialize;
use tracing::debug;

use super::SourceDocument;
use super::merge::{OverrideIndex, OverrideRecord, OverrideSet};
use super::naming::ini_env_name;

/// An INI key and the override name that targets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IniOverride {
    pub env_name: String,
    pub section: String,
    pub key: String,
    pub sources: Vec<String>,
}

impl IniOverride {
    fn new(section: &str, key: &str) -> Self {
        Self {
            env_name: ini_env_name(section, key),
            section: section.to_string(),
            key: key.to_string(),
            sources: Vec::new(),
        }
    }
}

impl OverrideRecord for IniOverride {
    fn env_name(&self) -> &str {
        &self.env_name
    }

    fn identity(&self) -> String {
        if self.section.is_empty() {
            self.key.clone()
        } else {
            format!("[{}] {}", self.section, self.key)
        }
    }

    fn push_source(&mut self, source: &str) {
        self.sources.push(source.to_string());
    }
}

#[derive(Debug, PartialEq, Eq)]
enum IniLine<'a> {
    Skip,
    Section(&'a str),
    Key(&'a str),
}

fn classify(raw: &str) -> IniLine<'_> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
        return IniLine::Skip;
    }

    if let Some(rest) = line.strip_prefix('[')
        && let Some(end) = rest.find(']')
        && end > 0
    {
        return IniLine::Section(rest[..end].trim());
    }

    match line.find('=') {
        Some(eq) if eq > 0 => IniLine::Key(line[..eq].trim()),
        _ => IniLine::Skip,
    }
}

/// Scan INI documents in order, merging keys that share an override name.
#[must_use]
pub fn extract_ini_overrides(documents: &[SourceDocument]) -> OverrideSet<IniOverride> {
    let mut index = OverrideIndex::new();

    for document in documents {
        let mut section = "";
        let mut keys = 0usize;
        for raw in document.text().lines() {
            match classify(raw) {
                IniLine::Skip => {}
                IniLine::Section(name) => section = name,
                IniLine::Key(key) => {
                    index.record(IniOverride::new(section, key), document.id());
                    keys += 1;
                }
            }
        }
        debug!(source = document.id(), keys, "scanned ini document");
    }

    index.finish()
}
