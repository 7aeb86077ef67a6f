// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Override extraction.
//!
//! ```text
//! entry.sh       --> shell::external_references()   BTreeSet<String>
//! .env.template  --> template::documented_keys()    BTreeSet<String>
//! *.ini          --> ini::extract_ini_overrides()   OverrideSet<IniOverride>
//! *.lua          --> sandbox::extract_table_overrides()
//!                                                   OverrideSet<TableOverride>
//! ```
//!
//! Every extractor is a pure function of already-loaded text. Unrecognized
//! lines are skipped, never reported as errors. Reading files, and deciding
//! which files exist, happens in [`crate::sources`].

pub mod ini;
pub mod merge;
pub mod naming;
pub mod sandbox;
pub mod shell;
pub mod template;

#[cfg(test)]
mod tests;

/// A loaded input text and the identifier recorded as its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    id: String,
    text: String,
}

impl SourceDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Identifier recorded in `sources` lists.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
