// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `SandboxVars` Lua table keys and their `SANDBOXVARS_` override names.
//!
//! # Scanner States
//!
//! ```text
//!            "SandboxVars = {"
//!   Outside -------------------> Inside { depth: 1, path: [] }
//!      ^                            |
//!      |     "}" / "},"             |  "ident = {"  push ident, depth += 1
//!      +---- depth == 0 ------------+  "}" / "},"   depth -= 1, pop ident
//!                                   |  "ident = v"  leaf path + [ident]
//! ```
//!
//! Lines are matched one at a time after trimming; `--` comments and blank
//! lines are skipped in both states. Only this line-oriented subset of Lua
//! table syntax is recognized; one-line nested tables such as
//! `A = { B = 1 },` count as a leaf named `A`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace};

use super::SourceDocument;
use super::merge::{OverrideIndex, OverrideRecord, OverrideSet};
use super::naming::sandbox_env_name;

/// Comment marker for Lua lines.
const COMMENT: &str = "--";

static TABLE_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^SandboxVars\s*=\s*\{\s*$").expect("table open regex is valid")
});

static TABLE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\}\s*,?\s*$").expect("table close regex is valid"));

static SUBTABLE_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_]+)\s*=\s*\{\s*$").expect("subtable regex is valid")
});

static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_]+)\s*=\s*(.+?)(,?)\s*$").expect("assignment regex is valid")
});

/// A sandbox table leaf and the override name that targets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableOverride {
    pub env_name: String,
    /// Dotted path below `SandboxVars`.
    pub path: String,
    pub sources: Vec<String>,
}

impl TableOverride {
    fn new(segments: &[&str]) -> Self {
        Self {
            env_name: sandbox_env_name(segments),
            path: segments.join("."),
            sources: Vec::new(),
        }
    }
}

impl OverrideRecord for TableOverride {
    fn env_name(&self) -> &str {
        &self.env_name
    }

    fn identity(&self) -> String {
        self.path.clone()
    }

    fn push_source(&mut self, source: &str) {
        self.sources.push(source.to_string());
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ScanState<'a> {
    Outside,
    Inside { depth: usize, path: Vec<&'a str> },
}

/// Line-at-a-time scanner over one document.
struct TableScanner<'a> {
    state: ScanState<'a>,
}

impl<'a> TableScanner<'a> {
    const fn new() -> Self {
        Self {
            state: ScanState::Outside,
        }
    }

    /// Feed one trimmed, non-comment line; returns the leaf path it assigns.
    fn feed(&mut self, line: &'a str) -> Option<Vec<&'a str>> {
        let ScanState::Inside { depth, path } = &mut self.state else {
            if TABLE_OPEN.is_match(line) {
                self.state = ScanState::Inside {
                    depth: 1,
                    path: Vec::new(),
                };
            }
            return None;
        };

        if TABLE_CLOSE.is_match(line) {
            *depth -= 1;
            if *depth == 0 {
                self.state = ScanState::Outside;
            } else {
                path.pop();
            }
            return None;
        }

        if let Some(caps) = SUBTABLE_OPEN.captures(line)
            && let Some(name) = caps.get(1)
        {
            path.push(name.as_str());
            *depth += 1;
            return None;
        }

        if let Some(caps) = ASSIGNMENT.captures(line)
            && let Some(name) = caps.get(1)
        {
            let mut leaf = path.clone();
            leaf.push(name.as_str());
            return Some(leaf);
        }

        trace!(line, "ignored sandbox line");
        None
    }
}

/// Scan Lua documents in order, merging leaves that share an override name.
#[must_use]
pub fn extract_table_overrides(documents: &[SourceDocument]) -> OverrideSet<TableOverride> {
    let mut index = OverrideIndex::new();

    for document in documents {
        let mut scanner = TableScanner::new();
        let mut leaves = 0usize;
        for raw in document.text().lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(COMMENT) {
                continue;
            }
            if let Some(leaf) = scanner.feed(line) {
                index.record(TableOverride::new(&leaf), document.id());
                leaves += 1;
            }
        }
        debug!(source = document.id(), leaves, "scanned sandbox document");
    }

    index.finish()
}

#[cfg(test)]
mod tests;
