// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Merge-by-name accumulation shared by the INI and sandbox extractors.
//!
//! ```text
//! record(candidate, source)
//!        |
//!   env_name known? --no--> insert candidate, sources = [source]
//!        |yes
//!   same identity? --no--> NameCollision (warn) --+
//!        |yes                                     |
//!        +----------> append source <-------------+
//! ```
//!
//! The first record for a name wins; later ones only contribute sources.

use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

/// A record keyed by its derived override name.
pub trait OverrideRecord {
    /// The derived override name (merge key).
    fn env_name(&self) -> &str;

    /// Human-readable identity of the underlying configuration key.
    ///
    /// Two records with the same `env_name` but different identities are a
    /// naming collision.
    fn identity(&self) -> String;

    /// Append a contributing source identifier.
    fn push_source(&mut self, source: &str);
}

/// Two distinct configuration keys that derive the same override name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCollision {
    pub env_name: String,
    /// Identity of the record that owns the name.
    pub existing: String,
    /// Identity of the record that was folded into it.
    pub incoming: String,
    /// Source that contributed the incoming record.
    pub source: String,
}

/// Result of an extraction: merged overrides in encounter order plus any
/// naming collisions seen along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideSet<T> {
    pub overrides: Vec<T>,
    pub collisions: Vec<NameCollision>,
}

impl<T> Default for OverrideSet<T> {
    fn default() -> Self {
        Self {
            overrides: Vec::new(),
            collisions: Vec::new(),
        }
    }
}

impl<T: OverrideRecord> OverrideSet<T> {
    /// Override names in encounter order.
    #[must_use]
    pub fn env_names(&self) -> Vec<&str> {
        self.overrides.iter().map(OverrideRecord::env_name).collect()
    }
}

/// Accumulator that merges records sharing an override name.
#[derive(Debug)]
pub(crate) struct OverrideIndex<T> {
    entries: Vec<T>,
    by_name: HashMap<String, usize>,
    collisions: Vec<NameCollision>,
}

impl<T: OverrideRecord> OverrideIndex<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_name: HashMap::new(),
            collisions: Vec::new(),
        }
    }

    /// Merge `candidate` (with empty sources) contributed by `source`.
    pub(crate) fn record(&mut self, mut candidate: T, source: &str) {
        if let Some(&index) = self.by_name.get(candidate.env_name()) {
            let existing = &mut self.entries[index];
            let existing_identity = existing.identity();
            let incoming_identity = candidate.identity();
            if existing_identity != incoming_identity {
                warn!(
                    env_name = existing.env_name(),
                    existing = %existing_identity,
                    incoming = %incoming_identity,
                    source,
                    "override name collision"
                );
                self.collisions.push(NameCollision {
                    env_name: existing.env_name().to_string(),
                    existing: existing_identity,
                    incoming: incoming_identity,
                    source: source.to_string(),
                });
            }
            existing.push_source(source);
            return;
        }

        candidate.push_source(source);
        self.by_name
            .insert(candidate.env_name().to_string(), self.entries.len());
        self.entries.push(candidate);
    }

    pub(crate) fn finish(self) -> OverrideSet<T> {
        OverrideSet {
            overrides: self.entries,
            collisions: self.collisions,
        }
    }
}
