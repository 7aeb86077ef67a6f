// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment references in the shell entry script.
//!
//! ```text
//! referenced  $NAME  ${NAME}
//! bound       NAME=...   (line start)
//!             for NAME in
//!             local NAME
//!
//! external = referenced - bound
//! ```
//!
//! This is a textual scan, not a dataflow analysis: a name bound anywhere in
//! the script is treated as local everywhere, regardless of control flow or
//! line order. Parameter expansions such as `${NAME:-default}` are not
//! recognized.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Z][A-Z0-9_]*)\}|\$([A-Z][A-Z0-9_]*)").expect("reference regex is valid")
});

static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*([A-Z][A-Z0-9_]*)=").expect("assignment regex is valid")
});

static FOR_LOOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bfor\s+([A-Z][A-Z0-9_]*)\s+in\b").expect("for-loop regex is valid")
});

static LOCAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\blocal\s+([A-Z][A-Z0-9_]*)\b").expect("local regex is valid"));

/// Names read by the script.
#[must_use]
pub fn referenced_names(text: &str) -> BTreeSet<String> {
    REFERENCE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Names bound inside the script by assignment, `for` or `local`.
#[must_use]
pub fn bound_names(text: &str) -> BTreeSet<String> {
    [&*ASSIGNMENT, &*FOR_LOOP, &*LOCAL]
        .into_iter()
        .flat_map(|regex| regex.captures_iter(text))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Names the script expects from the process environment.
#[must_use]
pub fn external_references(text: &str) -> BTreeSet<String> {
    let referenced = referenced_names(text);
    let bound = bound_names(text);
    debug!(
        referenced = referenced.len(),
        bound = bound.len(),
        "scanned shell script"
    );
    referenced.difference(&bound).cloned().collect()
}
