// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Documented keys of the `.env.template` file.
//!
//! Only `NAME=` at the start of a line counts (leading whitespace allowed).
//! Used as a membership oracle for the `documented` flag.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static TEMPLATE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Z][A-Z0-9_]*)=").expect("template key regex is valid")
});

/// Keys documented by the template.
#[must_use]
pub fn documented_keys(text: &str) -> BTreeSet<String> {
    text.lines()
        .filter_map(|line| TEMPLATE_KEY.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests;
