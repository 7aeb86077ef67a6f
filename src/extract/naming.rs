// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Override name derivation.
//!
//! ```text
//! INI      (section, key)   --> INIVARS_Key | INIVARS_Section__Key
//! Sandbox  [p1, p2, .., pn] --> SANDBOXVARS_enc(p1)_enc(p2).._enc(pn)
//!          enc(p) = p with every '_' doubled
//! ```
//!
//! The sandbox encoding is ambiguous for segments that begin or end with an
//! underscore: `["A_", "B"]` and `["A", "_B"]` both encode to
//! `SANDBOXVARS_A___B`. Operators already depend on these names, so the
//! encoding is kept as-is and clashes are surfaced by [`super::merge`].

/// Prefix for INI key overrides.
pub const INI_PREFIX: &str = "INIVARS_";

/// Prefix for `SandboxVars` key overrides.
pub const SANDBOX_PREFIX: &str = "SANDBOXVARS_";

/// Separator between an INI section and key.
const INI_SECTION_SEPARATOR: &str = "__";

/// Derive the override name for an INI key.
///
/// Case is preserved: `("Server", "Port")` always yields
/// `INIVARS_Server__Port`.
#[must_use]
pub fn ini_env_name(section: &str, key: &str) -> String {
    if section.is_empty() {
        format!("{INI_PREFIX}{key}")
    } else {
        format!("{INI_PREFIX}{section}{INI_SECTION_SEPARATOR}{key}")
    }
}

/// Derive the override name for a sandbox table path.
#[must_use]
pub fn sandbox_env_name<S: AsRef<str>>(path: &[S]) -> String {
    let encoded: Vec<String> = path
        .iter()
        .map(|segment| encode_sandbox_segment(segment.as_ref()))
        .collect();
    format!("{SANDBOX_PREFIX}{}", encoded.join("_"))
}

fn encode_sandbox_segment(segment: &str) -> String {
    segment.replace('_', "__")
}

/// Split an INI override name back into `(section, key)`.
///
/// The split happens at the first `__`; names without one map to the empty
/// section. Returns `None` when the prefix is missing or the key is empty.
#[must_use]
pub fn decode_ini_name(env_name: &str) -> Option<(String, String)> {
    let rest = env_name.strip_prefix(INI_PREFIX)?;
    let (section, key) = rest
        .split_once(INI_SECTION_SEPARATOR)
        .unwrap_or(("", rest));
    if key.is_empty() {
        return None;
    }
    Some((section.to_string(), key.to_string()))
}

/// Split a sandbox override name back into path segments.
///
/// Reads left to right: `__` is a literal underscore, a lone `_` ends the
/// current segment. Returns `None` when the prefix is missing or any segment
/// comes out empty.
#[must_use]
pub fn decode_sandbox_name(env_name: &str) -> Option<Vec<String>> {
    let rest = env_name.strip_prefix(SANDBOX_PREFIX)?;
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = rest.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '_' {
            current.push(c);
            continue;
        }
        if chars.peek() == Some(&'_') {
            chars.next();
            current.push('_');
        } else {
            segments.push(std::mem::take(&mut current));
        }
    }
    segments.push(current);

    if segments.iter().any(String::is_empty) {
        return None;
    }
    Some(segments)
}
