// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!  cmd handlers --> anyhow::Result (context chain)
//!                        ^
//!       +----------------+----------------+
//!       |                |                |
//!  SourceError      ConfigError      OutputError
//!  Unavailable      ParseError       Serialize, WriteFailed,
//!  NotFound         InvalidValue     ReadFailed, Stale, Missing
//!  Discovery
//! ```
//!
//! The extractors never fail; every error here belongs to the I/O and
//! configuration collaborators around them. Each collaborator returns its
//! own enum and the command layer adds context through `anyhow`.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

// --- Source Errors ---

/// Input file errors.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file exists (or is required) but could not be read.
    #[error("source unavailable: {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required source file does not exist.
    #[error("required source not found: {0}")]
    NotFound(PathBuf),

    /// The sources directory could not be walked.
    #[error("failed to scan {root}: {message}")]
    Discovery { root: PathBuf, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("failed to parse config: {message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Output Errors ---

/// Snapshot serialization and comparison errors.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The snapshot could not be serialized.
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output file could not be written.
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The existing output could not be read.
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The existing output does not match the freshly generated snapshot.
    #[error("{path} is out of date; run `envdoc generate`")]
    Stale { path: PathBuf },

    /// There is no existing output to compare against.
    #[error("{path} does not exist; run `envdoc generate`")]
    Missing { path: PathBuf },
}
