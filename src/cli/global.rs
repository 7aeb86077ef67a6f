// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --repo-root DIR   ← Base for every relative path (default: .)
//! --config FILE     ← Additional config files (can repeat)
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --set KEY=VAL     ← Direct config override
//!
//! Precedence: command flags > --set > env > --config > envdoc.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::logging::LogFormat;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Repository root; relative paths in the configuration resolve against it.
    #[arg(short = 'C', long = "repo-root", value_name = "DIR", global = true)]
    pub repo_root: Option<PathBuf>,

    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append, global = true)]
    pub configs: Vec<PathBuf>,

    /// Disables loading `envdoc.toml` from the repository root.
    #[arg(long = "no-default-config", global = true)]
    pub no_default_config: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log format for the console and the log file.
    #[arg(long = "log-format", value_name = "FORMAT", value_enum, default_value_t, global = true)]
    pub log_format: LogFormat,

    /// Sets an option, such as 'paths.output=docs/env.json'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append, global = true)]
    pub options: Vec<String>,
}

impl GlobalOptions {
    /// The repository root, `.` when not given.
    #[must_use]
    pub fn repo_root(&self) -> PathBuf {
        self.repo_root.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
