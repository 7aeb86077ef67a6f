// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envdoc using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envdoc [global options] <command>
//! generate [--output FILE] [--sources-dir DIR] [--image-tag TAG] [--stdout]
//! check [--output FILE]
//! sources
//! options
//! config-files
//! version
//! ```

pub mod generate;
pub mod global;


use crate::cli::generate::{CheckArgs, GenerateArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Environment override documentation generator
///
/// Inventories every environment variable a containerized game server
/// honors and writes it as a JSON document.
#[derive(Debug, Parser)]
#[command(
    name = "envdoc",
    author,
    version,
    about = "Environment override documentation generator",
    long_about = "envdoc Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Scans the entry script, the env template and the server's INI\n\
                  and SandboxVars files, and writes the inventory of environment\n\
                  overrides to docs/env.json. Run `envdoc check` in CI to fail\n\
                  when the committed inventory is out of date.",
    after_help = "CONFIGURATION:\n\n\
                  envdoc reads `envdoc.toml` from the repository root if present,\n\
                  then every --config file in order, then ENVDOC_SECTION__KEY\n\
                  environment variables, then OUTPUT_PATH, ENV_SOURCES_DIR and\n\
                  IMAGE_TAG, then --set options. Command flags win over all of\n\
                  these. Use --no-default-config to skip `envdoc.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Builds the inventory and writes it.
    Generate(GenerateArgs),

    /// Fails if the written inventory is missing or out of date.
    Check(CheckArgs),

    /// Lists the files that would be scanned.
    Sources,

    /// Lists all options and their effective values.
    Options,

    /// Lists the configuration files and variables that were applied.
    #[command(name = "config-files")]
    ConfigFiles,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
