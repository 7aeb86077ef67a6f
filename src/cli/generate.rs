// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for `generate` and `check`.
//!
//! ```text
//! --output FILE      → paths.output
//! --sources-dir DIR  → paths.sources_dir
//! --image-tag TAG    → generate.image_tag
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `generate` command.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Where to write the inventory.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directory holding config files extracted from the server image.
    #[arg(long = "sources-dir", value_name = "DIR")]
    pub sources_dir: Option<PathBuf>,

    /// Image tag recorded in the inventory.
    #[arg(long = "image-tag", value_name = "TAG")]
    pub image_tag: Option<String>,

    /// Print to stdout instead of writing the output file.
    #[arg(long)]
    pub stdout: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// The inventory to compare against.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directory holding config files extracted from the server image.
    #[arg(long = "sources-dir", value_name = "DIR")]
    pub sources_dir: Option<PathBuf>,

    /// Image tag the inventory should record.
    #[arg(long = "image-tag", value_name = "TAG")]
    pub image_tag: Option<String>,
}

impl GenerateArgs {
    /// Converts the flags to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, String)> {
        overrides(
            self.output.as_ref(),
            self.sources_dir.as_ref(),
            self.image_tag.as_ref(),
        )
    }
}

impl CheckArgs {
    /// Converts the flags to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, String)> {
        overrides(
            self.output.as_ref(),
            self.sources_dir.as_ref(),
            self.image_tag.as_ref(),
        )
    }
}

fn overrides(
    output: Option<&PathBuf>,
    sources_dir: Option<&PathBuf>,
    image_tag: Option<&String>,
) -> Vec<(&'static str, String)> {
    let mut overrides = Vec::new();

    if let Some(path) = output {
        overrides.push(("paths.output", path.display().to_string()));
    }

    if let Some(path) = sources_dir {
        overrides.push(("paths.sources_dir", path.display().to_string()));
    }

    if let Some(tag) = image_tag {
        overrides.push(("generate.image_tag", tag.clone()));
    }

    overrides
}
