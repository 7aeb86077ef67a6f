// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Generate command implementation for envdoc.

use anyhow::Context;
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::cli::generate::GenerateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::extract::ini::extract_ini_overrides;
use crate::extract::sandbox::extract_table_overrides;
use crate::extract::shell::external_references;
use crate::extract::template::documented_keys;
use crate::output::{render, write_atomic};
use crate::snapshot::{Aggregator, DocumentationSnapshot};
use crate::sources::SourcePlan;

/// Today's date (UTC) in the configured format.
#[must_use]
pub fn today(config: &Config) -> String {
    Utc::now().format(&config.generate.date_format).to_string()
}

/// Scan every source and assemble the snapshot.
///
/// # Errors
///
/// Returns an error if discovery fails, the entry script is missing, or a
/// source exists but cannot be read.
pub fn build_snapshot(config: &Config, generated_at: &str) -> Result<DocumentationSnapshot> {
    let plan = SourcePlan::discover(config).context("Failed to discover config sources")?;
    let loaded = plan.load().context("Failed to read sources")?;

    let external_refs = external_references(loaded.entry.text());
    let documented = loaded
        .env_template
        .as_ref()
        .map(|template| documented_keys(template.text()))
        .unwrap_or_default();
    let ini = extract_ini_overrides(&loaded.ini);
    let lua = extract_table_overrides(&loaded.lua);

    let collisions = ini.collisions.len() + lua.collisions.len();
    if collisions > 0 {
        warn!(
            count = collisions,
            "distinct keys share an environment variable name; the first occurrence is documented"
        );
    }

    let snapshot = Aggregator::builder()
        .with_generated_at(generated_at)
        .with_sources(plan.source_info())
        .maybe_with_image_tag(config.generate.image_tag.clone())
        .with_external_refs(external_refs)
        .with_documented_keys(documented)
        .with_ini_overrides(ini.overrides)
        .with_table_overrides(lua.overrides)
        .build()
        .build();

    for var in snapshot.undocumented() {
        debug!(name = %var.name, "handcrafted variable missing from env template");
    }
    info!(
        mode = %plan.mode(),
        handcrafted = snapshot.handcrafted_env().len(),
        undocumented = snapshot.undocumented().count(),
        ini = snapshot.ini_env().len(),
        lua = snapshot.lua_env().len(),
        "built snapshot"
    );

    Ok(snapshot)
}

/// Main handler for generate command.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be built, serialized or written.
pub fn run_generate_command(args: &GenerateArgs, config: &Config) -> Result<()> {
    let snapshot = build_snapshot(config, &today(config))?;
    let content = render(&snapshot)?;

    if args.stdout {
        print!("{content}");
        return Ok(());
    }

    let undocumented = snapshot.undocumented().count();
    if undocumented > 0 {
        warn!(
            count = undocumented,
            template = %config.paths.env_template.display(),
            "entry script reads variables the env template does not document"
        );
    }

    write_atomic(&config.paths.output, &content)?;
    println!("Wrote {}", config.paths.output.display());
    Ok(())
}
