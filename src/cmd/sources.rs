// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sources command implementation for envdoc.

use crate::config::Config;
use crate::error::Result;
use crate::sources::SourcePlan;

/// Lines describing what a run would scan.
///
/// # Errors
///
/// Returns an error if the sources directory cannot be searched.
pub fn format_sources(config: &Config) -> Result<Vec<String>> {
    let plan = SourcePlan::discover(config)?;
    let info = plan.source_info();

    let mut lines = vec![
        format!("mode         = {}", plan.mode()),
        format!("entry        = {}", info.entry),
        format!("env_template = {}", info.env_template),
    ];
    lines.extend(info.ini_files.iter().map(|f| format!("ini          = {f}")));
    lines.extend(info.lua_files.iter().map(|f| format!("lua          = {f}")));
    Ok(lines)
}

/// Main handler for sources command.
///
/// # Errors
///
/// Returns an error if the sources directory cannot be searched.
pub fn run_sources_command(config: &Config) -> Result<()> {
    for line in format_sources(config)? {
        println!("{line}");
    }
    Ok(())
}
