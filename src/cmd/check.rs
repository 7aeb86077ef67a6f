// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Check command implementation for envdoc.

use crate::cmd::generate::{build_snapshot, today};
use crate::config::Config;
use crate::error::Result;
use crate::output::check;

/// Main handler for check command.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be built or if the file at
/// `paths.output` is missing or out of date.
pub fn run_check_command(config: &Config) -> Result<()> {
    let snapshot = build_snapshot(config, &today(config))?;
    check(&config.paths.output, &snapshot)?;
    println!("{} is up to date", config.paths.output.display());
    Ok(())
}
