// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   generate, check, sources, config
//!
//! generate / check
//!   SourcePlan::discover --> load --> extract::* --> Aggregator --> output
//! ```

pub mod check;
pub mod config;
pub mod generate;
pub mod sources;

#[cfg(test)]
mod tests;
