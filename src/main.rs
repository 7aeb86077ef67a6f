// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Generate | Check | Sources | Options | ConfigFiles | Version
//! ```

use std::process::ExitCode;

use envdoc::cli::global::GlobalOptions;
use envdoc::cli::{self, Command};
use envdoc::cmd::check::run_check_command;
use envdoc::cmd::config::{run_config_files_command, run_options_command};
use envdoc::cmd::generate::run_generate_command;
use envdoc::cmd::sources::run_sources_command;
use envdoc::config::Config;
use envdoc::config::loader::{ConfigLoader, DEFAULT_CONFIG_FILE};
use envdoc::logging::init_logging;
use envdoc::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Prefix of `ENVDOC_SECTION__KEY` configuration variables.
const ENV_PREFIX: &str = "ENVDOC";

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::WARN);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.clone())
        .with_format(global.log_format)
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global, &[]).map(|config| run_options_command(&config))
        }
        Some(Command::ConfigFiles) => build_config_loader(&cli.global).map(|loader| {
            run_config_files_command(&loader.format_loaded_files());
        }),
        Some(Command::Sources) => {
            load_config(&cli.global, &[]).and_then(|config| run_sources_command(&config))
        }
        Some(Command::Generate(args)) => load_config(&cli.global, &args.to_config_overrides())
            .and_then(|config| run_generate_command(args, &config)),
        Some(Command::Check(args)) => load_config(&cli.global, &args.to_config_overrides())
            .and_then(|config| run_check_command(&config)),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> envdoc::error::Result<ConfigLoader> {
    let root = global.repo_root();
    let mut loader = ConfigLoader::new().with_repo_root(&root);
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(root.join(DEFAULT_CONFIG_FILE));
    }
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    loader = loader
        .with_env_prefix(ENV_PREFIX)
        .with_legacy_vars(std::env::vars())?;
    for option in &global.options {
        loader = loader.set_option(option)?;
    }
    Ok(loader)
}

fn load_config(
    global: &GlobalOptions,
    overrides: &[(&'static str, String)],
) -> envdoc::error::Result<Config> {
    let mut loader = build_config_loader(global)?;
    for (key, value) in overrides {
        loader = loader.set(key, value.clone())?;
    }
    loader.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}
