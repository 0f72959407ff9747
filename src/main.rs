//! JobLocator - XPath locator inference for job postings
//!
//! Main entry point for the JobLocator CLI.

mod cli;
mod cmd_locate;
mod page;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use joblocator_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig, OutputFormat};
use joblocator_core::LocatorEngine;

use cli::{Cli, Commands};
use cmd_locate::{handle_collect, handle_fields, handle_locate};

/// Initialize tracing with console and optional file output.
///
/// `RUST_LOG` overrides the configured level. Log files are written to the
/// configured directory with daily rotation.
fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match &config.dir {
        Some(dir) => {
            let log_dir = PathBuf::from(ConfigLoader::expand_path(dir));
            std::fs::create_dir_all(&log_dir)
                .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("joblocator")
                .filename_suffix("log")
                .max_log_files(30)
                .build(&log_dir)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // The guard flushes the file writer on drop, keep it for the whole run.
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    // Stdout carries results, so console logs go to stderr.
    let text_layer = (!config.json).then(|| fmt::layer().with_target(true).with_writer(std::io::stderr));
    let json_layer = config.json.then(|| fmt::layer().json().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .with(file_layer)
        .init();

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config = ConfigLoader::load_or_default(path.map(PathBuf::as_path))
        .context("Failed to load configuration")?;
    let warnings = ConfigValidator::validate(&config)
        .into_result()
        .context("Invalid configuration")?;

    init_tracing(&config.logging)?;
    for warning in warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let engine = LocatorEngine::new(config.heuristics.clone());

    match cli.command {
        Commands::Locate {
            page,
            anchor,
            field,
            format,
        } => {
            let format = format.map(OutputFormat::from).unwrap_or(config.output.format);
            handle_locate(&engine, &page, anchor.as_deref(), &field, format)
        }
        Commands::Collect { page, picks } => handle_collect(&engine, &page, &picks),
        Commands::Fields => handle_fields(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
