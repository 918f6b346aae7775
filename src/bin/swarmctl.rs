//! Swarmctl CLI Binary
//!
//! Command-line entry point: load configuration, initialize logging,
//! translate the command, and surface the backend's output.

use clap::Parser;
use std::process;
use swarmctl::cli::{map_error, Cli, RunContext};
use swarmctl::config::{ConfigLoader, SwarmctlConfig};
use swarmctl::error::SwarmError;
use swarmctl::logging::{init_logging, LoggingConfig};
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    if let Some(logging_config) = build_logging_config(&cli, &config) {
        if let Err(e) = init_logging(Some(&logging_config)) {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    }

    info!("swarmctl starting");

    let context = match RunContext::new(&config, cli.backend.as_deref(), cli.dry_run) {
        Ok(context) => context,
        Err(e) => {
            error!("Error building run context: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

fn load_config(cli: &Cli) -> Result<SwarmctlConfig, SwarmError> {
    match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(&cli.workspace),
    }
}

/// Build logging configuration from CLI args over the config file.
/// Precedence: --quiet disables logging entirely, explicit flags override
/// --verbose, --verbose overrides the file.
fn build_logging_config(cli: &Cli, config: &SwarmctlConfig) -> Option<LoggingConfig> {
    if cli.quiet {
        return None;
    }
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(level) = &cli.log_level {
        logging.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        logging.format = format.clone();
    }
    Some(logging)
}
