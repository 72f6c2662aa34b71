//! VividVerse credentials CLI
//!
//! Operator entry point: loads configuration, initializes logging, and runs
//! policy checks, hashing, and verification from the command line.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use vivid_core::config::AppConfig;

mod commands;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(commands::EXIT_FAILURE);
        }
    };

    init_logging(&config);

    match cli.execute(&config).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!(kind = %e.kind, "Command failed");
            output::print_error(&e.to_string());
            std::process::exit(commands::EXIT_FAILURE);
        }
    }
}

/// Initialize tracing/logging on stderr so stdout stays machine-readable.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
