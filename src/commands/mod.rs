//! CLI command definitions and dispatch.

pub mod check;
pub mod config;
pub mod hash;
pub mod verify;

use std::io::BufRead;

use clap::{Parser, Subcommand};
use zeroize::Zeroizing;

use crate::output::OutputFormat;
use vivid_core::config::AppConfig;
use vivid_core::error::AppError;
use vivid_core::result::AppResult;

/// Command completed and the check passed.
pub const EXIT_SUCCESS: i32 = 0;
/// Configuration, I/O, or hashing backend failure.
pub const EXIT_FAILURE: i32 = 1;
/// The strength policy rejected the password.
pub const EXIT_REJECTED: i32 = 2;
/// The password did not match the credential record.
pub const EXIT_MISMATCH: i32 = 3;

/// VividVerse credentials — password policy checks and credential records
#[derive(Debug, Parser)]
#[command(name = "vivid-cred", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate a password against the strength policy
    Check(check::CheckArgs),
    /// Evaluate and hash a password into a credential record
    Hash(hash::HashArgs),
    /// Verify a password against a credential record
    Verify(verify::VerifyArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command, returning the process exit code
    pub async fn execute(&self, config: &AppConfig) -> AppResult<i32> {
        match &self.command {
            Commands::Check(args) => check::execute(args, config, self.format),
            Commands::Hash(args) => hash::execute(args, config, self.format).await,
            Commands::Verify(args) => verify::execute(args, config, self.format).await,
            Commands::Config(args) => config::execute(args, config, self.format),
        }
    }
}

/// Helper: read a password from stdin (first line) or an interactive prompt
pub fn read_password(
    from_stdin: bool,
    prompt: &str,
    confirm: bool,
) -> Result<Zeroizing<String>, AppError> {
    if from_stdin {
        let mut line = Zeroizing::new(String::new());
        std::io::stdin().lock().read_line(&mut line)?;
        return Ok(Zeroizing::new(
            line.trim_end_matches(['\r', '\n']).to_string(),
        ));
    }

    let mut input = dialoguer::Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true);
    if confirm {
        input = input.with_confirmation("Confirm password", "Passwords do not match");
    }

    input
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| AppError::internal(format!("Failed to read password: {}", e)))
}
