//! Credential record creation command.

use std::sync::Arc;

use clap::Args;
use serde::Serialize;

use crate::output::{self, OutputFormat};
use vivid_auth::offload::HashPool;
use vivid_auth::password::{CredentialCodec, StrengthPolicy};
use vivid_core::config::AppConfig;
use vivid_core::result::AppResult;

/// Arguments for the hash command
#[derive(Debug, Args)]
pub struct HashArgs {
    /// Account username
    #[arg(short, long)]
    pub username: String,

    /// Account display name
    #[arg(short, long)]
    pub display_name: Option<String>,

    /// Read the password from the first line of stdin instead of prompting
    #[arg(long)]
    pub password_stdin: bool,
}

/// JSON output for a new record
#[derive(Debug, Serialize)]
struct HashOutput<'a> {
    /// Algorithm tag
    algorithm: &'a str,
    /// PHC-format credential record
    record: &'a str,
}

/// Execute the hash command
pub async fn execute(
    args: &HashArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> AppResult<i32> {
    let password = super::read_password(args.password_stdin, "New password", true)?;
    let policy = StrengthPolicy::new(&config.policy);

    let verdict = policy.evaluate(&password, &args.username, args.display_name.as_deref());
    if !verdict.is_accepted() {
        match format {
            OutputFormat::Json => output::print_json(&verdict),
            OutputFormat::Text => output::print_failure(&format!(
                "Password rejected ({}): {}",
                verdict.reason(),
                verdict.detail().unwrap_or_else(|| verdict.reason().message())
            )),
        }
        return Ok(super::EXIT_REJECTED);
    }

    let codec = CredentialCodec::new(&config.hashing)?;
    let pool = HashPool::new(Arc::new(codec), &config.offload);
    let record = pool.hash(password).await?;

    tracing::info!(username = %args.username, "Credential record generated");

    match format {
        OutputFormat::Json => output::print_json(&HashOutput {
            algorithm: record.algorithm().unwrap_or("unknown"),
            record: record.as_str(),
        }),
        OutputFormat::Text => println!("{}", record),
    }

    Ok(super::EXIT_SUCCESS)
}
