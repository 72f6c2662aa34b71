//! Credential verification command.

use std::sync::Arc;

use clap::Args;
use serde::Serialize;

use crate::output::{self, OutputFormat};
use vivid_auth::offload::HashPool;
use vivid_auth::password::{CredentialCodec, CredentialHasher, CredentialRecord};
use vivid_core::config::AppConfig;
use vivid_core::result::AppResult;

/// Arguments for the verify command
#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Stored credential record (PHC string)
    #[arg(short, long)]
    pub record: String,

    /// Read the password from the first line of stdin instead of prompting
    #[arg(long)]
    pub password_stdin: bool,
}

/// JSON output for a verification
#[derive(Debug, Serialize)]
struct VerifyOutput {
    /// Whether the password matched
    matched: bool,
    /// Whether the record should be re-hashed with current settings
    needs_rehash: bool,
}

/// Execute the verify command
pub async fn execute(
    args: &VerifyArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> AppResult<i32> {
    let password = super::read_password(args.password_stdin, "Password", false)?;
    let record = CredentialRecord::from_stored(args.record.trim());

    let codec = Arc::new(CredentialCodec::new(&config.hashing)?);
    let needs_rehash = codec.needs_rehash(&record);
    let pool = HashPool::new(codec, &config.offload);
    let matched = pool.verify(record, password).await;

    match format {
        OutputFormat::Json => output::print_json(&VerifyOutput {
            matched,
            needs_rehash,
        }),
        OutputFormat::Text => {
            if matched {
                output::print_success("Password matches");
                if needs_rehash {
                    output::print_kv("Note", "record uses outdated hashing settings");
                }
            } else {
                output::print_failure("Password does not match");
            }
        }
    }

    if matched {
        Ok(super::EXIT_SUCCESS)
    } else {
        Ok(super::EXIT_MISMATCH)
    }
}
