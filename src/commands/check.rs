//! Strength policy check command.

use clap::Args;

use crate::output::{self, OutputFormat};
use vivid_auth::password::StrengthPolicy;
use vivid_core::config::AppConfig;
use vivid_core::result::AppResult;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
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

/// Execute the check command
pub fn execute(
    args: &CheckArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> AppResult<i32> {
    let password = super::read_password(args.password_stdin, "Password", false)?;
    let policy = StrengthPolicy::new(&config.policy);

    let verdict = policy.evaluate(&password, &args.username, args.display_name.as_deref());

    match format {
        OutputFormat::Json => output::print_json(&verdict),
        OutputFormat::Text => {
            if verdict.is_accepted() {
                output::print_success("Password accepted");
            } else {
                output::print_failure(&format!(
                    "Password rejected ({})",
                    verdict.reason()
                ));
                if let Some(detail) = verdict.detail() {
                    output::print_kv("Detail", detail);
                }
            }
        }
    }

    if verdict.is_accepted() {
        Ok(super::EXIT_SUCCESS)
    } else {
        Ok(super::EXIT_REJECTED)
    }
}
