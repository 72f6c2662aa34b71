//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use vivid_core::config::AppConfig;
use vivid_core::result::AppResult;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> AppResult<i32> {
    match &args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => output::print_json(config),
            OutputFormat::Text => {
                println!("Policy");
                output::print_kv("Minimum length", &config.policy.min_length.to_string());
                output::print_kv(
                    "Fragment length",
                    &config.policy.min_fragment_length.to_string(),
                );
                output::print_kv(
                    "Built-in denylist",
                    &config.policy.use_builtin_denylist.to_string(),
                );
                output::print_kv(
                    "Extra denylist entries",
                    &config.policy.extra_denylist.len().to_string(),
                );
                output::print_kv(
                    "Entropy floor",
                    &config
                        .policy
                        .min_entropy_score
                        .map_or_else(|| "off".to_string(), |s| s.to_string()),
                );
                println!("Hashing");
                output::print_kv("Algorithm", &config.hashing.algorithm.to_string());
                output::print_kv("Memory (KiB)", &config.hashing.memory_kib.to_string());
                output::print_kv("Iterations", &config.hashing.iterations.to_string());
                output::print_kv("Parallelism", &config.hashing.parallelism.to_string());
                output::print_kv(
                    "Offload slots",
                    &config.offload.max_concurrent.to_string(),
                );
            }
        },
    }

    Ok(super::EXIT_SUCCESS)
}
