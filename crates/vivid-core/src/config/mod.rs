//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field carries a default, so an empty source set yields a
//! usable configuration.

pub mod hashing;
pub mod logging;
pub mod offload;
pub mod policy;

use serde::{Deserialize, Serialize};

use self::hashing::HashingConfig;
use self::logging::LoggingConfig;
use self::offload::OffloadConfig;
use self::policy::PolicyConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides (`VIVID__HASHING__MEMORY_KIB`).
pub const ENV_PREFIX: &str = "VIVID";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Password strength policy settings.
    #[serde(default)]
    pub policy: PolicyConfig,
    /// Credential hashing settings.
    #[serde(default)]
    pub hashing: HashingConfig,
    /// Blocking offload pool settings.
    #[serde(default)]
    pub offload: OffloadConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// The file is optional. Values are overlaid with environment variables
    /// prefixed with `VIVID` using `__` as the section separator.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("policy.extra_denylist")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects settings that would make the policy or the hasher unusable.
    pub fn validate(&self) -> Result<(), AppError> {
        self.policy.validate()?;
        self.hashing.validate()?;
        self.offload.validate()?;
        Ok(())
    }
}
