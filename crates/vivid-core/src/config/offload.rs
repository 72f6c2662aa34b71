//! Blocking offload pool configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Bounds the number of hash/verify jobs running on the blocking pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffloadConfig {
    /// Maximum concurrent hash or verify jobs.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

impl OffloadConfig {
    /// Validates the pool size.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_concurrent == 0 {
            return Err(AppError::configuration(
                "offload.max_concurrent must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for OffloadConfig {
    fn default() -> Self {
        Self {
            max_concurrent: default_max_concurrent(),
        }
    }
}

fn default_max_concurrent() -> usize {
    4
}
