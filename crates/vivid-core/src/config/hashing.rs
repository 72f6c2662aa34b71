//! Credential hashing configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Argon2 variant used for new credential records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// Hybrid variant, recommended for password storage.
    #[default]
    Argon2id,
    /// Data-independent memory access.
    Argon2i,
    /// Data-dependent memory access.
    Argon2d,
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argon2id => write!(f, "argon2id"),
            Self::Argon2i => write!(f, "argon2i"),
            Self::Argon2d => write!(f, "argon2d"),
        }
    }
}

/// Cost parameters for the adaptive hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashingConfig {
    /// Argon2 variant.
    #[serde(default)]
    pub algorithm: HashAlgorithm,
    /// Memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    /// Number of passes over memory.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Degree of parallelism (lanes).
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl HashingConfig {
    /// Validates cost parameters against the Argon2 minimums.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.iterations == 0 {
            return Err(AppError::configuration(
                "hashing.iterations must be at least 1",
            ));
        }
        if self.parallelism == 0 {
            return Err(AppError::configuration(
                "hashing.parallelism must be at least 1",
            ));
        }
        if self.memory_kib < 8 * self.parallelism {
            return Err(AppError::configuration(format!(
                "hashing.memory_kib must be at least {} for parallelism {}",
                8 * self.parallelism,
                self.parallelism
            )));
        }
        Ok(())
    }
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}
