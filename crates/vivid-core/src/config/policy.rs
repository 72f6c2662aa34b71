//! Password strength policy configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Strength policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Minimum password length in characters.
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    /// Shortest identity fragment that counts as an overlap.
    #[serde(default = "default_min_fragment_length")]
    pub min_fragment_length: usize,
    /// Whether the built-in list of common passwords is consulted.
    #[serde(default = "default_true")]
    pub use_builtin_denylist: bool,
    /// Additional passwords to reject, matched case-insensitively.
    #[serde(default)]
    pub extra_denylist: Vec<String>,
    /// Optional zxcvbn score floor (0-4). Unset disables the check.
    #[serde(default)]
    pub min_entropy_score: Option<u8>,
}

impl PolicyConfig {
    /// Validates policy bounds.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.min_length == 0 {
            return Err(AppError::configuration(
                "policy.min_length must be at least 1",
            ));
        }
        if self.min_fragment_length < 2 {
            return Err(AppError::configuration(
                "policy.min_fragment_length must be at least 2",
            ));
        }
        if let Some(score) = self.min_entropy_score {
            if score > 4 {
                return Err(AppError::configuration(format!(
                    "policy.min_entropy_score must be between 0 and 4, got {score}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            min_fragment_length: default_min_fragment_length(),
            use_builtin_denylist: true,
            extra_denylist: Vec::new(),
            min_entropy_score: None,
        }
    }
}

fn default_min_length() -> usize {
    8
}

fn default_min_fragment_length() -> usize {
    3
}

fn default_true() -> bool {
    true
}
