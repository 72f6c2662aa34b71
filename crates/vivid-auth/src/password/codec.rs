//! Argon2 credential hashing and verification.
//!
//! Records written by the legacy account store are bcrypt (`$2a$`, `$2b$`,
//! `$2y$`). Those still verify, and always report that they need a rehash so
//! they move to Argon2 on the next successful login.

use std::fmt::Debug;

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        self, PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use tracing::{debug, warn};

use vivid_core::config::hashing::{HashAlgorithm, HashingConfig};
use vivid_core::error::AppError;

use super::record::CredentialRecord;

/// Records asking for more memory than this (KiB) are refused before any
/// work is done.
pub const MAX_RECORD_MEMORY_KIB: u32 = 1024 * 1024;

/// Records asking for more passes than this are refused.
pub const MAX_RECORD_ITERATIONS: u32 = 64;

/// Records asking for more lanes than this are refused.
pub const MAX_RECORD_PARALLELISM: u32 = 64;

/// Algorithm tags of bcrypt records accepted for verification.
const BCRYPT_TAGS: [&str; 3] = ["2a", "2b", "2y"];

/// Turns plaintext passwords into credential records and checks attempts
/// against them.
pub trait CredentialHasher: Send + Sync + Debug {
    /// Hashes a password with a fresh random salt.
    fn hash(&self, password: &str) -> Result<CredentialRecord, AppError>;

    /// Returns `true` only if `attempted` matches `record`.
    ///
    /// Malformed, empty, or foreign records yield `false`.
    fn verify(&self, record: &CredentialRecord, attempted: &str) -> bool;

    /// Returns `true` if `record` was not produced with the current
    /// algorithm and cost parameters.
    fn needs_rehash(&self, record: &CredentialRecord) -> bool;
}

/// Argon2-based credential codec.
///
/// New records use the configured variant and cost. Verification reads
/// algorithm, version, cost, and salt from the record itself, so records
/// written under older settings keep verifying.
#[derive(Debug, Clone)]
pub struct CredentialCodec {
    /// Argon2 variant for new records.
    algorithm: HashAlgorithm,
    /// Cost parameters for new records.
    params: Params,
}

impl CredentialCodec {
    /// Creates a codec from hashing configuration.
    pub fn new(config: &HashingConfig) -> Result<Self, AppError> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| AppError::configuration(format!("Invalid hashing parameters: {e}")))?;

        Ok(Self {
            algorithm: config.algorithm,
            params,
        })
    }

    /// The Argon2 variant used for new records.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(
            argon2_variant(self.algorithm),
            Version::V0x13,
            self.params.clone(),
        )
    }
}

impl Default for CredentialCodec {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::Argon2id,
            params: Params::default(),
        }
    }
}

impl CredentialHasher for CredentialCodec {
    fn hash(&self, password: &str) -> Result<CredentialRecord, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        debug!(algorithm = %self.algorithm, "Credential record created");
        Ok(CredentialRecord::from_stored(hash.to_string()))
    }

    fn verify(&self, record: &CredentialRecord, attempted: &str) -> bool {
        if record.is_empty() {
            return false;
        }

        if is_bcrypt(record) {
            return verify_bcrypt(record, attempted);
        }

        let parsed = match PasswordHash::new(record.as_str()) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "Malformed credential record");
                return false;
            }
        };

        if !within_cost_ceiling(&parsed) {
            warn!(
                algorithm = %parsed.algorithm,
                "Credential record cost exceeds the verification ceiling"
            );
            return false;
        }

        // The digest comparison inside `verify_password` is constant-time
        // (`password_hash::Output` equality).
        match Argon2::default().verify_password(attempted.as_bytes(), &parsed) {
            Ok(()) => true,
            Err(password_hash::Error::Password) => false,
            Err(e) => {
                warn!(error = %e, "Credential record could not be verified");
                false
            }
        }
    }

    fn needs_rehash(&self, record: &CredentialRecord) -> bool {
        if is_bcrypt(record) {
            return true;
        }

        let Ok(parsed) = PasswordHash::new(record.as_str()) else {
            return true;
        };

        if parsed.algorithm != argon2_variant(self.algorithm).ident() {
            return true;
        }

        if parsed.version != Some(ARGON2_VERSION) {
            return true;
        }

        match Params::try_from(&parsed) {
            Ok(params) => {
                params.m_cost() != self.params.m_cost()
                    || params.t_cost() != self.params.t_cost()
                    || params.p_cost() != self.params.p_cost()
            }
            Err(_) => true,
        }
    }
}

/// Numeric form of [`Version::V0x13`] as it appears in PHC strings.
const ARGON2_VERSION: u32 = 0x13;

fn argon2_variant(algorithm: HashAlgorithm) -> Algorithm {
    match algorithm {
        HashAlgorithm::Argon2id => Algorithm::Argon2id,
        HashAlgorithm::Argon2i => Algorithm::Argon2i,
        HashAlgorithm::Argon2d => Algorithm::Argon2d,
    }
}

fn is_bcrypt(record: &CredentialRecord) -> bool {
    record
        .algorithm()
        .is_some_and(|tag| BCRYPT_TAGS.contains(&tag))
}

fn verify_bcrypt(record: &CredentialRecord, attempted: &str) -> bool {
    match bcrypt::verify(attempted, record.as_str()) {
        Ok(matched) => matched,
        Err(e) => {
            warn!(error = %e, "Legacy bcrypt record could not be verified");
            false
        }
    }
}

fn within_cost_ceiling(parsed: &PasswordHash<'_>) -> bool {
    match Params::try_from(parsed) {
        Ok(params) => {
            params.m_cost() <= MAX_RECORD_MEMORY_KIB
                && params.t_cost() <= MAX_RECORD_ITERATIONS
                && params.p_cost() <= MAX_RECORD_PARALLELISM
        }
        Err(_) => false,
    }
}
