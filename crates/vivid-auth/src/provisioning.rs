//! Account provisioning flows: registration, login, and password change.
//!
//! The caller owns storage and uniqueness checks. This service only decides
//! and produces credential records.

use std::sync::Arc;

use tracing::{debug, info};

use vivid_core::config::AppConfig;
use vivid_core::error::AppError;

use crate::password::{
    Candidate, CredentialCodec, CredentialHasher, CredentialRecord, PolicyVerdict,
    StrengthPolicy,
};

/// Password hashed once at construction and verified against when no
/// account exists, so unknown usernames cost the same as wrong passwords.
const DECOY_PASSWORD: &str = "decoy-Credential-0x5f3759df";

/// Outcome of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// The password was accepted; persist this record.
    Accepted(CredentialRecord),
    /// The password was rejected; nothing was hashed.
    Rejected(PolicyVerdict),
}

impl Registration {
    /// The record, if accepted.
    pub fn record(&self) -> Option<&CredentialRecord> {
        match self {
            Self::Accepted(record) => Some(record),
            Self::Rejected(_) => None,
        }
    }
}

/// Outcome of a password change attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordChange {
    /// Replace the stored record with this one.
    Changed(CredentialRecord),
    /// The supplied current password did not verify.
    CurrentPasswordInvalid,
    /// The new password is identical to the current one.
    SameAsCurrent,
    /// The new password was rejected by the strength policy.
    Rejected(PolicyVerdict),
}

/// Composes the strength policy and a credential hasher.
#[derive(Debug, Clone)]
pub struct CredentialService {
    /// Strength policy.
    policy: StrengthPolicy,
    /// Credential hasher.
    hasher: Arc<dyn CredentialHasher>,
    /// Record verified against for unknown accounts.
    decoy: CredentialRecord,
}

impl CredentialService {
    /// Creates a new credential service.
    ///
    /// Fails only if the hasher cannot produce a record.
    pub fn new(policy: StrengthPolicy, hasher: Arc<dyn CredentialHasher>) -> Result<Self, AppError> {
        let decoy = hasher.hash(DECOY_PASSWORD)?;
        Ok(Self {
            policy,
            hasher,
            decoy,
        })
    }

    /// Creates a service with an Argon2 codec from application configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let policy = StrengthPolicy::new(&config.policy);
        let codec = CredentialCodec::new(&config.hashing)?;
        Self::new(policy, Arc::new(codec))
    }

    /// The credential hasher.
    pub fn hasher(&self) -> &Arc<dyn CredentialHasher> {
        &self.hasher
    }

    /// Evaluates the candidate and, if accepted, hashes the password.
    pub fn register(&self, candidate: &Candidate) -> Result<Registration, AppError> {
        let verdict = self.policy.evaluate_candidate(candidate);
        if !verdict.is_accepted() {
            return Ok(Registration::Rejected(verdict));
        }

        let record = self.hasher.hash(candidate.password())?;

        info!(username = %candidate.username, "Credential provisioned");

        Ok(Registration::Accepted(record))
    }

    /// Checks a login attempt against the stored record, if any.
    ///
    /// With no record the decoy is verified and `false` returned.
    pub fn login(&self, record: Option<&CredentialRecord>, attempted: &str) -> bool {
        match record {
            Some(record) => self.hasher.verify(record, attempted),
            None => {
                std::hint::black_box(self.hasher.verify(&self.decoy, attempted));
                debug!("Login attempted for an account without a credential");
                false
            }
        }
    }

    /// Replaces the credential after checking the current password.
    pub fn change_password(
        &self,
        current_record: &CredentialRecord,
        current_password: &str,
        candidate: &Candidate,
    ) -> Result<PasswordChange, AppError> {
        if !self.hasher.verify(current_record, current_password) {
            return Ok(PasswordChange::CurrentPasswordInvalid);
        }

        let verdict = self.policy.evaluate_candidate(candidate);
        if !verdict.is_accepted() {
            return Ok(PasswordChange::Rejected(verdict));
        }

        if candidate.password() == current_password {
            return Ok(PasswordChange::SameAsCurrent);
        }

        let record = self.hasher.hash(candidate.password())?;

        info!(username = %candidate.username, "Password changed");

        Ok(PasswordChange::Changed(record))
    }
}
