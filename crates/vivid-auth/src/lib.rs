//! # vivid-auth
//!
//! Credential validation and account provisioning for VividVerse.
//!
//! ## Modules
//!
//! - `password` — strength policy, identity-similarity checks, and Argon2
//!   credential records
//! - `provisioning` — registration, login, and password-change flows built
//!   on the policy and the hasher
//! - `offload` — bounded blocking pool for running hash/verify off async
//!   request paths

pub mod offload;
pub mod password;
pub mod provisioning;

pub use offload::HashPool;
pub use password::{
    Candidate, CredentialCodec, CredentialHasher, CredentialRecord, PolicyVerdict,
    StrengthPolicy, VerdictReason,
};
pub use provisioning::{CredentialService, PasswordChange, Registration};
