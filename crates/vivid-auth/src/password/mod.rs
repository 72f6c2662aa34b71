//! Password policy enforcement and credential hashing.

pub mod codec;
pub mod denylist;
pub mod policy;
pub mod record;
pub mod similarity;
pub mod verdict;

pub use codec::{CredentialCodec, CredentialHasher};
pub use denylist::Denylist;
pub use policy::StrengthPolicy;
pub use record::CredentialRecord;
pub use verdict::{Candidate, PolicyVerdict, VerdictReason};
