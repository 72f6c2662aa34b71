//! Opaque, self-describing credential records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A stored credential in PHC string format
/// (`$argon2id$v=19$m=19456,t=2,p=1$<salt>$<digest>`).
///
/// The record carries the algorithm, cost, salt, and digest, so verification
/// needs nothing else. It is safe to persist verbatim and is never parsed by
/// callers. Replace it wholesale on password change.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialRecord(String);

impl CredentialRecord {
    /// Wraps a record loaded from storage. No validation happens here; a
    /// malformed record simply never verifies.
    pub fn from_stored(record: impl Into<String>) -> Self {
        Self(record.into())
    }

    /// The record text, for persistence.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the record, returning the text.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the record is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The algorithm tag, if the record looks like a PHC string.
    pub fn algorithm(&self) -> Option<&str> {
        self.0
            .strip_prefix('$')
            .and_then(|rest| rest.split('$').next())
            .filter(|tag| !tag.is_empty())
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CredentialRecord")
            .field(&self.algorithm().unwrap_or("unknown"))
            .finish()
    }
}

impl fmt::Display for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2hoYXNo";

    #[test]
    fn test_algorithm_tag() {
        assert_eq!(
            CredentialRecord::from_stored(SAMPLE).algorithm(),
            Some("argon2id")
        );
        assert_eq!(CredentialRecord::from_stored("garbage").algorithm(), None);
        assert_eq!(CredentialRecord::from_stored("$$").algorithm(), None);
        assert_eq!(CredentialRecord::from_stored("").algorithm(), None);
    }

    #[test]
    fn test_debug_hides_digest() {
        let debug = format!("{:?}", CredentialRecord::from_stored(SAMPLE));
        assert_eq!(debug, "CredentialRecord(\"argon2id\")");
    }

    #[test]
    fn test_serde_transparent() {
        let record = CredentialRecord::from_stored(SAMPLE);
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, format!("\"{SAMPLE}\""));
        let parsed: CredentialRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, record);
    }
}
