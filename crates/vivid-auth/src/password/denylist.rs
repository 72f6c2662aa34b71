//! Known-weak passwords rejected by exact, case-insensitive match.

use std::collections::HashSet;

/// Built-in list of common passwords.
pub const BUILTIN_DENYLIST: &[&str] = &[
    "password",
    "123456",
    "123456789",
    "qwerty",
    "abc123",
    "password123",
    "admin",
    "letmein",
    "welcome",
    "monkey",
    "dragon",
    "master",
    "hello",
    "freedom",
    "whatever",
    "qwerty123",
    "trustno1",
    "jordan",
    "harley",
    "ranger",
    "iwantu",
    "jennifer",
    "joshua",
    "maggie",
    "password1",
    "robert",
    "daniel",
    "heather",
    "michelle",
    "charlie",
];

/// A set of lowercased passwords that must never be accepted.
#[derive(Debug, Clone, Default)]
pub struct Denylist {
    entries: HashSet<String>,
}

impl Denylist {
    /// Creates an empty denylist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a denylist holding [`BUILTIN_DENYLIST`].
    pub fn builtin() -> Self {
        let mut list = Self::new();
        list.extend(BUILTIN_DENYLIST.iter().copied());
        list
    }

    /// Adds entries, lowercasing each one. Blank entries are ignored.
    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            let entry = entry.as_ref().trim();
            if !entry.is_empty() {
                self.entries.insert(entry.to_lowercase());
            }
        }
    }

    /// Returns `true` if `password_lower` is denylisted.
    ///
    /// The argument must already be lowercased.
    pub fn contains(&self, password_lower: &str) -> bool {
        self.entries.contains(password_lower)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_contains_common_passwords() {
        let list = Denylist::builtin();
        assert_eq!(list.len(), BUILTIN_DENYLIST.len());
        assert!(list.contains("password"));
        assert!(list.contains("qwerty123"));
        assert!(!list.contains("securepass123"));
    }

    #[test]
    fn test_extend_lowercases_and_skips_blank() {
        let mut list = Denylist::new();
        list.extend(["VividVerse2024", "  ", ""]);
        assert_eq!(list.len(), 1);
        assert!(list.contains("vividverse2024"));
        assert!(!list.contains("VividVerse2024"));
    }
}
