//! Integration tests for the registration, login, and password-change flow.

mod helpers;

use rstest::rstest;

use vivid_auth::password::{Candidate, CredentialHasher, CredentialRecord, VerdictReason};
use vivid_auth::provisioning::{PasswordChange, Registration};

#[test]
fn test_register_then_login() {
    let mut accounts = helpers::TestAccounts::new();
    let candidate = Candidate::new("john", "SecurePass123").with_display_name("John Doe");

    let outcome = accounts.register(&candidate);
    assert!(matches!(outcome, Registration::Accepted(_)));

    assert!(accounts.login("john", "SecurePass123"));
    assert!(!accounts.login("john", "securepass123"));
    assert!(!accounts.login("nobody", "SecurePass123"));
}

#[test]
fn test_rejected_registration_stores_nothing() {
    let mut accounts = helpers::TestAccounts::new();
    let candidate = Candidate::new("user", "doe123X9").with_display_name("John Doe");

    match accounts.register(&candidate) {
        Registration::Rejected(verdict) => {
            assert_eq!(verdict.reason(), VerdictReason::ContainsDisplayName);
            assert!(verdict.detail().is_some());
        }
        Registration::Accepted(_) => panic!("expected rejection"),
    }
    assert!(accounts.record("user").is_none());
    assert!(!accounts.login("user", "doe123X9"));
}

#[rstest]
#[case("john", "john123", None, VerdictReason::TooShort)]
#[case("john", "John1234", None, VerdictReason::ContainsUsername)]
#[case("user123", "doe123X9", Some("John Doe"), VerdictReason::ContainsUsername)]
#[case("alice", "VividVerse2024", None, VerdictReason::TooCommon)]
#[case("alice", "Qwerty123", None, VerdictReason::TooCommon)]
#[case("alice", "", None, VerdictReason::MissingInput)]
fn test_registration_reasons(
    #[case] username: &str,
    #[case] password: &str,
    #[case] display_name: Option<&str>,
    #[case] expected: VerdictReason,
) {
    let service = helpers::test_service();
    let mut candidate = Candidate::new(username, password);
    if let Some(name) = display_name {
        candidate = candidate.with_display_name(name);
    }

    match service.register(&candidate).expect("register") {
        Registration::Rejected(verdict) => assert_eq!(verdict.reason(), expected),
        Registration::Accepted(_) => panic!("expected {expected:?}"),
    }
}

#[test]
fn test_password_change_replaces_record() {
    let mut accounts = helpers::TestAccounts::new();
    accounts.register(&Candidate::new("john", "SecurePass123"));
    let original = accounts.record("john").cloned().expect("record");

    let outcome = accounts.change_password("SecurePass123", &Candidate::new("john", "FreshSecret789"));
    assert!(matches!(outcome, PasswordChange::Changed(_)));

    let replaced = accounts.record("john").cloned().expect("record");
    assert_ne!(original, replaced);
    assert!(accounts.login("john", "FreshSecret789"));
    assert!(!accounts.login("john", "SecurePass123"));
}

#[test]
fn test_password_change_failures_keep_record() {
    let mut accounts = helpers::TestAccounts::new();
    accounts.register(&Candidate::new("john", "SecurePass123"));
    let original = accounts.record("john").cloned().expect("record");

    assert_eq!(
        accounts.change_password("NotMyPass123", &Candidate::new("john", "FreshSecret789")),
        PasswordChange::CurrentPasswordInvalid
    );
    assert_eq!(
        accounts.change_password("SecurePass123", &Candidate::new("john", "SecurePass123")),
        PasswordChange::SameAsCurrent
    );
    assert!(matches!(
        accounts.change_password("SecurePass123", &Candidate::new("john", "Johnny2024x")),
        PasswordChange::Rejected(_)
    ));

    assert_eq!(accounts.record("john"), Some(&original));
    assert!(accounts.login("john", "SecurePass123"));
}

#[test]
fn test_records_from_storage_verify() {
    let service = helpers::test_service();
    let record = service
        .hasher()
        .hash("SecurePass123")
        .expect("hash");

    // Round-trip through the caller's storage as plain text.
    let stored = record.clone().into_string();
    let loaded = CredentialRecord::from_stored(stored);

    assert_eq!(loaded, record);
    assert!(service.login(Some(&loaded), "SecurePass123"));
    assert!(!service.hasher().needs_rehash(&loaded));
}

#[test]
fn test_legacy_bcrypt_record_migrates_on_login() {
    let service = helpers::test_service();
    let legacy = CredentialRecord::from_stored(bcrypt::hash("SecurePass123", 4).expect("bcrypt"));

    assert!(service.login(Some(&legacy), "SecurePass123"));
    assert!(!service.login(Some(&legacy), "WrongPass123"));
    assert!(service.hasher().needs_rehash(&legacy));

    let upgraded = service.hasher().hash("SecurePass123").expect("hash");
    assert_eq!(upgraded.algorithm(), Some("argon2id"));
    assert!(service.login(Some(&upgraded), "SecurePass123"));
    assert!(!service.hasher().needs_rehash(&upgraded));
}

#[test]
fn test_corrupt_records_fail_closed() {
    let service = helpers::test_service();
    let record = service.hasher().hash("SecurePass123").expect("hash");
    let text = record.as_str();

    // Change one character well inside the digest.
    let position = text.len() - 10;
    let original = &text[position..position + 1];
    let replacement = if original == "A" { "B" } else { "A" };
    let flipped = format!("{}{}{}", &text[..position], replacement, &text[position + 1..]);

    for corrupt in [
        String::new(),
        "not a record".to_string(),
        text[..text.len() - 5].to_string(),
        flipped,
    ] {
        let record = CredentialRecord::from_stored(corrupt);
        assert!(!service.login(Some(&record), "SecurePass123"));
    }
}
