//! Integration tests for the `vivid-cred` binary.

mod helpers;

use serde_json::Value;

#[test]
fn test_check_accepts_strong_password() {
    let out = helpers::run_cli(
        &["check", "--username", "john", "--display-name", "John Doe", "--password-stdin"],
        "SecurePass123\n",
    );
    assert_eq!(out.code, 0, "stderr: {}", out.stderr);
    assert!(out.stdout.contains("Password accepted"));
}

#[test]
fn test_check_rejection_json() {
    let out = helpers::run_cli(
        &["--format", "json", "check", "--username", "john", "--password-stdin"],
        "John1234\n",
    );
    assert_eq!(out.code, 2, "stderr: {}", out.stderr);

    let json: Value = serde_json::from_str(&out.stdout).expect("json output");
    assert_eq!(json["accepted"], false);
    assert_eq!(json["reason"], "contains_username");
}

#[test]
fn test_hash_then_verify() {
    let hashed = helpers::run_cli(
        &["hash", "--username", "john", "--password-stdin"],
        "SecurePass123\n",
    );
    assert_eq!(hashed.code, 0, "stderr: {}", hashed.stderr);
    let record = hashed.stdout.trim().to_string();
    assert!(record.starts_with("$argon2id$"));

    let ok = helpers::run_cli(
        &["verify", "--record", &record, "--password-stdin"],
        "SecurePass123\n",
    );
    assert_eq!(ok.code, 0, "stderr: {}", ok.stderr);

    let wrong = helpers::run_cli(
        &["--format", "json", "verify", "--record", &record, "--password-stdin"],
        "SecurePass124\n",
    );
    assert_eq!(wrong.code, 3, "stderr: {}", wrong.stderr);
    let json: Value = serde_json::from_str(&wrong.stdout).expect("json output");
    assert_eq!(json["matched"], false);
    assert_eq!(json["needs_rehash"], false);
}

#[test]
fn test_hash_refuses_rejected_password() {
    let out = helpers::run_cli(
        &["hash", "--username", "john", "--password-stdin"],
        "password\n",
    );
    assert_eq!(out.code, 2);
    assert!(!out.stdout.contains("$argon2"));
}

#[test]
fn test_verify_garbage_record() {
    let out = helpers::run_cli(
        &["verify", "--record", "garbage", "--password-stdin"],
        "SecurePass123\n",
    );
    assert_eq!(out.code, 3);
    assert!(out.stdout.contains("does not match"));
}

#[test]
fn test_config_show_json() {
    let out = helpers::run_cli(&["--format", "json", "config", "show"], "");
    assert_eq!(out.code, 0, "stderr: {}", out.stderr);

    let json: Value = serde_json::from_str(&out.stdout).expect("json output");
    assert_eq!(json["hashing"]["memory_kib"], 64);
    assert_eq!(json["hashing"]["algorithm"], "argon2id");
    assert_eq!(json["policy"]["min_length"], 8);
}
