//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::Arc;

use vivid_auth::password::{Candidate, CredentialCodec, CredentialRecord, StrengthPolicy};
use vivid_auth::provisioning::{CredentialService, PasswordChange, Registration};
use vivid_core::config::AppConfig;

/// Minimum-cost configuration used by every integration test.
pub const TEST_CONFIG: &str = "tests/fixtures/test_config.toml";

/// Load the test configuration
pub fn test_config() -> AppConfig {
    AppConfig::load(TEST_CONFIG).expect("Failed to load test config")
}

/// Build a credential service from the test configuration
pub fn test_service() -> CredentialService {
    let config = test_config();
    let codec = CredentialCodec::new(&config.hashing).expect("Failed to build codec");
    CredentialService::new(StrengthPolicy::new(&config.policy), Arc::new(codec))
        .expect("Failed to build service")
}

/// Stand-in for the caller's account storage: owns uniqueness and the
/// stored record, and delegates every decision to the service.
pub struct TestAccounts {
    /// Service under test
    pub service: CredentialService,
    /// Username -> stored record
    records: HashMap<String, CredentialRecord>,
}

impl TestAccounts {
    /// Create an empty account store
    pub fn new() -> Self {
        Self {
            service: test_service(),
            records: HashMap::new(),
        }
    }

    /// Register an account, storing the record on acceptance
    pub fn register(&mut self, candidate: &Candidate) -> Registration {
        assert!(
            !self.records.contains_key(&candidate.username),
            "username already taken"
        );
        let outcome = self.service.register(candidate).expect("register");
        if let Registration::Accepted(record) = &outcome {
            self.records
                .insert(candidate.username.clone(), record.clone());
        }
        outcome
    }

    /// Log in with a username and password
    pub fn login(&self, username: &str, password: &str) -> bool {
        self.service.login(self.records.get(username), password)
    }

    /// Change a password, replacing the stored record on success
    pub fn change_password(
        &mut self,
        current_password: &str,
        candidate: &Candidate,
    ) -> PasswordChange {
        let current = self
            .records
            .get(&candidate.username)
            .expect("account exists")
            .clone();
        let outcome = self
            .service
            .change_password(&current, current_password, candidate)
            .expect("change password");
        if let PasswordChange::Changed(record) = &outcome {
            self.records
                .insert(candidate.username.clone(), record.clone());
        }
        outcome
    }

    /// The stored record for a username
    pub fn record(&self, username: &str) -> Option<&CredentialRecord> {
        self.records.get(username)
    }
}

/// Captured result of a CLI invocation
pub struct CliOutput {
    /// Process exit code
    pub code: i32,
    /// Captured stdout
    pub stdout: String,
    /// Captured stderr
    pub stderr: String,
}

/// Run the `vivid-cred` binary with the test configuration, feeding `stdin`
pub fn run_cli(args: &[&str], stdin: &str) -> CliOutput {
    let mut child = Command::new(env!("CARGO_BIN_EXE_vivid-cred"))
        .arg("--config")
        .arg(TEST_CONFIG)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn vivid-cred");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for vivid-cred");

    CliOutput {
        code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
