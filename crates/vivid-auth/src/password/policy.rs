//! Password strength policy for new passwords.

use tracing::debug;
use zeroize::Zeroizing;

use vivid_core::config::policy::PolicyConfig;

use super::denylist::Denylist;
use super::similarity;
use super::verdict::{Candidate, PolicyVerdict, VerdictReason};

/// Decides whether a password is acceptable for an account.
///
/// Checks run in a fixed order and the first failure wins:
///
/// 1. length
/// 2. denylist
/// 3. uppercase, lowercase, digit
/// 4. overlap with the username
/// 5. overlap with the display name (when present and different from the
///    username)
/// 6. zxcvbn entropy floor (only when configured)
///
/// The policy holds no mutable state and can be shared freely across
/// threads.
#[derive(Debug, Clone)]
pub struct StrengthPolicy {
    /// Minimum password length in characters.
    min_length: usize,
    /// Shortest identity fragment that counts as an overlap.
    min_fragment_length: usize,
    /// Rejected passwords, lowercased.
    denylist: Denylist,
    /// Optional entropy floor.
    min_entropy: Option<zxcvbn::Score>,
}

impl StrengthPolicy {
    /// Creates a policy from configuration.
    pub fn new(config: &PolicyConfig) -> Self {
        let mut denylist = if config.use_builtin_denylist {
            Denylist::builtin()
        } else {
            Denylist::new()
        };
        denylist.extend(&config.extra_denylist);

        Self {
            min_length: config.min_length,
            min_fragment_length: config.min_fragment_length,
            denylist,
            min_entropy: config.min_entropy_score.map(score_floor),
        }
    }

    /// Evaluates a candidate triple.
    pub fn evaluate_candidate(&self, candidate: &Candidate) -> PolicyVerdict {
        self.evaluate(
            candidate.password(),
            &candidate.username,
            candidate.display_name.as_deref(),
        )
    }

    /// Evaluates `password` for the account identified by `username` and
    /// `display_name`.
    pub fn evaluate(
        &self,
        password: &str,
        username: &str,
        display_name: Option<&str>,
    ) -> PolicyVerdict {
        let verdict = self.run_checks(password, username, display_name);
        if !verdict.is_accepted() {
            debug!(reason = %verdict.reason(), "Password rejected by strength policy");
        }
        verdict
    }

    fn run_checks(
        &self,
        password: &str,
        username: &str,
        display_name: Option<&str>,
    ) -> PolicyVerdict {
        if password.trim().is_empty() || username.trim().is_empty() {
            return PolicyVerdict::reject(VerdictReason::MissingInput);
        }

        if password.chars().count() < self.min_length {
            return PolicyVerdict::reject_with(
                VerdictReason::TooShort,
                format!(
                    "Password must be at least {} characters long",
                    self.min_length
                ),
            );
        }

        let lower_password = Zeroizing::new(password.to_lowercase());

        if self.denylist.contains(&lower_password) {
            return PolicyVerdict::reject(VerdictReason::TooCommon);
        }

        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return PolicyVerdict::reject(VerdictReason::MissingUppercase);
        }

        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            return PolicyVerdict::reject(VerdictReason::MissingLowercase);
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return PolicyVerdict::reject(VerdictReason::MissingDigit);
        }

        let lower_username = username.to_lowercase();
        if similarity::overlaps(&lower_password, &lower_username, self.min_fragment_length) {
            return PolicyVerdict::reject(VerdictReason::ContainsUsername);
        }

        let display_name = display_name.filter(|name| !name.trim().is_empty());
        if let Some(name) = display_name {
            let lower_name = name.to_lowercase();
            if lower_name != lower_username
                && similarity::overlaps(&lower_password, &lower_name, self.min_fragment_length)
            {
                return PolicyVerdict::reject(VerdictReason::ContainsDisplayName);
            }
        }

        if let Some(floor) = self.min_entropy {
            let mut user_inputs = vec![username];
            user_inputs.extend(display_name);
            let estimate = zxcvbn::zxcvbn(password, &user_inputs);
            if estimate.score() < floor {
                return PolicyVerdict::reject(VerdictReason::LowEntropy);
            }
        }

        PolicyVerdict::accept()
    }
}

impl Default for StrengthPolicy {
    fn default() -> Self {
        Self::new(&PolicyConfig::default())
    }
}

fn score_floor(score: u8) -> zxcvbn::Score {
    match score {
        0 => zxcvbn::Score::Zero,
        1 => zxcvbn::Score::One,
        2 => zxcvbn::Score::Two,
        3 => zxcvbn::Score::Three,
        _ => zxcvbn::Score::Four,
    }
}
