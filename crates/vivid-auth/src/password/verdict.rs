//! Policy verdicts and the candidate triple they are computed from.

use std::fmt;

use serde::Serialize;
use zeroize::Zeroizing;

use vivid_core::error::AppError;

/// Why a password was accepted or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictReason {
    /// Every check passed.
    Accepted,
    /// Password or username was empty.
    MissingInput,
    /// Password is shorter than the configured minimum.
    TooShort,
    /// Password is on the denylist.
    TooCommon,
    /// No uppercase letter.
    MissingUppercase,
    /// No lowercase letter.
    MissingLowercase,
    /// No digit.
    MissingDigit,
    /// Password overlaps the username.
    ContainsUsername,
    /// Password overlaps the display name.
    ContainsDisplayName,
    /// zxcvbn score is below the configured floor.
    LowEntropy,
}

impl VerdictReason {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::MissingInput => "missing_input",
            Self::TooShort => "too_short",
            Self::TooCommon => "too_common",
            Self::MissingUppercase => "missing_uppercase",
            Self::MissingLowercase => "missing_lowercase",
            Self::MissingDigit => "missing_digit",
            Self::ContainsUsername => "contains_username",
            Self::ContainsDisplayName => "contains_display_name",
            Self::LowEntropy => "low_entropy",
        }
    }

    /// User-facing message for this reason.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Accepted => "Password accepted",
            Self::MissingInput => "Password and username cannot be empty",
            Self::TooShort => "Password is too short",
            Self::TooCommon => "Password is too common or weak. Please choose a stronger password",
            Self::MissingUppercase => "Password must contain at least one uppercase letter",
            Self::MissingLowercase => "Password must contain at least one lowercase letter",
            Self::MissingDigit => "Password must contain at least one digit",
            Self::ContainsUsername => {
                "Password cannot contain your username or parts of your username"
            }
            Self::ContainsDisplayName => {
                "Password cannot contain your display name or parts of your display name"
            }
            Self::LowEntropy => {
                "Password is too weak. Please use a stronger password with more entropy"
            }
        }
    }
}

impl fmt::Display for VerdictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of evaluating a password against the strength policy.
///
/// Rejections are data, not errors, so callers can map each reason to a
/// message without parsing strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyVerdict {
    accepted: bool,
    reason: VerdictReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl PolicyVerdict {
    /// An accepting verdict.
    pub fn accept() -> Self {
        Self {
            accepted: true,
            reason: VerdictReason::Accepted,
            detail: None,
        }
    }

    /// A rejecting verdict carrying the reason's default message.
    pub fn reject(reason: VerdictReason) -> Self {
        Self::reject_with(reason, reason.message())
    }

    /// A rejecting verdict with a specific detail message.
    pub fn reject_with(reason: VerdictReason, detail: impl Into<String>) -> Self {
        Self {
            accepted: false,
            reason,
            detail: Some(detail.into()),
        }
    }

    /// Whether the password may be hashed and stored.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// The reason for this verdict.
    pub fn reason(&self) -> VerdictReason {
        self.reason
    }

    /// Human-readable detail, present on rejections.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Converts a rejection into a validation error for callers using `?`.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.accepted {
            return Ok(());
        }
        let message = self
            .detail
            .unwrap_or_else(|| self.reason.message().to_string());
        Err(AppError::validation(format!(
            "Password validation failed: {message}"
        )))
    }
}

/// Registration or password-change input. Never persisted.
///
/// The password buffer is wiped on drop and redacted from `Debug`.
#[derive(Clone)]
pub struct Candidate {
    /// Account username.
    pub username: String,
    /// Optional display name.
    pub display_name: Option<String>,
    password: Zeroizing<String>,
}

impl Candidate {
    /// Creates a candidate without a display name.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            display_name: None,
            password: Zeroizing::new(password.into()),
        }
    }

    /// Sets the display name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// The plaintext password.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("username", &self.username)
            .field("display_name", &self.display_name)
            .field("password", &"<redacted>")
            .finish()
    }
}
