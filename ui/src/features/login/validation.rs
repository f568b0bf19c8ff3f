//! Credential format rules for the login form.
//!
//! Only the *shape* of the username and password is checked here. Nothing is
//! verified against a credential store: a format-valid pair is enough to move on
//! to the dashboard.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::types::Credentials;

/// 6-15 ASCII letters or digits.
static USERNAME_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{6,15}$").expect("invalid username regex"));

/// 8 or more ASCII letters or digits.
static PASSWORD_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{8,}$").expect("invalid password regex"));

// The regex engine has no look-ahead, so "contains at least one X" is its own pattern.
static ANY_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z]").expect("invalid letter regex"));
static ANY_LOWERCASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]").expect("invalid lowercase regex"));
static ANY_UPPERCASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]").expect("invalid uppercase regex"));
static ANY_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("invalid digit regex"));

/// Reason a submitted credential pair was rejected.
///
/// The `Display` text is shown verbatim in the login form's error region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("Invalid username. Must be 6-15 characters and include letters and numbers.")]
    InvalidUsername,

    #[error("Invalid password. Must be 8+ characters with uppercase, lowercase, and a number.")]
    InvalidPassword,
}

impl CredentialError {
    /// Name of the form field the error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            CredentialError::InvalidUsername => "username",
            CredentialError::InvalidPassword => "password",
        }
    }
}

pub fn is_valid_username(username: &str) -> bool {
    USERNAME_SHAPE.is_match(username) && ANY_LETTER.is_match(username) && ANY_DIGIT.is_match(username)
}

pub fn is_valid_password(password: &str) -> bool {
    PASSWORD_SHAPE.is_match(password)
        && ANY_LOWERCASE.is_match(password)
        && ANY_UPPERCASE.is_match(password)
        && ANY_DIGIT.is_match(password)
}

/// Check username then password; the first failing rule wins.
pub fn validate_credentials(credentials: &Credentials) -> Result<(), CredentialError> {
    let outcome = if !is_valid_username(&credentials.username) {
        Err(CredentialError::InvalidUsername)
    } else if !is_valid_password(&credentials.password) {
        Err(CredentialError::InvalidPassword)
    } else {
        Ok(())
    };

    if let Err(e) = &outcome {
        tracing::debug!(field = e.field(), "credential format rejected");
    }
    outcome
}
