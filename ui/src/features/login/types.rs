// Login form state - no dioxus imports needed here
use std::fmt;

use super::validation::{validate_credentials, CredentialError};
use crate::utils::navigation::Destination;

/// Username/password pair as typed into the login form.
///
/// Lives only as long as the form state; never persisted.
#[derive(Clone, PartialEq, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum LoginAction {
    SetUsername(String),
    SetPassword(String),
    Rejected(CredentialError),
    Accepted,
}

/// What the login form does after a submit
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoginOutcome {
    /// Format-valid pair: clear the error region and leave the page
    Navigate(Destination),
    /// Stay on the page and show the reason
    ShowError(CredentialError),
}

impl LoginOutcome {
    pub fn destination(&self) -> Option<Destination> {
        match self {
            LoginOutcome::Navigate(destination) => Some(*destination),
            LoginOutcome::ShowError(_) => None,
        }
    }

    /// The state change that goes with this outcome
    pub fn action(&self) -> LoginAction {
        match self {
            LoginOutcome::Navigate(_) => LoginAction::Accepted,
            LoginOutcome::ShowError(reason) => LoginAction::Rejected(*reason),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoginState {
    pub credentials: Credentials,
    pub error: Option<CredentialError>,
}

impl LoginState {
    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: LoginAction) {
        match action {
            LoginAction::SetUsername(username) => {
                self.credentials.username = username;
            }
            LoginAction::SetPassword(password) => {
                self.credentials.password = password;
            }
            LoginAction::Rejected(error) => {
                self.error = Some(error);
            }
            LoginAction::Accepted => {
                self.error = None;
            }
        }
    }

    /// Run the format check against the current field values
    pub fn submit(&self) -> Result<(), CredentialError> {
        validate_credentials(&self.credentials)
    }

    /// Decide between going to the dashboard and staying with an error
    pub fn submit_outcome(&self) -> LoginOutcome {
        match self.submit() {
            Ok(()) => LoginOutcome::Navigate(Destination::Dashboard),
            Err(reason) => LoginOutcome::ShowError(reason),
        }
    }

    /// Text for the error region; empty when there is nothing to report
    pub fn error_text(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }
}
