use serde::Serialize;

use crate::{client::LoginClient, errors::Error};

use super::{LoginRequest, LoginResult};

/// Shown when the backend cannot be reached or answers with something that
/// is not a login result.
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Make sure backend is running on port 5000";

const SUBMIT_LABEL: &str = "Login";
const SUBMIT_LABEL_LOADING: &str = "Logging in...";

/// How a form submission ended.
#[derive(Debug)]
pub enum LoginOutcome {
    Accepted(LoginResult),
    Rejected(LoginResult),
    Unreachable(Error),
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Accepted(_))
    }

    pub fn message(&self) -> &str {
        match self {
            LoginOutcome::Accepted(result) | LoginOutcome::Rejected(result) => &result.message,
            LoginOutcome::Unreachable(_) => SERVER_ERROR_MESSAGE,
        }
    }
}

impl From<crate::Result<LoginResult>> for LoginOutcome {
    fn from(value: crate::Result<LoginResult>) -> Self {
        match value {
            Ok(result) if result.success => LoginOutcome::Accepted(result),
            Ok(result) => LoginOutcome::Rejected(result),
            Err(e) => LoginOutcome::Unreachable(e),
        }
    }
}

/// State behind the login page.
#[derive(Debug, Default, Clone, Serialize)]
pub struct LoginForm {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub message: Option<String>,
    pub is_success: bool,
    /// True only while `submit` runs. A rendered page is always idle; the
    /// page's own submit script disables the button in the browser.
    pub loading: bool,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            SUBMIT_LABEL_LOADING
        } else {
            SUBMIT_LABEL
        }
    }

    /// Sends the current field values to the backend and records the result.
    ///
    /// The form is borrowed mutably for the whole call, so a second
    /// submission cannot start while one is outstanding.
    pub async fn submit(&mut self, client: &LoginClient) -> LoginOutcome {
        self.loading = true;
        self.message = None;

        let request = LoginRequest::new(self.email.clone(), self.password.clone());
        let outcome = LoginOutcome::from(client.login(&request).await);
        if let LoginOutcome::Unreachable(e) = &outcome {
            tracing::warn!(
                error.cause_chain = ?e,
                error.message = %e,
                base_url = client.base_url(),
                "Failed to reach the login backend"
            );
        }

        self.message = Some(outcome.message().to_string());
        self.is_success = outcome.is_success();
        self.loading = false;
        outcome
    }
}
