use secrecy::{ExposeSecret, Secret};

use super::{LoginRequest, LoginResult};

/// Holds the single accepted email/password pair.
///
/// Comparison is exact: case-sensitive, no trimming. The checker keeps no
/// state between calls, so repeated failures never lock anything out.
#[derive(Debug, Clone)]
pub struct CredentialChecker {
    email: String,
    password: Secret<String>,
}

impl CredentialChecker {
    pub fn new(email: String, password: Secret<String>) -> Self {
        Self { email, password }
    }

    pub fn check(&self, request: &LoginRequest) -> LoginResult {
        if request.email == self.email && request.password == *self.password.expose_secret() {
            LoginResult::successful()
        } else {
            LoginResult::invalid_credentials()
        }
    }
}
