use serde::{Deserialize, Serialize};

pub const LOGIN_SUCCESSFUL: &str = "Login successful";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Body of `POST /api/login`. Absent fields read as empty strings.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    pub success: bool,
    pub message: String,
}

impl LoginResult {
    pub fn successful() -> Self {
        Self {
            success: true,
            message: LOGIN_SUCCESSFUL.to_string(),
        }
    }

    pub fn invalid_credentials() -> Self {
        Self {
            success: false,
            message: INVALID_CREDENTIALS.to_string(),
        }
    }
}
