use std::time::Duration;

use reqwest::Client;

use crate::{
    domain::{LoginRequest, LoginResult},
    Result,
};

/// HTTP client the login form uses to reach `POST /api/login`.
#[derive(Debug, Clone)]
pub struct LoginClient {
    http_client: Client,
    base_url: String,
}

impl LoginClient {
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http_client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResult> {
        let url = format!("{}/api/login", self.base_url.trim_end_matches('/'));
        let result = self
            .http_client
            .post(&url)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<LoginResult>()
            .await?;
        Ok(result)
    }
}
