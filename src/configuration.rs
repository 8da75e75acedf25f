use std::{path::Path, time::Duration};

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::{client::LoginClient, domain::CredentialChecker, Result};

/// Base URL the login form calls, fixed at build time through `LOGIN_API_BASE`.
pub const DEFAULT_API_BASE: &str = match option_env!("LOGIN_API_BASE") {
    Some(base) => base,
    None => "http://127.0.0.1:5000",
};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub credentials: CredentialSettings,
    pub frontend: FrontendSettings,
    pub logger: LoggerSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// The one email/password pair the backend accepts.
#[derive(Deserialize, Clone, Debug)]
pub struct CredentialSettings {
    pub email: String,
    pub password: Secret<String>,
}

impl CredentialSettings {
    pub fn checker(&self) -> CredentialChecker {
        CredentialChecker::new(self.email.clone(), self.password.clone())
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct FrontendSettings {
    pub api_base_url: String,
    pub timeout_milliseconds: Option<u64>,
}

impl FrontendSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_milliseconds.map(Duration::from_millis)
    }

    pub fn client(&self) -> Result<LoginClient> {
        LoginClient::new(self.api_base_url.clone(), self.timeout())
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct LoggerSettings {
    pub level: String,
    pub format: LogFormat,
    /// Directory for the daily rolling log file. No file is written when unset.
    pub file: Option<String>,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("Failed to read current dir: {}", e)))?;
    get_configuration_from(&base_path.join("configuration"), std::env::vars().collect())
}

/// Loads settings from `configuration_directory`, taking environment
/// variables from `vars` instead of the process environment.
pub fn get_configuration_from(
    configuration_directory: &Path,
    vars: config::Map<String, String>,
) -> Result<Settings, config::ConfigError> {
    // Unset and empty are the same for the plain variables, as with `PORT || 5000`.
    let var = |key: &str| vars.get(key).filter(|v| !v.is_empty()).cloned();

    let environment: Environment = var("APP_ENVIRONMENT")
        .unwrap_or_else(|| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .set_default("application.host", "0.0.0.0")?
        .set_default("application.port", 5000)?
        .set_default("credentials.email", "admin@example.com")?
        .set_default("credentials.password", "admin123")?
        .set_default("frontend.api_base_url", DEFAULT_API_BASE)?
        .set_default("logger.level", "info")?
        .set_default("logger.format", "json")?
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename)).required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .source(Some(vars.clone())),
        )
        .set_override_option("application.host", var("HOST"))?
        .set_override_option("application.port", var("PORT"))?
        .build()?;

    let settings = settings.try_deserialize::<Settings>()?;
    settings.validate()?;
    Ok(settings)
}

impl Settings {
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.credentials.email.is_empty() {
            return Err(config::ConfigError::Message(
                "credentials.email cannot be empty".into(),
            ));
        }
        if self.credentials.password.expose_secret().is_empty() {
            return Err(config::ConfigError::Message(
                "credentials.password cannot be empty".into(),
            ));
        }
        if self.frontend.api_base_url.is_empty() {
            return Err(config::ConfigError::Message(
                "frontend.api_base_url cannot be empty".into(),
            ));
        }
        Ok(())
    }
}
