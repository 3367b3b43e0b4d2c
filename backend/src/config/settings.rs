use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const RESEND_API_KEY: &str = "RESEND_API_KEY";
pub const CONTACT_FROM_EMAIL: &str = "CONTACT_FROM_EMAIL";
pub const CONTACT_TO_EMAIL: &str = "CONTACT_TO_EMAIL";

const CONTACT_KEYS: [&str; 3] = [RESEND_API_KEY, CONTACT_FROM_EMAIL, CONTACT_TO_EMAIL];

/// Process-level settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub static_dir: PathBuf,
    pub site_url: String,
    pub sentry_dsn: Option<String>,
    pub environment: String, // 'development' locally, anything else in prod
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:3000".to_string()),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("../frontend/dist")),
            site_url: get("SITE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| "https://atelier.studio".to_string()),
            sentry_dsn: get("SENTRY_DSN"),
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Credentials and addresses for delivering contact submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSettings {
    pub api_key: String,
    pub from_email: String,
    pub to_email: String,
}

impl ContactSettings {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        Ok(Self {
            api_key: require(RESEND_API_KEY)?,
            from_email: require(CONTACT_FROM_EMAIL)?,
            to_email: require(CONTACT_TO_EMAIL)?,
        })
    }
}

/// Where request handlers get contact settings from. Read on every request so
/// that rotating a key does not need a restart.
pub trait SettingsSource: Send + Sync {
    fn contact(&self) -> Result<ContactSettings, ConfigError>;
}

pub struct EnvSettings;

impl SettingsSource for EnvSettings {
    fn contact(&self) -> Result<ContactSettings, ConfigError> {
        ContactSettings::from_lookup(|key| env::var(key).ok())
    }
}

pub fn missing_contact_settings(lookup: impl Fn(&str) -> Option<String>) -> Vec<&'static str> {
    CONTACT_KEYS
        .into_iter()
        .filter(|key| lookup(key).map_or(true, |v| v.trim().is_empty()))
        .collect()
}
