use std::fmt;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 587;
pub const FALLBACK_SENDER: &str = "no-reply@example.com";

/// SMTP delivery settings. Built once at startup and never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Every estimate goes to this single address.
    pub recipient: String,
    pub sender: String,
}

impl SmtpConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to
    /// its value. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let port = match var("SMTP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort {
                    key: "SMTP_PORT",
                    value: raw.clone(),
                })?,
            None => DEFAULT_PORT,
        };

        let username = var("SMTP_USER").unwrap_or_default();
        let sender = var("FROM_EMAIL")
            .or_else(|| Some(username.clone()).filter(|u| !u.is_empty()))
            .unwrap_or_else(|| FALLBACK_SENDER.to_string());

        Ok(Self {
            host: var("SMTP_HOST").unwrap_or_default(),
            port,
            username,
            password: var("SMTP_PASS").unwrap_or_default(),
            recipient: var("SEND_TO_EMAIL").unwrap_or_default(),
            sender,
        })
    }
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("recipient", &self.recipient)
            .field("sender", &self.sender)
            .finish()
    }
}
