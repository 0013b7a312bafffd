use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}

impl From<lettre::transport::smtp::Error> for MailError {
    fn from(e: lettre::transport::smtp::Error) -> Self {
        MailError::Smtp(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?} is not a port number")]
    InvalidPort { key: &'static str, value: String },
}
