use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};

use edgemore_core::models::estimate::EstimateRequest;

use crate::config::SmtpConfig;
use crate::error::MailError;
use crate::message::build_estimate_message;

/// Sends estimate emails through the configured SMTP relay.
///
/// Each send opens its own STARTTLS session; nothing is pooled or retried.
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SmtpConfig {
        &self.config
    }

    /// Email `pdf` to the configured recipient as `filename`.
    ///
    /// Returns once the relay has accepted the message or any step failed.
    pub async fn send_estimate(
        &self,
        request: &EstimateRequest,
        pdf: Vec<u8>,
        filename: &str,
    ) -> Result<(), MailError> {
        let message = build_estimate_message(&self.config, request, pdf, filename)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)?
            .port(self.config.port)
            .credentials(Credentials::new(
                self.config.username.clone(),
                self.config.password.clone(),
            ))
            .build();

        let response = transport.send(message).await?;
        tracing::debug!(
            host = %self.config.host,
            code = %response.code(),
            "SMTP relay accepted message"
        );
        Ok(())
    }
}
