use async_trait::async_trait;
use resend_rs::types::CreateEmailBaseOptions;
use resend_rs::Resend;
use thiserror::Error;

use crate::config::settings::ContactSettings;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("{0}")]
    Provider(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub subject: String,
    pub html: String,
    pub reply_to: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, settings: &ContactSettings, email: &OutboundEmail) -> Result<(), MailError>;
}

/// Delivers through Resend. The client is built per call because the API key
/// is read at request time.
pub struct ResendMailer;

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, settings: &ContactSettings, email: &OutboundEmail) -> Result<(), MailError> {
        let resend = Resend::new(&settings.api_key);

        let options = CreateEmailBaseOptions::new(
            settings.from_email.as_str(),
            [settings.to_email.as_str()],
            email.subject.as_str(),
        )
        .with_html(&email.html)
        .with_reply(&email.reply_to);

        resend
            .emails
            .send(options)
            .await
            .map_err(|e| MailError::Provider(e.to_string()))?;

        tracing::info!(to = %settings.to_email, subject = %email.subject, "contact email sent");
        Ok(())
    }
}
