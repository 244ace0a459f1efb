//! Outbound email delivery for access codes.
//!
//! DESIGN
//! ======
//! Handlers depend on the `Mailer` trait object stored in `AppState`.
//! Production uses Resend; without an API key the server falls back to
//! `LogMailer`, which only writes the message to the tracing log.

use async_trait::async_trait;
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use crate::config::ResendConfig;

#[derive(Debug, thiserror::Error)]
#[error("email delivery failed: {0}")]
pub struct MailerError(pub String);

/// A rendered email ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailerError>;
}

/// Resend-backed delivery.
pub struct ResendMailer {
    client: Resend,
    from: String,
}

impl ResendMailer {
    #[must_use]
    pub fn new(config: &ResendConfig) -> Self {
        Self { client: Resend::new(&config.api_key), from: config.from.clone() }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailerError> {
        let to = [email.to.as_str()];
        let options = CreateEmailBaseOptions::new(&self.from, to, &email.subject).with_html(&email.html);
        self.client
            .emails
            .send(options)
            .await
            .map_err(|e| MailerError(e.to_string()))?;
        Ok(())
    }
}

/// Development delivery: logs instead of sending.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailerError> {
        tracing::info!(to = %email.to, subject = %email.subject, "email delivery disabled; message logged only");
        tracing::debug!(html = %email.html, "email body");
        Ok(())
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use super::*;

    /// Captures sent emails for assertions.
    #[derive(Default)]
    pub struct RecordingMailer {
        pub sent: Mutex<Vec<OutgoingEmail>>,
        pub fail: bool,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: OutgoingEmail) -> Result<(), MailerError> {
            if self.fail {
                return Err(MailerError("boom".to_owned()));
            }
            self.sent
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .push(email);
            Ok(())
        }
    }
}
