/// No-op transport used when SMTP credentials are unavailable
use crate::constants::LOG_TARGET_MAIL;
use crate::error::EstateError;
use crate::models::{MailOptions, SendInfo, TransportMode};
use crate::services::transport::MailTransport;
use crate::utils::logging::{redact_body, redact_email, redact_subject};
use async_trait::async_trait;
use tracing::info;

/// Simulates successful delivery without touching the network
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyMailTransport;

impl DummyMailTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MailTransport for DummyMailTransport {
    async fn send_mail(&self, mail: &MailOptions) -> Result<SendInfo, EstateError> {
        info!(
            target: LOG_TARGET_MAIL,
            to = %redact_email(&mail.to),
            subject = %redact_subject(&mail.subject),
            text = %mail.text.as_deref().map(redact_body).unwrap_or_default(),
            html = %mail.html.as_deref().map(redact_body).unwrap_or_default(),
            "Dummy email sent"
        );
        Ok(SendInfo::dummy())
    }

    async fn verify(&self) -> Result<(), EstateError> {
        info!(target: LOG_TARGET_MAIL, "Dummy transporter verified");
        Ok(())
    }

    fn mode(&self) -> TransportMode {
        TransportMode::Dummy
    }
}
