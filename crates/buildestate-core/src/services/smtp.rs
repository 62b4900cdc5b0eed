/// Live SMTP transport backed by lettre
use crate::constants::{LOG_TARGET_MAIL, SMTP_RELAY_HOST, SMTP_RELAY_PORT};
use crate::email::compose_message;
use crate::error::EstateError;
use crate::models::{MailOptions, SendInfo, TransportMode};
use crate::services::transport::MailTransport;
use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::debug;

pub struct SmtpMailTransport {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
}

impl SmtpMailTransport {
    /// Creates a client for the fixed production relay
    pub fn new(user: &str, pass: &str) -> Result<Self, EstateError> {
        Self::with_relay(SMTP_RELAY_HOST, SMTP_RELAY_PORT, user, pass)
    }

    /// Creates a STARTTLS client for an arbitrary relay
    ///
    /// No connection is opened until the first send or verify.
    pub fn with_relay(host: &str, port: u16, user: &str, pass: &str) -> Result<Self, EstateError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
            .port(port)
            .credentials(Credentials::new(user.to_string(), pass.to_string()))
            .build();

        Ok(Self {
            transport,
            host: host.to_string(),
        })
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send_mail(&self, mail: &MailOptions) -> Result<SendInfo, EstateError> {
        let composed = compose_message(mail)?;
        let accepted: Vec<String> = composed
            .message
            .envelope()
            .to()
            .iter()
            .map(|address| address.to_string())
            .collect();

        let response = self.transport.send(composed.message).await?;
        let lines: Vec<String> = response.message().map(|line| line.to_string()).collect();

        debug!(
            target: LOG_TARGET_MAIL,
            relay = %self.host,
            code = %response.code(),
            "Relay accepted message"
        );

        Ok(SendInfo {
            message_id: composed.message_id,
            accepted,
            response: Some(format!("{} {}", response.code(), lines.join(" "))),
        })
    }

    async fn verify(&self) -> Result<(), EstateError> {
        if self.transport.test_connection().await? {
            Ok(())
        } else {
            Err(EstateError::Email(format!(
                "SMTP relay {} rejected the connection test",
                self.host
            )))
        }
    }

    fn mode(&self) -> TransportMode {
        TransportMode::Live
    }
}
