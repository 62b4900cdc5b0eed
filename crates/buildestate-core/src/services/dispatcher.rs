/// Mail dispatcher - the entry point the rest of the application sends through
use crate::constants::LOG_TARGET_MAIL;
use crate::error::EstateError;
use crate::models::{HealthStatus, MailConfig, MailOptions, SendInfo, TransportMode};
use crate::services::selector::{select_transport, spawn_startup_verification};
use crate::services::transport::MailTransport;
use crate::utils::logging::safe_mail_context;
use std::sync::Arc;
use tracing::{error, info};

/// Owns the transport chosen at startup
///
/// The transport variant never changes after construction. Cloning is
/// cheap and shares the same transport.
#[derive(Clone)]
pub struct MailDispatcher {
    transport: Arc<dyn MailTransport>,
}

impl MailDispatcher {
    pub fn new(transport: Arc<dyn MailTransport>) -> Self {
        Self { transport }
    }

    /// Selects the transport and, for the live relay, schedules a
    /// background verification whose failure is only logged
    pub fn from_config(config: &MailConfig) -> Result<Self, EstateError> {
        let transport = select_transport(config)?;
        if transport.mode() == TransportMode::Live {
            spawn_startup_verification(Arc::clone(&transport));
        }
        Ok(Self::new(transport))
    }

    pub fn mode(&self) -> TransportMode {
        self.transport.mode()
    }

    /// Sends one message; failures are logged and returned unchanged
    pub async fn send_email(&self, mail: &MailOptions) -> Result<SendInfo, EstateError> {
        match self.transport.send_mail(mail).await {
            Ok(info) => {
                info!(
                    target: LOG_TARGET_MAIL,
                    message_id = %info.message_id,
                    mail = %safe_mail_context(&mail.to, &mail.subject),
                    "Email sent successfully"
                );
                Ok(info)
            }
            Err(e) => {
                error!(
                    target: LOG_TARGET_MAIL,
                    error = %e.message(),
                    mail = %safe_mail_context(&mail.to, &mail.subject),
                    "Failed to send email"
                );
                Err(e)
            }
        }
    }

    /// Reports whether the transport can currently deliver
    ///
    /// Verification failures become an `error` status; this never fails.
    pub async fn check_email_health(&self) -> HealthStatus {
        match self.transport.verify().await {
            Ok(()) => HealthStatus::healthy(),
            Err(e) => HealthStatus::error(e.message()),
        }
    }
}

impl std::fmt::Debug for MailDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailDispatcher")
            .field("mode", &self.mode())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DUMMY_MESSAGE_ID;
    use crate::models::HealthState;
    use crate::services::transport::MockMailTransport;

    fn dispatcher_with(mock: MockMailTransport) -> MailDispatcher {
        MailDispatcher::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_send_returns_transport_result() {
        let mut mock = MockMailTransport::new();
        mock.expect_send_mail().times(1).returning(|_| {
            Ok(SendInfo {
                message_id: "<abc@buildestate.com>".to_string(),
                accepted: vec!["a@b.com".to_string()],
                response: Some("250 OK".to_string()),
            })
        });

        let mail = MailOptions::builder().to("a@b.com").build();
        let info = dispatcher_with(mock).send_email(&mail).await.unwrap();

        assert_eq!(info.message_id, "<abc@buildestate.com>");
        assert_eq!(info.accepted, vec!["a@b.com"]);
    }

    #[tokio::test]
    async fn test_send_propagates_same_error() {
        let mut mock = MockMailTransport::new();
        mock.expect_send_mail()
            .times(1)
            .returning(|_| Err(EstateError::Email("554 relay access denied".to_string())));

        let mail = MailOptions::builder().to("a@b.com").build();
        let err = dispatcher_with(mock).send_email(&mail).await.unwrap_err();

        match err {
            EstateError::Email(msg) => assert_eq!(msg, "554 relay access denied"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_health_healthy_when_verify_passes() {
        let mut mock = MockMailTransport::new();
        mock.expect_verify().times(1).returning(|| Ok(()));

        let status = dispatcher_with(mock).check_email_health().await;
        assert_eq!(status, HealthStatus::healthy());
    }

    #[tokio::test]
    async fn test_health_absorbs_verify_failure() {
        let mut mock = MockMailTransport::new();
        mock.expect_verify()
            .times(1)
            .returning(|| Err(EstateError::Email("Connection timed out".to_string())));

        let status = dispatcher_with(mock).check_email_health().await;
        assert_eq!(status.status, HealthState::Error);
        assert_eq!(status.message, "Connection timed out");
    }

    #[tokio::test]
    async fn test_from_config_without_user_is_dummy() {
        let config = MailConfig {
            smtp_user: None,
            smtp_pass: Some("secret".to_string()),
            force_dummy: false,
        };
        let dispatcher = MailDispatcher::from_config(&config).unwrap();
        assert_eq!(dispatcher.mode(), TransportMode::Dummy);

        let mail = MailOptions::builder().to("a@b.com").build();
        let info = dispatcher.send_email(&mail).await.unwrap();
        assert_eq!(info.message_id, DUMMY_MESSAGE_ID);
    }

    #[test]
    fn test_debug_shows_mode() {
        let dispatcher = MailDispatcher::new(Arc::new(crate::services::DummyMailTransport::new()));
        assert_eq!(format!("{:?}", dispatcher), "MailDispatcher { mode: Dummy }");
    }
}
