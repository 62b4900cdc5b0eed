/// Startup selection between the live and dummy transports
use crate::constants::LOG_TARGET_MAIL;
use crate::error::EstateError;
use crate::models::{MailConfig, TransportMode};
use crate::services::dummy::DummyMailTransport;
use crate::services::smtp::SmtpMailTransport;
use crate::services::transport::MailTransport;
use crate::utils::logging::redact_email;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Builds the transport for this process from its configuration
///
/// Missing credentials downgrade to the dummy transport; they are never
/// reported as an error.
pub fn select_transport(config: &MailConfig) -> Result<Arc<dyn MailTransport>, EstateError> {
    match (config.transport_mode(), &config.smtp_user, &config.smtp_pass) {
        (TransportMode::Live, Some(user), Some(pass)) => {
            info!(
                target: LOG_TARGET_MAIL,
                user = %redact_email(user),
                "Using live SMTP email transporter"
            );
            Ok(Arc::new(SmtpMailTransport::new(user, pass)?))
        }
        _ => {
            warn!(
                target: LOG_TARGET_MAIL,
                force_dummy = config.force_dummy,
                "Using dummy email transporter (emails will not be sent)"
            );
            Ok(Arc::new(DummyMailTransport::new()))
        }
    }
}

/// Schedules a verification handshake without waiting for it
///
/// The outcome is only logged; a failing relay does not stop startup.
/// Returns `None` when called outside a tokio runtime.
pub fn spawn_startup_verification(transport: Arc<dyn MailTransport>) -> Option<JoinHandle<()>> {
    let Ok(runtime) = tokio::runtime::Handle::try_current() else {
        warn!(
            target: LOG_TARGET_MAIL,
            "No async runtime available, skipping email transporter verification"
        );
        return None;
    };

    Some(runtime.spawn(async move {
        match transport.verify().await {
            Ok(()) => info!(target: LOG_TARGET_MAIL, "Email server is ready to take our messages"),
            Err(e) => error!(
                target: LOG_TARGET_MAIL,
                error = %e.message(),
                "Email transporter verification failed"
            ),
        }
    }))
}
