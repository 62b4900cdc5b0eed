/// Transport abstraction shared by the live and dummy mail clients
use crate::error::EstateError;
use crate::models::{MailOptions, SendInfo, TransportMode};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Attempts delivery of one message, exactly once
    async fn send_mail(&self, mail: &MailOptions) -> Result<SendInfo, EstateError>;

    /// Checks that the transport can reach and authenticate with its destination
    async fn verify(&self) -> Result<(), EstateError>;

    fn mode(&self) -> TransportMode;
}
