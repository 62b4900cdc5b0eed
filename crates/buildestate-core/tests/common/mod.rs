//! Common test utilities and fakes for integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use buildestate_core::error::EstateError;
use buildestate_core::models::{MailConfig, MailOptions, SendInfo, TransportMode};
use buildestate_core::services::MailTransport;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;

/// Transport with scripted outcomes that records every message it is given
pub struct FakeTransport {
    pub send_error: Option<String>,
    pub verify_error: Option<String>,
    pub sent: Mutex<Vec<MailOptions>>,
}

impl FakeTransport {
    pub fn healthy() -> Self {
        Self {
            send_error: None,
            verify_error: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(send_error: &str, verify_error: &str) -> Self {
        Self {
            send_error: Some(send_error.to_string()),
            verify_error: Some(verify_error.to_string()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl MailTransport for FakeTransport {
    async fn send_mail(&self, mail: &MailOptions) -> Result<SendInfo, EstateError> {
        self.sent.lock().unwrap().push(mail.clone());
        match &self.send_error {
            Some(msg) => Err(EstateError::Email(msg.clone())),
            None => Ok(SendInfo {
                message_id: format!("<{}@buildestate.com>", uuid::Uuid::new_v4()),
                accepted: mail.recipients().iter().map(|r| r.to_string()).collect(),
                response: Some("250 2.0.0 OK".to_string()),
            }),
        }
    }

    async fn verify(&self) -> Result<(), EstateError> {
        match &self.verify_error {
            Some(msg) => Err(EstateError::Email(msg.clone())),
            None => Ok(()),
        }
    }

    fn mode(&self) -> TransportMode {
        TransportMode::Live
    }
}

/// Builds a mail config from optional values, as the environment would
pub fn mail_config(user: Option<&str>, pass: Option<&str>, force_dummy: Option<&str>) -> MailConfig {
    MailConfig::from_lookup(|key| match key {
        "SMTP_USER" => user.map(String::from),
        "SMTP_PASS" => pass.map(String::from),
        "FORCE_DUMMY" => force_dummy.map(String::from),
        _ => None,
    })
}

/// In-memory sink for formatted log output
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Routes this thread's tracing output into a buffer until the guard drops
///
/// `#[tokio::test]` runs on a current-thread runtime, so tasks spawned by
/// the test log through the same default subscriber.
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
