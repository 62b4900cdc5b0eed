/// API Context - shared state for all API handlers
use buildestate_core::{EstateError, MailConfig, MailDispatcher};
use std::sync::Arc;
use tracing::info;

/// API Context contains shared resources for API handlers
#[derive(Clone, Debug)]
pub struct ApiContext {
    /// Mail dispatcher, built once per cold start
    pub dispatcher: MailDispatcher,
}

impl ApiContext {
    /// Create a new API context from the process environment
    ///
    /// Must be called inside the tokio runtime so the live transport's
    /// startup verification can be scheduled.
    pub fn new() -> Result<Arc<Self>, EstateError> {
        let config = MailConfig::from_env();
        let dispatcher = MailDispatcher::from_config(&config)?;

        info!(mode = %dispatcher.mode(), "Mail dispatcher initialized");
        Ok(Self::with_dispatcher(dispatcher))
    }

    pub fn with_dispatcher(dispatcher: MailDispatcher) -> Arc<Self> {
        Arc::new(Self { dispatcher })
    }
}
