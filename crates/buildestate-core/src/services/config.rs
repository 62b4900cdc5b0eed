/// Configuration loading - reads settings from environment variables
use crate::constants::{ENV_FORCE_DUMMY, ENV_MONGO_URI, ENV_SMTP_PASS, ENV_SMTP_USER};
use crate::error::EstateError;
use crate::models::{MailConfig, SeederConfig};

impl MailConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup
    ///
    /// Empty values count as unset. Only the exact string "true" forces
    /// dummy mode.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Self {
            smtp_user: non_empty(ENV_SMTP_USER),
            smtp_pass: non_empty(ENV_SMTP_PASS),
            force_dummy: lookup(ENV_FORCE_DUMMY).as_deref() == Some("true"),
        }
    }
}

impl SeederConfig {
    pub fn from_env() -> Result<Self, EstateError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, EstateError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongo_uri = lookup(ENV_MONGO_URI)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| EstateError::Config(format!("Missing {} env var", ENV_MONGO_URI)))?;

        Ok(Self { mongo_uri })
    }
}
