/// Error types for BuildEstate services
use crate::constants::DUPLICATE_KEY_ERROR_CODE;
use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstateError {
    #[error("Email transport error: {0}")]
    Email(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Duplicate user: {0}")]
    DuplicateUser(String),

    #[error("Password hashing error: {0}")]
    Hashing(String),
}

impl EstateError {
    /// Returns the bare failure message without the category prefix
    ///
    /// Health checks report this text to pollers.
    pub fn message(&self) -> &str {
        match self {
            Self::Email(msg)
            | Self::Config(msg)
            | Self::Validation(msg)
            | Self::Database(msg)
            | Self::DuplicateUser(msg)
            | Self::Hashing(msg) => msg,
        }
    }
}

// Implement conversions for common error types
impl From<bcrypt::BcryptError> for EstateError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::Hashing(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for EstateError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        Self::Email(err.to_string())
    }
}

impl From<mongodb::error::Error> for EstateError {
    fn from(err: mongodb::error::Error) -> Self {
        if is_duplicate_key(&err) {
            Self::DuplicateUser(err.to_string())
        } else {
            Self::Database(err.to_string())
        }
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_ERROR_CODE
        }
        _ => false,
    }
}
