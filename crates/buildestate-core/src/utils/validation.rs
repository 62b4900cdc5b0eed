/// Input validation utilities
use crate::error::EstateError;
use regex::Regex;

lazy_static::lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"
    ).unwrap();
}

pub fn validate_email_address(email: &str) -> Result<(), EstateError> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(EstateError::Validation(format!(
            "Invalid email address: {}",
            email
        )))
    }
}

pub fn validate_not_empty(field: &str, value: &str) -> Result<(), EstateError> {
    if value.trim().is_empty() {
        Err(EstateError::Validation(format!("{} must not be empty", field)))
    } else {
        Ok(())
    }
}
