/// Logging utilities for PII redaction
///
/// Mail contents pass through the logs of every send; these helpers keep
/// recipient local parts and message text out of them.
use regex::Regex;
use std::sync::LazyLock;

// Email redaction regex
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Redacts email addresses from text, preserving domain for debugging
///
/// # Examples
/// ```
/// use buildestate_core::utils::logging::redact_email;
///
/// assert_eq!(redact_email("user@example.com"), "***@example.com");
/// assert_eq!(redact_email("Jane <jane@acme.com>"), "Jane <***@acme.com>");
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let email = &caps[0];
            match email.find('@') {
                Some(at_pos) => format!("***{}", &email[at_pos..]),
                None => "***@***".to_string(),
            }
        })
        .to_string()
}

/// Redacts subject line for logging (truncates and masks)
///
/// # Examples
/// ```
/// use buildestate_core::utils::logging::redact_subject;
///
/// assert_eq!(redact_subject("Your viewing is confirmed"), "You...[25 chars]");
/// assert_eq!(redact_subject("Hi"), "Hi");
/// ```
pub fn redact_subject(subject: &str) -> String {
    const MAX_VISIBLE_CHARS: usize = 3;
    const MIN_LENGTH_TO_REDACT: usize = 6;

    let length = subject.chars().count();
    if length < MIN_LENGTH_TO_REDACT {
        subject.to_string()
    } else {
        let visible: String = subject.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}...[{} chars]", visible, length)
    }
}

/// Redacts message body for logging (shows length only)
pub fn redact_body(body: &str) -> String {
    format!("[{} bytes]", body.len())
}

/// Creates safe log context for an outbound message
pub fn safe_mail_context(to: &str, subject: &str) -> serde_json::Value {
    serde_json::json!({
        "to": redact_email(to),
        "subject_preview": redact_subject(subject),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_email() {
        assert_eq!(redact_email("user@example.com"), "***@example.com");
        assert_eq!(
            redact_email("a@b.com, c@d.org"),
            "***@b.com, ***@d.org"
        );
        assert_eq!(redact_email("no address here"), "no address here");
    }

    #[test]
    fn test_redact_subject() {
        assert_eq!(redact_subject("Short"), "Short");
        assert_eq!(redact_subject("This is a long subject"), "Thi...[22 chars]");
        assert_eq!(redact_subject(""), "");
    }

    #[test]
    fn test_redact_subject_multibyte() {
        assert_eq!(redact_subject("Añadido nuevo"), "Aña...[13 chars]");
    }

    #[test]
    fn test_redact_body() {
        assert_eq!(redact_body("Hello world"), "[11 bytes]");
        assert_eq!(redact_body(""), "[0 bytes]");
    }

    #[test]
    fn test_safe_mail_context() {
        let context = safe_mail_context("buyer@example.com", "Offer accepted");
        assert_eq!(context["to"], "***@example.com");
        assert_eq!(context["subject_preview"], "Off...[14 chars]");
    }
}
