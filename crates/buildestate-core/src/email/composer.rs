/// Message composition using lettre
use crate::error::EstateError;
use crate::models::MailOptions;
use lettre::message::{Mailbox, Mailboxes, Message, MultiPart, SinglePart};
use uuid::Uuid;

/// A composed message together with the Message-ID written into it
#[derive(Debug, Clone)]
pub struct ComposedMessage {
    pub message: Message,
    pub message_id: String,
}

fn parse_mailbox(field: &str, value: &str) -> Result<Mailbox, EstateError> {
    value.trim().parse().map_err(|e| {
        EstateError::Validation(format!("Invalid {} address '{}': {}", field, value, e))
    })
}

fn parse_mailboxes(field: &str, value: &str) -> Result<Mailboxes, EstateError> {
    value.trim().parse().map_err(|e| {
        EstateError::Validation(format!("Invalid {} address list '{}': {}", field, value, e))
    })
}

/// Builds an RFC 5322 message from caller-supplied mail options
///
/// The Message-ID is generated here (`<uuid@sender-domain>`) so the id
/// reported back to callers matches the header the relay receives.
pub fn compose_message(mail: &MailOptions) -> Result<ComposedMessage, EstateError> {
    let from = mail
        .from
        .as_deref()
        .ok_or_else(|| EstateError::Validation("Sender address required".to_string()))?;
    let from = parse_mailbox("from", from)?;

    if mail.recipients().is_empty() {
        return Err(EstateError::Validation(
            "At least one recipient required".to_string(),
        ));
    }

    let message_id = format!("<{}@{}>", Uuid::new_v4(), from.email.domain());

    let mut builder = Message::builder()
        .from(from)
        .subject(mail.subject.clone())
        .message_id(Some(message_id.clone()));

    for to in parse_mailboxes("to", &mail.to)?.iter() {
        builder = builder.to(to.clone());
    }

    if let Some(cc) = &mail.cc {
        for cc in parse_mailboxes("cc", cc)?.iter() {
            builder = builder.cc(cc.clone());
        }
    }

    if let Some(bcc) = &mail.bcc {
        for bcc in parse_mailboxes("bcc", bcc)?.iter() {
            builder = builder.bcc(bcc.clone());
        }
    }

    if let Some(reply_to) = &mail.reply_to {
        builder = builder.reply_to(parse_mailbox("replyTo", reply_to)?);
    }

    let message = match (&mail.text, &mail.html) {
        (Some(text), Some(html)) => builder.multipart(
            MultiPart::alternative()
                .singlepart(SinglePart::plain(text.clone()))
                .singlepart(SinglePart::html(html.clone())),
        ),
        (Some(text), None) => builder.body(text.clone()),
        (None, Some(html)) => builder.singlepart(SinglePart::html(html.clone())),
        (None, None) => builder.body(String::new()),
    }
    .map_err(|e| EstateError::Validation(format!("Failed to build message: {}", e)))?;

    tracing::debug!(
        message_id = %message_id,
        recipients = mail.recipients().len(),
        has_html = mail.html.is_some(),
        "Composed outbound message"
    );

    Ok(ComposedMessage {
        message,
        message_id,
    })
}
