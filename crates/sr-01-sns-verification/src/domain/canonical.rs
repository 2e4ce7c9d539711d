//! # Canonical String
//!
//! Rebuilds the exact byte sequence the producer signed. Each contributing
//! field is written as `key\nvalue\n`, in a fixed per-type order:
//!
//! | Type | Keys |
//! |------|------|
//! | `Notification` | `Message`, `MessageId`, `Subject`*, `Timestamp`, `TopicArn`, `Type` |
//! | `SubscriptionConfirmation`, `UnsubscribeConfirmation` | `Message`, `MessageId`, `SubscribeURL`, `Timestamp`, `Token`, `TopicArn`, `Type` |
//!
//! \* only when present and non-empty.

use super::entities::{MessageType, NotificationEnvelope};
use super::errors::VerificationError;

/// Build the string-to-sign for `envelope`.
///
/// Fails for unsupported types and for missing identity fields; never
/// touches the network.
pub fn string_to_sign(envelope: &NotificationEnvelope) -> Result<String, VerificationError> {
    let message_type = &envelope.message_type;
    let pairs: Vec<(&str, &str)> = match message_type {
        MessageType::Notification => {
            let mut pairs = vec![
                ("Message", envelope.message.as_str()),
                ("MessageId", required("MessageId", &envelope.message_id)?),
            ];
            if let Some(subject) = envelope.subject.as_deref().filter(|s| !s.is_empty()) {
                pairs.push(("Subject", subject));
            }
            pairs.push(("Timestamp", required("Timestamp", &envelope.timestamp)?));
            pairs.push(("TopicArn", required("TopicArn", &envelope.topic_arn)?));
            pairs.push(("Type", message_type.as_str()));
            pairs
        }
        MessageType::SubscriptionConfirmation | MessageType::UnsubscribeConfirmation => vec![
            ("Message", envelope.message.as_str()),
            ("MessageId", required("MessageId", &envelope.message_id)?),
            (
                "SubscribeURL",
                required_opt("SubscribeURL", envelope.subscribe_url.as_deref())?,
            ),
            ("Timestamp", required("Timestamp", &envelope.timestamp)?),
            ("Token", required_opt("Token", envelope.token.as_deref())?),
            ("TopicArn", required("TopicArn", &envelope.topic_arn)?),
            ("Type", message_type.as_str()),
        ],
        MessageType::Unsupported(_) | MessageType::Missing => {
            return Err(VerificationError::UnsupportedMessageType(
                message_type.as_str().to_string(),
            ))
        }
    };

    let capacity = pairs.iter().map(|(k, v)| k.len() + v.len() + 2).sum();
    let mut canonical = String::with_capacity(capacity);
    for (key, value) in pairs {
        canonical.push_str(key);
        canonical.push('\n');
        canonical.push_str(value);
        canonical.push('\n');
    }
    Ok(canonical)
}

fn required<'a>(name: &'static str, value: &'a str) -> Result<&'a str, VerificationError> {
    if value.is_empty() {
        Err(VerificationError::MissingField(name))
    } else {
        Ok(value)
    }
}

fn required_opt<'a>(
    name: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, VerificationError> {
    required(name, value.unwrap_or_default())
}
