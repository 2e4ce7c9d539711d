//! # Domain Entities
//!
//! The inbound notification envelope and its closed set of message types.
//!
//! Field names on the wire are PascalCase (`MessageId`, `TopicArn`, ...) with
//! upper-case `URL` suffixes, exactly as the producer emits them.

use serde::{Deserialize, Serialize};

// =============================================================================
// Message Type
// =============================================================================

/// Envelope `Type`.
///
/// Unknown values are kept verbatim in `Unsupported` so they can be reported,
/// but nothing downstream will canonicalize or verify them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageType {
    Notification,
    SubscriptionConfirmation,
    UnsubscribeConfirmation,
    Unsupported(String),
    /// No `Type` key at all.
    #[default]
    Missing,
}

impl MessageType {
    pub fn as_str(&self) -> &str {
        match self {
            MessageType::Notification => "Notification",
            MessageType::SubscriptionConfirmation => "SubscriptionConfirmation",
            MessageType::UnsubscribeConfirmation => "UnsubscribeConfirmation",
            MessageType::Unsupported(other) => other,
            MessageType::Missing => "",
        }
    }
}

impl From<String> for MessageType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Notification" => MessageType::Notification,
            "SubscriptionConfirmation" => MessageType::SubscriptionConfirmation,
            "UnsubscribeConfirmation" => MessageType::UnsubscribeConfirmation,
            "" => MessageType::Missing,
            _ => MessageType::Unsupported(value),
        }
    }
}

impl From<MessageType> for String {
    fn from(value: MessageType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Signature Version
// =============================================================================

/// Envelope `SignatureVersion`.
///
/// `"1"` signs with SHA-1, `"2"` with SHA-256. Any other value is treated as
/// version 1.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SignatureVersion {
    #[default]
    V1,
    V2,
    Other(String),
}

/// Digest paired with RSA PKCS#1 v1.5 for a given signature version.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignatureDigest {
    Sha1,
    Sha256,
}

impl SignatureVersion {
    pub fn digest(&self) -> SignatureDigest {
        match self {
            SignatureVersion::V2 => SignatureDigest::Sha256,
            SignatureVersion::V1 | SignatureVersion::Other(_) => SignatureDigest::Sha1,
        }
    }
}

impl From<String> for SignatureVersion {
    fn from(value: String) -> Self {
        match value.as_str() {
            "1" => SignatureVersion::V1,
            "2" => SignatureVersion::V2,
            _ => SignatureVersion::Other(value),
        }
    }
}

impl From<SignatureVersion> for String {
    fn from(value: SignatureVersion) -> Self {
        match value {
            SignatureVersion::V1 => "1".to_string(),
            SignatureVersion::V2 => "2".to_string(),
            SignatureVersion::Other(other) => other,
        }
    }
}

// =============================================================================
// Notification Envelope
// =============================================================================

/// One inbound signed message.
///
/// Constructed per request and dropped after the trust decision. `Timestamp`
/// is carried as the producer sent it and never reparsed: it is signed
/// verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NotificationEnvelope {
    #[serde(rename = "Type")]
    pub message_type: MessageType,
    pub message_id: String,
    pub topic_arn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Opaque payload. JSON-encoded business content for `Notification`.
    pub message: String,
    pub timestamp: String,
    pub signature_version: SignatureVersion,
    /// Base64 of the raw RSA signature.
    pub signature: String,
    #[serde(rename = "SigningCertURL", skip_serializing_if = "Option::is_none")]
    pub signing_cert_url: Option<String>,
    #[serde(rename = "SubscribeURL", skip_serializing_if = "Option::is_none")]
    pub subscribe_url: Option<String>,
    #[serde(rename = "UnsubscribeURL", skip_serializing_if = "Option::is_none")]
    pub unsubscribe_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl NotificationEnvelope {
    /// Parse an envelope from its JSON body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
