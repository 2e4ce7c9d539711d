//! # Embeds
//!
//! Rich-message envelope consumed by the webhook delivery layer:
//!
//! ```json
//! { "embeds": [ { "title": "...", "description": "...", "color": 5793266,
//!                 "timestamp": "2024-01-01T00:00:00+00:00", "fields": [] } ] }
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::EmbedError;
use crate::field::{cap_fields, Field};

/// Sidebar colours used across the relay.
pub mod colors {
    /// Neutral / informational.
    pub const BLURPLE: u32 = 0x5865f2;
    /// SES delivery.
    pub const GREEN: u32 = 0x57f287;
    /// Clean scan.
    pub const BRIGHT_GREEN: u32 = 0x00ff00;
    /// Scan with warnings.
    pub const AMBER: u32 = 0xffaa00;
    /// SES bounce.
    pub const ORANGE: u32 = 0xffa500;
    /// Scan errors, SES complaints.
    pub const RED: u32 = 0xff0000;
}

/// A single embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub description: String,
    pub color: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

impl Embed {
    /// Create an embed with the default colour and no fields.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            title: None,
            description: description.into(),
            color: colors::BLURPLE,
            timestamp: None,
            fields: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    /// Stamp the embed with an ISO-8601 time.
    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(at.to_rfc3339_opts(SecondsFormat::Millis, true));
        self
    }

    pub fn with_current_timestamp(self) -> Self {
        self.with_timestamp(Utc::now())
    }

    /// Attach fields, keeping at most 25.
    pub fn with_fields(mut self, mut fields: Vec<Field>) -> Self {
        cap_fields(&mut fields);
        self.fields = fields;
        self
    }
}

/// Body POSTed to the webhook endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub embeds: Vec<Embed>,
}

impl WebhookPayload {
    pub fn single(embed: Embed) -> Self {
        Self {
            embeds: vec![embed],
        }
    }

    /// Encode the payload, rejecting an empty embed list.
    pub fn to_json(&self) -> Result<String, EmbedError> {
        if self.embeds.is_empty() {
            return Err(EmbedError::Empty);
        }
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_minimal_embed_omits_optional_keys() {
        let json = serde_json::to_value(Embed::new("hello")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"description": "hello", "color": colors::BLURPLE})
        );
    }

    #[test]
    fn test_timestamp_is_iso8601_utc() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        let embed = Embed::new("x").with_timestamp(at);
        assert_eq!(embed.timestamp.as_deref(), Some("2024-03-01T08:30:00.000Z"));
    }

    #[test]
    fn test_with_fields_caps_at_25() {
        let fields = (0..30).map(|i| Field::inline(i.to_string(), "v")).collect();
        let embed = Embed::new("x").with_fields(fields);
        assert_eq!(embed.fields.len(), 25);
    }

    #[test]
    fn test_empty_payload_rejected() {
        let payload = WebhookPayload { embeds: vec![] };
        assert!(matches!(payload.to_json(), Err(EmbedError::Empty)));
    }

    #[test]
    fn test_payload_wraps_embeds_array() {
        let payload = WebhookPayload::single(
            Embed::new("body")
                .with_title("Bounce")
                .with_color(colors::ORANGE),
        );
        let json: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();
        assert_eq!(json["embeds"][0]["title"], "Bounce");
        assert_eq!(json["embeds"][0]["color"], colors::ORANGE);
    }
}
