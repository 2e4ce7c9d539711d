//! # SES Event Summaries
//!
//! Turns the `Message` payload of a verified `Notification` into a short,
//! colour-coded summary for the webhook layer.

use serde::Deserialize;
use shared_types::{colors, Embed};
use thiserror::Error;

/// The `Message` payload was not an SES event.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Notification payload is not valid JSON: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

// =============================================================================
// SES payload model
// =============================================================================

// Every member is optional: SES leaves members out or sends explicit `null`,
// and both read as absent.

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SesNotification {
    pub notification_type: Option<String>,
    pub bounce: Option<SesBounce>,
    pub complaint: Option<SesComplaint>,
    pub delivery: Option<SesDelivery>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SesBounce {
    pub bounced_recipients: Option<Vec<SesRecipient>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SesComplaint {
    pub complained_recipients: Option<Vec<SesRecipient>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SesDelivery {
    pub recipients: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SesRecipient {
    pub email_address: Option<String>,
}

impl SesRecipient {
    fn email(&self) -> &str {
        self.email_address.as_deref().unwrap_or_default()
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Kind of SES event a notification carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SesEventKind {
    Bounce,
    Complaint,
    Delivery,
    Other(String),
}

/// Presentation-ready summary of one SES event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSummary {
    pub kind: SesEventKind,
    pub title: String,
    pub description: String,
    pub color: u32,
}

impl NotificationSummary {
    /// Render as an embed stamped with the current time.
    pub fn into_embed(self) -> Embed {
        Embed::new(self.description)
            .with_title(self.title)
            .with_color(self.color)
            .with_current_timestamp()
    }
}

/// Summarize the `Message` of a verified notification.
pub fn summarize_notification(message: &str) -> Result<NotificationSummary, SummaryError> {
    let parsed: SesNotification = serde_json::from_str(message)?;

    let summary = match parsed.notification_type.as_deref().unwrap_or_default() {
        "Bounce" => {
            let emails = join_recipients(
                parsed
                    .bounce
                    .iter()
                    .flat_map(|b| b.bounced_recipients.iter().flatten())
                    .map(SesRecipient::email),
            );
            NotificationSummary {
                kind: SesEventKind::Bounce,
                title: "Bounce".to_string(),
                description: format!("📩 **Bounce** detected:\n`{emails}`"),
                color: colors::ORANGE,
            }
        }
        "Complaint" => {
            let emails = join_recipients(
                parsed
                    .complaint
                    .iter()
                    .flat_map(|c| c.complained_recipients.iter().flatten())
                    .map(SesRecipient::email),
            );
            NotificationSummary {
                kind: SesEventKind::Complaint,
                title: "Complaint".to_string(),
                description: format!("🚨 **Complaint** received:\n`{emails}`"),
                color: colors::RED,
            }
        }
        "Delivery" => {
            let emails = join_recipients(
                parsed
                    .delivery
                    .iter()
                    .flat_map(|d| d.recipients.iter().flatten())
                    .map(String::as_str),
            );
            NotificationSummary {
                kind: SesEventKind::Delivery,
                title: "Delivery".to_string(),
                description: format!("✅ **Delivered to:**\n`{emails}`"),
                color: colors::GREEN,
            }
        }
        other => NotificationSummary {
            kind: SesEventKind::Other(other.to_string()),
            title: "Unhandled notification".to_string(),
            description: format!(
                "ℹ️ **Unhandled notification type** `{other}`:\n```json\n{message}\n```"
            ),
            color: colors::BLURPLE,
        },
    };

    Ok(summary)
}

fn join_recipients<'a>(emails: impl Iterator<Item = &'a str>) -> String {
    let joined = emails.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "unknown".to_string()
    } else {
        joined
    }
}
