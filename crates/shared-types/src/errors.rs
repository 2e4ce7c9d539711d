//! # Error Types
//!
//! Errors raised while rendering embeds for the webhook layer.

use thiserror::Error;

/// Errors that can occur while building or encoding a webhook payload.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// The payload could not be encoded as JSON.
    #[error("Failed to encode webhook payload: {0}")]
    Encode(#[from] serde_json::Error),

    /// A payload must carry at least one embed.
    #[error("Webhook payload has no embeds")]
    Empty,
}
