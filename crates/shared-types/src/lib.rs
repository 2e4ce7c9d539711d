//! # Shared Types Crate
//!
//! Webhook embed types produced by the verification and extraction engines.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Field` and `Embed` are defined once here and
//!   used by both engines and the runtime.
//! - **Bounded by Construction**: a `Field` can never carry a value longer
//!   than [`MAX_FIELD_VALUE_CHARS`]; callers cannot bypass the limit.
//! - **Wire Stability**: serialized names (`name`, `value`, `inline`,
//!   `embeds`, ...) match what existing webhook consumers expect.

pub mod embed;
pub mod errors;
pub mod field;

pub use embed::{colors, Embed, WebhookPayload};
pub use errors::EmbedError;
pub use field::{cap_fields, truncate_chars, Field, MAX_EMBED_FIELDS, MAX_FIELD_VALUE_CHARS};
