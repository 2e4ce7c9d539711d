//! # Embed Fields
//!
//! The unit of structured output handed to the webhook layer.

use serde::{Deserialize, Serialize};

/// Maximum number of fields a single embed may carry.
pub const MAX_EMBED_FIELDS: usize = 25;

/// Maximum length of a field value, in characters.
pub const MAX_FIELD_VALUE_CHARS: usize = 1024;

/// One named, length-bounded entry of an embed.
///
/// Ordering of fields is significant: the first field extracted is the first
/// field displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    name: String,
    value: String,
    inline: bool,
}

impl Field {
    /// Create a field, hard-truncating `value` to [`MAX_FIELD_VALUE_CHARS`].
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        let value = value.into();
        let value = if value.chars().count() > MAX_FIELD_VALUE_CHARS {
            truncate_chars(&value, MAX_FIELD_VALUE_CHARS)
        } else {
            value
        };

        Self {
            name: name.into(),
            value,
            inline,
        }
    }

    /// Create a field rendered side by side with its neighbours.
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, true)
    }

    /// Create a field rendered on its own row.
    pub fn block(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, false)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_inline(&self) -> bool {
        self.inline
    }
}

/// Return the first `max` characters of `value`.
///
/// Truncation is by `char`, so a multi-byte character is never split.
pub fn truncate_chars(value: &str, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((byte_idx, _)) => value[..byte_idx].to_string(),
        None => value.to_string(),
    }
}

/// Drop every field beyond the [`MAX_EMBED_FIELDS`]th. Overflowing fields are
/// discarded silently.
pub fn cap_fields(fields: &mut Vec<Field>) {
    fields.truncate(MAX_EMBED_FIELDS);
}
