//! Message model — canonical representation of one conversation turn.
//!
//! DESIGN
//! ======
//! A `ChatMessage` is immutable once constructed: no mutating API exists
//! and the conversation only ever appends. Construction goes through the
//! associated functions below so that every message gets a fresh v4 UUID,
//! a wall-clock timestamp, and so that `image_data` is populated exactly
//! when the message type is [`MessageType::Image`].

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// ROLES, TYPES, MODES
// =============================================================================

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// How a turn's content should be interpreted and rendered. Classifies the
/// payload, not the author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Text,
    Code,
    Image,
    Error,
}

/// Conversation-level mode selector. Chooses the capability profile for the
/// *next* request only; already-created messages are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Chat,
    Code,
    Image,
}

impl Mode {
    /// Parse a mode name as typed by a user (e.g. the CLI `/mode` command).
    ///
    /// # Errors
    ///
    /// Returns the unrecognized input so the caller can report it.
    pub fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "chat" => Ok(Self::Chat),
            "code" => Ok(Self::Code),
            "image" => Ok(Self::Image),
            other => Err(other.to_string()),
        }
    }
}

// =============================================================================
// CHAT MESSAGE
// =============================================================================

/// One conversation turn. Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: MessageRole,
    /// Text payload; for image turns this is a caption.
    pub content: String,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    /// Creation time in unix milliseconds.
    pub timestamp_ms: i64,
    /// Displayable data URI. Present iff `message_type` is `Image`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
}

fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

impl ChatMessage {
    fn new(role: MessageRole, content: String, message_type: MessageType, image_data: Option<String>) -> Self {
        Self { id: Uuid::new_v4(), role, content, message_type, timestamp_ms: now_ms(), image_data }
    }

    /// A user prompt turn.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content.into(), MessageType::Text, None)
    }

    /// A plain-text assistant reply.
    #[must_use]
    pub fn assistant_text(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content.into(), MessageType::Text, None)
    }

    /// A code-mode assistant reply.
    #[must_use]
    pub fn assistant_code(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content.into(), MessageType::Code, None)
    }

    /// An image-bearing assistant reply. `caption` describes the image,
    /// `data_uri` is the displayable payload.
    #[must_use]
    pub fn assistant_image(caption: impl Into<String>, data_uri: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, caption.into(), MessageType::Image, Some(data_uri.into()))
    }

    /// A synthesized error turn shown in place of a failed generation.
    #[must_use]
    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content.into(), MessageType::Error, None)
    }
}

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;
