//! History projector — context turns for the next generation request.
//!
//! Error turns carry no useful context and image turns' content is only a
//! caption, so both are excluded from the projected history. The exclusion
//! of image captions is a deliberate simplification: it keeps a text-only
//! context window free of stray caption fragments.

use crate::message::{ChatMessage, MessageRole, MessageType};

/// One `{role, content}` pair supplied as context to the next request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryTurn {
    pub role: MessageRole,
    pub content: String,
}

/// Project the conversation into the ordered context for the next request.
///
/// Retains every turn whose type is neither `Error` nor `Image`, in the
/// original order. Recomputed fresh on every call; the conversation may
/// have grown since the last projection.
#[must_use]
pub fn project(messages: &[ChatMessage]) -> Vec<HistoryTurn> {
    messages
        .iter()
        .filter(|m| !matches!(m.message_type, MessageType::Error | MessageType::Image))
        .map(|m| HistoryTurn { role: m.role, content: m.content.clone() })
        .collect()
}

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;
