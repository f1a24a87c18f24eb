//! Generation adapter — per-mode request shaping and reply normalization.
//!
//! DESIGN
//! ======
//! Translates one `(prompt, mode, history)` triple into exactly one call
//! through the [`GenerateContent`] seam and folds the heterogeneous reply
//! parts into a single [`GenerationOutcome`]. Failures propagate to the
//! caller untouched; converting them into a user-visible turn is the
//! conversation controller's job. No retries, no local state.

use std::sync::Arc;

use tracing::info;

use super::config::ModelProfiles;
use super::types::{ContentTurn, GenerateContent, GenerationRequest, LlmError, ModelReply, ResponsePart, WireRole};
use crate::history::HistoryTurn;
use crate::message::{MessageRole, Mode};

/// Substituted when a chat/code reply carries no usable text.
pub const FALLBACK_TEXT: &str = "No response generated.";
/// Caption used when an image arrives without accompanying text.
pub const FALLBACK_IMAGE_CAPTION: &str = "Here is your generated image.";
/// Returned when image mode produces no image payload at all.
pub const FALLBACK_NO_IMAGE: &str = "Sorry, I couldn't generate an image for that prompt.";

const CHAT_SYSTEM_INSTRUCTION: &str = "You are InterGen, a helpful AI assistant. Be concise and witty.";
const CODE_SYSTEM_INSTRUCTION: &str =
    "You are an expert software engineer. Provide clean, efficient, and well-documented code.";

// =============================================================================
// OUTCOME
// =============================================================================

/// Normalized result of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub text: String,
    /// Displayable data URI; only ever set in image mode.
    pub image_data: Option<String>,
}

// =============================================================================
// GENERATOR
// =============================================================================

/// Mode-aware front for the generation capability.
pub struct Generator {
    client: Arc<dyn GenerateContent>,
    models: ModelProfiles,
}

impl Generator {
    #[must_use]
    pub fn new(client: Arc<dyn GenerateContent>, models: ModelProfiles) -> Self {
        Self { client, models }
    }

    /// Issue one generation request for the given mode and normalize the
    /// reply.
    ///
    /// # Errors
    ///
    /// Propagates any [`LlmError`] from the underlying client unchanged.
    pub async fn generate(
        &self,
        prompt: &str,
        mode: Mode,
        history: &[HistoryTurn],
    ) -> Result<GenerationOutcome, LlmError> {
        match mode {
            Mode::Image => self.generate_image(prompt).await,
            Mode::Chat | Mode::Code => self.generate_text(prompt, mode, history).await,
        }
    }

    /// Image generation is context-free: one prompt, one attempt, no
    /// history and no system instruction.
    async fn generate_image(&self, prompt: &str) -> Result<GenerationOutcome, LlmError> {
        let contents = [ContentTurn { role: WireRole::User, text: prompt.to_string() }];
        let request = GenerationRequest { model: &self.models.image, system: None, contents: &contents };

        info!(model = %self.models.image, mode = "image", "generation request");
        let reply = self.client.generate(request).await?;

        let outcome = fold_image_parts(reply);
        info!(has_image = outcome.image_data.is_some(), "generation outcome");
        Ok(outcome)
    }

    async fn generate_text(&self, prompt: &str, mode: Mode, history: &[HistoryTurn]) -> Result<GenerationOutcome, LlmError> {
        let (model, system) = match mode {
            Mode::Code => (self.models.code.as_str(), CODE_SYSTEM_INSTRUCTION),
            _ => (self.models.chat.as_str(), CHAT_SYSTEM_INSTRUCTION),
        };

        let contents = build_contents(history, prompt);
        let request = GenerationRequest { model, system: Some(system), contents: &contents };

        info!(model, ?mode, history_turns = history.len(), "generation request");
        let reply = self.client.generate(request).await?;

        let text = fold_text_parts(reply);
        Ok(GenerationOutcome { text, image_data: None })
    }
}

// =============================================================================
// REQUEST CONTEXT
// =============================================================================

/// Projected history turns followed by the current prompt as a final user
/// turn. User history maps to the `user` wire role, everything else to
/// `model`.
#[must_use]
pub fn build_contents(history: &[HistoryTurn], prompt: &str) -> Vec<ContentTurn> {
    let mut contents: Vec<ContentTurn> = history
        .iter()
        .map(|turn| ContentTurn {
            role: match turn.role {
                MessageRole::User => WireRole::User,
                _ => WireRole::Model,
            },
            text: turn.content.clone(),
        })
        .collect();
    contents.push(ContentTurn { role: WireRole::User, text: prompt.to_string() });
    contents
}

// =============================================================================
// NORMALIZATION FOLDS
// =============================================================================

/// Fold an image-mode reply: accumulate all text parts in order and keep
/// the FIRST inline image. First-wins is a fixed policy; later image parts
/// are discarded.
#[must_use]
pub fn fold_image_parts(reply: ModelReply) -> GenerationOutcome {
    let mut text = String::new();
    let mut image: Option<String> = None;

    for part in reply.parts {
        match part {
            ResponsePart::Text(t) => text.push_str(&t),
            ResponsePart::InlineImage { data, mime_type } => {
                if image.is_none() {
                    image = Some(format!("data:{mime_type};base64,{data}"));
                }
            }
        }
    }

    match image {
        Some(data_uri) => GenerationOutcome {
            text: if text.trim().is_empty() { FALLBACK_IMAGE_CAPTION.to_string() } else { text },
            image_data: Some(data_uri),
        },
        None => GenerationOutcome {
            text: if text.trim().is_empty() { FALLBACK_NO_IMAGE.to_string() } else { text },
            image_data: None,
        },
    }
}

/// Fold a chat/code reply: concatenate text parts, substituting the fixed
/// fallback when nothing usable came back. Inline images in a text-mode
/// reply are ignored.
#[must_use]
pub fn fold_text_parts(reply: ModelReply) -> String {
    let text: String = reply
        .parts
        .into_iter()
        .filter_map(|part| match part {
            ResponsePart::Text(t) => Some(t),
            ResponsePart::InlineImage { .. } => None,
        })
        .collect();

    if text.trim().is_empty() { FALLBACK_TEXT.to_string() } else { text }
}

#[cfg(test)]
#[path = "adapter_test.rs"]
mod tests;
