//! Conversation controller — authoritative message list and submit state
//! machine.
//!
//! DESIGN
//! ======
//! The controller owns the append-only conversation, the single `pending`
//! flag and the active mode behind one `RwLock`. Admission control happens
//! under the write lock: a submit while a request is in flight, or with an
//! empty prompt, is a silent no-op. The user turn is appended *before* the
//! generation call is issued, so it survives failures. State changes bump a
//! watch-channel revision counter; the presentation layer subscribes and
//! re-reads snapshots.

use std::sync::Arc;

use tokio::sync::{RwLock, watch};
use tracing::{debug, info, warn};

use crate::history;
use crate::llm::{GenerationOutcome, Generator};
use crate::message::{ChatMessage, Mode};

/// Shown in place of a reply when the generation call fails. The original
/// error detail goes to the log, never to the conversation.
pub const ERROR_REPLY: &str = "Sorry, I encountered an error processing your request. Please try again.";

struct ConversationState {
    messages: Vec<ChatMessage>,
    pending: bool,
    mode: Mode,
}

/// Clonable handle to one conversation. All clones share state.
#[derive(Clone)]
pub struct ConversationController {
    state: Arc<RwLock<ConversationState>>,
    generator: Arc<Generator>,
    revision: Arc<watch::Sender<u64>>,
}

impl ConversationController {
    #[must_use]
    pub fn new(generator: Generator) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            state: Arc::new(RwLock::new(ConversationState {
                messages: Vec::new(),
                pending: false,
                mode: Mode::Chat,
            })),
            generator: Arc::new(generator),
            revision: Arc::new(revision),
        }
    }

    /// Run one submission to completion: admission check, user turn,
    /// generation call, assistant or error turn.
    ///
    /// Rejected submissions (empty prompt, request already in flight) are
    /// silent no-ops per the admission-control rule.
    pub async fn submit(&self, prompt: &str) {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            debug!("submit rejected: empty prompt");
            return;
        }

        // Admission check and user-turn append are one atomic step; the
        // projected history is everything prior to the new user turn.
        let (mode, history) = {
            let mut state = self.state.write().await;
            if state.pending {
                debug!("submit rejected: request already in flight");
                return;
            }
            let history = history::project(&state.messages);
            state.messages.push(ChatMessage::user(prompt));
            state.pending = true;
            (state.mode, history)
        };
        self.notify();

        // Sole suspension point. The lock is not held across it.
        let result = self.generator.generate(prompt, mode, &history).await;

        let reply = match result {
            Ok(outcome) => assistant_message(outcome, mode),
            Err(e) => {
                warn!(error = %e, "generation failed");
                ChatMessage::error(ERROR_REPLY)
            }
        };

        {
            let mut state = self.state.write().await;
            state.messages.push(reply);
            state.pending = false;
            info!(messages = state.messages.len(), "conversation advanced");
        }
        self.notify();
    }

    /// Fire-and-forget form of [`submit`](Self::submit); the UI observes
    /// the outcome through [`subscribe`](Self::subscribe).
    pub fn submit_detached(&self, prompt: String) {
        let controller = self.clone();
        tokio::spawn(async move {
            controller.submit(&prompt).await;
        });
    }

    /// Read-only snapshot of the conversation in order.
    pub async fn snapshot(&self) -> Vec<ChatMessage> {
        self.state.read().await.messages.clone()
    }

    pub async fn is_pending(&self) -> bool {
        self.state.read().await.pending
    }

    pub async fn mode(&self) -> Mode {
        self.state.read().await.mode
    }

    /// Select the capability profile for subsequent submissions. Does not
    /// affect already-created messages.
    pub async fn set_mode(&self, mode: Mode) {
        self.state.write().await.mode = mode;
        self.notify();
    }

    /// Subscribe to state-change notifications. The value is a revision
    /// counter; observers re-read [`snapshot`](Self::snapshot) on change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn notify(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}

/// Classify a successful outcome: image data wins, then the mode decides
/// between code and text.
fn assistant_message(outcome: GenerationOutcome, mode: Mode) -> ChatMessage {
    match outcome.image_data {
        Some(data_uri) => ChatMessage::assistant_image(outcome.text, data_uri),
        None if mode == Mode::Code => ChatMessage::assistant_code(outcome.text),
        None => ChatMessage::assistant_text(outcome.text),
    }
}

#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;
