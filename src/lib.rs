//! InterGen conversation core.
//!
//! DESIGN
//! ======
//! The crate owns the conversation state machine for a three-mode
//! (chat / code / image) generative-AI chat application. Presentation is
//! a collaborator: it calls [`conversation::ConversationController`] and
//! renders snapshots. The only outbound dependency is the Gemini
//! `generateContent` HTTP API, reached through the [`llm`] module's
//! mockable [`llm::GenerateContent`] seam.

pub mod conversation;
pub mod history;
pub mod llm;
pub mod message;
