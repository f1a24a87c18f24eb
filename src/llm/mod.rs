//! LLM — Gemini `generateContent` adapter for the conversation core.
//!
//! DESIGN
//! ======
//! [`gemini::GeminiClient`] is a thin HTTP wrapper behind the
//! [`GenerateContent`] trait; [`adapter::Generator`] sits above it and owns
//! the per-mode capability profiles (model + system instruction) and the
//! normalization of heterogeneous reply parts into one
//! `{text, optional image}` outcome.

pub mod adapter;
pub mod config;
pub mod gemini;
pub mod types;

pub use adapter::{GenerationOutcome, Generator};
pub use types::{GenerateContent, LlmError};
