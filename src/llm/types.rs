//! Provider-neutral generation types and errors.

use serde::Serialize;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by generation client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the provider failed (network, timeout).
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// REQUEST SHAPE
// =============================================================================

/// Request-side role vocabulary. The provider only distinguishes the user
/// from the model; assistant and system history turns both map to `Model`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WireRole {
    User,
    Model,
}

/// One context turn sent to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTurn {
    pub role: WireRole,
    pub text: String,
}

/// A fully shaped generation request. Borrowed: the adapter owns the
/// strings, the client only serializes them.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    /// Provider model name, e.g. `"gemini-2.5-flash"`.
    pub model: &'a str,
    /// System instruction; `None` for image generation.
    pub system: Option<&'a str>,
    /// Ordered context turns, ending with the current prompt.
    pub contents: &'a [ContentTurn],
}

// =============================================================================
// RESPONSE SHAPE
// =============================================================================

/// One part of a provider reply. Replies interleave text and inline image
/// parts in arbitrary order and multiplicity; the adapter folds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsePart {
    /// A free-text segment.
    Text(String),
    /// Inline binary image data, base64-encoded as received.
    InlineImage { data: String, mime_type: String },
}

/// A provider reply, flattened to the parts of its first candidate.
/// May be empty; an empty reply is not a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelReply {
    pub parts: Vec<ResponsePart>,
}

// =============================================================================
// GENERATION TRAIT
// =============================================================================

/// Async seam over the external generation capability. Enables mocking in
/// adapter and controller tests.
#[async_trait::async_trait]
pub trait GenerateContent: Send + Sync {
    /// Issue exactly one generation request.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails, the provider returns a
    /// non-success status, or the response body cannot be parsed.
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<ModelReply, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
