//! Gemini `generateContent` API client.
//!
//! Thin HTTP wrapper for `POST /models/{model}:generateContent`. Pure
//! parsing in `parse_response` for testability. Only the first candidate
//! is consumed; its parts are flattened into a [`ModelReply`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::GeminiTimeouts;
use super::types::{ContentTurn, GenerationRequest, LlmError, ModelReply, ResponsePart, WireRole};

const FALLBACK_MIME_TYPE: &str = "image/png";

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Build a client with the given credentials and timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(api_key: String, base_url: String, timeouts: GeminiTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url: base_url.trim_end_matches('/').to_string() })
    }

    async fn generate_inner(&self, request: GenerationRequest<'_>) -> Result<ModelReply, LlmError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, request.model);
        let body = build_request_body(request.system, request.contents);

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

#[async_trait::async_trait]
impl super::types::GenerateContent for GeminiClient {
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<ModelReply, LlmError> {
        self.generate_inner(request).await
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct ApiRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<WireSystem<'a>>,
    contents: Vec<WireContent<'a>>,
}

#[derive(Serialize)]
struct WireSystem<'a> {
    parts: Vec<WireTextPart<'a>>,
}

#[derive(Serialize)]
struct WireContent<'a> {
    role: WireRole,
    parts: Vec<WireTextPart<'a>>,
}

#[derive(Serialize)]
struct WireTextPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<WireResponsePart>,
}

/// A response part carries `text` or `inlineData` (or, for unrecognized
/// future shapes, neither — such parts are dropped).
#[derive(Deserialize)]
struct WireResponsePart {
    text: Option<String>,
    #[serde(rename = "inlineData")]
    inline_data: Option<WireInlineData>,
}

#[derive(Deserialize)]
struct WireInlineData {
    data: String,
    #[serde(rename = "mimeType")]
    mime_type: Option<String>,
}

// =============================================================================
// REQUEST ASSEMBLY / RESPONSE PARSING
// =============================================================================

fn build_request_body<'a>(system: Option<&'a str>, contents: &'a [ContentTurn]) -> ApiRequest<'a> {
    ApiRequest {
        system_instruction: system.map(|text| WireSystem { parts: vec![WireTextPart { text }] }),
        contents: contents
            .iter()
            .map(|turn| WireContent { role: turn.role, parts: vec![WireTextPart { text: &turn.text }] })
            .collect(),
    }
}

fn parse_response(json: &str) -> Result<ModelReply, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    // Empty or content-less candidates are a valid empty reply, not an error.
    let Some(content) = api.candidates.into_iter().next().and_then(|c| c.content) else {
        return Ok(ModelReply::default());
    };

    let parts = content
        .parts
        .into_iter()
        .filter_map(|part| match (part.inline_data, part.text) {
            (Some(inline), _) => Some(ResponsePart::InlineImage {
                data: inline.data,
                mime_type: inline.mime_type.unwrap_or_else(|| FALLBACK_MIME_TYPE.to_string()),
            }),
            (None, Some(text)) => Some(ResponsePart::Text(text)),
            (None, None) => None,
        })
        .collect();

    Ok(ModelReply { parts })
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
