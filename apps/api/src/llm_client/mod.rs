/// LLM Client: the single point of entry for all Gemini API calls in Promptwerk.
///
/// ARCHITECTURAL RULE: No other module may call the model API directly.
/// All LLM interactions MUST go through this module.
///
/// Calls are one-shot: no retry, no streaming. A failed call is surfaced to
/// the caller, who may simply try again.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// Model used for prompt evaluation (JSON answers).
pub const EVALUATION_MODEL: &str = "gemini-2.0-flash";
/// Model used for ideal-prompt generation (free text).
pub const GENERATION_MODEL: &str = "gemini-2.5-flash-preview-05-20";
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("GEMINI_API_KEY not configured")]
    MissingApiKey,

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl LlmError {
    /// True when the upstream answered 429.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, LlmError::Api { status: 429, .. })
    }
}

/// Sampling settings forwarded as `generationConfig`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<&'static str>,
}

impl GenerationConfig {
    /// Low temperature, JSON-only answer.
    pub fn json(temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            temperature,
            max_output_tokens,
            response_mime_type: Some("application/json"),
        }
    }

    pub fn text(temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            temperature,
            max_output_tokens,
            response_mime_type: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: Option<u32>,
    #[serde(default)]
    pub candidates_token_count: Option<u32>,
}

impl LlmResponse {
    /// Extracts the text of the first part of the first candidate.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The single LLM client used by all services in Promptwerk.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(api_key: Option<String>) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, api_key })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Makes a raw `generateContent` call, returning the full response object.
    pub async fn generate(
        &self,
        model: &str,
        prompt: &str,
        config: GenerationConfig,
    ) -> Result<LlmResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: config,
        };

        // The key travels as a query parameter; never log the URL.
        let url = format!("{GEMINI_API_BASE}/{model}:generateContent");
        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        if let Some(usage) = &llm_response.usage_metadata {
            debug!(
                "LLM call succeeded: model={}, prompt_tokens={:?}, output_tokens={:?}",
                model, usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(llm_response)
    }

    /// Calls the model and returns the trimmed text of the first candidate.
    pub async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
        config: GenerationConfig,
    ) -> Result<String, LlmError> {
        let response = self.generate(model, prompt, config).await?;
        response
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
