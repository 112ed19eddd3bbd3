//! Ideal-prompt ("golden shot") generation for admin-authored scenarios.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::prompts::build_ideal_prompt_request;
use crate::llm_client::{GenerationConfig, LlmClient, LlmError, GENERATION_MODEL};

const GENERATION_TEMPERATURE: f32 = 0.7;
const GENERATION_MAX_TOKENS: u32 = 2048;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdealPromptRequest {
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdealPromptResponse {
    pub ideal_prompt: String,
}

/// Asks the model for an ideal prompt. The key is checked before the input.
pub async fn generate_ideal_prompt(
    llm: &LlmClient,
    request: &IdealPromptRequest,
) -> Result<String, AppError> {
    if !llm.is_configured() {
        return Err(AppError::MissingConfig(LlmError::MissingApiKey.to_string()));
    }
    if request.context.trim().is_empty() || request.goal.trim().is_empty() {
        return Err(AppError::Validation(
            "Kontext und Ziel sind erforderlich.".to_string(),
        ));
    }

    let prompt = build_ideal_prompt_request(
        &request.title,
        &request.description,
        &request.context,
        &request.goal,
        &request.department,
    );

    let ideal_prompt = llm
        .generate_text(
            GENERATION_MODEL,
            &prompt,
            GenerationConfig::text(GENERATION_TEMPERATURE, GENERATION_MAX_TOKENS),
        )
        .await
        .map_err(map_generation_error)?;

    info!(
        "Generated ideal prompt for '{}' ({} chars)",
        request.title,
        ideal_prompt.chars().count()
    );
    Ok(ideal_prompt)
}

fn map_generation_error(err: LlmError) -> AppError {
    if err.is_rate_limited() {
        warn!("Gemini rate limit hit during generation: {err}");
        return AppError::RateLimited(
            "Zu viele Anfragen. Bitte versuchen Sie es in einer Minute erneut.".to_string(),
        );
    }
    match err {
        LlmError::MissingApiKey => AppError::MissingConfig(LlmError::MissingApiKey.to_string()),
        LlmError::EmptyContent => {
            AppError::Upstream("Keine Antwort vom KI-Modell erhalten.".to_string())
        }
        other => {
            warn!("Gemini generation call failed: {other}");
            AppError::Upstream(
                "Prompt-Generierung fehlgeschlagen. Bitte versuchen Sie es erneut.".to_string(),
            )
        }
    }
}
