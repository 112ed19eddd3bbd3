//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::generation::ideal_prompt::{
    generate_ideal_prompt, IdealPromptRequest, IdealPromptResponse,
};
use crate::state::AppState;

/// POST /api/v1/generate-ideal-prompt
///
/// Drafts a golden-shot prompt from a scenario's context and goal.
pub async fn handle_generate_ideal_prompt(
    State(state): State<AppState>,
    Json(request): Json<IdealPromptRequest>,
) -> Result<Json<IdealPromptResponse>, AppError> {
    let ideal_prompt = generate_ideal_prompt(&state.llm, &request).await?;
    Ok(Json(IdealPromptResponse { ideal_prompt }))
}
