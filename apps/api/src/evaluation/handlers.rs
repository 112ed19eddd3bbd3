//! Axum route handlers for evaluation, local scoring and ideal-prompt comparison.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::evaluation::{EvaluationRequest, EvaluationResult};
use crate::scenarios::load_scenario;
use crate::scoring::comparator::{compare_with_ideal, ideal_prompt_suggestions, Comparison};
use crate::scoring::feedback::score_badge;
use crate::scoring::{score_prompt, score_prompt_with, HeuristicScore, Jitter, ScoreOptions};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub prompt: String,
    pub scenario_id: String,
    /// Opt-in seeded jitter; omitted means deterministic scoring.
    #[serde(default)]
    pub jitter: Option<Jitter>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub scenario_id: String,
    pub badge: &'static str,
    #[serde(flatten)]
    pub result: HeuristicScore,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub prompt: String,
    pub scenario_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    pub scenario_id: String,
    /// Heuristic total with default weights.
    pub score: u32,
    #[serde(flatten)]
    pub comparison: Comparison,
    pub ideal_prompt_suggestions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/evaluate
///
/// Evaluates a prompt against the scenario data carried in the body, using
/// the evaluator configured at startup.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluationRequest>,
) -> Result<Json<EvaluationResult>, AppError> {
    let result = state.evaluator.evaluate(&request).await?;
    info!(
        "Evaluated prompt for '{}' via {}: score={}",
        request.scenario_title,
        state.evaluator.backend(),
        result.score
    );
    Ok(Json(result))
}

/// POST /api/v1/score
///
/// Local heuristic score with the full breakdown. No minimum length.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let scenario = load_scenario(&state.db, &request.scenario_id).await?;
    let options = ScoreOptions {
        jitter: request.jitter,
        ..Default::default()
    };
    let result = score_prompt_with(&request.prompt, &scenario, &options);

    Ok(Json(ScoreResponse {
        scenario_id: scenario.id,
        badge: score_badge(result.score),
        result,
    }))
}

/// POST /api/v1/compare
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    let scenario = load_scenario(&state.db, &request.scenario_id).await?;
    let comparison = compare_with_ideal(&request.prompt, &scenario);
    let suggestions = ideal_prompt_suggestions(&request.prompt, &scenario);
    let score = score_prompt(&request.prompt, &scenario).score;

    Ok(Json(CompareResponse {
        scenario_id: scenario.id,
        score,
        comparison,
        ideal_prompt_suggestions: suggestions,
    }))
}
