//! Axum route handlers for competition submissions and the leaderboard.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::submission::SubmissionRow;
use crate::state::AppState;
use crate::submissions::leaderboard::{compute_leaderboard, LeaderboardEntry};
use crate::submissions::{create_submission, refine_submission, store};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionRequest {
    pub contestant_id: Uuid,
    pub scenario_id: Uuid,
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineSubmissionRequest {
    pub refined_prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionListQuery {
    pub contestant_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub competition_id: Uuid,
    pub competition_name: String,
    pub entries: Vec<LeaderboardEntry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/competitions/:competition_id/submissions
pub async fn handle_create_submission(
    State(state): State<AppState>,
    Path(competition_id): Path<Uuid>,
    Json(request): Json<CreateSubmissionRequest>,
) -> Result<(StatusCode, Json<SubmissionRow>), AppError> {
    let row = create_submission(
        &state.db,
        state.evaluator.as_ref(),
        competition_id,
        request.contestant_id,
        request.scenario_id,
        &request.prompt,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// POST /api/v1/submissions/:id/refine
pub async fn handle_refine_submission(
    State(state): State<AppState>,
    Path(submission_id): Path<Uuid>,
    Json(request): Json<RefineSubmissionRequest>,
) -> Result<Json<SubmissionRow>, AppError> {
    let row = refine_submission(
        &state.db,
        state.evaluator.as_ref(),
        submission_id,
        &request.refined_prompt,
    )
    .await?;
    Ok(Json(row))
}

/// GET /api/v1/competitions/:competition_id/submissions?contestant_id=
pub async fn handle_list_submissions(
    State(state): State<AppState>,
    Path(competition_id): Path<Uuid>,
    Query(query): Query<SubmissionListQuery>,
) -> Result<Json<Vec<SubmissionRow>>, AppError> {
    let rows = store::list_submissions(&state.db, competition_id, query.contestant_id).await?;
    Ok(Json(rows))
}

/// GET /api/v1/competitions/:competition_id/leaderboard
pub async fn handle_leaderboard(
    State(state): State<AppState>,
    Path(competition_id): Path<Uuid>,
) -> Result<Json<LeaderboardResponse>, AppError> {
    let competition = store::load_competition(&state.db, competition_id).await?;
    let contestants = store::list_contestants(&state.db, competition_id).await?;
    let submissions = store::list_submissions(&state.db, competition_id, None).await?;

    Ok(Json(LeaderboardResponse {
        competition_id,
        competition_name: competition.name,
        entries: compute_leaderboard(&contestants, &submissions),
    }))
}
