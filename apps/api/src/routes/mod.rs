pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers as evaluation;
use crate::generation::handlers as generation;
use crate::progress::handlers as progress;
use crate::scenarios::handlers as scenarios;
use crate::state::AppState;
use crate::submissions::handlers as submissions;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Evaluation & local scoring
        .route("/api/v1/evaluate", post(evaluation::handle_evaluate))
        .route("/api/v1/score", post(evaluation::handle_score))
        .route("/api/v1/compare", post(evaluation::handle_compare))
        // Scenario authoring
        .route(
            "/api/v1/generate-ideal-prompt",
            post(generation::handle_generate_ideal_prompt),
        )
        .route("/api/v1/scenarios", get(scenarios::handle_list_scenarios))
        .route("/api/v1/scenarios/:id", get(scenarios::handle_get_scenario))
        // Competitions
        .route(
            "/api/v1/competitions/:competition_id/submissions",
            post(submissions::handle_create_submission).get(submissions::handle_list_submissions),
        )
        .route(
            "/api/v1/competitions/:competition_id/leaderboard",
            get(submissions::handle_leaderboard),
        )
        .route(
            "/api/v1/submissions/:id/refine",
            post(submissions::handle_refine_submission),
        )
        // Training progress
        .route(
            "/api/v1/progress/summary",
            post(progress::handle_progress_summary),
        )
        .with_state(state)
}
