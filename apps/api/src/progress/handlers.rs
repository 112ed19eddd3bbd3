use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::progress::{summarize, ProgressSummary, ScenarioResult};
use crate::scenarios::catalog::builtin_scenarios;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummaryRequest {
    #[serde(default)]
    pub results: Vec<ScenarioResult>,
    /// Defaults to the size of the built-in catalog.
    #[serde(default)]
    pub total_scenarios: Option<usize>,
}

/// POST /api/v1/progress/summary
pub async fn handle_progress_summary(
    Json(request): Json<ProgressSummaryRequest>,
) -> Result<Json<ProgressSummary>, AppError> {
    let total = request
        .total_scenarios
        .unwrap_or_else(|| builtin_scenarios().len());
    Ok(Json(summarize(request.results, total)))
}
