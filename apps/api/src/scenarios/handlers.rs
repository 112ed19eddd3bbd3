use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::scenario::Scenario;
use crate::scenarios::{catalog, list_scenarios, load_scenario};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScenarioListQuery {
    /// `builtin` limits the list to the catalog and skips the database.
    pub source: Option<String>,
}

/// GET /api/v1/scenarios
pub async fn handle_list_scenarios(
    State(state): State<AppState>,
    Query(query): Query<ScenarioListQuery>,
) -> Result<Json<Vec<Scenario>>, AppError> {
    if query.source.as_deref() == Some("builtin") {
        return Ok(Json(catalog::builtin_scenarios().to_vec()));
    }
    Ok(Json(list_scenarios(&state.db).await?))
}

/// GET /api/v1/scenarios/:id
pub async fn handle_get_scenario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Scenario>, AppError> {
    Ok(Json(load_scenario(&state.db, &id).await?))
}
