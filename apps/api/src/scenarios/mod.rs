// Scenario lookup: built-in catalog first, then the admin-managed `scenarios` table.

pub mod catalog;
pub mod handlers;

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::scenario::{Scenario, ScenarioRow};

/// Resolves a scenario id. Built-in ids never touch the database.
pub async fn load_scenario(pool: &PgPool, id: &str) -> Result<Scenario, AppError> {
    if let Some(scenario) = catalog::find_builtin(id) {
        return Ok(scenario.clone());
    }

    let uuid = Uuid::parse_str(id.trim())
        .map_err(|_| AppError::NotFound(format!("Scenario {id} not found")))?;
    load_db_scenario(pool, uuid).await
}

pub async fn load_db_scenario(pool: &PgPool, id: Uuid) -> Result<Scenario, AppError> {
    let row = sqlx::query_as::<_, ScenarioRow>("SELECT * FROM scenarios WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Scenario {id} not found")))?;

    debug!("Loaded scenario {} from database", row.id);
    Ok(row.into())
}

/// Built-in scenarios followed by database scenarios in creation order.
pub async fn list_scenarios(pool: &PgPool) -> Result<Vec<Scenario>, AppError> {
    let rows = sqlx::query_as::<_, ScenarioRow>("SELECT * FROM scenarios ORDER BY created_at")
        .fetch_all(pool)
        .await?;

    let mut scenarios: Vec<Scenario> = catalog::builtin_scenarios().to_vec();
    scenarios.extend(rows.into_iter().map(Scenario::from));
    Ok(scenarios)
}
