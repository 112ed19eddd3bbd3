//! SQL access for competitions, contestants and submissions.

use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::EvaluationResult;
use crate::models::competition::{CompetitionFileRow, CompetitionRow, ContestantRow};
use crate::models::submission::SubmissionRow;

pub async fn load_competition(pool: &PgPool, id: Uuid) -> Result<CompetitionRow, AppError> {
    sqlx::query_as::<_, CompetitionRow>("SELECT * FROM competitions WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Competition {id} not found")))
}

/// Loads a contestant, requiring membership in the given competition.
pub async fn load_contestant(
    pool: &PgPool,
    competition_id: Uuid,
    contestant_id: Uuid,
) -> Result<ContestantRow, AppError> {
    sqlx::query_as::<_, ContestantRow>(
        "SELECT * FROM contestants WHERE id = $1 AND competition_id = $2",
    )
    .bind(contestant_id)
    .bind(competition_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| {
        AppError::NotFound(format!(
            "Contestant {contestant_id} not found in competition {competition_id}"
        ))
    })
}

pub async fn list_contestants(
    pool: &PgPool,
    competition_id: Uuid,
) -> Result<Vec<ContestantRow>, AppError> {
    Ok(sqlx::query_as::<_, ContestantRow>(
        "SELECT * FROM contestants WHERE competition_id = $1 ORDER BY created_at",
    )
    .bind(competition_id)
    .fetch_all(pool)
    .await?)
}

pub async fn scenario_in_competition(
    pool: &PgPool,
    competition_id: Uuid,
    scenario_id: Uuid,
) -> Result<bool, AppError> {
    let exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM competition_scenarios
            WHERE competition_id = $1 AND scenario_id = $2
        )
        "#,
    )
    .bind(competition_id)
    .bind(scenario_id)
    .fetch_one(pool)
    .await?;
    Ok(exists)
}

/// File names and types only; contents never leave storage.
pub async fn competition_files(
    pool: &PgPool,
    competition_id: Uuid,
) -> Result<Vec<CompetitionFileRow>, AppError> {
    Ok(sqlx::query_as::<_, CompetitionFileRow>(
        r#"
        SELECT file_name, file_type
        FROM competition_files
        WHERE competition_id = $1
        ORDER BY uploaded_at
        "#,
    )
    .bind(competition_id)
    .fetch_all(pool)
    .await?)
}

pub struct NewSubmission<'a> {
    pub competition_id: Uuid,
    pub contestant_id: Uuid,
    pub scenario_id: Uuid,
    pub user_prompt: &'a str,
    pub result: &'a EvaluationResult,
}

/// Inserts a first attempt. Initial and final score start out equal.
pub async fn insert_submission(
    pool: &PgPool,
    new: NewSubmission<'_>,
) -> Result<SubmissionRow, AppError> {
    let score = new.result.score as i32;
    let row = sqlx::query_as::<_, SubmissionRow>(
        r#"
        INSERT INTO submissions
            (id, contestant_id, scenario_id, competition_id, user_prompt,
             initial_score, final_score, ai_feedback, ai_suggestions)
        VALUES ($1, $2, $3, $4, $5, $6, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new.contestant_id)
    .bind(new.scenario_id)
    .bind(new.competition_id)
    .bind(new.user_prompt)
    .bind(score)
    .bind(&new.result.feedback)
    .bind(Json(&new.result.suggestions))
    .fetch_one(pool)
    .await?;

    info!(
        "Inserted submission {} for contestant {} (score {score})",
        row.id, row.contestant_id
    );
    Ok(row)
}

pub async fn load_submission(pool: &PgPool, id: Uuid) -> Result<SubmissionRow, AppError> {
    sqlx::query_as::<_, SubmissionRow>("SELECT * FROM submissions WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Submission {id} not found")))
}

/// Records the single allowed refinement. Returns `None` when the submission
/// was refined already; `initial_score` is never touched.
pub async fn apply_refinement(
    pool: &PgPool,
    id: Uuid,
    refined_prompt: &str,
    result: &EvaluationResult,
) -> Result<Option<SubmissionRow>, AppError> {
    Ok(sqlx::query_as::<_, SubmissionRow>(
        r#"
        UPDATE submissions
        SET refined_prompt = $2,
            final_score = $3,
            ai_feedback = $4,
            ai_suggestions = $5
        WHERE id = $1 AND refined_prompt IS NULL
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(refined_prompt)
    .bind(result.score as i32)
    .bind(&result.feedback)
    .bind(Json(&result.suggestions))
    .fetch_optional(pool)
    .await?)
}

/// Newest first, optionally narrowed to one contestant.
pub async fn list_submissions(
    pool: &PgPool,
    competition_id: Uuid,
    contestant_id: Option<Uuid>,
) -> Result<Vec<SubmissionRow>, AppError> {
    Ok(sqlx::query_as::<_, SubmissionRow>(
        r#"
        SELECT * FROM submissions
        WHERE competition_id = $1
          AND ($2::uuid IS NULL OR contestant_id = $2)
        ORDER BY submitted_at DESC
        "#,
    )
    .bind(competition_id)
    .bind(contestant_id)
    .fetch_all(pool)
    .await?)
}
