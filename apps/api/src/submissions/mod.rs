// Competition submissions: evaluate, persist, refine once, rank.

pub mod handlers;
pub mod leaderboard;
pub mod store;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::{EvaluationRequest, PromptEvaluator};
use crate::models::submission::SubmissionRow;
use crate::scenarios::load_db_scenario;
use store::NewSubmission;

/// Evaluates a contestant's first attempt and stores it.
pub async fn create_submission(
    pool: &PgPool,
    evaluator: &dyn PromptEvaluator,
    competition_id: Uuid,
    contestant_id: Uuid,
    scenario_id: Uuid,
    prompt: &str,
) -> Result<SubmissionRow, AppError> {
    store::load_contestant(pool, competition_id, contestant_id).await?;
    if !store::scenario_in_competition(pool, competition_id, scenario_id).await? {
        return Err(AppError::Validation(format!(
            "Scenario {scenario_id} is not part of competition {competition_id}"
        )));
    }

    let request = evaluation_request(pool, competition_id, scenario_id, prompt).await?;
    let result = evaluator.evaluate(&request).await?;

    store::insert_submission(
        pool,
        NewSubmission {
            competition_id,
            contestant_id,
            scenario_id,
            user_prompt: prompt,
            result: &result,
        },
    )
    .await
}

/// Re-evaluates with the refined prompt. Only one refinement is allowed.
pub async fn refine_submission(
    pool: &PgPool,
    evaluator: &dyn PromptEvaluator,
    submission_id: Uuid,
    refined_prompt: &str,
) -> Result<SubmissionRow, AppError> {
    let existing = store::load_submission(pool, submission_id).await?;
    if existing.has_refined() {
        return Err(already_refined(submission_id));
    }

    let request = evaluation_request(
        pool,
        existing.competition_id,
        existing.scenario_id,
        refined_prompt,
    )
    .await?;
    let result = evaluator.evaluate(&request).await?;

    let updated = store::apply_refinement(pool, submission_id, refined_prompt, &result)
        .await?
        .ok_or_else(|| already_refined(submission_id))?;

    info!(
        "Refined submission {submission_id}: {:?} -> {:?}",
        updated.initial_score, updated.final_score
    );
    Ok(updated)
}

fn already_refined(id: Uuid) -> AppError {
    AppError::Conflict(format!("Submission {id} has already been refined"))
}

async fn evaluation_request(
    pool: &PgPool,
    competition_id: Uuid,
    scenario_id: Uuid,
    prompt: &str,
) -> Result<EvaluationRequest, AppError> {
    let scenario = load_db_scenario(pool, scenario_id).await?;
    let files = store::competition_files(pool, competition_id).await?;
    Ok(EvaluationRequest::from_scenario(prompt, &scenario).with_files(files))
}
