use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// A contestant's attempt at one competition scenario.
///
/// Column names are shared with the leaderboard and CSV tooling; keep them
/// stable. Scores and feedback are nullable in the hosted schema.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SubmissionRow {
    pub id: Uuid,
    pub contestant_id: Uuid,
    pub scenario_id: Uuid,
    pub competition_id: Uuid,
    pub user_prompt: String,
    pub refined_prompt: Option<String>,
    pub initial_score: Option<i32>,
    pub final_score: Option<i32>,
    pub ai_feedback: Option<String>,
    /// JSON array of strings.
    pub ai_suggestions: Option<Json<Vec<String>>>,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionRow {
    pub fn has_refined(&self) -> bool {
        self.refined_prompt.is_some()
    }

    /// Final score with missing values counted as zero.
    pub fn effective_score(&self) -> u32 {
        self.final_score.unwrap_or(0).clamp(0, 100) as u32
    }
}
