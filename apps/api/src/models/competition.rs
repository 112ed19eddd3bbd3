use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompetitionRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date: Option<NaiveDate>,
    /// "draft" | "active" | "completed"
    pub status: String,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContestantRow {
    pub id: Uuid,
    pub competition_id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub access_code: String,
    pub created_at: DateTime<Utc>,
}

/// File attached to a competition. Only name and type reach the evaluator.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompetitionFileRow {
    pub file_name: String,
    #[serde(default)]
    pub file_type: Option<String>,
}

impl CompetitionFileRow {
    /// `name (type)`, or just the name when the type is unknown.
    pub fn label(&self) -> String {
        match self.file_type.as_deref().filter(|t| !t.is_empty()) {
            Some(file_type) => format!("{} ({file_type})", self.file_name),
            None => self.file_name.clone(),
        }
    }
}
