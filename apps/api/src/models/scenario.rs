use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Difficulty tier shown to trainees. Serialized with the German labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "Anfänger")]
    Beginner,
    #[default]
    #[serde(rename = "Mittelstufe")]
    Intermediate,
    #[serde(rename = "Fortgeschritten")]
    Advanced,
}

impl Difficulty {
    /// Parses a stored label; unknown labels fall back to the default tier.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Anfänger" => Difficulty::Beginner,
            "Fortgeschritten" => Difficulty::Advanced,
            _ => Difficulty::Intermediate,
        }
    }
}

/// Grading block attached to every scenario.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioEvaluation {
    #[serde(default)]
    pub criteria: Vec<String>,
    #[serde(default)]
    pub sample_good_prompt: String,
    #[serde(default)]
    pub common_mistakes: Vec<String>,
    #[serde(default)]
    pub key_phrases: Vec<String>,
}

/// A teaching unit: situation, goal, golden-shot prompt and grading criteria.
///
/// Built-in scenarios use the ids `"1"`..`"5"`; admin-managed scenarios use
/// their database UUID rendered as a string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub description: String,
    pub context: String,
    pub goal: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub department: String,
    pub ideal_prompt: String,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub evaluation: ScenarioEvaluation,
}

/// Row of the admin-managed `scenarios` table.
#[derive(Debug, Clone, FromRow)]
pub struct ScenarioRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub context: String,
    pub goal: String,
    pub difficulty: String,
    pub category: String,
    pub department: String,
    pub ideal_prompt: String,
    /// `jsonb` string array.
    pub hints: Json<Vec<String>>,
    pub evaluation: Json<ScenarioEvaluation>,
}

impl From<ScenarioRow> for Scenario {
    fn from(row: ScenarioRow) -> Self {
        Scenario {
            id: row.id.to_string(),
            title: row.title,
            description: row.description,
            context: row.context,
            goal: row.goal,
            difficulty: Difficulty::from_label(&row.difficulty),
            category: row.category,
            department: row.department,
            ideal_prompt: row.ideal_prompt,
            hints: row.hints.0,
            evaluation: row.evaluation.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_serializes_german_labels() {
        assert_eq!(
            serde_json::to_string(&Difficulty::Beginner).unwrap(),
            "\"Anfänger\""
        );
        let d: Difficulty = serde_json::from_str("\"Fortgeschritten\"").unwrap();
        assert_eq!(d, Difficulty::Advanced);
    }

    #[test]
    fn test_difficulty_unknown_label_defaults_to_intermediate() {
        assert_eq!(Difficulty::from_label("Experte"), Difficulty::Intermediate);
        assert_eq!(Difficulty::from_label(" Anfänger "), Difficulty::Beginner);
    }

    #[test]
    fn test_evaluation_block_tolerates_missing_fields() {
        let ev: ScenarioEvaluation = serde_json::from_str(r#"{"keyPhrases": ["DSGVO"]}"#).unwrap();
        assert_eq!(ev.key_phrases, vec!["DSGVO"]);
        assert!(ev.criteria.is_empty());
        assert!(ev.sample_good_prompt.is_empty());
    }

    #[test]
    fn test_row_converts_to_scenario() {
        let id = Uuid::new_v4();
        let row = ScenarioRow {
            id,
            title: "T".into(),
            description: "D".into(),
            context: "C".into(),
            goal: "G".into(),
            difficulty: "Anfänger".into(),
            category: "Kat".into(),
            department: "Jobcenter".into(),
            ideal_prompt: "Ideal".into(),
            hints: Json(vec!["h".into()]),
            evaluation: Json(ScenarioEvaluation::default()),
        };
        let scenario = Scenario::from(row);
        assert_eq!(scenario.id, id.to_string());
        assert_eq!(scenario.hints, vec!["h"]);
        assert_eq!(scenario.difficulty, Difficulty::Beginner);
        assert_eq!(scenario.department, "Jobcenter");
    }

    #[test]
    fn test_json_columns_decode_from_jsonb() {
        use sqlx::postgres::Postgres;
        use sqlx::Type;

        let jsonb = <Json<ScenarioEvaluation> as Type<Postgres>>::type_info();
        assert!(<Json<Vec<String>> as Type<Postgres>>::compatible(&jsonb));
        assert!(!<Vec<String> as Type<Postgres>>::compatible(&jsonb));
    }
}
