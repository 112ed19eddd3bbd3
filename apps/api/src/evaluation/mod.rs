//! Prompt evaluation: pluggable, trait-based evaluator.
//!
//! `HeuristicEvaluator` scores locally and deterministically.
//! `RemoteEvaluator` asks the generative model and normalizes its answer.
//!
//! `AppState` holds an `Arc<dyn PromptEvaluator>`, picked at startup from
//! `EVALUATOR_BACKEND`.

pub mod handlers;
pub mod heuristic;
pub mod prompts;
pub mod remote;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::competition::CompetitionFileRow;
use crate::models::scenario::{Scenario, ScenarioEvaluation};

/// Prompts shorter than this (after trimming) are rejected before scoring.
pub const MIN_PROMPT_CHARS: usize = 20;

/// Everything an evaluator needs: the prompt plus the scenario it answers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub scenario_title: String,
    #[serde(default)]
    pub scenario_context: String,
    #[serde(default)]
    pub scenario_goal: String,
    #[serde(default)]
    pub ideal_prompt: String,
    #[serde(default)]
    pub evaluation_criteria: Vec<String>,
    #[serde(default)]
    pub key_phrases: Vec<String>,
    #[serde(default)]
    pub common_mistakes: Vec<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub competition_files: Vec<CompetitionFileRow>,
}

impl EvaluationRequest {
    pub fn from_scenario(prompt: &str, scenario: &Scenario) -> Self {
        Self {
            prompt: prompt.to_string(),
            scenario_title: scenario.title.clone(),
            scenario_context: scenario.context.clone(),
            scenario_goal: scenario.goal.clone(),
            ideal_prompt: scenario.ideal_prompt.clone(),
            evaluation_criteria: scenario.evaluation.criteria.clone(),
            key_phrases: scenario.evaluation.key_phrases.clone(),
            common_mistakes: scenario.evaluation.common_mistakes.clone(),
            department: non_empty(&scenario.department),
            category: non_empty(&scenario.category),
            competition_files: Vec::new(),
        }
    }

    pub fn with_files(mut self, files: Vec<CompetitionFileRow>) -> Self {
        self.competition_files = files;
        self
    }

    /// Rebuilds the scenario view the local analyzers work on.
    pub fn to_scenario(&self) -> Scenario {
        Scenario {
            title: self.scenario_title.clone(),
            context: self.scenario_context.clone(),
            goal: self.scenario_goal.clone(),
            department: self.department.clone().unwrap_or_default(),
            category: self.category.clone().unwrap_or_default(),
            ideal_prompt: self.ideal_prompt.clone(),
            evaluation: ScenarioEvaluation {
                criteria: self.evaluation_criteria.clone(),
                common_mistakes: self.common_mistakes.clone(),
                key_phrases: self.key_phrases.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub score: u32,
    pub feedback: String,
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
    pub critical_issues: Vec<String>,
}

/// The evaluator trait. Implement this to swap backends without touching
/// handlers or the submission flow.
#[async_trait]
pub trait PromptEvaluator: Send + Sync {
    async fn evaluate(&self, request: &EvaluationRequest) -> Result<EvaluationResult, AppError>;

    /// "heuristic" | "remote", reported in logs.
    fn backend(&self) -> &'static str;
}

/// Rejects prompts shorter than [`MIN_PROMPT_CHARS`] characters after trimming.
pub fn validate_prompt(prompt: &str) -> Result<(), AppError> {
    if prompt.trim().chars().count() < MIN_PROMPT_CHARS {
        return Err(AppError::Validation(
            "Prompt muss mindestens 20 Zeichen lang sein.".to_string(),
        ));
    }
    Ok(())
}
