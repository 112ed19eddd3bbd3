//! Trainee progress summary over client-held scenario results.

pub mod handlers;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::scoring::aggregate::round_clamped;

/// Training-mode result for one scenario, as kept by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    /// Accepts `3` or `"3"`.
    #[serde(deserialize_with = "scenario_id_from_any")]
    pub scenario_id: String,
    #[serde(default)]
    pub user_prompt: String,
    #[serde(default)]
    pub refined_prompt: Option<String>,
    #[serde(default, deserialize_with = "score_from_any")]
    pub initial_score: u32,
    #[serde(deserialize_with = "score_from_any")]
    pub final_score: u32,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub has_refined: bool,
    /// Seconds.
    #[serde(default)]
    pub time_spent: u64,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

fn scenario_id_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n.to_string(),
        Raw::Text(s) => s.trim().to_string(),
    })
}

/// Client scores are rounded and clamped into 0..=100.
fn score_from_any<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(round_clamped(f64::deserialize(deserializer)?))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillLevel {
    Grundkenntnisse,
    Kompetent,
    Experte,
}

impl SkillLevel {
    pub fn from_average(average: u32, completed: usize) -> Self {
        if completed == 0 {
            return SkillLevel::Grundkenntnisse;
        }
        match average {
            80.. => SkillLevel::Experte,
            65..=79 => SkillLevel::Kompetent,
            _ => SkillLevel::Grundkenntnisse,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub completed: usize,
    pub total_scenarios: usize,
    pub total_score: u64,
    pub average_score: u32,
    pub completion_percentage: u32,
    pub skill_level: SkillLevel,
    pub refined_count: usize,
    pub total_time_spent: u64,
    /// Deduplicated results in first-seen scenario order.
    pub results: Vec<ScenarioResult>,
}

/// Later results for the same scenario replace earlier ones in place.
pub fn dedupe_results(results: Vec<ScenarioResult>) -> Vec<ScenarioResult> {
    let mut out: Vec<ScenarioResult> = Vec::with_capacity(results.len());
    for result in results {
        match out.iter_mut().find(|r| r.scenario_id == result.scenario_id) {
            Some(existing) => *existing = result,
            None => out.push(result),
        }
    }
    out
}

pub fn summarize(results: Vec<ScenarioResult>, total_scenarios: usize) -> ProgressSummary {
    let results = dedupe_results(results);
    let completed = results.len();

    let total_score: u64 = results
        .iter()
        .map(|r| u64::from(r.final_score.min(100)))
        .sum();
    let average_score = if completed == 0 {
        0
    } else {
        round_clamped(total_score as f64 / completed as f64)
    };
    let completion_percentage = if total_scenarios == 0 {
        0
    } else {
        ((completed as f64 / total_scenarios as f64) * 100.0).round().min(100.0) as u32
    };

    ProgressSummary {
        completed,
        total_scenarios,
        total_score,
        average_score,
        completion_percentage,
        skill_level: SkillLevel::from_average(average_score, completed),
        refined_count: results.iter().filter(|r| r.has_refined).count(),
        total_time_spent: results
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.time_spent)),
        results,
    }
}
