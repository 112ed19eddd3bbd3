// Prompt template for remote prompt evaluation.

use crate::evaluation::EvaluationRequest;
use crate::llm_client::prompts::{fill_template, EXPERT_PERSONA};

const EVALUATION_TEMPLATE: &str = r#"{persona}
Du bewertest Prompts, die Behördenmitarbeiter schreiben, um KI-Systeme effektiv zu nutzen.

SZENARIO: "{title}"
KONTEXT: {context}
ZIEL: {goal}
{extras}
IDEALER PROMPT (Golden Shot):
{ideal_prompt}

BEWERTUNGSKRITERIEN:
{criteria}

WICHTIGE SCHLÜSSELBEGRIFFE: {key_phrases}

HÄUFIGE FEHLER: {common_mistakes}

Bewerte den folgenden Prompt des Nutzers auf einer Skala von 0-100. Antworte NUR mit validem JSON in diesem Format:
{
  "score": <number 0-100>,
  "feedback": "<2-3 Sätze Gesamtbewertung auf Deutsch>",
  "suggestions": ["<Verbesserungsvorschlag 1>", "<Verbesserungsvorschlag 2>", "<Verbesserungsvorschlag 3>"],
  "strengths": ["<Stärke 1>", "<Stärke 2>"],
  "criticalIssues": ["<Kritisches Problem 1>"]
}

Sei streng aber fair. Ein Score von 80+ bedeutet exzellent. Vergleiche immer mit dem idealen Prompt.

NUTZER-PROMPT:
{prompt}"#;

/// Builds the full German instruction sent to the model.
pub fn build_evaluation_prompt(request: &EvaluationRequest) -> String {
    let criteria = request
        .evaluation_criteria
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {}", i + 1, c))
        .collect::<Vec<_>>()
        .join("\n");

    let mut extras = String::new();
    if let Some(department) = request.department.as_deref().filter(|d| !d.trim().is_empty()) {
        extras.push_str(&format!("ABTEILUNG: {department}\n"));
    }
    if let Some(category) = request.category.as_deref().filter(|c| !c.trim().is_empty()) {
        extras.push_str(&format!("KATEGORIE: {category}\n"));
    }
    if !request.competition_files.is_empty() {
        let files = request
            .competition_files
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(", ");
        extras.push_str(&format!("BEREITGESTELLTE DATEIEN: {files}\n"));
    }

    let key_phrases = request.key_phrases.join(", ");
    let common_mistakes = request.common_mistakes.join(", ");

    fill_template(
        EVALUATION_TEMPLATE,
        &[
            ("persona", EXPERT_PERSONA),
            ("title", &request.scenario_title),
            ("context", &request.scenario_context),
            ("goal", &request.scenario_goal),
            ("extras", &extras),
            ("ideal_prompt", &request.ideal_prompt),
            ("criteria", &criteria),
            ("key_phrases", &key_phrases),
            ("common_mistakes", &common_mistakes),
            ("prompt", &request.prompt),
        ],
    )
}
