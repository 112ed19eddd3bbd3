//! Remote evaluator: one `generateContent` call, then defensive normalization
//! of whatever JSON (or almost-JSON) the model returns.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::evaluation::prompts::build_evaluation_prompt;
use crate::evaluation::{validate_prompt, EvaluationRequest, EvaluationResult, PromptEvaluator};
use crate::llm_client::{strip_json_fences, GenerationConfig, LlmClient, LlmError, EVALUATION_MODEL};

const EVALUATION_TEMPERATURE: f32 = 0.3;
const EVALUATION_MAX_TOKENS: u32 = 1024;

const FALLBACK_SCORE: f64 = 50.0;
const FALLBACK_FEEDBACK: &str = "Bewertung konnte nicht vollständig verarbeitet werden.";
const MISSING_FEEDBACK: &str = "Keine Bewertung verfügbar.";
const EVALUATION_FAILED: &str = "KI-Bewertung fehlgeschlagen. Bitte versuchen Sie es erneut.";
const NO_ANSWER: &str = "Keine Antwort vom KI-Modell erhalten.";

static SCORE_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""score"\s*:\s*(\d+)"#).expect("score pattern is valid"));
static FEEDBACK_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""feedback"\s*:\s*"([^"]+)""#).expect("feedback pattern is valid"));

pub struct RemoteEvaluator {
    llm: LlmClient,
}

impl RemoteEvaluator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl PromptEvaluator for RemoteEvaluator {
    async fn evaluate(&self, request: &EvaluationRequest) -> Result<EvaluationResult, AppError> {
        // Missing key is reported before input validation.
        if !self.llm.is_configured() {
            return Err(AppError::MissingConfig(LlmError::MissingApiKey.to_string()));
        }
        validate_prompt(&request.prompt)?;

        let prompt = build_evaluation_prompt(request);
        let text = self
            .llm
            .generate_text(
                EVALUATION_MODEL,
                &prompt,
                GenerationConfig::json(EVALUATION_TEMPERATURE, EVALUATION_MAX_TOKENS),
            )
            .await
            .map_err(map_llm_error)?;

        let result = parse_evaluation_text(&text);
        info!("Remote evaluation finished: score={}", result.score);
        Ok(result)
    }

    fn backend(&self) -> &'static str {
        "remote"
    }
}

fn map_llm_error(err: LlmError) -> AppError {
    match err {
        LlmError::MissingApiKey => AppError::MissingConfig(LlmError::MissingApiKey.to_string()),
        LlmError::EmptyContent => AppError::Upstream(NO_ANSWER.to_string()),
        other => {
            warn!("Gemini evaluation call failed: {other}");
            AppError::Upstream(EVALUATION_FAILED.to_string())
        }
    }
}

/// Turns the model's text answer into an [`EvaluationResult`].
///
/// Never fails: unparsable text falls back to regex extraction of `score` and
/// `feedback` with empty lists.
pub fn parse_evaluation_text(text: &str) -> EvaluationResult {
    let cleaned: String = text
        .chars()
        .map(|c| if c.is_ascii_control() { ' ' } else { c })
        .collect();

    match serde_json::from_str::<Value>(strip_json_fences(&cleaned)) {
        Ok(value) => normalize(&value),
        Err(e) => {
            let preview: String = text.chars().take(500).collect();
            warn!("Evaluation JSON parse error ({e}), raw text: {preview}");
            regex_fallback(text)
        }
    }
}

fn regex_fallback(text: &str) -> EvaluationResult {
    let score = SCORE_FIELD
        .captures(text)
        .and_then(|c| c[1].parse::<f64>().ok())
        .unwrap_or(FALLBACK_SCORE);
    let feedback = FEEDBACK_FIELD
        .captures(text)
        .map(|c| c[1].to_string())
        .unwrap_or_else(|| FALLBACK_FEEDBACK.to_string());

    EvaluationResult {
        score: clamp_score(score),
        feedback,
        suggestions: Vec::new(),
        strengths: Vec::new(),
        critical_issues: Vec::new(),
    }
}

fn normalize(value: &Value) -> EvaluationResult {
    let score = match value.get("score") {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };

    let feedback = value
        .get("feedback")
        .and_then(Value::as_str)
        .filter(|f| !f.is_empty())
        .unwrap_or(MISSING_FEEDBACK)
        .to_string();

    EvaluationResult {
        score: clamp_score(score),
        feedback,
        suggestions: string_list(value.get("suggestions")),
        strengths: string_list(value.get("strengths")),
        critical_issues: string_list(value.get("criticalIssues")),
    }
}

/// Arrays keep their string items; anything else becomes empty.
fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

fn clamp_score(score: f64) -> u32 {
    if !score.is_finite() {
        return 0;
    }
    score.round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::catalog::find_builtin;

    #[test]
    fn test_parses_well_formed_answer() {
        let text = r#"{"score": 78.6, "feedback": "Solide.", "suggestions": ["a", "b"],
            "strengths": ["klar"], "criticalIssues": []}"#;
        let r = parse_evaluation_text(text);
        assert_eq!(r.score, 79);
        assert_eq!(r.feedback, "Solide.");
        assert_eq!(r.suggestions, vec!["a", "b"]);
        assert_eq!(r.strengths, vec!["klar"]);
        assert!(r.critical_issues.is_empty());
    }

    #[test]
    fn test_missing_suggestions_become_empty() {
        let r = parse_evaluation_text(r#"{"score": 60, "feedback": "ok"}"#);
        assert!(r.suggestions.is_empty());
        assert!(r.strengths.is_empty());
        assert!(r.critical_issues.is_empty());
    }

    #[test]
    fn test_non_array_and_non_string_items_are_coerced() {
        let r = parse_evaluation_text(
            r#"{"score": 60, "feedback": "ok", "suggestions": "mehr Kontext", "strengths": ["klar", 3, null]}"#,
        );
        assert!(r.suggestions.is_empty());
        assert_eq!(r.strengths, vec!["klar"]);
    }

    #[test]
    fn test_score_is_clamped_and_missing_score_is_zero() {
        assert_eq!(parse_evaluation_text(r#"{"score": 140}"#).score, 100);
        assert_eq!(parse_evaluation_text(r#"{"score": -4}"#).score, 0);
        assert_eq!(parse_evaluation_text(r#"{"score": "72"}"#).score, 72);
        let r = parse_evaluation_text(r#"{"feedback": "x"}"#);
        assert_eq!(r.score, 0);
    }

    #[test]
    fn test_empty_feedback_gets_default() {
        let r = parse_evaluation_text(r#"{"score": 50, "feedback": ""}"#);
        assert_eq!(r.feedback, MISSING_FEEDBACK);
    }

    #[test]
    fn test_control_characters_and_fences_are_tolerated() {
        let text = "```json\n{\"score\": 66,\n\"feedback\": \"Zeile\teins\"}\n```";
        let r = parse_evaluation_text(text);
        assert_eq!(r.score, 66);
        assert_eq!(r.feedback, "Zeile eins");
    }

    #[test]
    fn test_truncated_json_falls_back_to_regex() {
        let text = r#"{"score": 83, "feedback": "Sehr gute Struktur", "suggestions": ["Mehr"#;
        let r = parse_evaluation_text(text);
        assert_eq!(r.score, 83);
        assert_eq!(r.feedback, "Sehr gute Struktur");
        assert!(r.suggestions.is_empty());
    }

    #[test]
    fn test_garbage_falls_back_to_defaults() {
        let r = parse_evaluation_text("Das kann ich nicht bewerten.");
        assert_eq!(r.score, 50);
        assert_eq!(r.feedback, FALLBACK_FEEDBACK);
    }

    #[tokio::test]
    async fn test_missing_key_reported_before_validation() {
        let evaluator = RemoteEvaluator::new(LlmClient::new(None).unwrap());
        let s = find_builtin("1").unwrap();
        let req = EvaluationRequest::from_scenario("kurz", s);
        match evaluator.evaluate(&req).await.unwrap_err() {
            AppError::MissingConfig(msg) => assert_eq!(msg, "GEMINI_API_KEY not configured"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_llm_error_mapping() {
        assert!(matches!(
            map_llm_error(LlmError::EmptyContent),
            AppError::Upstream(ref m) if m == NO_ANSWER
        ));
        assert!(matches!(
            map_llm_error(LlmError::Api { status: 500, message: "boom".into() }),
            AppError::Upstream(ref m) if m == EVALUATION_FAILED
        ));
    }
}
