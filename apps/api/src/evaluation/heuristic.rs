use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::evaluation::{validate_prompt, EvaluationRequest, EvaluationResult, PromptEvaluator};
use crate::scoring::{score_prompt_with, ScoreOptions};

/// Local evaluator backed by the keyword/structure analyzers. No network, no key.
#[derive(Debug, Clone, Default)]
pub struct HeuristicEvaluator {
    options: ScoreOptions,
}

impl HeuristicEvaluator {
    pub fn new(options: ScoreOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl PromptEvaluator for HeuristicEvaluator {
    async fn evaluate(&self, request: &EvaluationRequest) -> Result<EvaluationResult, AppError> {
        validate_prompt(&request.prompt)?;

        let scenario = request.to_scenario();
        let scored = score_prompt_with(&request.prompt, &scenario, &self.options);
        debug!(
            "Heuristic evaluation: score={}, breakdown={:?}",
            scored.score, scored.breakdown
        );

        Ok(EvaluationResult {
            score: scored.score,
            feedback: scored.feedback,
            suggestions: scored.suggestions,
            strengths: scored.key_strengths,
            critical_issues: scored.critical_issues,
        })
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::catalog::find_builtin;
    use crate::scoring::score_prompt;

    #[tokio::test]
    async fn test_rejects_short_prompt() {
        let s = find_builtin("1").unwrap();
        let req = EvaluationRequest::from_scenario("  zu kurz  ", s);
        let err = HeuristicEvaluator::default().evaluate(&req).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_matches_direct_scoring() {
        let s = find_builtin("1").unwrap();
        let prompt = "Verfasse einen empathischen Ablehnungsbescheid mit Rechtsgrundlage.";
        let req = EvaluationRequest::from_scenario(prompt, s);
        let result = HeuristicEvaluator::default().evaluate(&req).await.unwrap();
        let direct = score_prompt(prompt, s);
        assert_eq!(result.score, direct.score);
        assert_eq!(result.suggestions, direct.suggestions);
        assert_eq!(result.strengths, direct.key_strengths);
    }
}
