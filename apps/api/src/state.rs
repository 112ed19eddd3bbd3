use std::sync::Arc;

use sqlx::PgPool;

use crate::evaluation::PromptEvaluator;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Used directly by ideal-prompt generation; evaluation goes through `evaluator`.
    pub llm: LlmClient,
    /// Heuristic or remote, chosen from `EVALUATOR_BACKEND` at startup.
    pub evaluator: Arc<dyn PromptEvaluator>,
}
