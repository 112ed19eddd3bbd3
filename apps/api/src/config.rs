use anyhow::{bail, Context, Result};

/// Which evaluator answers `/api/v1/evaluate` and submission scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluatorBackend {
    Heuristic,
    Remote,
}

impl EvaluatorBackend {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "heuristic" | "local" => Ok(EvaluatorBackend::Heuristic),
            "remote" | "llm" | "gemini" => Ok(EvaluatorBackend::Remote),
            other => bail!("EVALUATOR_BACKEND must be 'heuristic' or 'remote', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Optional: without it every remote call answers with the fixed
    /// "not configured" error instead of failing startup.
    pub gemini_api_key: Option<String>,
    pub evaluator_backend: EvaluatorBackend,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            evaluator_backend: EvaluatorBackend::parse(
                &std::env::var("EVALUATOR_BACKEND").unwrap_or_else(|_| "remote".to_string()),
            )?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parse_accepts_aliases() {
        assert_eq!(
            EvaluatorBackend::parse("heuristic").unwrap(),
            EvaluatorBackend::Heuristic
        );
        assert_eq!(
            EvaluatorBackend::parse(" LOCAL ").unwrap(),
            EvaluatorBackend::Heuristic
        );
        assert_eq!(
            EvaluatorBackend::parse("gemini").unwrap(),
            EvaluatorBackend::Remote
        );
    }

    #[test]
    fn test_backend_parse_rejects_unknown() {
        let err = EvaluatorBackend::parse("openai").unwrap_err();
        assert!(err.to_string().contains("openai"));
    }
}
