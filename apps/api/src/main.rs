mod config;
mod db;
mod errors;
mod evaluation;
mod generation;
mod llm_client;
mod models;
mod progress;
mod routes;
mod scenarios;
mod scoring;
mod state;
mod submissions;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, EvaluatorBackend};
use crate::db::create_pool;
use crate::evaluation::heuristic::HeuristicEvaluator;
use crate::evaluation::remote::RemoteEvaluator;
use crate::evaluation::PromptEvaluator;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::scoring::ScoreOptions;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Promptwerk API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone())?;
    if llm.is_configured() {
        info!(
            "LLM client initialized (evaluation: {}, generation: {})",
            llm_client::EVALUATION_MODEL,
            llm_client::GENERATION_MODEL
        );
    } else {
        warn!("GEMINI_API_KEY not set; remote evaluation and generation will be rejected");
    }

    // Pick the evaluator backend
    let evaluator: Arc<dyn PromptEvaluator> = match config.evaluator_backend {
        EvaluatorBackend::Heuristic => Arc::new(HeuristicEvaluator::new(ScoreOptions::default())),
        EvaluatorBackend::Remote => Arc::new(RemoteEvaluator::new(llm.clone())),
    };
    info!("Evaluator backend: {}", evaluator.backend());

    let state = AppState { db, llm, evaluator };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
