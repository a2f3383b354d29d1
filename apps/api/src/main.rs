mod config;
mod errors;
mod github;
mod learning;
mod llm_client;
mod resume;
mod routes;
mod scoring;
mod skills;
mod state;
mod youtube;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::github::GitHubClient;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::skills::extract::{DictionaryExtractor, LlmSkillExtractor, SkillExtractor};
use crate::state::AppState;
use crate::youtube::YouTubeClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting DevProfile API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize GitHub client
    let github = GitHubClient::new(config.github_api_base.clone());
    info!("GitHub client initialized ({})", config.github_api_base);

    // Initialize LLM client
    let llm = LlmClient::new(config.openrouter_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize YouTube client
    let youtube = YouTubeClient::new(config.youtube_api_key.clone());
    if config.youtube_api_key.is_none() {
        warn!("YouTube API key not configured; learning resources will omit videos");
    }

    // Initialize README skill extractor (LlmSkillExtractor by default — swap via USE_LLM_EXTRACTION)
    let skill_extractor: Arc<dyn SkillExtractor> = if config.use_llm_extraction {
        Arc::new(LlmSkillExtractor::new(llm.clone()))
    } else {
        Arc::new(DictionaryExtractor)
    };

    // Build app state
    let state = AppState {
        github,
        llm,
        youtube,
        config: config.clone(),
        skill_extractor,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
