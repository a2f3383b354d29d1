use std::sync::Arc;

use crate::config::Config;
use crate::github::GitHubClient;
use crate::llm_client::LlmClient;
use crate::skills::extract::SkillExtractor;
use crate::youtube::YouTubeClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub github: GitHubClient,
    pub llm: LlmClient,
    pub youtube: YouTubeClient,
    pub config: Config,
    /// Pluggable README skill extractor. Default: LlmSkillExtractor.
    /// Swap via USE_LLM_EXTRACTION env.
    pub skill_extractor: Arc<dyn SkillExtractor>,
}
