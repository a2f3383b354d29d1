use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Clients receive their settings through constructors; nothing reads the
/// environment after startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: String,
    /// Optional — learning resources omit videos when unset.
    pub youtube_api_key: Option<String>,
    pub github_api_base: String,
    pub port: u16,
    pub rust_log: String,
    /// Selects the README skill extractor backend at startup:
    /// true → LlmSkillExtractor, false → DictionaryExtractor.
    pub use_llm_extraction: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openrouter_api_key: require_env("OPENROUTER_API_KEY")?,
            youtube_api_key: std::env::var("YOUTUBE_API_KEY").ok(),
            github_api_base: std::env::var("GITHUB_API_BASE")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            use_llm_extraction: std::env::var("USE_LLM_EXTRACTION")
                .map(|v| !matches!(v.as_str(), "0" | "false" | "no"))
                .unwrap_or(true),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
