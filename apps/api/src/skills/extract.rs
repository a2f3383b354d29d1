//! Skill extraction — pluggable, trait-based extractor that pulls technology
//! keywords out of free text (READMEs, job postings, resume text).
//!
//! Default: `LlmSkillExtractor` (OpenRouter chat completion).
//! Offline: `DictionaryExtractor` (pure-Rust, fast, deterministic).
//!
//! `AppState` holds an `Arc<dyn SkillExtractor>`, swapped at startup via config.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;

use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Common technology keywords recognized by the dictionary scan.
pub const SKILL_DICTIONARY: &[&str] = &[
    "python",
    "javascript",
    "java",
    "c++",
    "c#",
    "ruby",
    "go",
    "rust",
    "swift",
    "kotlin",
    "django",
    "flask",
    "fastapi",
    "react",
    "angular",
    "vue",
    "node",
    "express",
    "spring",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "git",
    "sql",
    "nosql",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "graphql",
    "rest",
    "api",
    "microservices",
    "tensorflow",
    "pytorch",
    "machine learning",
    "ai",
    "data science",
    "big data",
    "devops",
    "ci/cd",
];

fn dictionary_patterns() -> &'static Vec<(&'static str, Regex)> {
    static PATTERNS: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        SKILL_DICTIONARY
            .iter()
            .map(|skill| {
                let pattern = format!(r"\b{}\b", regex::escape(skill));
                // Patterns are built from the fixed dictionary, so compilation
                // cannot fail at runtime.
                (*skill, Regex::new(&pattern).expect("invalid dictionary pattern"))
            })
            .collect()
    })
}

/// Scans free text for whole-word occurrences of dictionary skills.
/// Case-insensitive; returns a sorted, deduplicated list.
pub fn extract_skills_from_text(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let found: BTreeSet<String> = dictionary_patterns()
        .iter()
        .filter(|(_, re)| re.is_match(&lowered))
        .map(|(skill, _)| skill.to_string())
        .collect();
    found.into_iter().collect()
}

/// The skill extractor trait. Implement this to swap backends without
/// touching the endpoint, handler, or caller code.
///
/// Carried in `AppState` as `Arc<dyn SkillExtractor>`.
#[async_trait]
pub trait SkillExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> Result<Vec<String>, AppError>;
}

/// Pure-Rust dictionary extractor. No network, deterministic.
pub struct DictionaryExtractor;

#[async_trait]
impl SkillExtractor for DictionaryExtractor {
    async fn extract(&self, text: &str) -> Result<Vec<String>, AppError> {
        Ok(extract_skills_from_text(text))
    }
}

/// LLM-backed extractor via OpenRouter. Default backend.
pub struct LlmSkillExtractor {
    llm: LlmClient,
}

impl LlmSkillExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl SkillExtractor for LlmSkillExtractor {
    async fn extract(&self, text: &str) -> Result<Vec<String>, AppError> {
        self.llm
            .extract_skills(text)
            .await
            .map_err(|e| AppError::Llm(format!("skill extraction failed: {e}")))
    }
}
