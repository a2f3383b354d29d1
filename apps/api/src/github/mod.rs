//! GitHub client — the single point of entry for all GitHub REST calls.
//!
//! Tokens are user-supplied per request, never held in the client. The base
//! URL is injected at construction so tests can point at a stub server.

pub mod handlers;

use std::collections::BTreeSet;

use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::skills::extract::SKILL_DICTIONARY;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_USER_AGENT: &str = concat!("devprofile-api/", env!("CARGO_PKG_VERSION"));
const REPOS_PER_PAGE: usize = 100;
/// The repo listing API stops returning results past this point.
const MAX_REPOS: usize = 1000;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("GitHub token was rejected")]
    InvalidToken,

    #[error("README decode error: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub public_repos: Option<u32>,
    pub followers: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub fork: bool,
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReadmeResponse {
    content: String,
}

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    /// GET /user — resolves the token to its account.
    pub async fn authenticated_user(&self, token: &str) -> Result<GitHubUser, GitHubError> {
        let response = self
            .get(&format!("{}/user", self.base_url), token)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// GET /user/repos — all repositories of the authenticated user, newest
    /// activity first. Paginates until a short page or the API's 1000-repo cap.
    pub async fn user_repos(&self, token: &str) -> Result<Vec<GitHubRepo>, GitHubError> {
        let mut repos: Vec<GitHubRepo> = Vec::new();
        let mut page = 1;

        loop {
            let response = self
                .get(&format!("{}/user/repos", self.base_url), token)
                .query(&[
                    ("per_page", REPOS_PER_PAGE.to_string()),
                    ("page", page.to_string()),
                    ("sort", "updated".to_string()),
                    ("direction", "desc".to_string()),
                ])
                .send()
                .await?;
            let response = check_status(response).await?;

            let page_repos: Vec<GitHubRepo> = response.json().await?;
            let page_len = page_repos.len();
            repos.extend(page_repos);
            debug!("Fetched {page_len} repos (page {page}, total {})", repos.len());

            if page_len < REPOS_PER_PAGE || repos.len() >= MAX_REPOS {
                break;
            }
            page += 1;
        }

        Ok(repos)
    }

    /// GET /repos/{owner}/{repo}/readme — decoded README text, or `None`
    /// when the repository has no README.
    pub async fn repo_readme(
        &self,
        token: &str,
        owner: &str,
        repo: &str,
    ) -> Result<Option<String>, GitHubError> {
        let response = self
            .get(
                &format!("{}/repos/{owner}/{repo}/readme", self.base_url),
                token,
            )
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = check_status(response).await?;

        let readme: ReadmeResponse = response.json().await?;
        decode_readme_content(&readme.content).map(Some)
    }

    fn get(&self, url: &str, token: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header(AUTHORIZATION, format!("token {token}"))
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, GITHUB_USER_AGENT)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GitHubError> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(GitHubError::InvalidToken);
    }
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(GitHubError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response)
}

/// Decodes the `content` field of the README API, which is base64 with
/// embedded newlines.
fn decode_readme_content(content: &str) -> Result<String, GitHubError> {
    let cleaned: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(cleaned)
        .map_err(|e| GitHubError::Decode(format!("invalid base64: {e}")))?;
    String::from_utf8(bytes).map_err(|e| GitHubError::Decode(format!("invalid UTF-8: {e}")))
}

/// Collects dictionary skills from repository metadata: the primary language
/// and topics by exact (lower-cased) match, descriptions by substring.
pub fn extract_repo_skills(repos: &[GitHubRepo]) -> Vec<String> {
    let mut skills = BTreeSet::new();

    for repo in repos {
        if let Some(language) = &repo.language {
            let language = language.to_lowercase();
            if SKILL_DICTIONARY.contains(&language.as_str()) {
                skills.insert(language);
            }
        }

        for topic in &repo.topics {
            let topic = topic.to_lowercase();
            if SKILL_DICTIONARY.contains(&topic.as_str()) {
                skills.insert(topic);
            }
        }

        if let Some(description) = &repo.description {
            let description = description.to_lowercase();
            for skill in SKILL_DICTIONARY {
                if description.contains(skill) {
                    skills.insert(skill.to_string());
                }
            }
        }
    }

    skills.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(
        name: &str,
        language: Option<&str>,
        topics: &[&str],
        description: Option<&str>,
    ) -> GitHubRepo {
        GitHubRepo {
            name: name.to_string(),
            full_name: format!("octocat/{name}"),
            html_url: format!("https://github.com/octocat/{name}"),
            description: description.map(|s| s.to_string()),
            language: language.map(|s| s.to_string()),
            topics: topics.iter().map(|s| s.to_string()).collect(),
            stargazers_count: 0,
            fork: false,
            updated_at: None,
        }
    }

    #[test]
    fn test_decode_readme_content_with_newlines() {
        // "hello world" encoded the way the GitHub API returns it
        let encoded = "aGVsbG8g\nd29ybGQ=\n";
        assert_eq!(decode_readme_content(encoded).unwrap(), "hello world");
    }

    #[test]
    fn test_decode_readme_content_rejects_garbage() {
        assert!(matches!(
            decode_readme_content("!!not-base64!!"),
            Err(GitHubError::Decode(_))
        ));
    }

    #[test]
    fn test_repo_skills_from_language() {
        let repos = vec![repo("api", Some("Rust"), &[], None)];
        assert_eq!(extract_repo_skills(&repos), vec!["rust"]);
    }

    #[test]
    fn test_repo_skills_from_topics_and_description() {
        let repos = vec![repo(
            "infra",
            None,
            &["docker", "homelab"],
            Some("Kubernetes manifests for the cluster"),
        )];
        assert_eq!(extract_repo_skills(&repos), vec!["docker", "kubernetes"]);
    }

    #[test]
    fn test_repo_skills_ignore_unknown_language() {
        let repos = vec![repo("weird", Some("Brainfuck"), &[], None)];
        assert!(extract_repo_skills(&repos).is_empty());
    }

    #[test]
    fn test_repo_skills_deduplicated_across_repos() {
        let repos = vec![
            repo("a", Some("Python"), &[], None),
            repo("b", Some("Python"), &["django"], None),
        ];
        assert_eq!(extract_repo_skills(&repos), vec!["django", "python"]);
    }

    #[test]
    fn test_repo_deserializes_with_missing_optional_fields() {
        let json = r#"{
            "name": "demo",
            "full_name": "octocat/demo",
            "html_url": "https://github.com/octocat/demo",
            "description": null,
            "language": "Go"
        }"#;
        let repo: GitHubRepo = serde_json::from_str(json).unwrap();
        assert_eq!(repo.language.as_deref(), Some("Go"));
        assert!(repo.topics.is_empty());
        assert_eq!(repo.stargazers_count, 0);
        assert!(!repo.fork);
    }
}
