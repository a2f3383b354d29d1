//! Axum route handlers for the GitHub profile API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::github::{extract_repo_skills, GitHubRepo, GitHubUser};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub github_token: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: GitHubUser,
    pub repositories: Vec<GitHubRepo>,
    /// Skills inferred from repository languages, topics, and descriptions.
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeReposRequest {
    pub github_token: String,
    pub selected_repos: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RepoAnalysis {
    pub repo: String,
    pub skills: Vec<String>,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeReposResponse {
    pub results: Vec<RepoAnalysis>,
}

/// POST /api/v1/github/profile
///
/// Fetches the token owner's profile and repositories and infers skills from
/// the repository metadata.
pub async fn handle_fetch_profile(
    State(state): State<AppState>,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    if request.github_token.trim().is_empty() {
        return Err(AppError::Validation(
            "github_token cannot be empty".to_string(),
        ));
    }

    let profile = state.github.authenticated_user(&request.github_token).await?;
    let repositories = state.github.user_repos(&request.github_token).await?;
    let skills = extract_repo_skills(&repositories);

    Ok(Json(ProfileResponse {
        profile,
        repositories,
        skills,
    }))
}

/// POST /api/v1/github/analyze-repos
///
/// Pulls each selected repository's README and runs the configured skill
/// extractor over it. Repositories without a README are reported as such
/// rather than failing the whole request.
pub async fn handle_analyze_repos(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeReposRequest>,
) -> Result<Json<AnalyzeReposResponse>, AppError> {
    if request.github_token.trim().is_empty() {
        return Err(AppError::Validation(
            "github_token cannot be empty".to_string(),
        ));
    }
    if request.selected_repos.is_empty() {
        return Err(AppError::Validation(
            "selected_repos cannot be empty".to_string(),
        ));
    }

    let user = state.github.authenticated_user(&request.github_token).await?;

    let mut results = Vec::with_capacity(request.selected_repos.len());
    for repo_name in &request.selected_repos {
        let readme = state
            .github
            .repo_readme(&request.github_token, &user.login, repo_name)
            .await?;

        let analysis = match readme {
            Some(text) => RepoAnalysis {
                repo: repo_name.clone(),
                skills: state.skill_extractor.extract(&text).await?,
                status: "success".to_string(),
            },
            None => RepoAnalysis {
                repo: repo_name.clone(),
                skills: vec![],
                status: "README.md not found".to_string(),
            },
        };
        results.push(analysis);
    }

    Ok(Json(AnalyzeReposResponse { results }))
}
