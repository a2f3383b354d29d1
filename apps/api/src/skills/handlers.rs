//! Axum route handlers for the job analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::skills::extract::extract_skills_from_text;
use crate::skills::matcher::{calculate_job_match, MatchResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct JobMatchRequest {
    #[serde(default)]
    pub job_skills: Vec<String>,
    #[serde(default)]
    pub user_skills: Vec<String>,
}

/// POST /api/v1/jobs/extract-skills
///
/// Dictionary scan of job posting text. Always offline — the pluggable LLM
/// extractor is reserved for README analysis.
pub async fn handle_extract_skills(
    State(_state): State<AppState>,
    Json(request): Json<ExtractSkillsRequest>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    Ok(Json(ExtractSkillsResponse {
        skills: extract_skills_from_text(&request.text),
    }))
}

/// POST /api/v1/jobs/match
///
/// Compares required job skills against user skills. Empty inputs are valid
/// and degrade to a zero match.
pub async fn handle_job_match(
    State(_state): State<AppState>,
    Json(request): Json<JobMatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    Ok(Json(calculate_job_match(
        &request.job_skills,
        &request.user_skills,
    )))
}
