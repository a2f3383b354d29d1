//! Axum route handlers for the readiness API.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::errors::AppError;
use crate::scoring::{calculate_readiness, ReadinessScore, ScoringWeights};
use crate::state::AppState;

/// Required skills grouped by category, flattened before matching.
#[derive(Debug, Default, Deserialize)]
pub struct JobRequirementCategories {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub databases: Vec<String>,
    #[serde(default)]
    pub other_skills: Vec<String>,
}

impl JobRequirementCategories {
    fn into_map(self) -> BTreeMap<String, Vec<String>> {
        BTreeMap::from([
            ("languages".to_string(), self.languages),
            ("frameworks".to_string(), self.frameworks),
            ("tools".to_string(), self.tools),
            ("databases".to_string(), self.databases),
            ("other_skills".to_string(), self.other_skills),
        ])
    }
}

#[derive(Debug, Deserialize)]
pub struct ReadinessRequest {
    #[serde(default)]
    pub user_skills: Vec<String>,
    #[serde(default)]
    pub job_requirements: JobRequirementCategories,
    pub last_activity: Option<DateTime<Utc>>,
    #[serde(default)]
    pub project_count: u32,
    pub resume_keywords: Option<Vec<String>>,
}

/// POST /api/v1/readiness/calculate
///
/// Computes the Job Readiness Score for the supplied profile against the
/// categorized job requirements.
pub async fn handle_calculate_readiness(
    State(_state): State<AppState>,
    Json(request): Json<ReadinessRequest>,
) -> Result<Json<ReadinessScore>, AppError> {
    let job_requirements = request.job_requirements.into_map();

    let score = calculate_readiness(
        &request.user_skills,
        &job_requirements,
        request.last_activity,
        request.project_count,
        request.resume_keywords.as_deref(),
        Utc::now(),
        &ScoringWeights::default(),
    );

    Ok(Json(score))
}
