//! Axum route handlers for the learning API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::learning::resources::{learning_resources, LearningResource};
use crate::learning::{generate_learning_schedule, LearningSchedule};
use crate::state::AppState;

fn default_hours_per_week() -> u32 {
    10
}

#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default = "default_hours_per_week")]
    pub hours_per_week: u32,
}

fn default_max_results() -> u32 {
    5
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ResourceParams {
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct ResourcesResponse {
    pub skill: String,
    pub resources: Vec<LearningResource>,
}

/// POST /api/v1/learning/schedule
///
/// Plans the given skills into weekly buckets. An empty skill list is valid
/// and yields an empty schedule.
pub async fn handle_learning_schedule(
    State(_state): State<AppState>,
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<LearningSchedule>, AppError> {
    if request.hours_per_week == 0 {
        return Err(AppError::Validation(
            "hours_per_week must be positive".to_string(),
        ));
    }

    Ok(Json(generate_learning_schedule(
        &request.skills,
        request.hours_per_week,
    )))
}

/// GET /api/v1/learning/resources/:skill
///
/// Returns YouTube tutorials and fallback links for one skill.
pub async fn handle_learning_resources(
    State(state): State<AppState>,
    Path(skill): Path<String>,
    Query(params): Query<ResourceParams>,
) -> Result<Json<ResourcesResponse>, AppError> {
    let skill = skill.trim().to_lowercase();
    if skill.is_empty() {
        return Err(AppError::Validation("skill cannot be empty".to_string()));
    }

    let resources =
        learning_resources(&state.youtube, &skill, params.max_results, &params.language).await;

    Ok(Json(ResourcesResponse { skill, resources }))
}
