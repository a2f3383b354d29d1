pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::github::handlers as github_handlers;
use crate::learning::handlers as learning_handlers;
use crate::resume::handlers as resume_handlers;
use crate::scoring::handlers as scoring_handlers;
use crate::skills::handlers as skills_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // GitHub profile API
        .route(
            "/api/v1/github/profile",
            post(github_handlers::handle_fetch_profile),
        )
        .route(
            "/api/v1/github/analyze-repos",
            post(github_handlers::handle_analyze_repos),
        )
        // Job analysis API
        .route(
            "/api/v1/jobs/extract-skills",
            post(skills_handlers::handle_extract_skills),
        )
        .route("/api/v1/jobs/match", post(skills_handlers::handle_job_match))
        // Readiness API
        .route(
            "/api/v1/readiness/calculate",
            post(scoring_handlers::handle_calculate_readiness),
        )
        // Learning API
        .route(
            "/api/v1/learning/schedule",
            post(learning_handlers::handle_learning_schedule),
        )
        .route(
            "/api/v1/learning/resources/:skill",
            get(learning_handlers::handle_learning_resources),
        )
        // Resume API
        .route(
            "/api/v1/resume/generate",
            post(resume_handlers::handle_generate_resume),
        )
        .route(
            "/api/v1/resume/keywords",
            post(resume_handlers::handle_resume_keywords),
        )
        .with_state(state)
}
