//! Axum route handlers for the resume API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use serde::Serialize;

use crate::errors::AppError;
use crate::resume::keywords::extract_resume_keywords;
use crate::resume::render::compile_pdf;
use crate::resume::{render_resume, ResumeData};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResumeKeywordsResponse {
    pub keywords: Vec<String>,
}

/// POST /api/v1/resume/generate
///
/// Renders the LaTeX resume template with the supplied data and returns the
/// compiled PDF as an attachment.
pub async fn handle_generate_resume(
    State(_state): State<AppState>,
    Json(data): Json<ResumeData>,
) -> Result<impl IntoResponse, AppError> {
    if data.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let tex = render_resume(&data);
    let pdf = compile_pdf(&tex).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=resume.pdf",
            ),
        ],
        Bytes::from(pdf),
    ))
}

/// POST /api/v1/resume/keywords
///
/// Accepts a multipart PDF upload under the `file` field and returns the
/// dictionary skills found in its text.
pub async fn handle_resume_keywords(
    State(_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeKeywordsResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
        if data.is_empty() {
            return Err(AppError::Validation("uploaded file is empty".to_string()));
        }
        let keywords = extract_resume_keywords(data.to_vec()).await?;
        return Ok(Json(ResumeKeywordsResponse { keywords }));
    }

    Err(AppError::Validation(
        "multipart field 'file' is required".to_string(),
    ))
}
