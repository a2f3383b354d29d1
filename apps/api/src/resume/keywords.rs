//! Resume keyword extraction — PDF text extraction plus the dictionary scan.
//!
//! Feeds the readiness scorer's `resume_keywords` input.

use anyhow::anyhow;

use crate::errors::AppError;
use crate::skills::extract::extract_skills_from_text;

/// Extracts dictionary skills from an uploaded resume PDF.
/// Text extraction is CPU-bound, so it runs on a blocking task.
pub async fn extract_resume_keywords(pdf_bytes: Vec<u8>) -> Result<Vec<String>, AppError> {
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&pdf_bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow!("PDF extraction task failed: {e}")))?
        .map_err(|e| AppError::Validation(format!("could not read PDF: {e}")))?;

    Ok(extract_skills_from_text(&text))
}
