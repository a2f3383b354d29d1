//! Job matcher — set comparison between required and possessed skills.

use serde::{Deserialize, Serialize};

use crate::skills::normalize_skill_set;

/// Result of matching a user's skills against a job's required skills.
///
/// `matching` and `missing` partition the required set: their union is the
/// full requirement set and their intersection is empty. Both are sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matching: Vec<String>,
    pub missing: Vec<String>,
    pub total_required: usize,
    /// floor(100 * |matching| / |required|), always in [0, 100].
    pub match_percentage: u32,
}

impl MatchResult {
    fn zero() -> Self {
        MatchResult {
            matching: vec![],
            missing: vec![],
            total_required: 0,
            match_percentage: 0,
        }
    }
}

/// Compares required job skills against user skills.
///
/// Both lists are normalized to lower-cased sets first. An empty requirement
/// set yields a zero match rather than dividing by zero. Pure function.
pub fn calculate_job_match(job_skills: &[String], user_skills: &[String]) -> MatchResult {
    let required = normalize_skill_set(job_skills);
    if required.is_empty() {
        return MatchResult::zero();
    }

    let possessed = normalize_skill_set(user_skills);

    let matching: Vec<String> = required.intersection(&possessed).cloned().collect();
    let missing: Vec<String> = required.difference(&possessed).cloned().collect();

    let match_percentage = (matching.len() * 100 / required.len()) as u32;

    MatchResult {
        matching,
        missing,
        total_required: required.len(),
        match_percentage,
    }
}
