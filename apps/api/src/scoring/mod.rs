//! Job Readiness Score — weighted combination of four sub-scores.
//!
//! Each sub-score is clamped to [0, 1] before weighting; the weighted total
//! and every breakdown entry are reported ×100 rounded to one decimal.

pub mod handlers;

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::skills::normalize_skill_set;

/// Half-life of the activity recency decay, in days.
const ACTIVITY_HALF_LIFE_DAYS: f64 = 30.0;

/// Project count at which the project sub-score saturates.
const PROJECT_COUNT_CAP: f64 = 10.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skill_match: f64,
    pub activity_recency: f64,
    pub project_count: f64,
    pub resume_keywords: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_match: 0.4,
            activity_recency: 0.2,
            project_count: 0.2,
            resume_keywords: 0.2,
        }
    }
}

/// Per-component scores, each ×100 rounded to one decimal.
/// `resume_keywords` is omitted from output entirely when the input did not
/// supply resume keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessBreakdown {
    pub skill_match: f64,
    pub activity_recency: f64,
    pub project_count: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_keywords: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessScore {
    /// Weighted total in [0, 100], rounded to one decimal.
    pub total_score: f64,
    pub breakdown: ReadinessBreakdown,
}

/// Computes the Job Readiness Score.
///
/// `now` is passed in rather than read from the clock so scoring is
/// deterministic under test; handlers pass `Utc::now()`.
pub fn calculate_readiness(
    user_skills: &[String],
    job_requirements: &BTreeMap<String, Vec<String>>,
    last_activity: Option<DateTime<Utc>>,
    project_count: u32,
    resume_keywords: Option<&[String]>,
    now: DateTime<Utc>,
    weights: &ScoringWeights,
) -> ReadinessScore {
    let required = flatten_requirements(job_requirements);

    let skill_match = skill_match_score(user_skills, &required);
    let activity = last_activity
        .map(|ts| activity_recency_score(ts, now))
        .unwrap_or(0.0);
    let projects = project_count_score(project_count);
    let resume = resume_keywords
        .map(|kw| resume_keyword_score(kw, &required))
        .unwrap_or(0.0);

    let total = skill_match * weights.skill_match
        + activity * weights.activity_recency
        + projects * weights.project_count
        + resume * weights.resume_keywords;

    ReadinessScore {
        total_score: to_percent(total),
        breakdown: ReadinessBreakdown {
            skill_match: to_percent(skill_match),
            activity_recency: to_percent(activity),
            project_count: to_percent(projects),
            resume_keywords: resume_keywords.map(|_| to_percent(resume)),
        },
    }
}

/// Flattens categorized requirements into one normalized skill set.
fn flatten_requirements(job_requirements: &BTreeMap<String, Vec<String>>) -> BTreeSet<String> {
    job_requirements
        .values()
        .flat_map(|skills| normalize_skill_set(skills))
        .collect()
}

/// |required ∩ user| / |required|; 0 if there are no requirements.
fn skill_match_score(user_skills: &[String], required: &BTreeSet<String>) -> f64 {
    if required.is_empty() {
        return 0.0;
    }
    let possessed = normalize_skill_set(user_skills);
    let matched = required.intersection(&possessed).count();
    (matched as f64 / required.len() as f64).clamp(0.0, 1.0)
}

/// Exponential decay with a 30-day half-life: 1.0 for activity today,
/// 0.5 after 30 days, 0.25 after 60 days. Never negative.
fn activity_recency_score(last_activity: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let days_since = (now - last_activity).num_days() as f64;
    (0.5_f64)
        .powf(days_since / ACTIVITY_HALF_LIFE_DAYS)
        .clamp(0.0, 1.0)
}

/// Linear ramp capped at 10 projects.
fn project_count_score(project_count: u32) -> f64 {
    (project_count as f64 / PROJECT_COUNT_CAP).clamp(0.0, 1.0)
}

/// |resume_keywords ∩ required| / |required|; 0 if either side is empty.
fn resume_keyword_score(resume_keywords: &[String], required: &BTreeSet<String>) -> f64 {
    if required.is_empty() {
        return 0.0;
    }
    let keywords = normalize_skill_set(resume_keywords);
    let matched = keywords.iter().filter(|k| required.contains(*k)).count();
    (matched as f64 / required.len() as f64).clamp(0.0, 1.0)
}

/// Scales a [0, 1] score to [0, 100], rounded to one decimal.
fn to_percent(score: f64) -> f64 {
    (score * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn requirements(categories: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
        categories
            .iter()
            .map(|(name, skills)| (name.to_string(), list(skills)))
            .collect()
    }

    fn now() -> DateTime<Utc> {
        "2026-08-01T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_half_skill_match_only_scores_20() {
        // 50% skill match, no activity, zero projects, no resume keywords
        // → total = 0.5 * 0.4 = 0.2 → 20.0
        let reqs = requirements(&[("languages", &["python", "go"])]);
        let score = calculate_readiness(
            &list(&["python"]),
            &reqs,
            None,
            0,
            None,
            now(),
            &ScoringWeights::default(),
        );
        assert_eq!(score.total_score, 20.0);
        assert_eq!(score.breakdown.skill_match, 50.0);
        assert_eq!(score.breakdown.activity_recency, 0.0);
        assert_eq!(score.breakdown.project_count, 0.0);
        assert!(score.breakdown.resume_keywords.is_none());
    }

    #[test]
    fn test_activity_today_is_exactly_one() {
        let ts = now();
        assert_eq!(activity_recency_score(ts, ts), 1.0);
    }

    #[test]
    fn test_activity_at_half_life_is_exactly_half() {
        let ts = now() - Duration::days(30);
        assert_eq!(activity_recency_score(ts, now()), 0.5);
    }

    #[test]
    fn test_activity_at_two_half_lives() {
        let ts = now() - Duration::days(60);
        assert!((activity_recency_score(ts, now()) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_future_activity_clamps_to_one() {
        let ts = now() + Duration::days(10);
        assert_eq!(activity_recency_score(ts, now()), 1.0);
    }

    #[test]
    fn test_project_count_caps_at_ten() {
        assert_eq!(project_count_score(0), 0.0);
        assert_eq!(project_count_score(5), 0.5);
        assert_eq!(project_count_score(10), 1.0);
        assert_eq!(project_count_score(25), 1.0);
    }

    #[test]
    fn test_no_requirements_scores_zero_match() {
        let score = calculate_readiness(
            &list(&["python"]),
            &BTreeMap::new(),
            None,
            0,
            None,
            now(),
            &ScoringWeights::default(),
        );
        assert_eq!(score.breakdown.skill_match, 0.0);
        assert_eq!(score.total_score, 0.0);
    }

    #[test]
    fn test_requirements_flattened_across_categories() {
        let reqs = requirements(&[
            ("languages", &["python"]),
            ("frameworks", &["react"]),
            ("tools", &["docker", "git"]),
        ]);
        let score = calculate_readiness(
            &list(&["python", "react", "docker", "git"]),
            &reqs,
            None,
            0,
            None,
            now(),
            &ScoringWeights::default(),
        );
        assert_eq!(score.breakdown.skill_match, 100.0);
        assert_eq!(score.total_score, 40.0);
    }

    #[test]
    fn test_duplicate_skill_across_categories_counts_once() {
        let reqs = requirements(&[("languages", &["python"]), ("tools", &["Python", "git"])]);
        // required set = {python, git}; user has python → 50%
        let score = calculate_readiness(
            &list(&["python"]),
            &reqs,
            None,
            0,
            None,
            now(),
            &ScoringWeights::default(),
        );
        assert_eq!(score.breakdown.skill_match, 50.0);
    }

    #[test]
    fn test_resume_keywords_supplied() {
        let reqs = requirements(&[("languages", &["python", "go"])]);
        let score = calculate_readiness(
            &list(&[]),
            &reqs,
            None,
            0,
            Some(&list(&["Python", "excel"])),
            now(),
            &ScoringWeights::default(),
        );
        // 1 of 2 required found in resume → 0.5 → 50.0; total = 0.5 * 0.2 = 10.0
        assert_eq!(score.breakdown.resume_keywords, Some(50.0));
        assert_eq!(score.total_score, 10.0);
    }

    #[test]
    fn test_empty_resume_keywords_reported_as_zero_not_omitted() {
        let reqs = requirements(&[("languages", &["python"])]);
        let score = calculate_readiness(
            &list(&[]),
            &reqs,
            None,
            0,
            Some(&[]),
            now(),
            &ScoringWeights::default(),
        );
        assert_eq!(score.breakdown.resume_keywords, Some(0.0));
    }

    #[test]
    fn test_unsupplied_resume_keywords_omitted_from_json() {
        let reqs = requirements(&[("languages", &["python"])]);
        let score = calculate_readiness(
            &list(&["python"]),
            &reqs,
            None,
            0,
            None,
            now(),
            &ScoringWeights::default(),
        );
        let json = serde_json::to_value(&score).unwrap();
        assert!(json["breakdown"].get("resume_keywords").is_none());
    }

    #[test]
    fn test_all_components_full_scores_100() {
        let reqs = requirements(&[("languages", &["python"])]);
        let score = calculate_readiness(
            &list(&["python"]),
            &reqs,
            Some(now()),
            10,
            Some(&list(&["python"])),
            now(),
            &ScoringWeights::default(),
        );
        assert_eq!(score.total_score, 100.0);
    }

    #[test]
    fn test_total_rounded_to_one_decimal() {
        // skill match 1/3 → 0.3333…; total = 0.3333… * 0.4 = 0.13333… → 13.3
        let reqs = requirements(&[("languages", &["a", "b", "c"])]);
        let score = calculate_readiness(
            &list(&["a"]),
            &reqs,
            None,
            0,
            None,
            now(),
            &ScoringWeights::default(),
        );
        assert_eq!(score.total_score, 13.3);
        assert_eq!(score.breakdown.skill_match, 33.3);
    }

    #[test]
    fn test_weights_sum_to_one() {
        let w = ScoringWeights::default();
        let sum = w.skill_match + w.activity_recency + w.project_count + w.resume_keywords;
        assert!((sum - 1.0).abs() < f64::EPSILON);
    }
}
