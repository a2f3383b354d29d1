//! Skill normalization and job matching.
//!
//! A skill set is always a lower-cased, deduplicated set; listings derived
//! from one are sorted so JSON output is deterministic.

pub mod extract;
pub mod handlers;
pub mod matcher;

use std::collections::BTreeSet;

/// Normalizes a raw skill list into a lower-cased, trimmed, deduplicated set.
/// Empty entries are dropped.
pub fn normalize_skill_set(skills: &[String]) -> BTreeSet<String> {
    skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_lowercases_and_dedupes() {
        let set = normalize_skill_set(&list(&["Python", "python", "PYTHON", "Rust"]));
        assert_eq!(set.len(), 2);
        assert!(set.contains("python"));
        assert!(set.contains("rust"));
    }

    #[test]
    fn test_normalize_trims_and_drops_empty() {
        let set = normalize_skill_set(&list(&["  react ", "", "   "]));
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec!["react"]);
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize_skill_set(&[]).is_empty());
    }
}
