//! Learning schedule planner — buckets skills into weekly chunks against an
//! hours-per-week budget.

pub mod handlers;
pub mod resources;

use serde::{Deserialize, Serialize};

/// Estimated hours to learn one skill.
const HOURS_PER_SKILL: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub week: u32,
    pub skills: Vec<String>,
    pub hours_per_week: u32,
    /// First three skills of the week joined by ", ", with a "..." suffix
    /// when the week holds more than three.
    pub focus_area: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningSchedule {
    pub schedule: Vec<WeekPlan>,
    pub total_weeks: usize,
    pub total_skills: usize,
}

/// Plans the given skills into weekly buckets.
///
/// `weeks_needed = max(1, round(total_hours / hours_per_week))` and
/// `skills_per_week = max(1, |skills| / weeks_needed)` (integer division).
/// Skills are sliced into chunks of that size; leftover skills past the last
/// planned week are distributed round-robin into the built weeks, so every
/// input skill lands in exactly one week. The schedule may hold fewer than
/// `weeks_needed` weeks when the skills run out first.
pub fn generate_learning_schedule(skills: &[String], hours_per_week: u32) -> LearningSchedule {
    let total_skills = skills.len();
    if total_skills == 0 {
        return LearningSchedule {
            schedule: vec![],
            total_weeks: 0,
            total_skills: 0,
        };
    }

    let total_hours = total_skills * HOURS_PER_SKILL;
    let weeks_needed = ((total_hours as f64 / hours_per_week as f64).round() as usize).max(1);
    let skills_per_week = (total_skills / weeks_needed).max(1);

    let mut schedule = Vec::new();
    for week in 1..=weeks_needed {
        let start = (week - 1) * skills_per_week;
        if start >= total_skills {
            break;
        }
        let end = (week * skills_per_week).min(total_skills);
        let week_skills = skills[start..end].to_vec();
        let focus_area = focus_area(&week_skills);
        schedule.push(WeekPlan {
            week: week as u32,
            skills: week_skills,
            hours_per_week,
            focus_area,
        });
    }

    // Skills past the last planned chunk go round-robin into built weeks.
    let leftover_start = weeks_needed * skills_per_week;
    if leftover_start < total_skills {
        for (i, skill) in skills[leftover_start..].iter().enumerate() {
            let idx = i % schedule.len();
            schedule[idx].skills.push(skill.clone());
        }
    }

    LearningSchedule {
        total_weeks: schedule.len(),
        total_skills,
        schedule,
    }
}

fn focus_area(week_skills: &[String]) -> String {
    let mut focus = week_skills
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if week_skills.len() > 3 {
        focus.push_str("...");
    }
    focus
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_skills_yields_empty_schedule() {
        let plan = generate_learning_schedule(&[], 10);
        assert!(plan.schedule.is_empty());
        assert_eq!(plan.total_weeks, 0);
        assert_eq!(plan.total_skills, 0);
    }

    #[test]
    fn test_four_skills_at_eight_hours_fills_four_weeks() {
        // total_hours = 32, weeks_needed = round(32/8) = 4, one skill per week
        let skills = list(&["a", "b", "c", "d"]);
        let plan = generate_learning_schedule(&skills, 8);
        assert_eq!(plan.total_weeks, 4);
        assert_eq!(plan.total_skills, 4);
        for (i, week) in plan.schedule.iter().enumerate() {
            assert_eq!(week.week, (i + 1) as u32);
            assert_eq!(week.hours_per_week, 8);
        }
        // every input skill appears in exactly one week
        for skill in &skills {
            let appearances: usize = plan
                .schedule
                .iter()
                .filter(|w| w.skills.contains(skill))
                .count();
            assert_eq!(appearances, 1, "skill {skill} appears {appearances} times");
        }
    }

    #[test]
    fn test_single_week_holds_all_skills() {
        // 3 skills * 8h = 24h at 24h/week → 1 week of all three
        let plan = generate_learning_schedule(&list(&["a", "b", "c"]), 24);
        assert_eq!(plan.total_weeks, 1);
        assert_eq!(plan.schedule[0].skills, list(&["a", "b", "c"]));
    }

    #[test]
    fn test_schedule_shorter_than_weeks_needed_when_skills_run_out() {
        // 2 skills * 8h = 16h at 4h/week → weeks_needed = 4, but only 2 weeks
        // can be filled at one skill per week
        let plan = generate_learning_schedule(&list(&["a", "b"]), 4);
        assert_eq!(plan.total_weeks, 2);
        assert_eq!(plan.schedule[0].skills, list(&["a"]));
        assert_eq!(plan.schedule[1].skills, list(&["b"]));
    }

    #[test]
    fn test_leftover_skills_distributed_round_robin() {
        // 5 skills * 8h = 40h at 10h/week → weeks_needed = 4, one per week,
        // fifth skill wraps into week 1
        let plan = generate_learning_schedule(&list(&["a", "b", "c", "d", "e"]), 10);
        assert_eq!(plan.total_weeks, 4);
        assert_eq!(plan.schedule[0].skills, list(&["a", "e"]));
        assert_eq!(plan.schedule[1].skills, list(&["b"]));
        let placed: usize = plan.schedule.iter().map(|w| w.skills.len()).sum();
        assert_eq!(placed, 5);
    }

    #[test]
    fn test_focus_area_short_week() {
        let plan = generate_learning_schedule(&list(&["a", "b"]), 16);
        assert_eq!(plan.schedule[0].focus_area, "a, b");
    }

    #[test]
    fn test_focus_area_truncates_after_three() {
        // 8 skills * 8h = 64h at 32h/week → weeks_needed = 2, four per week
        let plan = generate_learning_schedule(&list(&["a", "b", "c", "d", "e", "f", "g", "h"]), 32);
        assert_eq!(plan.total_weeks, 2);
        assert_eq!(plan.schedule[0].focus_area, "a, b, c...");
    }

    #[test]
    fn test_focus_area_unchanged_by_leftover_distribution() {
        let plan = generate_learning_schedule(&list(&["a", "b", "c", "d", "e"]), 10);
        // week 1 picked up "e" but keeps its original focus
        assert_eq!(plan.schedule[0].focus_area, "a");
    }

    #[test]
    fn test_single_skill() {
        let plan = generate_learning_schedule(&list(&["rust"]), 10);
        assert_eq!(plan.total_weeks, 1);
        assert_eq!(plan.schedule[0].skills, list(&["rust"]));
        assert_eq!(plan.schedule[0].focus_area, "rust");
    }
}
