//! Mermaid Gantt rendering
//!
//! Produces a fenced ```` ```mermaid ```` block: an init directive with a
//! left padding wide enough for the section labels, a milestones section,
//! then one section per group.

use std::collections::BTreeMap;

use crate::core::models::{MilestoneEntry, Schedule, Task};

use super::normalizer::sanitize;

/// Label of the milestones section
pub const MILESTONES_SECTION: &str = "Milestones";

/// Smallest left padding, in pixels
pub const LEFT_PADDING_MIN: usize = 150;

/// Largest left padding, in pixels
pub const LEFT_PADDING_MAX: usize = 500;

/// Rough width of one label character, in pixels
pub const PIXELS_PER_CHAR: usize = 7;

/// Partition tasks by group
///
/// Groups iterate in lexicographic order; tasks inside a group are sorted by
/// start date, keeping their original order on ties.
#[must_use]
pub fn group_tasks(tasks: &[Task]) -> BTreeMap<&str, Vec<&Task>> {
    let mut groups: BTreeMap<&str, Vec<&Task>> = BTreeMap::new();
    for task in tasks {
        groups.entry(task.group.as_str()).or_default().push(task);
    }
    for members in groups.values_mut() {
        members.sort_by_key(|task| task.start);
    }
    groups
}

/// Milestones sorted by due date, keeping insertion order on ties
#[must_use]
pub fn sorted_milestones(milestones: &[MilestoneEntry]) -> Vec<&MilestoneEntry> {
    let mut sorted: Vec<&MilestoneEntry> = milestones.iter().collect();
    sorted.sort_by_key(|milestone| milestone.due);
    sorted
}

/// Left padding that keeps the longest section label readable
#[must_use]
pub fn left_padding(tasks: &[Task], has_milestones: bool) -> usize {
    let longest_group = tasks.iter().map(|task| task.group.chars().count()).max().unwrap_or(0);
    let longest = if has_milestones {
        longest_group.max(MILESTONES_SECTION.len())
    } else {
        longest_group
    };
    (longest * PIXELS_PER_CHAR).clamp(LEFT_PADDING_MIN, LEFT_PADDING_MAX)
}

/// Render a schedule as a fenced Mermaid Gantt block
///
/// Milestone identifiers are `m1`, `m2`, ... in rendered order, so they are
/// unique whatever the titles are.
#[must_use]
pub fn render_mermaid(schedule: &Schedule) -> String {
    let has_milestones = !schedule.milestones.is_empty();
    let padding = left_padding(&schedule.tasks, has_milestones);

    let mut lines = vec![
        "```mermaid".to_string(),
        format!("%%{{init: {{'gantt': {{'leftPadding': {padding}}}}}}}%%"),
        "gantt".to_string(),
        format!("  title {}", sanitize(&schedule.title)),
        "  dateFormat YYYY-MM-DD".to_string(),
        String::new(),
    ];

    if has_milestones {
        lines.push(format!("  section {MILESTONES_SECTION}"));
        for (index, milestone) in sorted_milestones(&schedule.milestones).into_iter().enumerate() {
            lines.push(format!(
                "  {} : milestone, m{}, {}, 0d",
                sanitize(&milestone.title),
                index + 1,
                milestone.due.format("%Y-%m-%d")
            ));
        }
        lines.push(String::new());
    }

    for (group, tasks) in group_tasks(&schedule.tasks) {
        lines.push(format!("  section {group}"));
        for task in tasks {
            lines.push(format!(
                "  {} : {}, {}",
                task.name,
                task.start.format("%Y-%m-%d"),
                task.end.format("%Y-%m-%d")
            ));
        }
        lines.push(String::new());
    }

    lines.push("```".to_string());
    lines.join("\n") + "\n"
}
