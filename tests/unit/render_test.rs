//! Tests for schedule building and Mermaid rendering

use gantt_export::Error;
use gantt_export::core::models::{MilestoneEntry, MilestoneRef, Schedule, Task};
use gantt_export::core::services::{
    LEFT_PADDING_MAX, LEFT_PADDING_MIN, build_schedule, left_padding, render_mermaid,
};
use test_case::test_case;

use crate::common::{date, draft, issue, milestone, options, project, select, text, ymd};

fn task(name: &str, group: &str) -> Task {
    Task {
        name: name.to_string(),
        group: group.to_string(),
        start: ymd(2024, 1, 1),
        end: ymd(2024, 1, 4),
    }
}

fn milestone_lines(diagram: &str) -> Vec<&str> {
    diagram.lines().filter(|line| line.contains(": milestone,")).collect()
}

// =============================================================================
// BUILD + RENDER
// =============================================================================

#[test]
fn test_project_to_diagram() {
    let project = project(vec![
        issue(
            Some("2024-01-12T09:30:00Z"),
            Some(milestone("Alpha", "2024-01-31T00:00:00Z")),
            vec![
                text("Title", "Login:OAuth"),
                select("Subject", "Backend"),
                date("Start date", "2024-01-02"),
            ],
        ),
        draft(vec![text("Title", "Landing page"), date("Target date", "2024-01-20")]),
        draft(vec![text("Title", "Someday")]),
    ]);

    let schedule = build_schedule(&project, &[], &options()).unwrap();
    let expected = "\
```mermaid
%%{init: {'gantt': {'leftPadding': 150}}}%%
gantt
  title Roadmap
  dateFormat YYYY-MM-DD

  section Milestones
  Alpha : milestone, m1, 2024-01-31, 0d

  section Backend
  Login OAuth : 2024-01-02, 2024-01-12

  section Other
  Landing page : 2024-01-20, 2024-01-23

```
";
    assert_eq!(render_mermaid(&schedule), expected);
}

#[test]
fn test_no_tasks_and_no_milestones_is_an_error() {
    let project = project(vec![draft(vec![text("Title", "Someday")]), draft(vec![])]);
    let err = build_schedule(&project, &[], &options()).unwrap_err();
    assert!(matches!(err, Error::NoTasks));
    assert_eq!(err.to_string(), "No tasks found");
}

#[test]
fn test_milestones_only_renders() {
    let project = project(vec![]);
    let schedule =
        build_schedule(&project, &[milestone("v1", "2024-06-01T00:00:00Z")], &options()).unwrap();
    let diagram = render_mermaid(&schedule);

    assert!(schedule.tasks.is_empty());
    assert_eq!(milestone_lines(&diagram), ["  v1 : milestone, m1, 2024-06-01, 0d"]);
}

#[test]
fn test_repository_milestone_wins_over_item_milestone() {
    let project = project(vec![issue(
        None,
        Some(milestone("v1", "2024-09-09T00:00:00Z")),
        vec![text("Title", "Task"), date("Start date", "2024-01-01")],
    )]);
    let repo = [milestone("v1", "2024-03-01T00:00:00Z")];
    let schedule = build_schedule(&project, &repo, &options()).unwrap();

    assert_eq!(schedule.milestones, vec![MilestoneEntry::new("v1", ymd(2024, 3, 1))]);
}

#[test]
fn test_untitled_item_contributes_no_milestone() {
    let project = project(vec![
        issue(None, Some(milestone("Hidden", "2024-02-01T00:00:00Z")), vec![]),
        draft(vec![text("Title", "Visible"), date("Start date", "2024-01-01")]),
    ]);
    let schedule = build_schedule(&project, &[], &options()).unwrap();
    assert!(schedule.milestones.is_empty());
}

#[test]
fn test_milestones_without_due_date_are_dropped() {
    let repo = [
        MilestoneRef {
            title: Some("Undated".to_string()),
            due_on: None,
        },
        milestone("Dated", "2024-05-05T00:00:00Z"),
    ];
    let schedule = build_schedule(&project(vec![]), &repo, &options()).unwrap();
    assert_eq!(schedule.milestones, vec![MilestoneEntry::new("Dated", ymd(2024, 5, 5))]);
}

// =============================================================================
// ORDERING
// =============================================================================

#[test]
fn test_same_date_milestones_keep_insertion_order() {
    let schedule = Schedule {
        title: "P".to_string(),
        tasks: vec![],
        milestones: vec![
            MilestoneEntry::new("Later", ymd(2024, 5, 1)),
            MilestoneEntry::new("First", ymd(2024, 3, 1)),
            MilestoneEntry::new("Second", ymd(2024, 3, 1)),
        ],
    };
    assert_eq!(
        milestone_lines(&render_mermaid(&schedule)),
        [
            "  First : milestone, m1, 2024-03-01, 0d",
            "  Second : milestone, m2, 2024-03-01, 0d",
            "  Later : milestone, m3, 2024-05-01, 0d",
        ]
    );
}

#[test]
fn test_duplicate_titles_get_unique_ids() {
    let schedule = Schedule {
        title: "P".to_string(),
        tasks: vec![],
        milestones: vec![
            MilestoneEntry::new("Release:1", ymd(2024, 3, 1)),
            MilestoneEntry::new("Release 1", ymd(2024, 4, 1)),
        ],
    };
    let diagram = render_mermaid(&schedule);
    assert!(diagram.contains("  Release 1 : milestone, m1, 2024-03-01, 0d\n"));
    assert!(diagram.contains("  Release 1 : milestone, m2, 2024-04-01, 0d\n"));
}

#[test]
fn test_sections_sorted_lexicographically() {
    let schedule = Schedule {
        title: "P".to_string(),
        tasks: vec![task("a", "beta"), task("b", "Zeta"), task("c", "Alpha")],
        milestones: vec![],
    };
    let sections: Vec<String> = render_mermaid(&schedule)
        .lines()
        .filter_map(|line| line.strip_prefix("  section ").map(str::to_string))
        .collect();
    assert_eq!(sections, ["Alpha", "Zeta", "beta"]);
}

#[test]
fn test_no_milestones_section_without_milestones() {
    let schedule = Schedule {
        title: "P".to_string(),
        tasks: vec![task("a", "G")],
        milestones: vec![],
    };
    assert!(!render_mermaid(&schedule).contains("section Milestones"));
}

// =============================================================================
// LEFT PADDING
// =============================================================================

#[test_case("", false, LEFT_PADDING_MIN ; "short group")]
#[test_case("Infrastructure and operations", false, 203 ; "scaled by length")]
#[test_case(&"x".repeat(100), false, LEFT_PADDING_MAX ; "clamped")]
#[test_case("ab", true, LEFT_PADDING_MIN ; "with milestones")]
fn test_left_padding(group: &str, has_milestones: bool, expected: usize) {
    assert_eq!(left_padding(&[task("t", group)], has_milestones), expected);
}

#[test]
fn test_left_padding_no_tasks() {
    assert_eq!(left_padding(&[], false), LEFT_PADDING_MIN);
    assert_eq!(left_padding(&[], true), LEFT_PADDING_MIN);
}

#[test]
fn test_padding_in_directive() {
    let schedule = Schedule {
        title: "P".to_string(),
        tasks: vec![task("t", &"g".repeat(40))],
        milestones: vec![],
    };
    assert!(render_mermaid(&schedule).contains("%%{init: {'gantt': {'leftPadding': 280}}}%%\n"));
}
