//! Tests for human and JSON output

use gantt_export::core::models::{MilestoneEntry, Schedule, Task};
use gantt_export::core::services::render_mermaid;
use gantt_export::output::{ItemListing, OutputMode, ScheduleReport};
use serde_json::Value;

use crate::common::{date, draft, issue, iteration, milestone, options, project, select, text, ymd};

fn schedule() -> Schedule {
    Schedule {
        title: "Roadmap".to_string(),
        tasks: vec![
            Task {
                name: "Late".to_string(),
                group: "Web".to_string(),
                start: ymd(2024, 3, 1),
                end: ymd(2024, 3, 4),
            },
            Task {
                name: "Api".to_string(),
                group: "Backend".to_string(),
                start: ymd(2024, 2, 1),
                end: ymd(2024, 2, 8),
            },
            Task {
                name: "Early".to_string(),
                group: "Web".to_string(),
                start: ymd(2024, 1, 1),
                end: ymd(2024, 1, 4),
            },
        ],
        milestones: vec![
            MilestoneEntry::new("GA", ymd(2024, 4, 1)),
            MilestoneEntry::new("Beta", ymd(2024, 2, 15)),
        ],
    }
}

#[test]
fn test_output_mode_default_is_human() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn test_schedule_report_human_is_diagram() {
    let schedule = schedule();
    let report = ScheduleReport::new(&schedule);
    assert_eq!(report.render(OutputMode::Human), render_mermaid(&schedule));
}

#[test]
fn test_schedule_report_json_in_render_order() {
    let schedule = schedule();
    let json: Value =
        serde_json::from_str(&ScheduleReport::new(&schedule).render(OutputMode::Json)).unwrap();

    assert_eq!(json["title"], "Roadmap");
    let names: Vec<&str> = json["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Api", "Early", "Late"]);
    assert_eq!(json["tasks"][0]["group"], "Backend");
    assert_eq!(json["tasks"][0]["start"], "2024-02-01");
    assert_eq!(json["tasks"][0]["end"], "2024-02-08");

    assert_eq!(json["milestones"][0]["title"], "Beta");
    assert_eq!(json["milestones"][0]["due"], "2024-02-15");
    assert_eq!(json["milestones"][1]["title"], "GA");
}

#[test]
fn test_schedule_report_json_ends_with_newline() {
    let schedule = schedule();
    assert!(ScheduleReport::new(&schedule).render(OutputMode::Json).ends_with("}\n"));
}

fn listed_project() -> gantt_export::core::models::Project {
    project(vec![
        issue(
            None,
            Some(milestone("v1", "2024-03-01T00:00:00Z")),
            vec![
                text("Title", "Ship it"),
                select("Subject", "Backend"),
                date("Start date", "2024-01-01"),
                date("Target date", "2024-01-20"),
            ],
        ),
        draft(vec![iteration("2024-02-01", Some(14))]),
    ])
}

#[test]
fn test_item_listing_human() {
    let project = listed_project();
    let out = ItemListing::new(&project, &options()).render(OutputMode::Human);

    assert!(out.starts_with("Project: Roadmap\nItems: 2\n"));
    assert!(out.contains("\n1. Ship it\n   Kind: Issue\n"));
    assert!(out.contains("\n2. (no title)\n   Kind: DraftIssue\n"));
    assert!(out.contains("   Raw node: "));
    assert!(out.contains("   Group: Backend\n"));
    assert!(out.contains("   Start: 2024-01-01, End: 2024-01-20\n"));
    assert!(out.contains("   Milestone: v1 (due: 2024-03-01T00:00:00Z)\n"));
    assert!(out.contains("\n2. (no title)\n"));
    assert!(out.contains("   Group: -\n"));
    assert!(out.contains("   Start: -, End: -\n"));
    assert!(out.contains("   Iteration: Sprint (start: 2024-02-01, 14 days)\n"));
}

#[test]
fn test_item_listing_json() {
    let project = listed_project();
    let json: Value =
        serde_json::from_str(&ItemListing::new(&project, &options()).render(OutputMode::Json))
            .unwrap();

    assert_eq!(json["project"], "Roadmap");
    assert_eq!(json["count"], 2);
    assert_eq!(json["items"][0]["index"], 1);
    assert_eq!(json["items"][0]["name"], "Ship it");
    assert_eq!(json["items"][0]["group"], "Backend");
    assert_eq!(json["items"][0]["milestone"]["title"], "v1");
    assert_eq!(json["items"][0]["milestone"]["due_date"], "2024-03-01");
    assert_eq!(json["items"][0]["kind"], "Issue");
    assert_eq!(json["items"][1]["name"], Value::Null);
    assert_eq!(json["items"][1]["kind"], "DraftIssue");
    assert_eq!(json["items"][1]["iteration"]["duration"], 14);
    assert!(json["items"][1]["raw"]["fields"].is_array());
}

#[test]
fn test_item_listing_uses_configured_fields() {
    let project = project(vec![draft(vec![
        text("Title", "Custom"),
        select("Team", "Infra"),
        date("Begin", "2024-05-01"),
    ])]);
    let opts = gantt_export::core::services::NormalizeOptions {
        group_field: "Team".to_string(),
        start_field: "Begin".to_string(),
        ..options()
    };
    let out = ItemListing::new(&project, &opts).render(OutputMode::Human);

    assert!(out.contains("   Group: Infra\n"));
    assert!(out.contains("   Start: 2024-05-01, End: -\n"));
}

#[test]
fn test_item_listing_empty_project() {
    let project = project(vec![]);
    let out = ItemListing::new(&project, &options()).render(OutputMode::Human);
    assert_eq!(out, "Project: Roadmap\nItems: 0\n");
}
