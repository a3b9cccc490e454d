//! Shared test fixtures and helpers
//!
//! Builders for project items so tests read as data, not plumbing.

use chrono::NaiveDate;
use gantt_export::core::models::{
    FieldEntry, FieldValue, ItemContent, Iteration, MilestoneRef, Project, ProjectItem,
};
use gantt_export::core::services::NormalizeOptions;

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Default options with a fixed "today"
pub fn options() -> NormalizeOptions {
    NormalizeOptions {
        today: ymd(2025, 1, 15),
        ..NormalizeOptions::default()
    }
}

pub fn text(field: &str, value: &str) -> FieldEntry {
    FieldEntry::new(field, FieldValue::Text(value.to_string()))
}

pub fn date(field: &str, value: &str) -> FieldEntry {
    FieldEntry::new(field, FieldValue::Date(value.to_string()))
}

pub fn select(field: &str, value: &str) -> FieldEntry {
    FieldEntry::new(field, FieldValue::SingleSelect(value.to_string()))
}

pub fn iteration(start: &str, duration: Option<u32>) -> FieldEntry {
    FieldEntry::new(
        "Iteration",
        FieldValue::Iteration(Iteration {
            title: Some("Sprint".to_string()),
            start_date: Some(start.to_string()),
            duration,
        }),
    )
}

pub fn milestone(title: &str, due: &str) -> MilestoneRef {
    MilestoneRef {
        title: Some(title.to_string()),
        due_on: Some(due.to_string()),
    }
}

/// A draft item with the given fields
pub fn draft(fields: Vec<FieldEntry>) -> ProjectItem {
    ProjectItem {
        content: Some(ItemContent::DraftIssue {
            title: "draft".to_string(),
        }),
        fields,
    }
}

/// An issue item, optionally closed and in a milestone
pub fn issue(
    closed_at: Option<&str>,
    milestone: Option<MilestoneRef>,
    fields: Vec<FieldEntry>,
) -> ProjectItem {
    ProjectItem {
        content: Some(ItemContent::Issue {
            title: "issue".to_string(),
            closed_at: closed_at.map(str::to_string),
            milestone,
        }),
        fields,
    }
}

pub fn project(items: Vec<ProjectItem>) -> Project {
    Project {
        title: "Roadmap".to_string(),
        items,
    }
}
