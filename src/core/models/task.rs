//! Task model
//!
//! A task is one bar of the diagram: a sanitized name, the group (section)
//! it is listed under, and an inclusive date span.

use chrono::NaiveDate;
use serde::Serialize;

use super::milestone::MilestoneEntry;

/// A normalized, dated work item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Display name
    pub name: String,
    /// Section label
    pub group: String,
    /// First day
    pub start: NaiveDate,
    /// Last day; never before `start`
    pub end: NaiveDate,
}

impl Task {
    /// Span in days between start and end
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Everything the renderer needs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    /// Diagram title (the project title)
    pub title: String,
    /// Tasks in item order
    pub tasks: Vec<Task>,
    /// Milestones in insertion order
    pub milestones: Vec<MilestoneEntry>,
}
