//! Output formatting for human and JSON modes
//!
//! This module turns computed results into the text written to stdout:
//! either the human-readable form (Mermaid diagram, item dump) or a
//! machine-parseable JSON document.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::models::{
    ItemContent, Iteration, MilestoneEntry, Project, ProjectItem, Schedule, Task, parse_date,
};
use crate::core::services::{
    NormalizeOptions, TITLE_FIELD, extract_field, group_tasks, render_mermaid, sorted_milestones,
};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A schedule laid out in rendering order
#[derive(Debug, Serialize)]
pub struct ScheduleReport<'a> {
    /// Project title
    pub title: &'a str,
    /// Tasks, grouped and sorted as in the diagram
    pub tasks: Vec<&'a Task>,
    /// Milestones sorted by due date
    pub milestones: Vec<&'a MilestoneEntry>,
    #[serde(skip)]
    schedule: &'a Schedule,
}

impl<'a> ScheduleReport<'a> {
    /// Lay out a schedule
    #[must_use]
    pub fn new(schedule: &'a Schedule) -> Self {
        Self {
            title: &schedule.title,
            tasks: group_tasks(&schedule.tasks).into_values().flatten().collect(),
            milestones: sorted_milestones(&schedule.milestones),
            schedule,
        }
    }

    /// Render the report based on output mode
    #[must_use]
    pub fn render(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Human => render_mermaid(self.schedule),
            OutputMode::Json => serde_json::to_string_pretty(self).unwrap_or_default() + "\n",
        }
    }
}

/// Debug listing of every fetched item
#[derive(Debug, Serialize)]
pub struct ItemListing<'a> {
    /// Project title
    pub project: &'a str,
    /// Number of items
    pub count: usize,
    /// One entry per item, in server order
    pub items: Vec<ListedItem<'a>>,
}

/// One item of the debug listing
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ListedItem<'a> {
    /// 1-based position
    pub index: usize,
    /// Title field value, if any
    pub name: Option<&'a str>,
    /// Content kind, when the item has visible content
    pub kind: Option<&'static str>,
    /// Group field value
    pub group: Option<&'a str>,
    /// Start field value, unparsed
    pub start: Option<&'a str>,
    /// End field value, unparsed
    pub end: Option<&'a str>,
    /// Milestone title and parsed due date
    pub milestone: Option<ListedMilestone<'a>>,
    /// Iteration the item is scheduled in
    pub iteration: Option<&'a Iteration>,
    /// The decoded item
    pub raw: &'a ProjectItem,
}

/// Milestone of a listed item
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ListedMilestone<'a> {
    /// Milestone title
    pub title: Option<&'a str>,
    /// Raw due timestamp
    pub due: Option<&'a str>,
    /// Parsed due date
    pub due_date: Option<NaiveDate>,
}

impl<'a> ItemListing<'a> {
    /// Extract the configured fields of every item
    #[must_use]
    pub fn new(project: &'a Project, options: &NormalizeOptions) -> Self {
        let items = project
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let fields = item.fields.as_slice();
                ListedItem {
                    index: i + 1,
                    name: extract_field(fields, TITLE_FIELD),
                    kind: item.content.as_ref().map(ItemContent::kind),
                    group: extract_field(fields, &options.group_field),
                    start: extract_field(fields, &options.start_field),
                    end: extract_field(fields, &options.end_field),
                    milestone: item.milestone().map(|m| ListedMilestone {
                        title: m.title.as_deref(),
                        due: m.due_on.as_deref(),
                        due_date: m.due_on.as_deref().and_then(parse_date),
                    }),
                    iteration: item.iteration(),
                    raw: item,
                }
            })
            .collect();
        Self {
            project: &project.title,
            count: project.items.len(),
            items,
        }
    }

    /// Render the listing based on output mode
    #[must_use]
    pub fn render(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => serde_json::to_string_pretty(self).unwrap_or_default() + "\n",
        }
    }

    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Project: {}", self.project);
        let _ = writeln!(out, "Items: {}", self.count);
        for item in &self.items {
            let _ = writeln!(out, "\n{}. {}", item.index, item.name.unwrap_or("(no title)"));
            let _ = writeln!(out, "   Kind: {}", item.kind.unwrap_or("-"));
            let _ = writeln!(out, "   Raw node: {:?}", item.raw);
            let _ = writeln!(out, "   Group: {}", item.group.unwrap_or("-"));
            let _ = writeln!(
                out,
                "   Start: {}, End: {}",
                item.start.unwrap_or("-"),
                item.end.unwrap_or("-")
            );
            if let Some(milestone) = &item.milestone {
                let _ = writeln!(
                    out,
                    "   Milestone: {} (due: {})",
                    milestone.title.unwrap_or("-"),
                    milestone.due.unwrap_or("-")
                );
            }
            if let Some(iteration) = item.iteration {
                let _ = writeln!(
                    out,
                    "   Iteration: {} (start: {}, {} days)",
                    iteration.title.as_deref().unwrap_or("-"),
                    iteration.start_date.as_deref().unwrap_or("-"),
                    iteration.duration.map_or_else(|| "-".to_string(), |d| d.to_string())
                );
            }
        }
        out
    }
}
