//! Task normalization
//!
//! Turns a project item with heterogeneous, optional fields into a dated
//! [`Task`]. Date sources are tried in a fixed order:
//!
//! 1. completion timestamp of the issue or pull request
//! 2. the configured end field
//! 3. the item's iteration (start date plus duration)
//! 4. today, when undated items are included
//!
//! A task missing an end gets the default duration; every task is then
//! stretched to the minimum visible duration.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use super::extractor::extract_field;
use crate::core::models::{ProjectItem, Task, add_days, parse_date};

/// Name of the built-in field holding an item's title
pub const TITLE_FIELD: &str = "Title";

/// Group label for tasks without one
pub const DEFAULT_GROUP: &str = "Other";

static UNSAFE_LABEL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n\r:]+").expect("static pattern is valid"));

/// Knobs for [`normalize_item`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Field whose value names the task's section
    pub group_field: String,
    /// Field holding the start date
    pub start_field: String,
    /// Field holding the target (end) date
    pub end_field: String,
    /// Length given to tasks with no resolvable end
    pub default_duration_days: u32,
    /// Shortest span a rendered task may have
    pub min_duration_days: u32,
    /// Keep items without any date, starting them today
    pub include_undated: bool,
    /// The date used as "today"
    pub today: NaiveDate,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            group_field: "Subject".to_string(),
            start_field: "Start date".to_string(),
            end_field: "Target date".to_string(),
            default_duration_days: 7,
            min_duration_days: 3,
            include_undated: false,
            today: Local::now().date_naive(),
        }
    }
}

/// Collapse newlines and colons into single spaces and trim
///
/// Both would break a Mermaid task line.
#[must_use]
pub fn sanitize(label: &str) -> String {
    UNSAFE_LABEL_CHARS.replace_all(label, " ").trim().to_string()
}

/// Convert a project item into a task
///
/// Returns `None` for items without a title, and for items without any
/// date source unless `include_undated` is set.
#[must_use]
pub fn normalize_item(item: &ProjectItem, options: &NormalizeOptions) -> Option<Task> {
    let fields = item.fields.as_slice();
    let name = extract_field(fields, TITLE_FIELD)?;

    let mut start = extract_field(fields, &options.start_field).and_then(parse_date);
    let mut end = item
        .closed_at()
        .and_then(parse_date)
        .or_else(|| extract_field(fields, &options.end_field).and_then(parse_date));

    if start.is_none()
        && end.is_none()
        && let Some(iteration) = item.iteration()
    {
        start = iteration.start_date.as_deref().and_then(parse_date);
        if let (Some(first_day), Some(days)) = (start, iteration.duration.filter(|d| *d > 0)) {
            end = Some(add_days(first_day, days));
        }
    }

    let start = match (start, end) {
        (Some(start), _) => start,
        (None, Some(end)) => end,
        (None, None) if options.include_undated => options.today,
        (None, None) => {
            log::debug!("skipping undated item {name:?}");
            return None;
        },
    };
    let mut end = end.unwrap_or_else(|| add_days(start, options.default_duration_days));

    let min_duration = i64::from(options.min_duration_days);
    if (end - start).num_days() < min_duration {
        end = add_days(start, options.min_duration_days);
    }

    let group = extract_field(fields, &options.group_field).unwrap_or(DEFAULT_GROUP);

    Some(Task {
        name: sanitize(name),
        group: sanitize(group),
        start,
        end,
    })
}
