//! Milestone marker

use chrono::NaiveDate;
use serde::Serialize;

/// A titled, dated milestone shown as a zero-length marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MilestoneEntry {
    /// Milestone title
    pub title: String,
    /// Due date
    pub due: NaiveDate,
}

impl MilestoneEntry {
    /// Create a new milestone entry
    #[must_use]
    pub fn new(title: impl Into<String>, due: NaiveDate) -> Self {
        Self {
            title: title.into(),
            due,
        }
    }
}
