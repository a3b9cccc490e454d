//! Milestone collection
//!
//! Milestones come from two places: a repository's milestone list and the
//! milestones attached to individual items. The first entry inserted for a
//! title is kept; later ones are ignored.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::core::models::{MilestoneEntry, MilestoneRef, ProjectItem, parse_date};

/// Insertion-ordered, first-writer-wins milestone map
#[derive(Debug, Clone, Default)]
pub struct MilestoneCollector {
    entries: Vec<MilestoneEntry>,
    titles: HashSet<String>,
}

impl MilestoneCollector {
    /// Create an empty collector
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a milestone unless its title is already known
    ///
    /// Returns `true` if the entry was added.
    pub fn insert(&mut self, title: &str, due: NaiveDate) -> bool {
        if !self.titles.insert(title.to_string()) {
            return false;
        }
        self.entries.push(MilestoneEntry::new(title, due));
        true
    }

    /// Insert a raw milestone reference
    ///
    /// References without a title or a parseable due date are dropped.
    pub fn add_ref(&mut self, milestone: &MilestoneRef) -> bool {
        let title = milestone.title.as_deref().filter(|t| !t.is_empty());
        let due = milestone.due_on.as_deref().and_then(parse_date);
        match (title, due) {
            (Some(title), Some(due)) => self.insert(title, due),
            _ => false,
        }
    }

    /// Insert every milestone of a repository listing, in order
    pub fn add_repository(&mut self, milestones: &[MilestoneRef]) {
        for milestone in milestones {
            self.add_ref(milestone);
        }
    }

    /// Insert the milestone an item belongs to, if any
    pub fn add_item(&mut self, item: &ProjectItem) -> bool {
        item.milestone().is_some_and(|milestone| self.add_ref(milestone))
    }

    /// Number of collected milestones
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was collected
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The collected milestones in insertion order
    #[must_use]
    pub fn into_entries(self) -> Vec<MilestoneEntry> {
        self.entries
    }
}
