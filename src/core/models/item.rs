//! Project and project item

use serde::Serialize;

use super::content::ItemContent;
use super::field::{FieldEntry, FieldValue, Iteration, MilestoneRef};

/// A project board with all of its items, in server order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Board title
    pub title: String,
    /// Every item on the board
    pub items: Vec<ProjectItem>,
}

/// One work item on a project board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectItem {
    /// The issue, pull request or draft behind the item, if visible
    pub content: Option<ItemContent>,
    /// Field values attached to the item within the project
    pub fields: Vec<FieldEntry>,
}

impl ProjectItem {
    /// Completion timestamp of the content, if any
    #[must_use]
    pub fn closed_at(&self) -> Option<&str> {
        self.content.as_ref().and_then(ItemContent::closed_at)
    }

    /// The milestone this item belongs to
    ///
    /// The content's repository milestone wins; otherwise the first milestone
    /// field value is used.
    #[must_use]
    pub fn milestone(&self) -> Option<&MilestoneRef> {
        if let Some(milestone) = self.content.as_ref().and_then(ItemContent::milestone) {
            return Some(milestone);
        }
        self.fields.iter().find_map(|entry| match &entry.value {
            FieldValue::Milestone(milestone) => Some(milestone),
            _ => None,
        })
    }

    /// The first iteration value of the item
    #[must_use]
    pub fn iteration(&self) -> Option<&Iteration> {
        self.fields.iter().find_map(|entry| match &entry.value {
            FieldValue::Iteration(iteration) => Some(iteration),
            _ => None,
        })
    }
}
