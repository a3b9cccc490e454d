//! Project field values
//!
//! A project field value surfaces exactly one representation, so it is
//! modeled as a tagged union instead of a bag of optional attributes.

use serde::Serialize;

/// A milestone reference as returned by the API (raw strings)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MilestoneRef {
    /// Milestone title
    pub title: Option<String>,
    /// Due date timestamp (RFC3339)
    pub due_on: Option<String>,
}

/// An iteration (time-box) an item is scheduled in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Iteration {
    /// Iteration title (e.g. "Sprint 4")
    pub title: Option<String>,
    /// First day of the iteration (`YYYY-MM-DD`)
    pub start_date: Option<String>,
    /// Length in days
    pub duration: Option<u32>,
}

/// One typed value of a project field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// Free text (this is also how the built-in `Title` field surfaces)
    Text(String),
    /// A calendar date (`YYYY-MM-DD`)
    Date(String),
    /// The label of the selected option
    SingleSelect(String),
    /// A repository milestone
    Milestone(MilestoneRef),
    /// An iteration
    Iteration(Iteration),
}

impl FieldValue {
    /// The textual form of scalar values: text, then date, then option label
    ///
    /// Milestone and iteration values have no scalar form.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Date(s) | Self::SingleSelect(s) => Some(s.as_str()),
            Self::Milestone(_) | Self::Iteration(_) => None,
        }
    }
}

/// A field value together with the name of the field that owns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldEntry {
    /// Owning field name, when the API exposed it
    pub field: Option<String>,
    /// The value
    #[serde(flatten)]
    pub value: FieldValue,
}

impl FieldEntry {
    /// Create an entry owned by the named field
    #[must_use]
    pub fn new(field: impl Into<String>, value: FieldValue) -> Self {
        Self {
            field: Some(field.into()),
            value,
        }
    }

    /// Whether this entry belongs to the field called `name`
    #[must_use]
    pub fn is_field(&self, name: &str) -> bool {
        self.field.as_deref() == Some(name)
    }
}
