//! Domain models for gantt-export
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Project`] / [`ProjectItem`] - a board and its work items, decoded once
//! - [`ItemContent`] - what an item points at (issue, pull request, draft)
//! - [`FieldValue`] - one typed project field value
//! - [`Task`] - a normalized, dated bar of the diagram
//! - [`MilestoneEntry`] - a dated marker of the diagram
//! - [`RepoRef`] - an `owner/name` repository reference

mod content;
mod date;
mod field;
mod item;
mod milestone;
mod repo;
mod task;

pub use content::ItemContent;
pub use date::{add_days, parse_date};
pub use field::{FieldEntry, FieldValue, Iteration, MilestoneRef};
pub use item::{Project, ProjectItem};
pub use milestone::MilestoneEntry;
pub use repo::RepoRef;
pub use task::{Schedule, Task};
