//! Core services - business logic
//!
//! Pure functions over the domain models:
//!
//! - [`extract_field`] - find a named field's scalar value
//! - [`normalize_item`] - turn an item into a dated [`Task`](crate::core::models::Task)
//! - [`MilestoneCollector`] - first-writer-wins milestone map
//! - [`build_schedule`] - run the whole transform over a fetched project
//! - [`render_mermaid`] - print a schedule as a Mermaid Gantt block

mod extractor;
mod gantt;
mod milestones;
mod normalizer;
mod schedule;

pub use extractor::extract_field;
pub use gantt::{
    LEFT_PADDING_MAX, LEFT_PADDING_MIN, MILESTONES_SECTION, PIXELS_PER_CHAR, group_tasks,
    left_padding, render_mermaid, sorted_milestones,
};
pub use milestones::MilestoneCollector;
pub use normalizer::{DEFAULT_GROUP, NormalizeOptions, TITLE_FIELD, normalize_item, sanitize};
pub use schedule::{build_schedule, export_schedule};
