//! Export a project as a Gantt diagram

use gantt_export::core::models::RepoRef;
use gantt_export::core::ports::ProjectSource;
use gantt_export::core::services::{NormalizeOptions, export_schedule};
use gantt_export::output::{OutputMode, ScheduleReport};

use super::{Target, emit};

/// Fetch, normalize and print the diagram (or its JSON form)
pub fn export(
    source: &dyn ProjectSource,
    target: &Target<'_>,
    repo: Option<&RepoRef>,
    options: &NormalizeOptions,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let schedule = export_schedule(source, target.login, target.number, repo, options)?;
    emit(&ScheduleReport::new(&schedule).render(mode))
}
