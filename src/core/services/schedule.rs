//! Schedule building
//!
//! Runs the whole transform: repository milestones go into the milestone map
//! first, then each titled item contributes its milestone and, when it has a
//! usable date, a task.

use super::extractor::extract_field;
use super::milestones::MilestoneCollector;
use super::normalizer::{NormalizeOptions, TITLE_FIELD, normalize_item};
use crate::core::models::{MilestoneRef, Project, RepoRef, Schedule};
use crate::core::ports::ProjectSource;
use crate::error::{Error, Result};

/// Build a schedule from an already fetched project
///
/// Fails with [`Error::NoTasks`] when neither a task nor a milestone
/// survives.
pub fn build_schedule(
    project: &Project,
    repo_milestones: &[MilestoneRef],
    options: &NormalizeOptions,
) -> Result<Schedule> {
    let mut milestones = MilestoneCollector::new();
    milestones.add_repository(repo_milestones);

    let mut tasks = Vec::new();
    for item in &project.items {
        if extract_field(&item.fields, TITLE_FIELD).is_none() {
            continue;
        }
        milestones.add_item(item);
        if let Some(task) = normalize_item(item, options) {
            tasks.push(task);
        }
    }

    log::info!(
        "{} of {} items scheduled, {} milestones",
        tasks.len(),
        project.items.len(),
        milestones.len()
    );

    if tasks.is_empty() && milestones.is_empty() {
        return Err(Error::NoTasks);
    }

    Ok(Schedule {
        title: project.title.clone(),
        tasks,
        milestones: milestones.into_entries(),
    })
}

/// Fetch a project (and optionally a repository's milestones) and build its schedule
pub fn export_schedule(
    source: &dyn ProjectSource,
    login: &str,
    number: u32,
    repo: Option<&RepoRef>,
    options: &NormalizeOptions,
) -> Result<Schedule> {
    let project = source.fetch_project(login, number)?;
    let repo_milestones = match repo {
        Some(repo) => source.fetch_repo_milestones(repo)?,
        None => Vec::new(),
    };
    build_schedule(&project, &repo_milestones, options)
}
