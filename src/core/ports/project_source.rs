//! Project source port
//!
//! Defines the interface for reading a project board and a repository's
//! milestones from a project tracking service.

use crate::core::models::{MilestoneRef, Project, RepoRef};
use crate::error::Result;

/// Read access to project boards and repository milestones
///
/// Implementations decode the service's wire format into domain models;
/// every failure is fatal to the caller.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectSource {
    /// Fetch a project board and all of its items, following pagination
    fn fetch_project(&self, login: &str, number: u32) -> Result<Project>;

    /// Fetch the milestones of a repository (open and closed)
    fn fetch_repo_milestones(&self, repo: &RepoRef) -> Result<Vec<MilestoneRef>>;
}
