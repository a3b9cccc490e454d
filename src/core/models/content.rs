//! Item content kinds
//!
//! A project item wraps one of a closed set of content kinds. Only issues
//! and pull requests carry a completion timestamp or a repository milestone.

use serde::Serialize;

use super::field::MilestoneRef;

/// The content behind a project item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemContent {
    /// A repository issue
    Issue {
        /// Issue title
        title: String,
        /// When the issue was closed (RFC3339), if it is closed
        closed_at: Option<String>,
        /// Repository milestone the issue belongs to
        milestone: Option<MilestoneRef>,
    },
    /// A repository pull request
    PullRequest {
        /// Pull request title
        title: String,
        /// When the pull request was closed or merged (RFC3339)
        closed_at: Option<String>,
        /// Repository milestone the pull request belongs to
        milestone: Option<MilestoneRef>,
    },
    /// A draft note that only lives on the board
    DraftIssue {
        /// Draft title
        title: String,
    },
}

impl ItemContent {
    /// Completion timestamp, for content kinds that have one
    #[must_use]
    pub fn closed_at(&self) -> Option<&str> {
        match self {
            Self::Issue { closed_at, .. } | Self::PullRequest { closed_at, .. } => {
                closed_at.as_deref()
            },
            Self::DraftIssue { .. } => None,
        }
    }

    /// Repository milestone, for content kinds that have one
    #[must_use]
    pub const fn milestone(&self) -> Option<&MilestoneRef> {
        match self {
            Self::Issue { milestone, .. } | Self::PullRequest { milestone, .. } => {
                milestone.as_ref()
            },
            Self::DraftIssue { .. } => None,
        }
    }

    /// Short kind label (`Issue`, `PullRequest`, `DraftIssue`)
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Issue { .. } => "Issue",
            Self::PullRequest { .. } => "PullRequest",
            Self::DraftIssue { .. } => "DraftIssue",
        }
    }
}
