//! GitHub GraphQL wire types
//!
//! Mirrors the shape of the queries in `queries.rs`. Polymorphic nodes are
//! dispatched on `__typename` and converted into domain models right away.

use serde::{Deserialize, Serialize};

use crate::core::models::{
    FieldEntry, FieldValue, ItemContent, Iteration, MilestoneRef, ProjectItem,
};

/// Request body of a GraphQL call
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

/// Response envelope of a GraphQL call
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ProjectData {
    pub user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNode {
    pub project_v2: Option<ProjectNode>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectNode {
    #[serde(default)]
    pub title: String,
    pub items: ItemConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemConnection {
    pub page_info: PageInfo,
    #[serde(default)]
    pub nodes: Vec<Option<ItemNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemNode {
    pub content: Option<ContentNode>,
    pub field_values: Option<FieldValueConnection>,
}

#[derive(Debug, Deserialize)]
pub struct FieldValueConnection {
    #[serde(default)]
    pub nodes: Vec<Option<FieldValueNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "__typename")]
pub enum ContentNode {
    Issue(TrackedNode),
    PullRequest(TrackedNode),
    DraftIssue(DraftNode),
    #[serde(other)]
    Unknown,
}

/// Issue or pull request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedNode {
    #[serde(default)]
    pub title: String,
    pub closed_at: Option<String>,
    pub milestone: Option<MilestoneNode>,
}

#[derive(Debug, Deserialize)]
pub struct DraftNode {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneNode {
    pub title: Option<String>,
    pub due_on: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FieldRef {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "__typename")]
pub enum FieldValueNode {
    #[serde(rename = "ProjectV2ItemFieldTextValue")]
    Text {
        text: Option<String>,
        field: Option<FieldRef>,
    },
    #[serde(rename = "ProjectV2ItemFieldDateValue")]
    Date {
        date: Option<String>,
        field: Option<FieldRef>,
    },
    #[serde(rename = "ProjectV2ItemFieldSingleSelectValue")]
    SingleSelect {
        name: Option<String>,
        field: Option<FieldRef>,
    },
    #[serde(rename = "ProjectV2ItemFieldMilestoneValue")]
    Milestone {
        milestone: Option<MilestoneNode>,
        field: Option<FieldRef>,
    },
    #[serde(rename = "ProjectV2ItemFieldIterationValue")]
    Iteration {
        title: Option<String>,
        #[serde(rename = "startDate")]
        start_date: Option<String>,
        duration: Option<u32>,
        field: Option<FieldRef>,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize)]
pub struct RepoData {
    pub repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryNode {
    pub milestones: Option<MilestoneConnection>,
}

#[derive(Debug, Deserialize)]
pub struct MilestoneConnection {
    #[serde(default)]
    pub nodes: Vec<Option<MilestoneNode>>,
}

impl From<MilestoneNode> for MilestoneRef {
    fn from(node: MilestoneNode) -> Self {
        Self {
            title: node.title,
            due_on: node.due_on,
        }
    }
}

impl ContentNode {
    fn into_content(self) -> Option<ItemContent> {
        match self {
            Self::Issue(node) => Some(ItemContent::Issue {
                title: node.title,
                closed_at: node.closed_at,
                milestone: node.milestone.map(MilestoneRef::from),
            }),
            Self::PullRequest(node) => Some(ItemContent::PullRequest {
                title: node.title,
                closed_at: node.closed_at,
                milestone: node.milestone.map(MilestoneRef::from),
            }),
            Self::DraftIssue(node) => Some(ItemContent::DraftIssue { title: node.title }),
            Self::Unknown => None,
        }
    }
}

fn field_name(field: Option<FieldRef>) -> Option<String> {
    field.and_then(|f| f.name)
}

impl FieldValueNode {
    /// Convert to a domain entry; unsupported kinds and empty milestones are dropped
    fn into_entry(self) -> Option<FieldEntry> {
        let (field, value) = match self {
            Self::Text { text, field } => (field, FieldValue::Text(text.unwrap_or_default())),
            Self::Date { date, field } => (field, FieldValue::Date(date.unwrap_or_default())),
            Self::SingleSelect { name, field } => {
                (field, FieldValue::SingleSelect(name.unwrap_or_default()))
            },
            Self::Milestone { milestone, field } => (field, FieldValue::Milestone(milestone?.into())),
            Self::Iteration {
                title,
                start_date,
                duration,
                field,
            } => (
                field,
                FieldValue::Iteration(Iteration {
                    title,
                    start_date,
                    duration,
                }),
            ),
            Self::Unsupported => return None,
        };
        Some(FieldEntry {
            field: field_name(field),
            value,
        })
    }
}

impl From<ItemNode> for ProjectItem {
    fn from(node: ItemNode) -> Self {
        Self {
            content: node.content.and_then(ContentNode::into_content),
            fields: node
                .field_values
                .map(|values| values.nodes)
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .filter_map(FieldValueNode::into_entry)
                .collect(),
        }
    }
}
