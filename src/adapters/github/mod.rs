//! GitHub adapter
//!
//! Implements `ProjectSource` against the GitHub GraphQL API using a
//! blocking HTTP client. One request is in flight at a time; any failure is
//! returned as-is and never retried.

mod queries;
mod wire;

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::core::models::{MilestoneRef, Project, ProjectItem, RepoRef};
use crate::core::ports::ProjectSource;
use crate::error::{Error, Result};

use wire::{GraphQlRequest, GraphQlResponse, ProjectData, RepoData};

/// Public GitHub GraphQL endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

/// Deadline of a single request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Items requested per page
pub const PAGE_SIZE: u32 = 100;

/// GitHub GraphQL client
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl GitHubClient {
    /// Create a client for `endpoint` authenticating with `token`
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("gantt-export/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| Error::Transport {
                url: endpoint.clone(),
                source,
            })?;
        Ok(Self {
            http,
            endpoint,
            token: token.into(),
        })
    }

    /// POST one GraphQL document and decode its `data`
    fn execute<V, T>(&self, query: &str, variables: V) -> Result<Option<T>>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let transport = |source| Error::Transport {
            url: self.endpoint.clone(),
            source,
        };

        log::debug!("POST {}", self.endpoint);
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&GraphQlRequest { query, variables })
            .send()
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().map_err(transport)?;
        log::debug!("{} ({} bytes)", status, body.len());
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GraphQlResponse<T> = serde_json::from_str(&body)?;
        if !envelope.errors.is_empty() {
            let messages: Vec<String> =
                envelope.errors.into_iter().map(|error| error.message).collect();
            return Err(Error::GraphQl(messages.join("; ")));
        }
        Ok(envelope.data)
    }
}

impl ProjectSource for GitHubClient {
    fn fetch_project(&self, login: &str, number: u32) -> Result<Project> {
        let not_found = || Error::ProjectNotFound {
            login: login.to_string(),
            number,
        };

        let mut items: Vec<ProjectItem> = Vec::new();
        let mut after: Option<String> = None;
        let mut pages = 0_u32;

        let title = loop {
            let data: Option<ProjectData> = self.execute(
                queries::PROJECT_ITEMS,
                json!({
                    "login": login,
                    "num": number,
                    "first": PAGE_SIZE,
                    "after": after,
                }),
            )?;
            let project = data
                .and_then(|data| data.user)
                .and_then(|user| user.project_v2)
                .ok_or_else(not_found)?;

            pages += 1;
            items.extend(project.items.nodes.into_iter().flatten().map(ProjectItem::from));

            let page_info = project.items.page_info;
            match page_info.end_cursor {
                Some(cursor) if page_info.has_next_page => after = Some(cursor),
                _ => break project.title,
            }
        };

        log::info!("fetched {} items of {login}#{number} in {pages} page(s)", items.len());
        Ok(Project { title, items })
    }

    fn fetch_repo_milestones(&self, repo: &RepoRef) -> Result<Vec<MilestoneRef>> {
        let data: Option<RepoData> = self.execute(
            queries::REPO_MILESTONES,
            json!({ "owner": repo.owner, "repo": repo.name }),
        )?;
        let repository = data.and_then(|data| data.repository).ok_or_else(|| {
            Error::RepositoryNotFound {
                owner: repo.owner.clone(),
                name: repo.name.clone(),
            }
        })?;

        let milestones: Vec<MilestoneRef> = repository
            .milestones
            .map(|connection| connection.nodes)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .map(MilestoneRef::from)
            .collect();
        log::info!("fetched {} milestones of {repo}", milestones.len());
        Ok(milestones)
    }
}
