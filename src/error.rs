//! Error types for gantt-export
//!
//! Every fatal condition the tool can hit maps to one variant. The binary
//! prints the message and its source chain after an `error: ` prefix and
//! exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the library
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that abort an export
#[derive(Debug, Error)]
pub enum Error {
    /// Neither token environment variable is set
    #[error("Set GITHUB_TOKEN or GH_TOKEN")]
    MissingToken,

    /// `--repo` was not of the form `owner/name`
    #[error("--repo must be in format owner/name (got {0:?})")]
    InvalidRepo(String),

    /// Config file could not be read
    #[error("cannot read config file {}", path.display())]
    ConfigRead {
        /// Path of the config file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected schema
    #[error("invalid config file {}", path.display())]
    ConfigParse {
        /// Path of the config file
        path: PathBuf,
        /// Underlying parse error
        source: toml::de::Error,
    },

    /// Network-level failure (connect, TLS, timeout)
    #[error("request to {url} failed")]
    Transport {
        /// Endpoint that was called
        url: String,
        /// Underlying client error
        source: reqwest::Error,
    },

    /// The API answered with a non-success HTTP status
    #[error("GitHub API error {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The response body was not the JSON we expected
    #[error("malformed API response")]
    Decode(#[from] serde_json::Error),

    /// The GraphQL layer reported errors
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    /// The user or project does not exist or is not visible to the token
    #[error("project {login}#{number} not found or no access")]
    ProjectNotFound {
        /// Project owner login
        login: String,
        /// Project number
        number: u32,
    },

    /// The repository does not exist or is not visible to the token
    #[error("Repository {owner}/{name} not found or no access")]
    RepositoryNotFound {
        /// Repository owner
        owner: String,
        /// Repository name
        name: String,
    },

    /// Nothing to render
    #[error("No tasks found")]
    NoTasks,
}
