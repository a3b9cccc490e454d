//! Configuration
//!
//! Settings are layered, highest precedence first:
//!
//! 1. command-line flags
//! 2. the `GANTT_EXPORT_ENDPOINT` environment variable (endpoint only)
//! 3. a TOML config file (`--config <PATH>` or `./.gantt-export.toml`)
//! 4. built-in defaults
//!
//! The API token is only ever read from the environment.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::adapters::github::DEFAULT_ENDPOINT;
use crate::core::services::NormalizeOptions;
use crate::error::{Error, Result};

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = ".gantt-export.toml";

/// Environment variable overriding the API endpoint
pub const ENDPOINT_ENV: &str = "GANTT_EXPORT_ENDPOINT";

/// Environment variables holding the API token, in lookup order
pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// A `.gantt-export.toml` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// API settings
    pub api: ApiConfig,
    /// Project field names
    pub fields: FieldsConfig,
    /// Duration defaults
    pub durations: DurationsConfig,
}

/// `[api]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// GraphQL endpoint (e.g. a GitHub Enterprise host)
    pub endpoint: Option<String>,
}

/// `[fields]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldsConfig {
    /// Field to group tasks by
    pub group: Option<String>,
    /// Start date field
    pub start: Option<String>,
    /// End (target) date field
    pub end: Option<String>,
}

/// `[durations]` table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DurationsConfig {
    /// Days given to tasks without an end date
    pub default: Option<u32>,
    /// Minimum visible duration in days
    pub min: Option<u32>,
}

impl ConfigFile {
    /// Load and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the explicit file, else `./.gantt-export.toml` if present, else defaults
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            log::debug!("loading config from {}", path.display());
            return Self::load(path);
        }
        let default_path = PathBuf::from(CONFIG_FILE_NAME);
        if default_path.is_file() {
            log::debug!("loading config from {}", default_path.display());
            return Self::load(&default_path);
        }
        Ok(Self::default())
    }
}

/// Values given on the command line; `None` means "not given"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--group`
    pub group_field: Option<String>,
    /// `--start`
    pub start_field: Option<String>,
    /// `--end`
    pub end_field: Option<String>,
    /// `--default-duration`
    pub default_duration_days: Option<u32>,
    /// `--min-duration`
    pub min_duration_days: Option<u32>,
    /// `--include-undated`
    pub include_undated: bool,
}

/// Fully resolved settings of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// GraphQL endpoint
    pub endpoint: String,
    /// Normalization options
    pub normalize: NormalizeOptions,
}

impl Settings {
    /// Merge flags, environment endpoint, config file and defaults
    #[must_use]
    pub fn resolve(overrides: Overrides, file: ConfigFile, env_endpoint: Option<String>) -> Self {
        let defaults = NormalizeOptions::default();
        let endpoint = env_endpoint
            .filter(|value| !value.is_empty())
            .or(file.api.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let normalize = NormalizeOptions {
            group_field: overrides
                .group_field
                .or(file.fields.group)
                .unwrap_or(defaults.group_field),
            start_field: overrides
                .start_field
                .or(file.fields.start)
                .unwrap_or(defaults.start_field),
            end_field: overrides.end_field.or(file.fields.end).unwrap_or(defaults.end_field),
            default_duration_days: overrides
                .default_duration_days
                .or(file.durations.default)
                .unwrap_or(defaults.default_duration_days),
            min_duration_days: overrides
                .min_duration_days
                .or(file.durations.min)
                .unwrap_or(defaults.min_duration_days),
            include_undated: overrides.include_undated,
            today: defaults.today,
        };

        Self { endpoint, normalize }
    }
}

/// Pick the API token using `lookup` for environment access
///
/// `GITHUB_TOKEN` wins over `GH_TOKEN`; empty values count as unset.
pub fn resolve_token(lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
    TOKEN_ENV_VARS
        .iter()
        .find_map(|name| lookup(name).filter(|value| !value.is_empty()))
        .ok_or(Error::MissingToken)
}

/// Read the API token from the process environment
pub fn token_from_env() -> Result<String> {
    resolve_token(|name| std::env::var(name).ok())
}

/// Read the endpoint override from the process environment
#[must_use]
pub fn endpoint_from_env() -> Option<String> {
    std::env::var(ENDPOINT_ENV).ok()
}
