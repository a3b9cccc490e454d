//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use super::commands::{self, Target};
use gantt_export::adapters::github::GitHubClient;
use gantt_export::config::{self, ConfigFile, Overrides, Settings};
use gantt_export::core::models::RepoRef;
use gantt_export::output::OutputMode;

/// gantt-export - GitHub Project to Mermaid Gantt
#[derive(Parser, Debug)]
#[command(
    name = "gantt-export",
    version,
    about = "Export a GitHub Project to a Mermaid Gantt diagram",
    long_about = "Export a GitHub Project to a Mermaid Gantt diagram.\n\n\
                  Items are scheduled from their start and target date fields, \
                  their completion date, or their iteration.\n\
                  The API token is read from GITHUB_TOKEN or GH_TOKEN."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// GitHub username owning the project
    #[arg(long)]
    pub login: String,

    /// Project number
    #[arg(long, value_name = "NUMBER")]
    pub project: u32,

    /// Repository (owner/name) to fetch milestones from
    #[arg(long, value_name = "OWNER/NAME")]
    pub repo: Option<String>,

    /// Field to group by [default: Subject]
    #[arg(long, value_name = "FIELD")]
    pub group: Option<String>,

    /// Start date field [default: "Start date"]
    #[arg(long, value_name = "FIELD")]
    pub start: Option<String>,

    /// End date field [default: "Target date"]
    #[arg(long, value_name = "FIELD")]
    pub end: Option<String>,

    /// Default duration in days for tasks without end date [default: 7]
    #[arg(long, value_name = "DAYS")]
    pub default_duration: Option<u32>,

    /// Minimum visual duration in days for short tasks [default: 3]
    #[arg(long, value_name = "DAYS")]
    pub min_duration: Option<u32>,

    /// List all items (debug)
    #[arg(long)]
    pub list: bool,

    /// Include tasks without dates (uses today)
    #[arg(long)]
    pub include_undated: bool,

    /// Config file [default: ./.gantt-export.toml if present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            group_field: self.group.clone(),
            start_field: self.start.clone(),
            end_field: self.end.clone(),
            default_duration_days: self.default_duration,
            min_duration_days: self.min_duration,
            include_undated: self.include_undated,
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let file = ConfigFile::discover(cli.config.as_deref())?;
    let settings = Settings::resolve(cli.overrides(), file, config::endpoint_from_env());
    log::debug!("settings: {settings:?}");

    let repo = if cli.list {
        None
    } else {
        cli.repo.as_deref().map(str::parse::<RepoRef>).transpose()?
    };
    let token = config::token_from_env()?;
    let client = GitHubClient::new(settings.endpoint, token)?;

    let target = Target {
        login: &cli.login,
        number: cli.project,
    };

    if cli.list {
        commands::list(&client, &target, &settings.normalize, output_mode)
    } else {
        commands::export(&client, &target, repo.as_ref(), &settings.normalize, output_mode)
    }
}
