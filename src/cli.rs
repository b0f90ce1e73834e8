//! CLI argument parsing and GitHub Actions input resolution.
//!
//! Every input can be passed as a flag or picked up from the environment the
//! Actions runner prepares (`INPUT_<NAME>` for action inputs, `GITHUB_*` for
//! the ambient workflow context).
use clap::{Parser, builder::BoolishValueParser};
use secrecy::SecretString;

use crate::{
    forge::config::{DEFAULT_GITHUB_API_URL, RemoteConfig},
    slack::request::DEFAULT_SLACK_API_URL,
};

/// Names of every environment variable read by [`Args`].
pub const ENV_VARS: &[&str] = &[
    "INPUT_SLACK_TOKEN",
    "INPUT_CHANNEL_ID",
    "INPUT_PROJECT_NAME",
    "INPUT_GITHUB_TOKEN",
    "INPUT_REPO_OWNER_NAME",
    "INPUT_REPO_NAME",
    "GITHUB_REPOSITORY",
    "GITHUB_API_URL",
    "SLACK_API_URL",
    "RUNNER_DEBUG",
];

/// Inputs of the release notification run.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(
        long,
        env = "INPUT_SLACK_TOKEN",
        default_value = "",
        hide_env_values = true,
        hide_default_value = true
    )]
    /// Slack bot token used to post the message.
    pub slack_token: String,

    #[arg(long, env = "INPUT_CHANNEL_ID", default_value = "")]
    /// Slack channel id to post in.
    pub channel_id: String,

    #[arg(long, env = "INPUT_PROJECT_NAME", default_value = "")]
    /// Project name shown in the message.
    pub project_name: String,

    #[arg(
        long,
        env = "INPUT_GITHUB_TOKEN",
        default_value = "",
        hide_env_values = true,
        hide_default_value = true
    )]
    /// GitHub token used to look up the latest release.
    pub github_token: String,

    #[arg(long, env = "INPUT_REPO_OWNER_NAME", default_value = "")]
    /// Repository owner. Falls back to the owner of GITHUB_REPOSITORY.
    pub repo_owner_name: String,

    #[arg(long, env = "INPUT_REPO_NAME", default_value = "")]
    /// Repository name. Falls back to the name of GITHUB_REPOSITORY.
    pub repo_name: String,

    #[arg(long, env = "GITHUB_REPOSITORY", default_value = "")]
    /// Repository that triggered the workflow (owner/repo).
    pub repository: String,

    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_GITHUB_API_URL)]
    /// GitHub REST API base URL.
    pub github_api_url: String,

    #[arg(long, env = "SLACK_API_URL", default_value = DEFAULT_SLACK_API_URL)]
    /// Slack Web API base URL.
    pub slack_api_url: String,

    #[arg(long, env = "RUNNER_DEBUG", value_parser = BoolishValueParser::new())]
    /// Enable debug logging.
    pub debug: bool,
}

/// Resolved inputs with overrides applied.
#[derive(Debug)]
pub struct Inputs {
    pub slack_token: SecretString,
    pub channel_id: String,
    pub project_name: String,
    pub github_token: SecretString,
    pub owner: String,
    pub repo: String,
}

impl Args {
    /// Resolve owner/repo overrides against the ambient repository. Values
    /// are passed through without validation.
    pub fn inputs(&self) -> Inputs {
        let (ambient_owner, ambient_repo) = split_repository(&self.repository);

        Inputs {
            slack_token: SecretString::from(self.slack_token.clone()),
            channel_id: self.channel_id.clone(),
            project_name: self.project_name.clone(),
            github_token: SecretString::from(self.github_token.clone()),
            owner: or_fallback(&self.repo_owner_name, ambient_owner),
            repo: or_fallback(&self.repo_name, ambient_repo),
        }
    }

    /// Configure the release lookup connection.
    pub fn remote_config(&self) -> RemoteConfig {
        RemoteConfig {
            base_uri: self.github_api_url.clone(),
            token: SecretString::from(self.github_token.clone()),
        }
    }
}

/// Split "owner/repo" into its parts. Anything unparsable yields empty
/// strings so the lookup reports the missing repository.
fn split_repository(repository: &str) -> (&str, &str) {
    repository.split_once('/').unwrap_or(("", ""))
}

fn or_fallback(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
