//! Implements the ReleaseSource trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::{Octocrab, service::middleware::retry::RetryConfig};

use crate::{
    error::{NotifyError, Result},
    forge::{config::RemoteConfig, traits::ReleaseSource, types::ReleaseRecord},
};

/// GitHub release lookup using Octocrab for API interactions.
pub struct Github {
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and API
    /// base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let builder = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(config.base_uri.clone())?
            .add_retry_config(RetryConfig::None);
        let instance = builder.build()?;

        Ok(Self { instance })
    }
}

#[async_trait]
impl ReleaseSource for Github {
    async fn latest_release(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<ReleaseRecord> {
        if owner.is_empty() || repo.is_empty() {
            return Err(NotifyError::release_lookup(format!(
                "owner and repo must both be set: owner={owner:?}, repo={repo:?}"
            )));
        }

        let route = format!("/repos/{owner}/{repo}/releases/latest");

        debug!("fetching latest release: {route}");

        let release: ReleaseRecord = self
            .instance
            .get(route, None::<&()>)
            .await
            .inspect_err(|err| {
                error!("failed to fetch latest release for {owner}/{repo}: {err}")
            })?;

        info!("found latest release for {owner}/{repo}: {}", release.tag_name);

        Ok(release)
    }
}
