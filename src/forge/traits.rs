//! Traits related to release lookup
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{error::Result, forge::types::ReleaseRecord};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReleaseSource {
    /// Fetch the most recently published release for owner/repo.
    async fn latest_release(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<ReleaseRecord>;
}
