//! Traits related to notification delivery
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{error::Result, slack::types::NotificationPayload};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Notifier {
    /// Deliver the payload. Succeeds only once the remote side confirmed the
    /// message was accepted.
    async fn post_message(&self, payload: &NotificationPayload) -> Result<()>;
}
