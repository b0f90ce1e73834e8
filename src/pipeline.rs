//! One release notification run: lookup, format, notify.
use log::*;
use secrecy::ExposeSecret;

use crate::{
    cli::Inputs,
    error::Result,
    forge::traits::ReleaseSource,
    message::format_release,
    slack::{traits::Notifier, types::NotificationPayload},
};

/// Fetch the latest release and announce it. The notification is only sent
/// once the lookup has succeeded.
pub async fn run(
    inputs: &Inputs,
    source: &dyn ReleaseSource,
    notifier: &dyn Notifier,
) -> Result<()> {
    let release = source.latest_release(&inputs.owner, &inputs.repo).await?;

    let message = format_release(
        &inputs.project_name,
        &inputs.owner,
        &inputs.repo,
        &release,
    );

    info!("changelogUrl: {}", message.changelog_url);

    let payload = NotificationPayload::new(
        &inputs.channel_id,
        inputs.slack_token.expose_secret(),
        &message,
    );

    info!("payload: {}", serde_json::to_string(&payload.redacted())?);

    notifier.post_message(&payload).await
}
