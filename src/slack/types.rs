use serde::{Deserialize, Serialize};
use std::fmt;

use crate::message::ReleaseMessage;

/// Replacement for the token whenever a payload is logged.
pub const REDACTED: &str = "***";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    pub pretext: String,
    pub text: String,
}

/// Body of a `chat.postMessage` call.
#[derive(Clone, PartialEq, Serialize)]
pub struct NotificationPayload {
    pub channel: String,
    /// Slack accepts the token in the body as well as in the bearer header;
    /// both are sent.
    pub token: String,
    pub attachments: Vec<Attachment>,
}

impl NotificationPayload {
    pub fn new(channel: &str, token: &str, message: &ReleaseMessage) -> Self {
        Self {
            channel: channel.to_string(),
            token: token.to_string(),
            attachments: vec![Attachment {
                pretext: message.pretext.clone(),
                text: message.text.clone(),
            }],
        }
    }

    /// Copy of the payload that is safe to write to logs.
    pub fn redacted(&self) -> Self {
        Self {
            token: REDACTED.to_string(),
            ..self.clone()
        }
    }
}

impl fmt::Debug for NotificationPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationPayload")
            .field("channel", &self.channel)
            .field("token", &REDACTED)
            .field("attachments", &self.attachments)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
pub struct PostMessageResponse {
    #[serde(default)]
    pub ok: bool,
    /// Slack error code, e.g. "invalid_auth" or "channel_not_found"
    pub error: Option<String>,
}
