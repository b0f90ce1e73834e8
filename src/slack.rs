//! Slack Web API notification delivery.

/// reqwest client posting to `chat.postMessage`.
pub mod client;

/// Wire request descriptor for `chat.postMessage`.
pub mod request;

/// Common traits for notification delivery.
pub mod traits;

/// Payload and response types for the Slack Web API.
pub mod types;
