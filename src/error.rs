//! Error types for the release notification run.

use thiserror::Error;

/// Main error type for release notification operations.
#[derive(Error, Debug)]
pub enum NotifyError {
    // Release lookup errors
    #[error("Failed to fetch latest release: {0}")]
    ReleaseLookup(String),

    // Slack errors
    /// The connection failed before a complete response arrived. No further
    /// detail is available in that case.
    #[error("Failed to fetch Slack")]
    Transport,

    #[error("❌ Failed request: {body}")]
    Protocol { body: String },

    // Local errors - automatic conversions via #[from]
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("URL parse error: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to write action output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type alias using NotifyError
pub type Result<T> = std::result::Result<T, NotifyError>;

impl NotifyError {
    /// Create a release lookup error
    pub fn release_lookup(msg: impl Into<String>) -> Self {
        Self::ReleaseLookup(msg.into())
    }

    /// Create a protocol error carrying the raw response body
    pub fn protocol(body: impl Into<String>) -> Self {
        Self::Protocol { body: body.into() }
    }
}

// Any octocrab failure means the latest release could not be resolved
impl From<octocrab::Error> for NotifyError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. } => {
                Self::ReleaseLookup(format!(
                    "GitHub API error ({}): {}",
                    source.status_code, source.message
                ))
            }
            _ => Self::ReleaseLookup(format!("GitHub API error: {}", err)),
        }
    }
}

// Connection level failures carry no detail beyond the fixed message
impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        log::debug!("slack transport error: {err}");
        Self::Transport
    }
}
