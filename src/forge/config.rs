//! Configuration for the release lookup connection.
use secrecy::SecretString;

/// Default REST endpoint for github.com.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Remote API connection configuration used to authenticate release lookups.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// API base URL (e.g., "https://api.github.com").
    pub base_uri: String,
    /// Access token for authentication.
    pub token: SecretString,
}
