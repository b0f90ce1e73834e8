//! Release lookup against the GitHub REST API.
//!
//! Provides token-based authentication and retrieval of the most recently
//! published release behind a common trait so the pipeline can be exercised
//! without network access.

/// Connection configuration for the release lookup API.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Common traits for release lookup abstraction.
pub mod traits;

/// Release data returned by the lookup API.
pub mod types;
