//! Error types and result aliases for PyPI client operations.
//!
//! Provides a unified error type that covers all failure conditions across
//! the client crates with actionable error messages.

use thiserror::Error;

/// Unified error type for all PyPI client operations
#[derive(Error, Debug)]
pub enum PypiError {
    // Transport errors
    #[error("network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("failed to decode registry response: {message}")]
    Decode { message: String },

    // Registry errors
    #[error("project '{name}' not found in registry")]
    ProjectNotFound { name: String },

    #[error("release '{version}' of '{name}' not found in registry")]
    ReleaseNotFound { name: String, version: String },

    // Query errors
    #[error("version '{version}' not present in response")]
    VersionNotFound { version: String },

    #[error("no package matching {criteria}")]
    PackageNotFound { criteria: String },

    #[error("empty search criteria will never match a package")]
    EmptyQuery,
}

/// Result type alias for PyPI client operations
pub type PypiResult<T> = Result<T, PypiError>;

impl PypiError {
    /// Create a network error from any error type
    pub fn network<E>(message: String, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message,
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PypiError::Network { .. })
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            PypiError::ProjectNotFound { .. } => {
                Some("Check the package name spelling or search the index directly")
            },
            PypiError::ReleaseNotFound { .. } | PypiError::VersionNotFound { .. } => {
                Some("List the project's releases to see which versions exist")
            },
            PypiError::Network { .. } => Some("Check your internet connection and try again"),
            PypiError::EmptyQuery => {
                Some("Set a filename, a url, or both before searching")
            },
            _ => None,
        }
    }
}
