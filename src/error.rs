//! Error types for restfully-config.

use std::path::PathBuf;

/// Result type alias for restfully-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when working with configuration.
///
/// In-memory operations (normalization, merging, expanding without a file
/// reference) are total; only the load path produces errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration file could not be read or decoded into a mapping.
    #[error("Configuration source unavailable: {}: {reason}", .path.display())]
    SourceUnavailable {
        /// The path that was requested from the loader
        path: PathBuf,
        /// Why the loader gave up
        reason: String,
    },

    /// Failed to deserialize the merged options into a typed view.
    #[error("Failed to deserialize configuration: {0}")]
    DeserializationError(String),
}

impl ConfigError {
    /// Create a `SourceUnavailable` error for `path`.
    pub fn source_unavailable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error came from the load path.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }
}
