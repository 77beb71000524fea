//! Raw source loader trait.

use crate::core::Table;
use crate::error::Result;
use std::path::Path;

/// Trait for raw configuration loaders.
///
/// A loader turns a path into a raw mapping. It owns reading and decoding;
/// the rest of the crate only sees the resulting [`Table`]. Implement this
/// trait to back configurations with something other than files on disk.
pub trait SourceLoader: Send + Sync {
    /// Load the raw mapping stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SourceUnavailable`](crate::error::ConfigError::SourceUnavailable)
    /// if the path cannot be read or does not decode into a mapping.
    fn load_raw(&self, path: &Path) -> Result<Table>;

    /// Get a human-readable name for this loader (for logging/debugging).
    fn name(&self) -> String;
}
