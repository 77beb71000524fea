//! In-memory raw source loader.

use super::SourceLoader;
use crate::core::Table;
use crate::error::{ConfigError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Serves raw mappings registered under a path.
///
/// Useful when the host application already holds decoded configuration, and
/// in tests.
///
/// # Examples
///
/// ```rust
/// use restfully_config::core::{Key, Table, Value};
/// use restfully_config::sources::{SourceLoader, StaticLoader};
/// use std::path::Path;
///
/// let loader = StaticLoader::new().with_table(
///     "api.yml",
///     Table::from([(Key::text("uri"), Value::from("https://api.example.com/"))]),
/// );
///
/// assert!(loader.load_raw(Path::new("api.yml")).is_ok());
/// assert!(loader.load_raw(Path::new("other.yml")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticLoader {
    tables: HashMap<PathBuf, Table>,
}

impl StaticLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `table` under `path`, replacing any previous entry.
    pub fn with_table(mut self, path: impl Into<PathBuf>, table: Table) -> Self {
        self.tables.insert(path.into(), table);
        self
    }
}

impl SourceLoader for StaticLoader {
    fn load_raw(&self, path: &Path) -> Result<Table> {
        self.tables
            .get(path)
            .cloned()
            .ok_or_else(|| ConfigError::source_unavailable(path, "no table registered"))
    }

    fn name(&self) -> String {
        format!("static:{}", self.tables.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Key, Value};

    #[test]
    fn test_returns_registered_table() {
        let table = Table::from([(Key::text("gateway"), Value::from("ssh.example.com"))]);
        let loader = StaticLoader::new().with_table("a.yml", table.clone());
        assert_eq!(loader.load_raw(Path::new("a.yml")).unwrap(), table);
    }

    #[test]
    fn test_unknown_path() {
        let loader = StaticLoader::new();
        let err = loader.load_raw(Path::new("missing.yml")).unwrap_err();
        assert!(err.is_source_unavailable());
    }

    #[test]
    fn test_name() {
        let loader = StaticLoader::new().with_table("a.yml", Table::new());
        assert_eq!(loader.name(), "static:1");
    }
}
