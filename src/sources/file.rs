//! File-based raw source loader.

use super::SourceLoader;
use crate::core::Table;
use crate::core::value::config_map_to_table;
use crate::error::{ConfigError, Result};
use config::{FileFormat, Format};
use std::fs;
use std::path::Path;

/// Loads raw mappings from YAML, TOML, or JSON files.
///
/// The format is detected from the file extension:
/// - `.yaml`, `.yml` -> YAML
/// - `.toml` -> TOML
/// - `.json` -> JSON
///
/// Keys are kept exactly as written: no case folding, and dotted keys stay
/// single keys.
///
/// # Examples
///
/// ```rust,no_run
/// use restfully_config::sources::{FileLoader, SourceLoader};
/// use std::path::Path;
///
/// let raw = FileLoader::new().load_raw(Path::new("config/api.yml"))?;
/// # Ok::<(), restfully_config::error::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLoader;

impl FileLoader {
    /// Create a new file loader.
    pub fn new() -> Self {
        Self
    }

    /// Pick the decoder for a path from its extension.
    fn detect_format(path: &Path) -> Result<FileFormat> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ConfigError::source_unavailable(path, "unable to determine file format")
            })?;

        match extension {
            "yaml" | "yml" => Ok(FileFormat::Yaml),
            "toml" => Ok(FileFormat::Toml),
            "json" => Ok(FileFormat::Json),
            _ => Err(ConfigError::source_unavailable(
                path,
                format!(
                    "unsupported file extension: {}. Supported: .yaml, .yml, .toml, .json",
                    extension
                ),
            )),
        }
    }
}

/// Whether a YAML text holds no document at all. Such a file decodes to null.
fn is_empty_yaml(text: &str) -> bool {
    text.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

impl SourceLoader for FileLoader {
    fn load_raw(&self, path: &Path) -> Result<Table> {
        let format = Self::detect_format(path)?;

        if !path.is_file() {
            return Err(ConfigError::source_unavailable(path, "file not found"));
        }

        let text = fs::read_to_string(path).map_err(|e| {
            ConfigError::source_unavailable(path, format!("failed to read: {}", e))
        })?;

        if matches!(format, FileFormat::Yaml) && is_empty_yaml(&text) {
            return Err(ConfigError::source_unavailable(path, "not a mapping: empty document"));
        }

        // Parse only; `Config::build` would rewrite keys as path expressions
        let uri = path.display().to_string();
        let map = Format::parse(&format, Some(&uri), &text).map_err(|e| {
            ConfigError::source_unavailable(path, format!("failed to decode: {}", e))
        })?;

        tracing::debug!(path = %path.display(), keys = map.len(), "loaded configuration file");

        Ok(config_map_to_table(map))
    }

    fn name(&self) -> String {
        "file".to_string()
    }
}
