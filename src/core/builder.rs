//! Builder for constructing Configuration instances.

use super::configuration::{Configuration, resolve};
use super::merge::MergeEngine;
use super::normalize::normalize;
use super::symbol::{Key, Symbol};
use super::value::{Table, Value};
use crate::error::Result;
use crate::sources::{FileLoader, SourceLoader};
use std::path::PathBuf;
use std::sync::Arc;

/// Builder for constructing a [`Configuration`].
///
/// Provides a fluent interface over the three option layers: the defaults
/// (always present), an optional file, and explicit options.
///
/// # Examples
///
/// ```rust,no_run
/// use restfully_config::prelude::*;
///
/// let config = Configuration::builder()
///     .with_file("config/api.yml")
///     .with_option("username", "crohr")
///     .with_option("require", vec!["something"])
///     .build()?;
/// # Ok::<(), ConfigError>(())
/// ```
pub struct ConfigurationBuilder {
    options: Table,
    file_path: Option<PathBuf>,
    loader: Option<Arc<dyn SourceLoader>>,
    engine: MergeEngine,
}

impl ConfigurationBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            options: Table::new(),
            file_path: None,
            loader: None,
            engine: MergeEngine::default(),
        }
    }

    /// Add explicit options from a raw mapping.
    ///
    /// Entries replace any previously added explicit entry with the same raw key.
    pub fn with_options(mut self, raw: Table) -> Self {
        self.options.extend(raw);
        self
    }

    /// Add a single explicit option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options
            .insert(Key::Symbol(Symbol::new(key)), value.into());
        self
    }

    /// Back the configuration with a file, loaded below the explicit options.
    ///
    /// Only one file is used; a later call replaces the earlier path.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Use a custom loader instead of [`FileLoader`].
    pub fn with_loader(mut self, loader: Arc<dyn SourceLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Merge `key` by list union in addition to `require`.
    pub fn with_list_union_key(mut self, key: impl Into<Symbol>) -> Self {
        self.engine = self.engine.with_list_union_key(key);
        self
    }

    /// Use a custom merge engine.
    pub fn with_merge_engine(mut self, engine: MergeEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Build the configuration.
    ///
    /// Resolves defaults, then the file (if any), then the explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SourceUnavailable`](crate::error::ConfigError::SourceUnavailable)
    /// if the file cannot be loaded.
    pub fn build(self) -> Result<Configuration> {
        let loader = self
            .loader
            .unwrap_or_else(|| Arc::new(FileLoader::new()) as Arc<dyn SourceLoader>);

        let file = match &self.file_path {
            Some(path) => {
                let raw = loader.load_raw(path)?;
                let name = format!("{}:{}", loader.name(), path.display());
                Some((name, normalize(&raw)))
            }
            None => None,
        };

        let options = resolve(&self.engine, file, normalize(&self.options));

        tracing::debug!(
            file = ?self.file_path,
            loader = %loader.name(),
            keys = options.len(),
            "built configuration"
        );

        Ok(Configuration::from_parts(
            options,
            self.file_path,
            loader,
            self.engine,
        ))
    }
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
