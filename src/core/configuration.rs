//! The configuration entity: one normalized, merged option mapping.

use super::chain::{DEFAULTS_PRIORITY, EXPLICIT_PRIORITY, FILE_PRIORITY, Layer, PrecedenceChain};
use super::client_options::ClientOptions;
use super::defaults::defaults;
use super::merge::MergeEngine;
use super::normalize::normalize;
use super::options::{Options, keys};
use super::value::{Table, Value, table_to_config_map};
use crate::error::{ConfigError, Result};
use crate::sources::{FileLoader, SourceLoader};
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A resolved set of client options.
///
/// Every configuration holds the defaults at the lowest precedence, any
/// file-loaded options above them, and explicitly supplied options on top.
/// Instances own their mapping outright; [`merge`](Self::merge) never touches
/// either operand and [`expand`](Self::expand) is the only in-place mutator.
///
/// # Examples
///
/// ```rust
/// use restfully_config::prelude::*;
///
/// let config = Configuration::new(Table::from([
///     (Key::text("username"), Value::from("crohr")),
///     (Key::symbol("require"), Value::from(vec!["something"])),
/// ]));
///
/// assert_eq!(config.get("username"), Some(&Value::from("crohr")));
/// assert_eq!(config.get("retry_on_error"), Some(&Value::from(5)));
/// assert_eq!(config.require(), vec!["something"]);
/// ```
#[derive(Clone)]
pub struct Configuration {
    options: Options,
    /// Path recorded by `load`, used by `expand` when no option names a file
    source_path: Option<PathBuf>,
    loader: Arc<dyn SourceLoader>,
    engine: MergeEngine,
}

impl Configuration {
    /// Build a configuration from a raw mapping laid over the defaults.
    pub fn new(raw: Table) -> Self {
        let engine = MergeEngine::default();
        let options = resolve(&engine, None, normalize(&raw));
        Self {
            options,
            source_path: None,
            loader: Arc::new(FileLoader::new()),
            engine,
        }
    }

    /// Load a configuration file and lay it over the defaults.
    ///
    /// The path is remembered on the instance (see
    /// [`configuration_file`](Self::configuration_file)) without being added
    /// to the option mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SourceUnavailable`] if the file cannot be read
    /// or decoded.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use restfully_config::prelude::*;
    ///
    /// let config = Configuration::load("config/api.yml")?;
    /// println!("API root: {:?}", config.get("uri"));
    /// # Ok::<(), ConfigError>(())
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().with_file(path.as_ref()).build()
    }

    /// Create a new builder for constructing a configuration.
    pub fn builder() -> super::ConfigurationBuilder {
        super::ConfigurationBuilder::new()
    }

    /// Assemble a configuration from already resolved parts.
    pub(crate) fn from_parts(
        options: Options,
        source_path: Option<PathBuf>,
        loader: Arc<dyn SourceLoader>,
        engine: MergeEngine,
    ) -> Self {
        Self {
            options,
            source_path,
            loader,
            engine,
        }
    }

    /// Replace the loader used by [`expand`](Self::expand).
    pub fn with_loader(mut self, loader: Arc<dyn SourceLoader>) -> Self {
        self.loader = loader;
        self
    }

    /// Replace the merge engine used by [`expand`](Self::expand) and
    /// [`merge`](Self::merge).
    pub fn with_merge_engine(mut self, engine: MergeEngine) -> Self {
        self.engine = engine;
        self
    }

    /// The resolved option mapping.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Look up a single option.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Extension names listed under `require`, in order.
    ///
    /// The names are opaque: nothing here loads or validates them.
    pub fn require(&self) -> Vec<&str> {
        match self.options.get(keys::REQUIRE) {
            Some(Value::List(items)) => items.iter().filter_map(Value::as_str).collect(),
            Some(Value::String(name)) => vec![name.as_str()],
            _ => Vec::new(),
        }
    }

    /// The file this configuration refers to: the `configuration_file`
    /// option if set, otherwise the path it was loaded from.
    pub fn configuration_file(&self) -> Option<PathBuf> {
        match self.options.get(keys::CONFIGURATION_FILE) {
            Some(Value::String(path)) => Some(PathBuf::from(path)),
            Some(other) => {
                tracing::warn!(
                    kind = other.type_name(),
                    "ignoring non-string configuration_file option"
                );
                self.source_path.clone()
            }
            None => self.source_path.clone(),
        }
    }

    /// The merge engine used by this configuration.
    pub fn merge_engine(&self) -> &MergeEngine {
        &self.engine
    }

    /// Re-resolve against the referenced file and the defaults.
    ///
    /// The file is re-read and becomes the base, the defaults sit below it,
    /// and the options currently held win over both. Without a file reference
    /// the options are re-resolved against the defaults only. Expanding twice
    /// with unchanged inputs yields the same options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SourceUnavailable`] if the referenced file cannot
    /// be loaded; the configuration is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use restfully_config::prelude::*;
    ///
    /// let mut config = Configuration::new(Table::from([
    ///     (Key::symbol("username"), Value::from("crohr")),
    ///     (Key::symbol("configuration_file"), Value::from("config/api.yml")),
    /// ]));
    /// config.expand()?;
    /// # Ok::<(), ConfigError>(())
    /// ```
    pub fn expand(&mut self) -> Result<&mut Self> {
        let file = match self.configuration_file() {
            Some(path) => {
                let raw = self.loader.load_raw(&path)?;
                let name = format!("{}:{}", self.loader.name(), path.display());
                Some((name, normalize(&raw)))
            }
            None => None,
        };

        tracing::debug!(
            file = file.as_ref().map(|(name, _)| name.as_str()),
            "expanding configuration"
        );

        self.options = resolve(&self.engine, file, self.options.clone());
        Ok(self)
    }

    /// Merge `other` on top of this configuration.
    ///
    /// `self` is the base and `other` the override, so `other` wins on
    /// colliding keys except for list-union keys such as `require`. Neither
    /// operand is modified.
    pub fn merge(&self, other: &Configuration) -> Configuration {
        let options = self.engine.merge(&self.options, &other.options);
        tracing::debug!(keys = %options.key_list(), "merged configurations");

        Self {
            options,
            source_path: other.source_path.clone().or_else(|| self.source_path.clone()),
            loader: Arc::clone(&self.loader),
            engine: self.engine.clone(),
        }
    }

    /// Deserialize the options into a typed structure.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DeserializationError`] if the options do not fit `T`.
    pub fn try_deserialize<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let table = table_to_config_map(&self.options.to_table());
        config::Value::new(None, config::ValueKind::Table(table))
            .try_deserialize::<T>()
            .map_err(|e| ConfigError::DeserializationError(e.to_string()))
    }

    /// The options a REST client session reads.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DeserializationError`] if a known option has the
    /// wrong type.
    pub fn client_options(&self) -> Result<ClientOptions> {
        self.try_deserialize()
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("keys", &self.options.key_list())
            .field("source_path", &self.source_path)
            .field("loader", &self.loader.name())
            .finish()
    }
}

/// Fold defaults, an optional file layer and explicit options, in that order.
pub(crate) fn resolve(
    engine: &MergeEngine,
    file: Option<(String, Options)>,
    explicit: Options,
) -> Options {
    let mut chain = PrecedenceChain::new(engine)
        .with_layer(Layer::new("defaults", DEFAULTS_PRIORITY, defaults()))
        .with_layer(Layer::new("explicit", EXPLICIT_PRIORITY, explicit));

    if let Some((name, options)) = file {
        chain.add_layer(Layer::new(name, FILE_PRIORITY, options));
    }

    chain.resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Key;
    use crate::sources::StaticLoader;

    fn fixture() -> Table {
        Table::from([
            (Key::text("require"), Value::from(vec!["ApplicationVndBonfireXml"])),
            (Key::text("username"), Value::from("someone")),
            (Key::text("uri"), Value::from("https://api.bonfire-project.eu/")),
            (Key::text("password"), Value::from("p4ssw0rd")),
            (Key::text("gateway"), Value::from("ssh.bonfire.grid5000.fr")),
        ])
    }

    fn loader() -> Arc<dyn SourceLoader> {
        Arc::new(StaticLoader::new().with_table("fixture.yml", fixture()))
    }

    #[test]
    fn test_new_applies_defaults() {
        let config = Configuration::new(Table::new());
        assert_eq!(config.options(), &defaults());
    }

    #[test]
    fn test_new_overrides_defaults() {
        let config = Configuration::new(Table::from([(
            Key::text("retry_on_error"),
            Value::from(1),
        )]));
        assert_eq!(config.get("retry_on_error"), Some(&Value::from(1)));
        assert_eq!(config.get("wait_before_retry"), Some(&Value::from(5)));
    }

    #[test]
    fn test_builder_load_records_path_outside_options() {
        let config = Configuration::builder()
            .with_loader(loader())
            .with_file("fixture.yml")
            .build()
            .unwrap();

        assert_eq!(config.options().len(), 7);
        assert!(!config.options().contains_key(keys::CONFIGURATION_FILE));
        assert_eq!(config.configuration_file(), Some(PathBuf::from("fixture.yml")));
    }

    #[test]
    fn test_expand_file_is_lower_precedence() {
        let mut config = Configuration::new(Table::from([
            (Key::symbol("username"), Value::from("crohr")),
            (Key::symbol("require"), Value::from(vec!["something"])),
            (Key::symbol("configuration_file"), Value::from("fixture.yml")),
        ]))
        .with_loader(loader());

        config.expand().unwrap();

        assert_eq!(config.get("username"), Some(&Value::from("crohr")));
        assert_eq!(
            config.get("require"),
            Some(&Value::from(vec!["ApplicationVndBonfireXml", "something"]))
        );
        assert_eq!(config.get("password"), Some(&Value::from("p4ssw0rd")));
        assert_eq!(config.get("configuration_file"), Some(&Value::from("fixture.yml")));
    }

    #[test]
    fn test_expand_is_idempotent() {
        let mut config = Configuration::new(Table::from([
            (Key::symbol("require"), Value::from(vec!["something", "ApplicationVndBonfireXml"])),
            (Key::symbol("configuration_file"), Value::from("fixture.yml")),
        ]))
        .with_loader(loader());

        config.expand().unwrap();
        let once = config.options().clone();
        config.expand().unwrap();

        assert_eq!(config.options(), &once);
        assert_eq!(config.require(), vec!["ApplicationVndBonfireXml", "something"]);
    }

    #[test]
    fn test_expand_without_file_keeps_options() {
        let mut config = Configuration::new(Table::from([(Key::text("uri"), Value::from("u"))]));
        let before = config.options().clone();
        config.expand().unwrap();
        assert_eq!(config.options(), &before);
    }

    #[test]
    fn test_failed_expand_leaves_configuration_unchanged() {
        let mut config = Configuration::new(Table::from([
            (Key::symbol("username"), Value::from("crohr")),
            (Key::symbol("configuration_file"), Value::from("missing.yml")),
        ]))
        .with_loader(loader());
        let before = config.options().clone();

        let err = config.expand().unwrap_err();
        assert!(err.is_source_unavailable());
        assert_eq!(config.options(), &before);
    }

    #[test]
    fn test_non_string_configuration_file_falls_back_to_loaded_path() {
        let loaded = Configuration::builder()
            .with_loader(loader())
            .with_file("fixture.yml")
            .build()
            .unwrap();
        let explicit = Configuration::new(Table::from([
            (Key::symbol("configuration_file"), Value::from(42)),
            (Key::symbol("username"), Value::from("crohr")),
        ]));
        let mut config = loaded.merge(&explicit);

        assert_eq!(config.configuration_file(), Some(PathBuf::from("fixture.yml")));

        config.expand().unwrap();
        assert_eq!(config.get("username"), Some(&Value::from("crohr")));
        assert_eq!(config.get("gateway"), Some(&Value::from("ssh.bonfire.grid5000.fr")));
        assert_eq!(config.get("configuration_file"), Some(&Value::from(42)));
    }

    #[test]
    fn test_non_string_configuration_file_without_loaded_path() {
        let mut config = Configuration::new(Table::from([(
            Key::symbol("configuration_file"),
            Value::from(vec!["a.yml"]),
        )]))
        .with_loader(loader());
        let before = config.options().clone();

        assert!(config.configuration_file().is_none());
        config.expand().unwrap();
        assert_eq!(config.options(), &before);
    }

    #[test]
    fn test_merge_argument_wins() {
        let base = Configuration::new(Table::from([(Key::text("uri"), Value::from("a"))]));
        let over = Configuration::new(Table::from([(Key::text("uri"), Value::from("b"))]));

        assert_eq!(base.merge(&over).get("uri"), Some(&Value::from("b")));
        assert_eq!(over.merge(&base).get("uri"), Some(&Value::from("a")));
        // Operands are untouched
        assert_eq!(base.get("uri"), Some(&Value::from("a")));
    }

    #[test]
    fn test_merge_with_self_is_idempotent() {
        let config = Configuration::new(Table::from([
            (Key::text("require"), Value::from(vec!["A", "B"])),
            (Key::text("uri"), Value::from("u")),
        ]));
        assert_eq!(config.merge(&config).options(), config.options());
    }

    #[test]
    fn test_require_accessor() {
        let config = Configuration::new(Table::from([(
            Key::text("require"),
            Value::from("Single"),
        )]));
        assert_eq!(config.require(), vec!["Single"]);

        let config = Configuration::new(Table::new());
        assert!(config.require().is_empty());
    }

    #[test]
    fn test_custom_merge_engine() {
        let engine = MergeEngine::default().with_list_union_key("hosts");
        let base = Configuration::new(Table::from([(Key::text("hosts"), Value::from(vec!["a"]))]))
            .with_merge_engine(engine);
        let over = Configuration::new(Table::from([(Key::text("hosts"), Value::from(vec!["b"]))]));

        assert_eq!(base.merge(&over).get("hosts"), Some(&Value::from(vec!["a", "b"])));
    }

    #[test]
    fn test_client_options() {
        let config = Configuration::builder()
            .with_loader(loader())
            .with_file("fixture.yml")
            .build()
            .unwrap();

        let client = config.client_options().unwrap();
        assert_eq!(client.username.as_deref(), Some("someone"));
        assert_eq!(client.gateway.as_deref(), Some("ssh.bonfire.grid5000.fr"));
        assert_eq!(client.require, vec!["ApplicationVndBonfireXml".to_string()]);
        assert_eq!(client.retry_on_error, 5);
        assert_eq!(client.wait_before_retry, 5);
        assert!(client.configuration_file.is_none());
        assert!(!format!("{:?}", client).contains("p4ssw0rd"));
    }

    #[test]
    fn test_client_options_type_mismatch() {
        let config = Configuration::new(Table::from([(
            Key::text("retry_on_error"),
            Value::from(vec![Value::Nil]),
        )]));
        assert!(matches!(
            config.client_options(),
            Err(ConfigError::DeserializationError(_))
        ));
    }

    #[test]
    fn test_debug_lists_keys() {
        let config = Configuration::new(Table::from([(Key::symbol("uri"), Value::from("u"))]));
        let debug = format!("{:?}", config);
        assert!(debug.contains("retry_on_error,uri,wait_before_retry"));
    }
}
