//! Precedence chain that folds option layers through the merge engine.

use super::merge::MergeEngine;
use super::options::Options;

/// Priority of the built-in defaults.
pub const DEFAULTS_PRIORITY: i32 = 0;

/// Priority of options loaded from a configuration file.
pub const FILE_PRIORITY: i32 = 100;

/// Priority of options supplied explicitly in memory.
pub const EXPLICIT_PRIORITY: i32 = 300;

/// One source of options in a precedence chain.
#[derive(Debug, Clone)]
pub struct Layer {
    name: String,
    priority: i32,
    options: Options,
}

impl Layer {
    /// Create a layer. Higher priority layers override lower ones.
    pub fn new(name: impl Into<String>, priority: i32, options: Options) -> Self {
        Self {
            name: name.into(),
            priority,
            options,
        }
    }

    /// Human-readable name of the layer's source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The layer's priority.
    pub fn priority(&self) -> i32 {
        self.priority
    }
}

/// Resolves several option layers into one mapping.
///
/// Layers are sorted by priority (lowest first, insertion order among equals)
/// and merged pairwise, each result becoming the base for the next layer.
pub struct PrecedenceChain<'a> {
    engine: &'a MergeEngine,
    layers: Vec<Layer>,
}

impl<'a> PrecedenceChain<'a> {
    /// Create an empty chain using `engine` for every merge.
    pub fn new(engine: &'a MergeEngine) -> Self {
        Self {
            engine,
            layers: Vec::new(),
        }
    }

    /// Add a layer.
    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Add a layer, builder style.
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.add_layer(layer);
        self
    }

    /// Merge every layer in ascending priority. An empty chain yields an
    /// empty mapping.
    pub fn resolve(&self) -> Options {
        let mut sorted: Vec<&Layer> = self.layers.iter().collect();
        sorted.sort_by_key(|layer| layer.priority);

        let mut resolved = Options::new();
        for layer in sorted {
            tracing::trace!(
                layer = %layer.name,
                priority = layer.priority,
                keys = %layer.options.key_list(),
                "merging option layer"
            );
            resolved = self.engine.merge(&resolved, &layer.options);
        }
        resolved
    }

    /// Layer names in the order they are merged.
    pub fn layer_names(&self) -> Vec<String> {
        let mut sorted: Vec<&Layer> = self.layers.iter().collect();
        sorted.sort_by_key(|layer| layer.priority);
        sorted.iter().map(|layer| layer.name.clone()).collect()
    }
}
