//! Core configuration types: keys, values, normalization, merging.

mod builder;
mod chain;
mod client_options;
mod configuration;
mod defaults;
mod merge;
mod normalize;
mod options;
mod symbol;
pub(crate) mod value;

pub use builder::ConfigurationBuilder;
pub use chain::{DEFAULTS_PRIORITY, EXPLICIT_PRIORITY, FILE_PRIORITY, Layer, PrecedenceChain};
pub use client_options::ClientOptions;
pub use configuration::Configuration;
pub use defaults::{DEFAULT_RETRY_ON_ERROR, DEFAULT_WAIT_BEFORE_RETRY, defaults};
pub use merge::{MergeEngine, list_union};
pub use normalize::normalize;
pub use options::{Options, keys};
pub use symbol::{Key, Symbol};
pub use value::{Table, Value};
