//! # restfully-config
//!
//! Layered, normalized configuration for REST API clients.
//!
//! ## Overview
//!
//! `restfully-config` resolves one option mapping from three sources:
//! - Built-in defaults (`retry_on_error`, `wait_before_retry`)
//! - An optional configuration file (YAML, TOML or JSON)
//! - Options supplied in memory
//!
//! Keys may arrive as text or as symbols; they are normalized to one canonical
//! [`Symbol`](core::Symbol) type before anything is compared. Later sources
//! overwrite earlier ones, except for list-union keys such as `require`, whose
//! lists are combined without duplicates.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use restfully_config::prelude::*;
//!
//! # fn example() -> Result<()> {
//! // Explicit options, backed by a file
//! let mut config = Configuration::new(Table::from([
//!     (Key::symbol("username"), Value::from("crohr")),
//!     (Key::symbol("require"), Value::from(vec!["something"])),
//!     (Key::symbol("configuration_file"), Value::from("config/api.yml")),
//! ]));
//!
//! // Pull in the file below the explicit options
//! config.expand()?;
//!
//! let client = config.client_options()?;
//! println!("API root: {:?}", client.uri);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod sources;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{
        ClientOptions, Configuration, ConfigurationBuilder, Key, MergeEngine, Options, Symbol,
        Table, Value,
    };
    pub use crate::error::{ConfigError, Result};
}
