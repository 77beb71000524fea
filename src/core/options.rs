//! The canonical option mapping.

use super::symbol::{Key, Symbol};
use super::value::{Table, Value};
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Well-known option names.
pub mod keys {
    /// Extension names to activate; merged by list union.
    pub const REQUIRE: &str = "require";
    /// API user name.
    pub const USERNAME: &str = "username";
    /// API password.
    pub const PASSWORD: &str = "password";
    /// API root URI.
    pub const URI: &str = "uri";
    /// SSH gateway host.
    pub const GATEWAY: &str = "gateway";
    /// Path of the file a configuration is backed by.
    pub const CONFIGURATION_FILE: &str = "configuration_file";
    /// Number of retries on a failed request.
    pub const RETRY_ON_ERROR: &str = "retry_on_error";
    /// Seconds to wait between retries.
    pub const WAIT_BEFORE_RETRY: &str = "wait_before_retry";
}

/// A normalized option mapping: every key is a [`Symbol`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    entries: BTreeMap<Symbol, Value>,
}

impl Options {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an option by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Whether an option is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert an option, returning the previous value.
    pub fn insert(&mut self, key: impl Into<Symbol>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Iterate options in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, Symbol, Value> {
        self.entries.iter()
    }

    /// Iterate option names in order.
    pub fn keys(&self) -> impl Iterator<Item = &Symbol> {
        self.entries.keys()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// View this mapping as a raw table with symbolic keys.
    pub fn to_table(&self) -> Table {
        self.entries
            .iter()
            .map(|(key, value)| (Key::Symbol(key.clone()), value.clone()))
            .collect()
    }

    /// Option names joined for log output.
    pub(crate) fn key_list(&self) -> String {
        self.entries
            .keys()
            .map(Symbol::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<(Symbol, Value)> for Options {
    fn from_iter<I: IntoIterator<Item = (Symbol, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(Symbol, Value); N]> for Options {
    fn from(entries: [(Symbol, Value); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for Options {
    type Item = (Symbol, Value);
    type IntoIter = btree_map::IntoIter<Symbol, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = (&'a Symbol, &'a Value);
    type IntoIter = btree_map::Iter<'a, Symbol, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
