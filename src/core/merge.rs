//! Merge engine combining two option mappings.

use super::options::{Options, keys};
use super::symbol::Symbol;
use super::value::Value;
use std::collections::BTreeSet;

/// Combines two normalized option mappings under per-key rules.
///
/// For every key present in either mapping:
/// - present in one side only: that side's value is kept
/// - present in both and designated a list-union key, with lists on both
///   sides: the base list followed by override entries it does not already
///   contain, with duplicates dropped
/// - otherwise: the override value replaces the base value wholesale
///
/// Tables are never deep-merged.
///
/// # Examples
///
/// ```rust
/// use restfully_config::core::{MergeEngine, Options, Value};
///
/// let mut base = Options::new();
/// base.insert("require", vec!["ApplicationVndBonfireXml"]);
/// base.insert("username", "someone");
///
/// let mut over = Options::new();
/// over.insert("require", vec!["something"]);
/// over.insert("username", "crohr");
///
/// let merged = MergeEngine::default().merge(&base, &over);
/// assert_eq!(merged.get("username"), Some(&Value::from("crohr")));
/// assert_eq!(
///     merged.get("require"),
///     Some(&Value::from(vec!["ApplicationVndBonfireXml", "something"]))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeEngine {
    list_union_keys: BTreeSet<Symbol>,
}

impl MergeEngine {
    /// Create an engine where every key is plain overwrite.
    pub fn overwrite_only() -> Self {
        Self {
            list_union_keys: BTreeSet::new(),
        }
    }

    /// Designate an additional key as list-union.
    pub fn with_list_union_key(mut self, key: impl Into<Symbol>) -> Self {
        self.list_union_keys.insert(key.into());
        self
    }

    /// Whether `key` is merged by list union.
    pub fn is_list_union_key(&self, key: &str) -> bool {
        self.list_union_keys.contains(key)
    }

    /// The designated list-union keys, in order.
    pub fn list_union_keys(&self) -> impl Iterator<Item = &Symbol> {
        self.list_union_keys.iter()
    }

    /// Merge `over` on top of `base`, returning a new mapping.
    pub fn merge(&self, base: &Options, over: &Options) -> Options {
        let mut merged = base.clone();

        for (key, value) in over {
            let combined = match (base.get(key.as_str()), value) {
                (Some(Value::List(base_items)), Value::List(over_items))
                    if self.is_list_union_key(key.as_str()) =>
                {
                    Value::List(list_union(base_items, over_items))
                }
                _ => value.clone(),
            };
            merged.insert(key.clone(), combined);
        }

        merged
    }
}

impl Default for MergeEngine {
    /// `require` is the only list-union key.
    fn default() -> Self {
        Self::overwrite_only().with_list_union_key(keys::REQUIRE)
    }
}

/// Concatenate `base` and `over`, keeping the first occurrence of each value.
pub fn list_union(base: &[Value], over: &[Value]) -> Vec<Value> {
    let mut result: Vec<Value> = Vec::with_capacity(base.len() + over.len());
    for item in base.iter().chain(over) {
        if !result.contains(item) {
            result.push(item.clone());
        }
    }
    result
}
