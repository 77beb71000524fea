//! Key normalization: raw mappings to canonical option mappings.

use super::options::Options;
use super::symbol::Key;
use super::value::{Table, Value};

/// Normalize a raw mapping so every key, at every nesting level, is a symbol.
///
/// Values that are not tables are returned untouched, including lists (and any
/// tables inside those lists). When a textual and a symbolic spelling of the
/// same key coexist at one level, the last one visited wins; tables order
/// textual keys first, so the symbolic spelling is kept.
///
/// # Examples
///
/// ```rust
/// use restfully_config::core::{Key, Table, Value, normalize};
///
/// let raw = Table::from([
///     (Key::text("a"), Value::from(1)),
///     (Key::symbol("b"), Value::from("hello")),
/// ]);
///
/// let options = normalize(&raw);
/// assert_eq!(options.get("a"), Some(&Value::from(1)));
/// assert_eq!(options.get("b"), Some(&Value::from("hello")));
/// ```
pub fn normalize(raw: &Table) -> Options {
    raw.iter()
        .map(|(key, value)| (key.to_symbol(), normalize_value(value)))
        .collect()
}

fn normalize_value(value: &Value) -> Value {
    match value {
        Value::Table(table) => Value::Table(normalize_table(table)),
        other => other.clone(),
    }
}

fn normalize_table(table: &Table) -> Table {
    table
        .iter()
        .map(|(key, value)| (Key::Symbol(key.to_symbol()), normalize_value(value)))
        .collect()
}
