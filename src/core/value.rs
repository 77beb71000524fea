//! Heterogeneous option values and their raw mapping type.

use super::symbol::Key;
use config::ValueKind;
use std::collections::{BTreeMap, HashMap};

/// A raw mapping whose keys may be textual or symbolic.
pub type Table = BTreeMap<Key, Value>;

/// An option value.
///
/// Tables nested inside an [`Options`](super::Options) mapping carry symbolic
/// keys only. Tables nested inside a list are left as they arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent or null value.
    Nil,
    /// A boolean.
    Boolean(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    List(Vec<Value>),
    /// A nested mapping.
    Table(Table),
}

impl Value {
    /// The string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The integer payload, if this is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The list payload, if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// The table payload, if this is a table.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Whether this is [`Value::Nil`].
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Short name of the variant, for log output.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Table(_) => "table",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<Table> for Value {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

impl From<config::Value> for Value {
    fn from(value: config::Value) -> Self {
        match value.kind {
            ValueKind::Nil => Self::Nil,
            ValueKind::Boolean(b) => Self::Boolean(b),
            ValueKind::I64(i) => Self::Integer(i),
            ValueKind::I128(i) => i64::try_from(i).map_or(Self::Float(i as f64), Self::Integer),
            ValueKind::U64(i) => i64::try_from(i).map_or(Self::Float(i as f64), Self::Integer),
            ValueKind::U128(i) => i64::try_from(i).map_or(Self::Float(i as f64), Self::Integer),
            ValueKind::Float(f) => Self::Float(f),
            ValueKind::String(s) => Self::String(s),
            ValueKind::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            ValueKind::Table(map) => Self::Table(
                map.into_iter()
                    .map(|(key, value)| (Key::Text(key), Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for config::Value {
    fn from(value: &Value) -> Self {
        let kind = match value {
            Value::Nil => ValueKind::Nil,
            Value::Boolean(b) => ValueKind::Boolean(*b),
            Value::Integer(i) => ValueKind::I64(*i),
            Value::Float(f) => ValueKind::Float(*f),
            Value::String(s) => ValueKind::String(s.clone()),
            Value::List(items) => ValueKind::Array(items.iter().map(config::Value::from).collect()),
            Value::Table(table) => ValueKind::Table(table_to_config_map(table)),
        };
        config::Value::new(None, kind)
    }
}

/// Convert a raw table to a `config` map, keyed by each key's name.
pub(crate) fn table_to_config_map(table: &Table) -> HashMap<String, config::Value> {
    table
        .iter()
        .map(|(key, value)| (key.name().to_string(), config::Value::from(value)))
        .collect()
}

/// Convert a `config` map to a raw table with textual keys.
pub(crate) fn config_map_to_table(map: HashMap<String, config::Value>) -> Table {
    map.into_iter()
        .map(|(key, value)| (Key::Text(key), Value::from(value)))
        .collect()
}
