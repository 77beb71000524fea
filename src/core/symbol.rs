//! Canonical and raw option keys.

use std::borrow::Borrow;
use std::fmt;

/// The canonical key every option is compared and merged under.
///
/// Raw mappings may name the same option either textually (`"username"`) or
/// symbolically (`:username`); normalization turns both into one `Symbol`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The symbol's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A key as it arrives in a raw mapping.
///
/// Variant order matters: within a [`Table`](super::Table), textual keys sort
/// before symbolic ones, so when both spellings of a key are present the
/// symbolic one is normalized last and wins.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// A textual key, e.g. one decoded from a file.
    Text(String),
    /// A key that is already symbolic.
    Symbol(Symbol),
}

impl Key {
    /// Create a textual key.
    pub fn text(name: impl Into<String>) -> Self {
        Self::Text(name.into())
    }

    /// Create a symbolic key.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(Symbol::new(name))
    }

    /// The key's name, regardless of representation.
    pub fn name(&self) -> &str {
        match self {
            Self::Text(name) => name,
            Self::Symbol(symbol) => symbol.as_str(),
        }
    }

    /// Convert to the canonical representation.
    pub fn to_symbol(&self) -> Symbol {
        match self {
            Self::Text(name) => Symbol::new(name.as_str()),
            Self::Symbol(symbol) => symbol.clone(),
        }
    }

    /// Whether this key is already canonical.
    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::text(name)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Text(name)
    }
}

impl From<Symbol> for Key {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(name) => write!(f, "{:?}", name),
            Self::Symbol(symbol) => write!(f, "{}", symbol),
        }
    }
}
