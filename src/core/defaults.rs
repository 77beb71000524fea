//! Built-in baseline options.

use super::options::{Options, keys};
use super::symbol::Symbol;
use super::value::Value;
use std::sync::LazyLock;

/// Default number of retries on a failed request.
pub const DEFAULT_RETRY_ON_ERROR: i64 = 5;

/// Default number of seconds to wait between retries.
pub const DEFAULT_WAIT_BEFORE_RETRY: i64 = 5;

static DEFAULTS: LazyLock<Options> = LazyLock::new(|| {
    Options::from([
        (
            Symbol::new(keys::RETRY_ON_ERROR),
            Value::Integer(DEFAULT_RETRY_ON_ERROR),
        ),
        (
            Symbol::new(keys::WAIT_BEFORE_RETRY),
            Value::Integer(DEFAULT_WAIT_BEFORE_RETRY),
        ),
    ])
});

/// The default option set, applied with the lowest precedence in every
/// configuration.
pub fn defaults() -> Options {
    DEFAULTS.clone()
}
