//! Typed view over a merged option mapping.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// The options a REST client session reads, deserialized from a
/// [`Configuration`](super::Configuration).
///
/// Keys the client does not know about are ignored. Extension names under
/// `require` are carried as-is; activating them is up to the caller.
#[derive(Clone, PartialEq, Deserialize)]
pub struct ClientOptions {
    /// API root URI.
    pub uri: Option<String>,
    /// API user name.
    pub username: Option<String>,
    /// API password.
    pub password: Option<String>,
    /// SSH gateway host.
    pub gateway: Option<String>,
    /// Extension names, in activation order.
    #[serde(default)]
    pub require: Vec<String>,
    /// Number of retries on a failed request.
    pub retry_on_error: u32,
    /// Seconds to wait between retries.
    pub wait_before_retry: u64,
    /// File the configuration was expanded from, if any.
    pub configuration_file: Option<PathBuf>,
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("uri", &self.uri)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("gateway", &self.gateway)
            .field("require", &self.require)
            .field("retry_on_error", &self.retry_on_error)
            .field("wait_before_retry", &self.wait_before_retry)
            .field("configuration_file", &self.configuration_file)
            .finish()
    }
}
