//! Process-wide client configuration.
//!
//! Two settable values: the base URL prefix every request path is joined
//! onto, and default request options (query parameters and headers) merged
//! into every composed request.
//!
//! The global configuration must be written once, during initialization,
//! before the first request is issued. The `RwLock` keeps reads coherent
//! but there is deliberately no enforcement of the single-writer
//! constraint. Prefer [`RestClient::with_config`](crate::RestClient::with_config)
//! over the global where possible.

use once_cell::sync::Lazy;
use std::sync::RwLock;

pub const DEFAULT_BASE_URL: &str = "/api";

#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
    default_params: Vec<(String, String)>,
    default_headers: Vec<(String, String)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_params: Vec::new(),
            default_headers: Vec::new(),
        }
    }
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the URL prefix joined in front of every resource path.
    ///
    /// A trailing slash is stripped so that joining with the leading-slash
    /// resource paths never doubles the separator.
    pub fn base_url(&mut self, url: impl Into<String>) -> &mut Self {
        let mut url = url.into();
        while url.ends_with('/') {
            url.pop();
        }
        self.base_url = url;
        self
    }

    /// Adds a query parameter included in every request.
    pub fn default_param(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.default_params.push((key.into(), value.into()));
        self
    }

    /// Adds a header included in every request.
    pub fn default_header(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    pub(crate) fn base(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn params(&self) -> &[(String, String)] {
        &self.default_params
    }

    pub(crate) fn headers(&self) -> &[(String, String)] {
        &self.default_headers
    }
}

static GLOBAL: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Mutates the process-wide configuration through a callback.
///
/// ```rust,no_run
/// restide::configure(|c| {
///     c.base_url("https://example.com/api")
///         .default_header("x-api-key", "secret");
/// });
/// ```
///
/// Call once at startup, before any request is issued.
pub fn configure(f: impl FnOnce(&mut Config)) {
    let mut config = GLOBAL.write().expect("configuration lock poisoned");
    f(&mut config);
}

/// Snapshot of the process-wide configuration, taken at request
/// composition time.
pub(crate) fn global() -> Config {
    GLOBAL.read().expect("configuration lock poisoned").clone()
}
