//! API endpoint configuration.
//!
//! The base URL is baked in at compile time from `AUTH_API_BASE_URL` since the
//! WASM bundle has no process environment to read at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `AUTH_API_BASE_URL` is not set at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Location of the auth API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config for `base_url`, dropping any trailing slashes.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Read the compile-time `AUTH_API_BASE_URL`, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        match option_env!("AUTH_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    /// Absolute URL for an API `path`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
