//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read process environment at runtime, so the API
//! base URL is baked in from `PLANOVA_API_BASE_URL` when the crate is built.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// `localStorage` key holding the bearer credential.
pub const TOKEN_STORAGE_KEY: &str = "token";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build config from the compile-time `PLANOVA_API_BASE_URL` variable,
    /// falling back to [`DEFAULT_API_BASE_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_value(option_env!("PLANOVA_API_BASE_URL"))
    }

    /// Build config from an optional raw base URL. Blank values use the default.
    #[must_use]
    pub fn from_value(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url }
    }

    /// Join an endpoint path onto the base URL, inserting a `/` if missing.
    #[must_use]
    pub fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{endpoint}", self.base_url)
        } else {
            format!("{}/{endpoint}", self.base_url)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
