//! Backend API location.
//!
//! The WASM bundle has no process environment at runtime, so the override is
//! captured at build time from `NOBLEGUARD_API_BASE_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Address of the detection backend when no override is set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Resolved backend location, provided to the component tree as context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Build config from an optional override, trimming trailing slashes and
    /// falling back to [`DEFAULT_API_BASE_URL`] when the override is blank.
    pub fn from_override(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(|v| v.trim().trim_end_matches('/'))
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_owned();
        Self { base_url }
    }

    /// Config baked in at compile time from `NOBLEGUARD_API_BASE_URL`.
    pub fn from_build_env() -> Self {
        Self::from_override(option_env!("NOBLEGUARD_API_BASE_URL"))
    }

    /// Absolute URL for an endpoint path such as `/prompts`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
