//! API endpoint configuration.

/// Base address used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api/v1";

/// Environment variable that overrides [`DEFAULT_API_BASE`].
pub const API_BASE_ENV: &str = "TASKDECK_API_BASE";

/// Durable-storage key under which the raw bearer token is kept.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Where the REST API lives. All endpoint paths are relative to `base_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    /// Build a config for `base_url`, dropping any trailing `/`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Config for an optional override. Missing or blank values give the
    /// default base.
    #[must_use]
    pub fn from_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(base) if !base.is_empty() => Self::new(base),
            _ => Self::default(),
        }
    }

    /// Build config from `TASKDECK_API_BASE`, falling back to the default.
    /// Blank values count as unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(API_BASE_ENV).ok().as_deref())
    }

    /// Absolute URL for an endpoint path such as `/tasks`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
