pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Client configuration, resolved once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash, never empty
    pub api_base_url: String,
    /// Key sent as `X-API-Key`, empty when not configured
    pub api_key: String,
}

impl ClientConfig {
    /// Resolve from optional raw inputs, applying the defaults.
    pub fn resolve(base_url: Option<&str>, api_key: Option<&str>) -> Self {
        let raw = base_url.unwrap_or(DEFAULT_API_BASE_URL);
        let api_base_url = match raw.strip_suffix('/') {
            Some("") => DEFAULT_API_BASE_URL.to_string(),
            Some(stripped) => stripped.to_string(),
            None if raw.is_empty() => DEFAULT_API_BASE_URL.to_string(),
            None => raw.to_string(),
        };

        Self {
            api_base_url,
            api_key: api_key.unwrap_or_default().trim().to_string(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Join `path` onto the base URL with exactly one slash between them.
    pub fn build_api_url(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}/{}", self.api_base_url, path)
    }
}
