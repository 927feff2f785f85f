//! Client Configuration
//!
//! The backend origin is baked in at build time from `DOCQA_API_URL`.

/// Origin used when no API URL is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Build-time override for the backend origin
const API_URL_ENV: Option<&str> = option_env!("DOCQA_API_URL");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash
    pub api_url: String,
}

impl ClientConfig {
    /// Create a config for an explicit origin.
    ///
    /// Blank values fall back to [`DEFAULT_API_URL`] and trailing slashes are
    /// stripped so endpoint paths can be appended directly.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: normalize_api_url(&api_url.into()),
        }
    }

    /// Config from the build environment
    pub fn from_env() -> Self {
        Self::new(API_URL_ENV.unwrap_or(DEFAULT_API_URL))
    }

    /// Full URL for an endpoint path such as `/upload`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

fn normalize_api_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = ClientConfig::new("http://api.example.com/");
        assert_eq!(config.api_url, "http://api.example.com");
    }

    #[test]
    fn test_blank_url_falls_back_to_default() {
        assert_eq!(ClientConfig::new("").api_url, DEFAULT_API_URL);
        assert_eq!(ClientConfig::new("   ").api_url, DEFAULT_API_URL);
        assert_eq!(ClientConfig::new("///").api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let config = ClientConfig::new("http://localhost:8000");
        assert_eq!(config.endpoint("/upload"), "http://localhost:8000/upload");
        assert_eq!(config.endpoint("ask"), "http://localhost:8000/ask");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let config = ClientConfig::new("https://example.com/qa/");
        assert_eq!(config.endpoint("/ask"), "https://example.com/qa/ask");
    }

    #[test]
    fn test_from_env_is_normalized() {
        let config = ClientConfig::from_env();
        assert!(!config.api_url.is_empty());
        assert!(!config.api_url.ends_with('/'));
    }
}
