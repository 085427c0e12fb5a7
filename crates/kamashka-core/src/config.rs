//! API Configuration
//!
//! One explicit configuration value, handed to the transport and the
//! endpoint client at start-up.

use std::time::Duration;

/// Base URL used when the build environment does not provide one
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Fixed timeout applied to every request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the content/recruitment API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Base URL without a trailing slash, e.g. `https://api.example.com`
    pub api_base_url: String,
    pub timeout: Duration,
}

impl SiteConfig {
    pub fn new(api_base_url: impl AsRef<str>) -> Self {
        Self {
            api_base_url: normalize_base_url(api_base_url.as_ref()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read `SITE_API_BASE_URL` as baked in at compile time.
    ///
    /// A CSR bundle has no process environment at runtime, so this is the
    /// only place the environment is consulted.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("SITE_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Join an endpoint path (starting with `/`) onto the base URL
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_removed() {
        let config = SiteConfig::new("https://api.kamashka.com/ ");
        assert_eq!(config.api_base_url, "https://api.kamashka.com");
        assert_eq!(config.url_for("/contact/"), "https://api.kamashka.com/contact/");
    }

    #[test]
    fn test_empty_falls_back_to_default() {
        let config = SiteConfig::new("  ");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_with_timeout() {
        let config = SiteConfig::default().with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
