//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated strategy API key.
///
/// The key is sent as the `X-Api-Key` header on every request. It must be
/// non-empty, and its value is masked in debug output so it does not leak
/// into logs.
///
/// # Example
///
/// ```rust
/// use strategy_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated base URL for the strategy API.
///
/// Trailing slashes are stripped so resource paths can be appended with a
/// single separator.
///
/// # Example
///
/// ```rust
/// use strategy_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.example.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins a relative resource path onto the base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A preferred response language, sent as `Accept-Language`.
///
/// The API uses POSIX-style locale tags such as `sk_SK`; BCP 47 tags such as
/// `en-GB` are accepted as well.
///
/// # Example
///
/// ```rust
/// use strategy_api::Language;
///
/// assert_eq!(Language::default().as_ref(), "sk_SK");
/// assert!(Language::new("en").is_ok());
/// assert!(Language::new("sk SK").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Language(String);

impl Language {
    /// The language used when none is configured.
    pub const DEFAULT: &'static str = "sk_SK";

    /// Creates a new validated language tag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLanguage`] if the tag is empty or contains
    /// characters other than ASCII letters, digits, `_` and `-`.
    pub fn new(language: impl Into<String>) -> Result<Self, ConfigError> {
        let language = language.into().trim().to_string();

        let valid = !language.is_empty()
            && language
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ConfigError::InvalidLanguage { language });
        }

        Ok(Self(language))
    }
}

impl Default for Language {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        let result = ApiKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("super-secret-key").unwrap();
        let debug_output = format!("{:?}", key);
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_base_url_strips_trailing_slashes() {
        let url = BaseUrl::new("https://api.example.com//").unwrap();
        assert_eq!(url.as_ref(), "https://api.example.com");

        let url = BaseUrl::new("  http://localhost:8080/v1/ ").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:8080/v1");
        assert_eq!(url.host_name(), "localhost");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        // No scheme
        assert!(BaseUrl::new("api.example.com").is_err());

        // Empty host
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("https://:8080").is_err());

        // Invalid scheme
        assert!(BaseUrl::new("://example.com").is_err());
        assert!(BaseUrl::new("ht1p://example.com").is_err());
    }

    #[test]
    fn test_base_url_join() {
        let url = BaseUrl::new("https://api.example.com/").unwrap();
        assert_eq!(
            url.join("api/strategy_organizations"),
            "https://api.example.com/api/strategy_organizations"
        );
        assert_eq!(
            url.join("/api/activities_timeline/"),
            "https://api.example.com/api/activities_timeline/"
        );
    }

    #[test]
    fn test_language_validation() {
        assert_eq!(Language::new("en_GB").unwrap().as_ref(), "en_GB");
        assert_eq!(Language::new(" cs ").unwrap().as_ref(), "cs");
        assert!(matches!(
            Language::new(""),
            Err(ConfigError::InvalidLanguage { .. })
        ));
        assert!(Language::new("sk;q=0.9").is_err());
    }

    #[test]
    fn test_language_default_is_slovak() {
        assert_eq!(Language::default().as_ref(), "sk_SK");
    }
}
