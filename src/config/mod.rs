//! Configuration types for the strategy API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClientConfig`]: The immutable client configuration
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//! - [`Language`]: The preferred response language
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use strategy_api::{ApiKey, BaseUrl, ClientConfig};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com/").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .cache_ttl(Duration::from_secs(60))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.example.com");
//! assert_eq!(config.language().as_ref(), "sk_SK");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl, Language};

use std::time::Duration;

use crate::error::ConfigError;

/// Cache lifetime used when none is configured: 15 minutes.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(900);

/// Configuration for the strategy API client.
///
/// Created once and owned by the client. The API key and language are applied
/// to every request; there is no per-call override.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: BaseUrl,
    api_key: ApiKey,
    language: Language,
    cache_ttl: Duration,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the API base URL, without trailing slash.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the preferred response language.
    #[must_use]
    pub const fn language(&self) -> &Language {
        &self.language
    }

    /// Returns how long fetched responses stay cached.
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// Required fields are `base_url` and `api_key`.
///
/// # Defaults
///
/// - `language`: `sk_SK`
/// - `cache_ttl`: 900 seconds
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<BaseUrl>,
    api_key: Option<ApiKey>,
    language: Option<Language>,
    cache_ttl: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the preferred response language.
    #[must_use]
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Sets how long fetched responses stay cached.
    #[must_use]
    pub const fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    /// Sets the cache lifetime in whole seconds.
    #[must_use]
    pub const fn cache_ttl_secs(self, secs: u64) -> Self {
        self.cache_ttl(Duration::from_secs(secs))
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` or `api_key`
    /// are not set, and [`ConfigError::InvalidCacheTtl`] if the TTL is shorter
    /// than one second.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let cache_ttl = self.cache_ttl.unwrap_or(DEFAULT_CACHE_TTL);
        if cache_ttl.as_secs() == 0 {
            return Err(ConfigError::InvalidCacheTtl);
        }

        Ok(ClientConfig {
            base_url,
            api_key,
            language: self.language.unwrap_or_default(),
            cache_ttl,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
