//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! settings are rejected before any request is made.
//!
//! # Example
//!
//! ```rust
//! use strategy_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`ClientConfig`](crate::ClientConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide the key issued for the strategy API.")]
    EmptyApiKey,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme and host (e.g., 'https://api.example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Language tag is invalid.
    #[error("Invalid language '{language}'. Expected a locale tag such as 'sk_SK' or 'en'.")]
    InvalidLanguage {
        /// The invalid language tag that was provided.
        language: String,
    },

    /// Cache TTL must be at least one second.
    #[error("Invalid cache TTL: entries must live for at least one second.")]
    InvalidCacheTtl,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
