//! # Strategy API Rust Client
//!
//! A Rust client for the strategy REST and GraphQL API, providing type-safe
//! configuration, response caching, and async HTTP access to organizations,
//! organization categories, and activities.
//!
//! ## Overview
//!
//! This library provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for the base URL, API key, and language
//! - Cached read operations via [`StrategyClient`]
//! - Deterministic cache keys derived from the arguments of each call
//! - A pluggable [`CacheStore`], with [`InMemoryCache`] for single processes
//! - Uncached GraphQL queries and raw requests
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use strategy_api::{ApiKey, BaseUrl, ClientConfig, InMemoryCache, StrategyClient};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("https://strategy.example.com").unwrap())
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .cache_ttl_secs(600)
//!     .build()
//!     .unwrap();
//!
//! let client = StrategyClient::new(config, Arc::new(InMemoryCache::new())).unwrap();
//! ```
//!
//! ## Cached Operations
//!
//! ```rust,ignore
//! use strategy_api::{ActivityFilter, CategoryFilter, OrganizationSearch};
//!
//! // Sent as ?title=ministry&type.id=5
//! let organizations = client
//!     .search_organizations(&OrganizationSearch::new().title("ministry").type_id(5))
//!     .await?;
//!
//! // First matching organization, or None
//! let organization = client.get_organization_by_crn("00151866").await?;
//!
//! let categories = client
//!     .get_organization_categories(&CategoryFilter::new().level(1))
//!     .await?;
//!
//! let by_year = client
//!     .get_activities_by_year(&ActivityFilter::new().organization_id(42))
//!     .await?;
//! ```
//!
//! Repeating a call with the same arguments within the TTL is answered from
//! the cache without a request. Arguments that are empty (`0`, `""`, `"0"`,
//! `false`) are treated as not supplied.
//!
//! ## GraphQL
//!
//! ```rust,ignore
//! use strategy_api::ApiError;
//!
//! match client.get_graphql("{ strategyOrganizations { id title } }").await {
//!     Ok(body) => println!("{}", body["data"]),
//!     Err(ApiError::Graphql(e)) => println!("errors: {:?}, partial data: {}", e.messages(), e.data),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No hidden fallback**: Failures are never retried or papered over

pub mod api;
pub mod cache;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use api::{
    ActivityFilter, ApiError, CategoryFilter, Namespace, OperationParameters, OrganizationSearch,
    StrategyClient,
};
pub use config::{ApiKey, BaseUrl, ClientConfig, ClientConfigBuilder, Language, DEFAULT_CACHE_TTL};
pub use error::ConfigError;

// Re-export cache types
pub use cache::{Arguments, CacheError, CacheKey, CacheStore, InMemoryCache};

// Re-export HTTP client types
pub use clients::{
    GraphqlClient, GraphqlError, GraphqlResponseError, HttpClient, HttpError, HttpMethod,
    HttpRequest, HttpRequestBuilder, HttpResponse, HttpResponseError, Transport,
};
