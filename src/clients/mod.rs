//! HTTP client types for strategy API communication.
//!
//! # Overview
//!
//! - [`Transport`]: The request-execution capability the API client depends on
//! - [`HttpClient`]: The reqwest-backed [`Transport`]
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`graphql::GraphqlClient`]: GraphQL query execution
//!
//! # Example
//!
//! ```rust,ignore
//! use strategy_api::clients::{HttpClient, HttpMethod, HttpRequest, Transport};
//!
//! let client = HttpClient::new(&config)?;
//! let request = HttpRequest::builder(HttpMethod::Get, "api/strategy_organizations")
//!     .query_param("ico", "00151866")
//!     .build();
//!
//! let body = client.send(request).await?.into_content()?;
//! ```
//!
//! # Failure Behavior
//!
//! Requests are attempted exactly once. Connection failures are reported as
//! [`HttpError::Network`]; error statuses are reported as
//! [`HttpError::Response`] when the body is read.

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::Transport;

pub use graphql::{GraphqlClient, GraphqlError, GraphqlResponseError};
