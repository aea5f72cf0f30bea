//! GraphQL-specific error types for the strategy API client.
//!
//! - [`GraphqlError::Http`]: Wraps underlying HTTP errors
//! - [`GraphqlError::Decode`]: The response body is not a JSON object
//! - [`GraphqlError::Response`]: The payload reports application-level errors
//!
//! # Example
//!
//! ```rust,ignore
//! use strategy_api::clients::graphql::GraphqlError;
//!
//! match client.query("{ organizations { id } }").await {
//!     Ok(body) => println!("Data: {}", body["data"]),
//!     Err(GraphqlError::Response(e)) => {
//!         println!("Partial data: {}", e.data);
//!         for message in e.messages() {
//!             println!("GraphQL error: {message}");
//!         }
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::clients::HttpError;

/// Application-level failure reported in a GraphQL response envelope.
///
/// Carries whatever partial `data` the server returned (an empty object when
/// it sent none) together with the reported `errors`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("GraphQL query returned {} error(s): {}", .errors.len(), first_message(.errors))]
pub struct GraphqlResponseError {
    /// The partial `data` payload.
    pub data: Value,
    /// The reported `errors` list.
    pub errors: Vec<Value>,
}

impl GraphqlResponseError {
    /// Returns the `message` field of every reported error that has one.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter_map(|error| error.get("message").and_then(Value::as_str))
            .collect()
    }
}

fn first_message(errors: &[Value]) -> String {
    errors.first().map_or_else(String::new, |error| {
        error
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| error.to_string(), String::from)
    })
}

/// Error type for GraphQL API operations.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body could not be decoded as a JSON object.
    #[error("Failed to decode GraphQL response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response payload reported errors.
    #[error(transparent)]
    Response(#[from] GraphqlResponseError),
}
