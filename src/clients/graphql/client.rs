//! GraphQL client implementation for the strategy API.
//!
//! This module provides the [`GraphqlClient`] type for executing GraphQL
//! queries against the fixed `api/graphql` endpoint.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::clients::graphql::{GraphqlError, GraphqlResponseError};
use crate::clients::{HttpMethod, HttpRequest, Transport};

/// Path of the GraphQL endpoint, relative to the base URL.
pub const GRAPHQL_PATH: &str = "api/graphql";

/// GraphQL API client.
///
/// Queries are sent uncached as `POST api/graphql` with a `{"query": ...}`
/// JSON body. Variables are not supported.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use strategy_api::clients::{graphql::GraphqlClient, HttpClient};
///
/// let client = GraphqlClient::new(Arc::new(HttpClient::new(&config)?));
/// let body = client.query("{ strategyOrganizations { id title } }").await?;
/// println!("{}", body["data"]);
/// ```
#[derive(Clone)]
pub struct GraphqlClient {
    transport: Arc<dyn Transport>,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl std::fmt::Debug for GraphqlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphqlClient").finish_non_exhaustive()
    }
}

impl GraphqlClient {
    /// Creates a new GraphQL client over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Executes a GraphQL query and interprets the response envelope.
    ///
    /// # Returns
    ///
    /// The decoded response object as-is, including `data` and any other
    /// top-level fields such as `extensions`.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Http`] for transport failures and non-2xx responses
    /// - [`GraphqlError::Decode`] if the body is not a JSON object
    /// - [`GraphqlError::Response`] if the object has a non-empty `errors` field
    pub async fn query(&self, query: &str) -> Result<Value, GraphqlError> {
        let request = HttpRequest::builder(HttpMethod::Post, GRAPHQL_PATH)
            .body(serde_json::json!({ "query": query }))
            .build();

        let body = self.transport.send(request).await?.into_content()?;
        let envelope: Map<String, Value> = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("GraphQL response is not a JSON object: {}", e);
            e
        })?;

        interpret_envelope(envelope)
    }
}

/// Splits a decoded GraphQL envelope into a success value or a response error.
fn interpret_envelope(mut envelope: Map<String, Value>) -> Result<Value, GraphqlError> {
    let has_errors = match envelope.get("errors") {
        None | Some(Value::Null) => false,
        Some(Value::Array(errors)) => !errors.is_empty(),
        Some(Value::Object(errors)) => !errors.is_empty(),
        Some(_) => true,
    };

    if !has_errors {
        return Ok(Value::Object(envelope));
    }

    let errors = match envelope.remove("errors") {
        Some(Value::Array(errors)) => errors,
        Some(other) => vec![other],
        None => Vec::new(),
    };
    let data = match envelope.remove("data") {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(data) => data,
    };

    tracing::warn!("GraphQL response reported {} error(s)", errors.len());
    Err(GraphqlResponseError { data, errors }.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test envelope must be an object"),
        }
    }

    #[test]
    fn test_envelope_without_errors_is_returned_unchanged() {
        let body = json!({"data": {"x": 1}, "extensions": {"cost": 3}});
        let result = interpret_envelope(envelope(body.clone())).unwrap();
        assert_eq!(result, body);
    }

    #[test]
    fn test_empty_errors_list_is_not_an_error() {
        let body = json!({"data": {"x": 1}, "errors": []});
        let result = interpret_envelope(envelope(body.clone())).unwrap();
        assert_eq!(result, body);
    }

    #[test]
    fn test_errors_surface_with_partial_data() {
        let body = json!({"data": {"x": 1}, "errors": [{"message": "bad"}]});

        match interpret_envelope(envelope(body)) {
            Err(GraphqlError::Response(error)) => {
                assert_eq!(error.data, json!({"x": 1}));
                assert_eq!(error.errors, vec![json!({"message": "bad"})]);
            }
            other => panic!("Expected GraphQL response error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_or_null_data_defaults_to_empty_object() {
        for body in [
            json!({"errors": [{"message": "bad"}]}),
            json!({"data": null, "errors": [{"message": "bad"}]}),
        ] {
            match interpret_envelope(envelope(body)) {
                Err(GraphqlError::Response(error)) => assert_eq!(error.data, json!({})),
                other => panic!("Expected GraphQL response error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_graphql_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GraphqlClient>();
    }
}
