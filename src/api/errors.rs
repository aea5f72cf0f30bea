//! Error type for [`StrategyClient`](crate::StrategyClient) operations.

use thiserror::Error;

use crate::cache::CacheError;
use crate::clients::{GraphqlError, GraphqlResponseError, HttpError};

/// Failure of a strategy API operation.
///
/// Nothing is retried and no fallback value is substituted; every failure
/// reaches the caller as one of these variants.
///
/// # Example
///
/// ```rust,ignore
/// use strategy_api::ApiError;
///
/// match client.get_activities_timeline().await {
///     Ok(timeline) => println!("{timeline}"),
///     Err(ApiError::Cache(e)) => eprintln!("cache unavailable: {e}"),
///     Err(ApiError::Http(e)) => eprintln!("request failed: {e}"),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the API answered with an error status.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body is not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A GraphQL response reported errors.
    #[error(transparent)]
    Graphql(#[from] GraphqlResponseError),

    /// The cache store failed.
    #[error(transparent)]
    Cache(#[from] CacheError),
}

impl From<GraphqlError> for ApiError {
    fn from(error: GraphqlError) -> Self {
        match error {
            GraphqlError::Http(e) => Self::Http(e),
            GraphqlError::Decode(e) => Self::Decode(e),
            GraphqlError::Response(e) => Self::Graphql(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;
    use serde_json::json;

    #[test]
    fn test_graphql_errors_are_flattened() {
        let response = GraphqlResponseError {
            data: json!({}),
            errors: vec![json!({"message": "Field 'x' doesn't exist"})],
        };
        let error: ApiError = GraphqlError::Response(response.clone()).into();
        assert!(matches!(error, ApiError::Graphql(e) if e == response));

        let http = HttpError::Response(HttpResponseError {
            code: 502,
            message: "bad gateway".to_string(),
            error_reference: None,
        });
        let error: ApiError = GraphqlError::Http(http).into();
        assert!(matches!(error, ApiError::Http(_)));
    }

    #[test]
    fn test_cache_error_message_is_transparent() {
        let error = ApiError::from(CacheError::Unavailable {
            reason: "redis down".to_string(),
        });
        assert_eq!(error.to_string(), "Cache storage unavailable: redis down");
    }

    #[test]
    fn test_decode_error_message() {
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = ApiError::from(decode);
        assert!(error.to_string().starts_with("Failed to decode response body"));
    }
}
