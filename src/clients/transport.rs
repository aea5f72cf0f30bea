//! The request-execution capability the API client depends on.

use async_trait::async_trait;

use crate::clients::{HttpError, HttpRequest, HttpResponse};

/// Executes HTTP requests against the strategy API.
///
/// [`HttpClient`](crate::clients::HttpClient) is the production
/// implementation. Alternate transports (recording fakes, proxies) can be
/// handed to [`StrategyClient::with_transport`](crate::StrategyClient::with_transport)
/// without touching the client.
///
/// Implementations return the raw response for every status code and only
/// fail for connection or protocol errors. They must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a request and returns the unprocessed response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}
