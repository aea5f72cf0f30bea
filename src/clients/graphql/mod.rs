//! GraphQL API client for the strategy API.
//!
//! The main types in this module are:
//!
//! - [`GraphqlClient`]: Executes queries against `api/graphql`
//! - [`GraphqlError`]: Error type for GraphQL operations
//! - [`GraphqlResponseError`]: Partial data and errors reported by the server
//!
//! # Response Structure
//!
//! A successful response is returned exactly as decoded, so `data`,
//! `extensions` and any other top-level fields remain available. A response
//! whose `errors` field is non-empty is turned into
//! [`GraphqlError::Response`], even though the server answered with HTTP 200.
//!
//! GraphQL responses are never cached.

mod client;
mod errors;

pub use client::{GraphqlClient, GRAPHQL_PATH};
pub use errors::{GraphqlError, GraphqlResponseError};
