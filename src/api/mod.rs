//! High-level strategy API operations.
//!
//! - [`StrategyClient`]: Cached organization, category and activity lookups
//! - [`OperationParameters`]: Explicit parameter declarations per operation
//! - [`Namespace`]: Cache-key prefixes of the operation families
//! - [`ApiError`]: Failures of any operation

mod client;
mod errors;
mod namespace;
mod params;

pub use client::StrategyClient;
pub use errors::ApiError;
pub use namespace::Namespace;
pub use params::{ActivityFilter, CategoryFilter, OperationParameters, OrganizationSearch};
