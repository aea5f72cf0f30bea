//! Response caching for the strategy API client.
//!
//! # Overview
//!
//! - [`Arguments`]: The arguments a caller supplied to one operation call
//! - [`CacheKey`]: `<namespace>-<sha256 of canonical JSON arguments>`
//! - [`CacheStore`]: The get/set capability the client is given
//! - [`get_or_fetch`]: Resolves a key through a store, fetching on a miss
//! - [`InMemoryCache`]: A process-local, size-bounded [`CacheStore`]
//!
//! # Keys
//!
//! Arguments are kept in a sorted map and encoded as compact JSON before
//! hashing, so the same argument set always yields the same key regardless
//! of insertion order. Hash collisions are possible in principle and are
//! accepted.
//!
//! The client never invalidates entries; they live until their TTL elapses
//! or the store evicts them.

mod key;
mod memory;
mod store;

pub use key::{is_empty_value, Arguments, CacheKey};
pub use memory::{InMemoryCache, DEFAULT_CAPACITY};
pub use store::{get_or_fetch, CacheError, CacheStore};
