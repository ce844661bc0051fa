//! In-memory response cache
//!
//! The resolver caches the raw bytes of single-resource responses, keyed by
//! the full request URL. Caching is a capability behind the [`ResponseCache`]
//! trait: [`MemoryCache`] stores entries with a single global TTL and
//! [`NoCache`] is used when caching is disabled, so the resolver never has to
//! branch on whether a cache exists.

mod memory;

pub use memory::{MemoryCache, MAX_TTL};

/// Key/bytes store consulted before every single-resource fetch.
///
/// Implementations must be safe to share between concurrent callers.
/// Entries are immutable: `put` replaces whatever was stored under the key.
pub trait ResponseCache: Send + Sync {
    /// Returns the bytes stored under `key`, or `None` if absent or expired.
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Stores `body` under `key`, replacing any previous entry.
    fn put(&self, key: &str, body: Vec<u8>);
}

/// Cache used when caching is disabled - every lookup misses and writes are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl ResponseCache for NoCache {
    fn get(&self, _key: &str) -> Option<Vec<u8>> {
        None
    }

    fn put(&self, _key: &str, _body: Vec<u8>) {}
}
