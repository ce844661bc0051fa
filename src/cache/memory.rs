//! TTL-bound in-memory cache backed by `moka`

use std::fmt;
use std::time::Duration;

use moka::sync::Cache;

use super::ResponseCache;

/// Longest TTL handed to `moka`, which rejects anything past 1000 years
pub const MAX_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Stores raw response bodies in memory with one TTL for every entry.
///
/// The TTL is fixed at construction and counts from the time an entry was
/// written; reading an entry never extends its lifetime. Expired entries are
/// invisible to [`get`](ResponseCache::get) and are reaped lazily by `moka`.
#[derive(Clone)]
pub struct MemoryCache {
    entries: Cache<String, Vec<u8>>,
    ttl: Option<Duration>,
}

impl MemoryCache {
    /// Creates a cache whose entries expire `ttl` after they are written.
    ///
    /// With `None` entries live until the cache is dropped. TTLs longer than
    /// [`MAX_TTL`] are clamped to it.
    pub fn new(ttl: Option<Duration>) -> Self {
        let ttl = ttl.map(|ttl| ttl.min(MAX_TTL));
        let builder = Cache::<String, Vec<u8>>::builder();
        let entries = match ttl {
            Some(ttl) => builder.time_to_live(ttl).build(),
            None => builder.build(),
        };
        Self { entries, ttl }
    }

    /// The TTL applied to every entry
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }
}

impl fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryCache")
            .field("ttl", &self.ttl)
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}

impl ResponseCache for MemoryCache {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key)
    }

    fn put(&self, key: &str, body: Vec<u8>) {
        self.entries.insert(key.to_string(), body);
    }
}
