//! Cache-backed fetch-and-decode pipeline
//!
//! [`Resolver`] is the entry point of the SDK. Single resources go through
//! cache lookup, fetch, decode and cache store; name listings are always
//! fetched live and never touch the cache.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::cache::{MemoryCache, NoCache, ResponseCache};
use crate::client::{FetchClient, RequestContext};
use crate::config::Config;
use crate::cursor::NameCursor;
use crate::error::Error;
use crate::model::{Generation, NamedResource, Pokemon, PokemonForm, Resource, ResourceKind};

/// One page of a name listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamesPage {
    /// Names in server order
    pub names: Vec<String>,
    /// Total number of resources the server reports for this kind
    pub count: u64,
    /// Whether the server has results past this page
    pub has_more: bool,
}

/// Envelope returned by list endpoints
#[derive(Debug, Deserialize)]
struct ListResponse {
    count: u64,
    results: Vec<NamedResource>,
}

/// Outcome of consulting the cache for a single resource
enum CacheLookup<T> {
    Hit(T),
    Miss(MissReason),
}

enum MissReason {
    Absent,
    Undecodable(serde_json::Error),
}

/// Whether a listing has results past `offset + limit`.
///
/// Uses the requested `limit`, not the number of results actually returned.
pub(crate) fn has_more(count: u64, offset: u64, limit: u64) -> bool {
    count > offset + limit
}

/// Fetches catalog resources, consulting the response cache first.
///
/// Cloning a resolver is cheap; clones share the HTTP client and the cache.
#[derive(Clone)]
pub struct Resolver {
    base_url: String,
    client: FetchClient,
    cache: Arc<dyn ResponseCache>,
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("base_url", &self.base_url)
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl Resolver {
    /// Creates a resolver with the default configuration (public API, caching disabled)
    pub fn new() -> Result<Self, Error> {
        Self::from_config(Config::default())
    }

    /// Creates a resolver from `config`.
    ///
    /// Unset fields (empty base URL, zero timeout) fall back to the defaults.
    pub fn from_config(config: Config) -> Result<Self, Error> {
        let config = config.normalized();
        let client = FetchClient::new(config.client_timeout).map_err(Error::Client)?;
        let cache: Arc<dyn ResponseCache> = if config.cache_enabled {
            Arc::new(MemoryCache::new(config.cache_ttl))
        } else {
            Arc::new(NoCache)
        };

        debug!(
            base_url = %config.base_url,
            cache_enabled = config.cache_enabled,
            "resolver configured"
        );

        Ok(Self {
            base_url: config.base_url,
            client,
            cache,
        })
    }

    /// Replaces the response cache, e.g. to share one cache between resolvers.
    pub fn with_cache(mut self, cache: Arc<dyn ResponseCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Replaces the fetch client, e.g. to reuse a preconfigured `reqwest::Client`.
    pub fn with_fetch_client(mut self, client: FetchClient) -> Self {
        self.client = client;
        self
    }

    /// The base URL every request is built from, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/{kind}/{id_or_name}`, also the cache key for that resource
    pub fn resource_url(&self, kind: ResourceKind, id_or_name: &str) -> String {
        format!("{}/{}/{}", self.base_url, kind.path(), id_or_name)
    }

    /// `{base}/{kind}?limit={limit}&offset={offset}`
    pub fn list_url(&self, kind: ResourceKind, limit: u32, offset: u64) -> String {
        format!(
            "{}/{}?limit={}&offset={}",
            self.base_url,
            kind.path(),
            limit,
            offset
        )
    }

    /// Fetches a single resource by numeric ID or name.
    ///
    /// A cache hit returns without touching the network. On a miss the raw
    /// response bytes are stored under the request URL once they decode.
    /// A cached entry that no longer decodes counts as a miss.
    ///
    /// # Errors
    /// * `Error::NotFound` - The resource does not exist
    /// * `Error::RequestFailed` / `Error::Transport` - The fetch failed
    /// * `Error::Decode` - The server sent a payload that does not match `T`
    pub async fn get_by_id_or_name<T: Resource>(
        &self,
        id_or_name: &str,
        ctx: &RequestContext,
    ) -> Result<T, Error> {
        let kind = T::KIND;
        let url = self.resource_url(kind, id_or_name);

        match self.load_from_cache::<T>(&url) {
            CacheLookup::Hit(value) => {
                debug!(%kind, %url, "cache hit");
                return Ok(value);
            }
            CacheLookup::Miss(MissReason::Absent) => {
                debug!(%kind, %url, "cache miss");
            }
            CacheLookup::Miss(MissReason::Undecodable(err)) => {
                warn!(%kind, %url, error = %err, "cached entry failed to decode, refetching");
            }
        }

        let body = self
            .client
            .fetch(&url, ctx)
            .await
            .map_err(|e| Error::from_fetch(kind, e))?;

        let value = decode(kind, &body)?;
        self.cache.put(&url, body);

        Ok(value)
    }

    /// Fetches one page of names for `kind`. Never reads or writes the cache.
    pub async fn get_names_page(
        &self,
        kind: ResourceKind,
        limit: u32,
        offset: u64,
        ctx: &RequestContext,
    ) -> Result<NamesPage, Error> {
        let url = self.list_url(kind, limit, offset);

        let body = self
            .client
            .fetch(&url, ctx)
            .await
            .map_err(|e| Error::from_fetch(kind, e))?;

        let response: ListResponse = decode(kind, &body)?;
        let has_more = has_more(response.count, offset, u64::from(limit));
        let names = response.results.into_iter().map(|r| r.name).collect();

        Ok(NamesPage {
            names,
            count: response.count,
            has_more,
        })
    }

    fn load_from_cache<T: DeserializeOwned>(&self, url: &str) -> CacheLookup<T> {
        match self.cache.get(url) {
            None => CacheLookup::Miss(MissReason::Absent),
            Some(bytes) => match serde_json::from_slice(&bytes) {
                Ok(value) => CacheLookup::Hit(value),
                Err(err) => CacheLookup::Miss(MissReason::Undecodable(err)),
            },
        }
    }

    /// Returns a handle for the Pokémon with the given ID or name.
    pub fn pokemon(&self, id_or_name: impl Into<String>) -> Lookup<Pokemon> {
        Lookup::new(self.clone(), id_or_name.into())
    }

    /// Returns a handle for the generation with the given ID or name.
    pub fn generation(&self, id_or_name: impl Into<String>) -> Lookup<Generation> {
        Lookup::new(self.clone(), id_or_name.into())
    }

    /// Returns a handle for the Pokémon form with the given ID or name.
    pub fn pokemon_form(&self, id_or_name: impl Into<String>) -> Lookup<PokemonForm> {
        Lookup::new(self.clone(), id_or_name.into())
    }

    /// Returns a cursor over Pokémon names starting at `page` (1-based).
    pub fn pokemon_list(&self, page: u32, page_size: u32) -> NameCursor {
        self.list(ResourceKind::Pokemon, page, page_size)
    }

    /// Returns a cursor over generation names starting at `page` (1-based).
    pub fn generation_list(&self, page: u32, page_size: u32) -> NameCursor {
        self.list(ResourceKind::Generation, page, page_size)
    }

    /// Returns a cursor over the names of any resource kind.
    pub fn list(&self, kind: ResourceKind, page: u32, page_size: u32) -> NameCursor {
        NameCursor::new(self.clone(), kind, page, page_size)
    }
}

fn decode<T: DeserializeOwned>(kind: ResourceKind, body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|source| Error::Decode { kind, source })
}

/// A resource identified by ID or name, fetched on demand
#[derive(Debug, Clone)]
pub struct Lookup<T> {
    resolver: Resolver,
    id: String,
    _kind: PhantomData<fn() -> T>,
}

impl<T: Resource> Lookup<T> {
    fn new(resolver: Resolver, id: String) -> Self {
        Self {
            resolver,
            id,
            _kind: PhantomData,
        }
    }

    /// The identifier this handle was created with
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fetches the resource with a context that never cancels.
    pub async fn get(&self) -> Result<T, Error> {
        self.get_with_context(&RequestContext::background()).await
    }

    /// Fetches the resource; `ctx` controls cancellation and the deadline.
    pub async fn get_with_context(&self, ctx: &RequestContext) -> Result<T, Error> {
        self.resolver.get_by_id_or_name::<T>(&self.id, ctx).await
    }
}
