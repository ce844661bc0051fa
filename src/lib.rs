//! Client library for the public Pokémon catalog API
//!
//! Fetches single resources by ID or name and paginated name listings,
//! optionally caching raw responses in memory with a time-to-live.
//!
//! ```no_run
//! # async fn demo() -> Result<(), pokesdk::Error> {
//! use std::time::Duration;
//! use pokesdk::{Config, Resolver};
//!
//! let resolver = Resolver::from_config(Config {
//!     cache_enabled: true,
//!     cache_ttl: Some(Duration::from_secs(60)),
//!     ..Config::default()
//! })?;
//!
//! let first_page = resolver.pokemon_list(1, 5).get().await?;
//! let pokemon = resolver.pokemon(first_page[0].clone()).get().await?;
//! println!("{} weighs {}", pokemon.name, pokemon.weight);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod cursor;
pub mod error;
pub mod model;
pub mod resolver;

pub use cache::{MemoryCache, NoCache, ResponseCache};
pub use client::{FetchClient, RequestContext};
pub use config::{Config, ConfigError};
pub use cursor::{CursorState, NameCursor};
pub use error::{Error, FetchError, TransportError};
pub use model::{Generation, NamedResource, Pokemon, PokemonForm, Resource, ResourceKind};
pub use resolver::{Lookup, NamesPage, Resolver};
