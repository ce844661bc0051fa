//! Command-line interface parsing for the pokesdk demo binary
//!
//! The binary exercises the library end to end: single lookups and paginated
//! name listings against the configured catalog.

use std::time::Duration;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::model::ResourceKind;

/// Error types for CLI argument handling
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified resource kind is not recognized
    #[error("Invalid resource kind: '{0}'. Valid kinds: pokemon, generation, pokemon-form")]
    InvalidKind(String),

    /// The environment carried an invalid setting
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// pokesdk - Query the Pokémon catalog API
#[derive(Parser, Debug)]
#[command(name = "pokesdk")]
#[command(about = "Query the Pokémon catalog API")]
#[command(version)]
pub struct Cli {
    /// Base URL of the catalog API (overrides POKESDK_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// HTTP request timeout in seconds (overrides POKESDK_TIMEOUT_SECS)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Enable the response cache with this TTL in seconds (0 keeps entries forever)
    #[arg(long, global = true, value_name = "SECS")]
    pub cache_ttl_secs: Option<u64>,

    /// Disable the response cache even if the environment enables it
    #[arg(long, global = true)]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show a Pokémon by ID or name
    Pokemon { id_or_name: String },

    /// Show a generation by ID or name
    Generation { id_or_name: String },

    /// List resource names page by page
    List {
        /// Resource kind: pokemon, generation or pokemon-form
        kind: String,

        /// Page to start from (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Number of names per page
        #[arg(long, default_value_t = 20)]
        page_size: u32,

        /// Keep fetching pages until the listing is exhausted
        #[arg(long)]
        all: bool,
    },
}

/// Parses a resource kind argument.
pub fn parse_kind_arg(s: &str) -> Result<ResourceKind, CliError> {
    ResourceKind::from_path(s).ok_or_else(|| CliError::InvalidKind(s.to_string()))
}

impl Cli {
    /// Builds the resolver config: environment first, then command-line flags.
    pub fn config(&self) -> Result<Config, CliError> {
        self.config_over(Config::from_env()?)
    }

    /// Applies the command-line flags on top of `base`.
    pub fn config_over(&self, base: Config) -> Result<Config, CliError> {
        let mut config = base;

        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.client_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = self.cache_ttl_secs {
            config.cache_enabled = true;
            config.cache_ttl = (secs > 0).then(|| Duration::from_secs(secs));
        }
        if self.no_cache {
            config.cache_enabled = false;
        }

        Ok(config.normalized())
    }
}
