//! Resolver configuration
//!
//! A [`Config`] is a plain value handed to [`Resolver::from_config`](crate::Resolver::from_config).
//! Defaults point at the public catalog with caching turned off.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Base URL of the public catalog API
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Timeout applied to every HTTP request
pub const DEFAULT_CLIENT_TIMEOUT: Duration = Duration::from_secs(10);

const ENV_BASE_URL: &str = "POKESDK_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "POKESDK_TIMEOUT_SECS";
const ENV_CACHE_ENABLED: &str = "POKESDK_CACHE_ENABLED";
const ENV_CACHE_TTL_SECS: &str = "POKESDK_CACHE_TTL_SECS";

/// Errors raised while reading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed
    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },
}

/// Settings for the HTTP client and the response cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The URL of the catalog API, without a trailing slash
    pub base_url: String,
    /// The timeout when making HTTP requests to the API
    pub client_timeout: Duration,
    /// Whether raw responses are cached in memory
    pub cache_enabled: bool,
    /// Time-to-live of cache entries; `None` keeps entries until process exit
    pub cache_ttl: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client_timeout: DEFAULT_CLIENT_TIMEOUT,
            cache_enabled: false,
            cache_ttl: None,
        }
    }
}

impl Config {
    /// Builds a config from the defaults overlaid with `POKESDK_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`Config::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(url) = lookup(ENV_BASE_URL) {
            config.base_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.client_timeout = Duration::from_secs(parse_u64(ENV_TIMEOUT_SECS, &raw)?);
        }
        if let Some(raw) = lookup(ENV_CACHE_ENABLED) {
            config.cache_enabled = parse_bool(ENV_CACHE_ENABLED, &raw)?;
        }
        if let Some(raw) = lookup(ENV_CACHE_TTL_SECS) {
            let secs = parse_u64(ENV_CACHE_TTL_SECS, &raw)?;
            config.cache_ttl = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(config.normalized())
    }

    /// Replaces unset fields with defaults and trims the base URL.
    ///
    /// An empty base URL or a zero timeout count as "not set".
    pub fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        self.base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        if self.client_timeout.is_zero() {
            self.client_timeout = DEFAULT_CLIENT_TIMEOUT;
        }
        if self.cache_ttl.is_some_and(|ttl| ttl.is_zero()) {
            self.cache_ttl = None;
        }
        self
    }
}

fn parse_u64(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: raw.to_string(),
    })
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
        }),
    }
}
