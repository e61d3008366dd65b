//! Process configuration read from the environment.
//!
//! Values come from real environment variables, falling back to a `.env`
//! file in the working directory, then to the defaults below.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use tracing::warn;

use crate::guide::DEFAULT_GUIDE_PATH;
use crate::route::RouteConfig;
use crate::upstream::DEFAULT_BASE_URL;

const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";
const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";
const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000);
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub transport_base_url: String,
    /// Empty when unset; narrative endpoints then answer 503.
    pub google_api_key: String,
    pub gemini_model: String,
    pub guide_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub route_max_pairs: Option<usize>,
    pub upstream_timeout_secs: u64,
}

impl AppConfig {
    /// Read the configuration from the process environment and `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Read the configuration through `lookup`, which returns the raw
    /// value of a variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let google_api_key = get("GOOGLE_API_KEY").unwrap_or_else(|| {
            warn!("GOOGLE_API_KEY not set. Operator profiles and guides will be unavailable.");
            String::new()
        });

        Ok(Self {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            transport_base_url: get("TRANSPORT_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            google_api_key,
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            guide_path: get("GUIDE_PATH")
                .unwrap_or_else(|| DEFAULT_GUIDE_PATH.to_string())
                .into(),
            bind_addr: parse("BIND_ADDR", get("BIND_ADDR"))?
                .unwrap_or(DEFAULT_BIND_ADDR),
            route_max_pairs: parse("ROUTE_MAX_PAIRS", get("ROUTE_MAX_PAIRS"))?,
            upstream_timeout_secs: parse("UPSTREAM_TIMEOUT_SECS", get("UPSTREAM_TIMEOUT_SECS"))?
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Route search settings derived from this configuration.
    pub fn route_config(&self) -> RouteConfig {
        let config = RouteConfig::default();
        match self.route_max_pairs {
            Some(max) => config.with_max_pairs(max),
            None => config,
        }
    }
}

fn parse<T: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
) -> Result<Option<T>, ConfigError> {
    value
        .map(|v| {
            v.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { key, value: v.clone() })
        })
        .transpose()
}
