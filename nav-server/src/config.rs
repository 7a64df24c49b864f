//! Process configuration, read once at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::directions::DirectionsConfig;

const API_KEY_VAR: &str = "GOOGLE_API_KEY";
const BIND_ADDR_VAR: &str = "NAV_BIND_ADDR";
const MOCK_DIR_VAR: &str = "NAV_MOCK_DIR";
const STATIC_DIR_VAR: &str = "NAV_STATIC_DIR";
const TIMEOUT_VAR: &str = "NAV_UPSTREAM_TIMEOUT_SECS";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "static";

/// Startup misconfiguration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("GOOGLE_API_KEY is not set")]
    MissingApiKey,

    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Where directions come from.
#[derive(Debug, Clone)]
pub enum DirectionsSource {
    /// The live API.
    Live(DirectionsConfig),
    /// Canned responses from a directory of JSON files.
    Mock(PathBuf),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub directions: DirectionsSource,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value if set.
    ///
    /// The API key is required unless a mock directory is configured.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_addr_text = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr_text
            .parse()
            .map_err(|_| ConfigError::Invalid {
                name: BIND_ADDR_VAR,
                value: bind_addr_text.clone(),
            })?;

        let static_dir = lookup(STATIC_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let directions = match lookup(MOCK_DIR_VAR) {
            Some(dir) => DirectionsSource::Mock(PathBuf::from(dir)),
            None => {
                let api_key = lookup(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;
                let mut config = DirectionsConfig::new(api_key);
                if let Some(secs) = lookup(TIMEOUT_VAR) {
                    let secs: u64 = secs.parse().map_err(|_| ConfigError::Invalid {
                        name: TIMEOUT_VAR,
                        value: secs.clone(),
                    })?;
                    config = config.with_timeout(secs);
                }
                DirectionsSource::Live(config)
            }
        };

        Ok(Self {
            bind_addr,
            static_dir,
            directions,
        })
    }
}
