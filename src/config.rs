//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file; every section falls back to
//! working defaults so a partial file is valid. Extra regions may be
//! supplied under `[regions]` as ordered market-name lists keyed by region
//! code.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::adapter::outbound::bantay::client::DEFAULT_BASE_URL;
use crate::domain::price::{MAX_SAMPLE_COUNT, MIN_SAMPLE_COUNT};
use crate::domain::region::REGION_CENTRAL_VISAYAS;
use crate::error::{ConfigError, Result};

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    /// Extra region market lists, keyed by region code.
    #[serde(default)]
    pub regions: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    /// Base URL of the upstream price feed.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout for each outbound fetch.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Overall deadline for one multi-category sync pass.
    #[serde(default = "default_sync_deadline_secs")]
    pub sync_deadline_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

const fn default_sync_deadline_secs() -> u64 {
    240
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            sync_deadline_secs: default_sync_deadline_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Time-to-live for cached sync results, measured from insertion.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
    /// Interval of the background expired-entry sweep.
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

const fn default_ttl_secs() -> u64 {
    30 * 60
}

const fn default_sweep_interval_secs() -> u64 {
    5 * 60
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite database path.
    #[serde(default = "default_database_url")]
    pub url: String,
}

fn default_database_url() -> String {
    "presyo.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    /// Region code to sync.
    #[serde(default = "default_region")]
    pub region: String,
    /// Historical sample count requested from the upstream.
    #[serde(default = "default_count")]
    pub count: u32,
    /// Interval between sync passes in daemon mode.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_region() -> String {
    REGION_CENTRAL_VISAYAS.to_string()
}

const fn default_count() -> u32 {
    10
}

const fn default_interval_secs() -> u64 {
    10 * 60
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            count: default_count(),
            interval_secs: default_interval_secs(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.network.base_url.is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        if self.database.url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "database.url",
            }
            .into());
        }
        if self.sync.region.is_empty() {
            return Err(ConfigError::MissingField {
                field: "sync.region",
            }
            .into());
        }
        if !(MIN_SAMPLE_COUNT..=MAX_SAMPLE_COUNT).contains(&self.sync.count) {
            return Err(ConfigError::InvalidValue {
                field: "sync.count",
                reason: format!(
                    "must be between {MIN_SAMPLE_COUNT} and {MAX_SAMPLE_COUNT}, got {}",
                    self.sync.count
                ),
            }
            .into());
        }
        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.ttl_secs",
                reason: "must be positive".to_string(),
            }
            .into());
        }
        Ok(())
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            cache: CacheConfig::default(),
            database: DatabaseConfig::default(),
            logging: LoggingConfig::default(),
            sync: SyncConfig::default(),
            regions: BTreeMap::new(),
        }
    }
}
