//! Application configuration loading from environment variables.
//!
//! Configuration is read once at startup. A `.env` file is honoured through
//! `dotenvy` before this module runs. The metric tables themselves are
//! compiled in and are not configurable here.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `RUST_LOG`: Logging level (default: "info,utility_map_api=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `DEFAULT_CATEGORY`: Category used when a request names none (default: "electricity")
//! - `REGION_NAME_PROPERTIES`: Comma-separated feature properties probed for a
//!   region name, in priority order (default: "NAME_1,shapeName")
//! - `ALLOWED_ORIGINS`: Comma-separated CORS origins for release builds (default: none)

use crate::domain::{
    metric::category::MetricCategory,
    region::extractor::{LEGACY_NAME_PROPERTY, RegionNameExtractor, SHAPE_NAME_PROPERTY},
};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Category applied when the `category` query parameter is omitted
    pub default_category: MetricCategory,

    /// Feature properties holding the region name, highest priority first
    pub region_name_properties: Vec<String>,

    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if
    /// `REGION_NAME_PROPERTIES` names no property at all.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 3000)?,
            default_category: env_or("DEFAULT_CATEGORY", MetricCategory::Electricity)?,
            region_name_properties: env_list(
                "REGION_NAME_PROPERTIES",
                &[LEGACY_NAME_PROPERTY, SHAPE_NAME_PROPERTY],
            ),
            allowed_origins: env_list("ALLOWED_ORIGINS", &[]),
        };
        config.region_name_extractor()?;
        Ok(config)
    }

    pub fn region_name_extractor(&self) -> anyhow::Result<RegionNameExtractor> {
        RegionNameExtractor::new(&self.region_name_properties)
            .map_err(|e| anyhow::anyhow!("Invalid REGION_NAME_PROPERTIES: {}", e))
    }
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}

/// Load a comma-separated list, dropping blank entries.
fn env_list(key: &str, default: &[&str]) -> Vec<String> {
    match std::env::var(key) {
        Ok(val) => split_list(&val),
        Err(_) => default.iter().map(|s| s.to_string()).collect(),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
