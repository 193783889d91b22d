//! Configuration loading from environment variables.

use std::collections::HashMap;

use catalog_core::ProductId;
use catalog_observability::LogFormat;
use thiserror::Error;

pub const LOG_FORMAT_VAR: &str = "CATALOG_LOG_FORMAT";
pub const PRODUCT_ID_VAR: &str = "CATALOG_PRODUCT_ID";
pub const QUANTITY_VAR: &str = "CATALOG_QUANTITY";

pub const DEFAULT_PRODUCT_ID: u64 = 1;
pub const DEFAULT_QUANTITY: i64 = 2;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid value for {var}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub reason: String,
}

/// Runtime configuration for the demo binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_format: LogFormat,
    pub product_id: ProductId,
    /// Passed through unvalidated; the domain decides what a valid quantity is.
    pub quantity: i64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests, alternative sources).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse::<LogFormat>().map_err(|reason| ConfigError {
                var: LOG_FORMAT_VAR,
                reason,
            })?,
            None => LogFormat::default(),
        };

        let product_id = match lookup(PRODUCT_ID_VAR) {
            Some(raw) => raw.parse::<ProductId>().map_err(|e| ConfigError {
                var: PRODUCT_ID_VAR,
                reason: e.to_string(),
            })?,
            None => ProductId::new(DEFAULT_PRODUCT_ID).map_err(|e| ConfigError {
                var: PRODUCT_ID_VAR,
                reason: e.to_string(),
            })?,
        };

        let quantity = match lookup(QUANTITY_VAR) {
            Some(raw) => raw.trim().parse::<i64>().map_err(|e| ConfigError {
                var: QUANTITY_VAR,
                reason: e.to_string(),
            })?,
            None => DEFAULT_QUANTITY,
        };

        Ok(Self {
            log_format,
            product_id,
            quantity,
        })
    }

    pub fn from_map(vars: &HashMap<&str, &str>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }
}
