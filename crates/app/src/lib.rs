//! Demo wiring: configuration, a seeded catalog and a single purchase run.

pub mod config;
pub mod demo;

pub use config::{AppConfig, ConfigError};
pub use demo::{format_currency, run_purchase, sample_catalog, PurchaseReport};
