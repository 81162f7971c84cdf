//! Application configuration
//!
//! This module provides centralized configuration management using the `config` crate.
//! Configuration can be loaded from environment variables and config files.

use crate::error::AppError;
use crate::models::PricingRates;
use crate::AppResult;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;
use tracing::debug;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

/// HTTP server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_timeout() -> u64 {
    30
}

/// Pricing rate configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PricingConfig {
    /// Price per ladder step
    #[serde(default = "default_unit_rate")]
    pub unit_rate: f64,

    /// Multiplier increment per tier crossed
    #[serde(default = "default_tier_coefficient")]
    pub tier_coefficient: f64,

    /// Estimated hours per ladder step
    #[serde(default = "default_hours_per_step")]
    pub hours_per_step: u32,

    /// Surcharge for ending at ETERNITY
    #[serde(default = "default_first_special_fee")]
    pub first_special_fee: f64,

    /// Surcharge for ending at ONE_ABOVE_ALL
    #[serde(default = "default_second_special_fee")]
    pub second_special_fee: f64,
}

fn default_unit_rate() -> f64 {
    10.0
}

fn default_tier_coefficient() -> f64 {
    0.5
}

fn default_hours_per_step() -> u32 {
    2
}

fn default_first_special_fee() -> f64 {
    250.0
}

fn default_second_special_fee() -> f64 {
    500.0
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            unit_rate: default_unit_rate(),
            tier_coefficient: default_tier_coefficient(),
            hours_per_step: default_hours_per_step(),
            first_special_fee: default_first_special_fee(),
            second_special_fee: default_second_special_fee(),
        }
    }
}

fn to_decimal(field: &str, value: f64) -> AppResult<Decimal> {
    Decimal::try_from(value)
        .map_err(|e| AppError::Config(format!("pricing.{} = {}: {}", field, value, e)))
}

impl PricingConfig {
    /// Convert to validated engine rates
    pub fn to_rates(&self) -> AppResult<PricingRates> {
        let rates = PricingRates {
            unit_rate: to_decimal("unit_rate", self.unit_rate)?,
            tier_coefficient: to_decimal("tier_coefficient", self.tier_coefficient)?,
            hours_per_step: self.hours_per_step,
            first_special_fee: to_decimal("first_special_fee", self.first_special_fee)?,
            second_special_fee: to_decimal("second_special_fee", self.second_special_fee)?,
        };
        rates.validate()?;
        Ok(rates)
    }
}

/// CORS configuration
#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    #[serde(default = "default_cors_origins")]
    pub allowed_origins: String,
}

fn default_cors_origins() -> String {
    "http://localhost:3000,http://127.0.0.1:3000".to_string()
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_cors_origins(),
        }
    }
}

impl CorsConfig {
    pub fn origins(&self) -> Vec<&str> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .collect()
    }

    pub fn allows(&self, origin: &str) -> bool {
        self.origins().iter().any(|o| *o == origin)
    }
}

/// Built-in defaults, the lowest-priority configuration source
fn default_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", default_host())?
        .set_default("server.port", i64::from(default_port()))?
        .set_default("server.workers", default_workers() as i64)?
        .set_default("server.timeout_secs", default_timeout() as i64)?
        .set_default("pricing.unit_rate", default_unit_rate())?
        .set_default("pricing.tier_coefficient", default_tier_coefficient())?
        .set_default("pricing.hours_per_step", i64::from(default_hours_per_step()))?
        .set_default("pricing.first_special_fee", default_first_special_fee())?
        .set_default("pricing.second_special_fee", default_second_special_fee())?
        .set_default("cors.allowed_origins", default_cors_origins())
}

impl AppConfig {
    /// Load configuration from defaults, optional config files and environment
    pub fn load() -> AppResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        debug!(run_mode = %run_mode, "Loading configuration");

        let config = default_builder()?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables with RANKBOOST_ prefix
            .add_source(
                Environment::with_prefix("RANKBOOST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Get the server bind address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
