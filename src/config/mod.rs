use crate::core::{AppError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;
use std::str::FromStr;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Engine-level pricing defaults.
///
/// Tax rate and deposit fraction are configuration, never hard-coded in the
/// calculators. The deposit fraction here seeds pricelists that do not set
/// their own; `default_pricelist` names the pricelist unknown or missing
/// plan names resolve to.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    pub tax_rate: Decimal,
    pub deposit_fraction: Decimal,
    pub default_pricelist: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            pricing: PricingConfig {
                tax_rate: parse_decimal_var("TAX_RATE", "0.18")?,
                deposit_fraction: parse_decimal_var("DEPOSIT_FRACTION", "0.10")?,
                default_pricelist: env::var("DEFAULT_PRICELIST")
                    .unwrap_or_else(|_| crate::modules::pricing::DEFAULT_PRICELIST.to_string()),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        crate::core::money::validate_fraction("TAX_RATE", self.pricing.tax_rate)
            .map_err(AppError::Configuration)?;

        crate::core::money::validate_fraction("DEPOSIT_FRACTION", self.pricing.deposit_fraction)
            .map_err(AppError::Configuration)?;

        if self.pricing.default_pricelist.trim().is_empty() {
            return Err(AppError::Configuration(
                "DEFAULT_PRICELIST must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_decimal_var(name: &str, default: &str) -> Result<Decimal> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    Decimal::from_str(&raw)
        .map_err(|_| AppError::Configuration(format!("Invalid {}: {}", name, raw)))
}
