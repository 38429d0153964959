//! # Kiosk Configuration
//!
//! ## Configuration Sources (later overrides earlier)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Defaults (this file)                                               │
//! │     10% tax, 2000 ms checkout delay                                    │
//! │                                                                         │
//! │  2. TOML file                                                          │
//! │     $BISTRO_CONFIG, or the platform config dir:                        │
//! │     ~/.config/bistro/bistro.toml (Linux)                               │
//! │                                                                         │
//! │  3. Environment variables (highest priority)                           │
//! │     BISTRO_STORE_NAME, BISTRO_TAX_RATE (percent),                      │
//! │     BISTRO_CHECKOUT_DELAY_MS                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## File Format
//! ```toml
//! [store]
//! name = "Bistro"
//!
//! [pricing]
//! tax_rate = "0.10"
//!
//! [checkout]
//! delay_ms = 2000
//! ```
//!
//! Read-only after startup.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, warn};

use bistro_core::TaxRate;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KioskConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub pricing: PricingSettings,

    #[serde(default)]
    pub checkout: CheckoutSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Shown above the menu
    #[serde(default = "default_store_name")]
    pub name: String,
}

fn default_store_name() -> String {
    "Bistro".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingSettings {
    /// Fraction of the subtotal, `"0.10"` = 10%
    #[serde(default)]
    pub tax_rate: TaxRate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSettings {
    /// How long the simulated order service takes to confirm
    #[serde(default = "default_checkout_delay")]
    pub delay_ms: u64,
}

fn default_checkout_delay() -> u64 {
    2000
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        CheckoutSettings {
            delay_ms: default_checkout_delay(),
        }
    }
}

impl CheckoutSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl KioskConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => {
                info!(?path, "Loading kiosk config from file");
                let contents = std::fs::read_to_string(&path).map_err(|source| {
                    ConfigError::Read {
                        path: path.clone(),
                        source,
                    }
                })?;
                Self::from_toml(&contents)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document. Missing sections fall back to defaults.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.name.trim().is_empty() {
            return Err(ConfigError::Invalid("store.name must not be empty".into()));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(name) = std::env::var("BISTRO_STORE_NAME") {
            self.store.name = name;
        }

        if let Ok(rate) = std::env::var("BISTRO_TAX_RATE") {
            match parse_tax_percentage(&rate) {
                Ok(parsed) => {
                    debug!(tax_rate = %parsed, "Overriding tax rate from environment");
                    self.pricing.tax_rate = parsed;
                }
                Err(e) => warn!(value = %rate, error = %e, "Ignoring BISTRO_TAX_RATE"),
            }
        }

        if let Ok(delay) = std::env::var("BISTRO_CHECKOUT_DELAY_MS") {
            match delay.parse::<u64>() {
                Ok(ms) => self.checkout.delay_ms = ms,
                Err(_) => warn!(value = %delay, "Ignoring BISTRO_CHECKOUT_DELAY_MS"),
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("BISTRO_CONFIG") {
            return Some(PathBuf::from(path));
        }

        directories::ProjectDirs::from("com", "bistro", "bistro")
            .map(|dirs| dirs.config_dir().join("bistro.toml"))
    }
}

/// Parses a percentage such as `"8.25"` into a tax rate.
pub fn parse_tax_percentage(value: &str) -> Result<TaxRate, ConfigError> {
    let pct = Decimal::from_str(value.trim())
        .map_err(|e| ConfigError::Invalid(format!("tax rate '{}': {}", value, e)))?;
    TaxRate::from_percentage(pct).map_err(|e| ConfigError::Invalid(e.to_string()))
}
