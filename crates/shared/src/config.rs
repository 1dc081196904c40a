//! Application configuration management.

use rust_decimal::RoundingStrategy;
use serde::Deserialize;

use crate::error::AppResult;
use crate::types::CurrencyCode;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// How amounts and timestamps are presented.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Currency used for converted totals and labels.
    #[serde(default)]
    pub currency: CurrencyCode,
    /// IANA time zone name (e.g., "Europe/Amsterdam") or "UTC".
    /// `None` uses the process local zone.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Rounding rule for two-decimal currency formatting.
    #[serde(default)]
    pub rounding: RoundingMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            timezone: None,
            rounding: RoundingMode::default(),
        }
    }
}

/// Rounding rule applied at the second decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// 2.345 -> 2.35, -2.345 -> -2.35
    #[default]
    HalfAwayFromZero,
    /// Banker's rounding: 2.345 -> 2.34, 2.355 -> 2.36
    HalfEven,
}

impl RoundingMode {
    /// Returns the matching `rust_decimal` strategy.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Every field has a default, so a missing `config/` directory is fine.
    ///
    /// # Errors
    ///
    /// Returns an error if a source exists but cannot be parsed.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("BANKDASH").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or a value is rejected.
    pub fn from_toml(source: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
