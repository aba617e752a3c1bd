//! Sensorcast Configuration Layer
//!
//! This crate provides configuration management for the Sensorcast
//! forecasting library: sampling, pre-filter, horizon and model-order
//! settings, with validation and a registry of named presets.
//!
//! # Features
//!
//! - **Forecast Configuration**: sampling interval, cutoff rule, horizon, taps, window, order bounds
//! - **Cutoff Rules**: fixed cutoff or one derived from a dominant period
//! - **Horizon Specs**: sample counts or calendar spans
//! - **Formats**: JSON and TOML
//!
//! # Example
//!
//! ```rust
//! use sensorcast_config::{ConfigManager, ForecastConfig, HorizonSpec};
//!
//! let manager = ConfigManager::new();
//!
//! // 15-second weather station sampling, one day ahead
//! let weather = manager.get("WEATHER.15S").unwrap();
//! assert_eq!(weather.horizon_samples(), 5760);
//!
//! // Register a custom configuration
//! let custom = ForecastConfig::new("GREENHOUSE.1M", 60.0)
//!     .with_horizon(HorizonSpec::Span { seconds: 6.0 * 3600.0 })
//!     .with_description("Greenhouse humidity, six hours ahead");
//! manager.register(custom).unwrap();
//! assert_eq!(manager.get("GREENHOUSE.1M").unwrap().horizon_samples(), 360);
//! ```
//!
//! # Standard Configurations
//!
//! - `WEATHER.15S` - 15 s sampling, daily-period cutoff rule, one-day horizon
//! - `UNIT.1HZ` - 1 Hz sampling, 0.05 Hz cutoff, 50-sample horizon

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod forecast;
mod manager;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use forecast::{CutoffRule, ForecastConfig, HorizonSpec, DEFAULT_MAX_ORDER, DEFAULT_MIN_ORDER};
pub use manager::ConfigManager;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::forecast::{CutoffRule, ForecastConfig, HorizonSpec};
    pub use crate::manager::ConfigManager;
}
