//! # Sensorcast
//!
//! Short-horizon forecasting of sampled sensor signals.
//!
//! This crate re-exports the public API of the workspace:
//!
//! - [`sensorcast_core`]: samples, series, time axes and sample sources
//! - [`sensorcast_math`]: FIR pre-filter, Burg AR estimation and AR extrapolation
//! - [`sensorcast_config`]: named forecast configurations and their manager
//! - [`sensorcast_engine`]: the forecasting pipeline
//!
//! ## Example
//!
//! ```rust
//! use sensorcast::prelude::*;
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let start = Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap();
//! let values: Vec<f64> = (0..400)
//!     .map(|t| (2.0 * std::f64::consts::PI * t as f64 / 50.0).sin())
//!     .collect();
//! let series = Series::uniform(start, Duration::seconds(1), values).unwrap();
//!
//! let config = ConfigManager::new().get("UNIT.1HZ").unwrap();
//! let result = Forecaster::new().forecast_with_config(series, &config).unwrap();
//!
//! assert_eq!(result.forecast().len(), 50);
//! ```

#![warn(missing_docs)]

pub use sensorcast_config;
pub use sensorcast_core;
pub use sensorcast_engine;
pub use sensorcast_math;

/// Prelude re-exporting the most commonly used items.
pub mod prelude {
    pub use sensorcast_config::prelude::*;
    pub use sensorcast_core::prelude::*;
    pub use sensorcast_engine::{
        order_for, prefilter, EngineError, EngineResult, ForecastRequest, ForecastResult,
        Forecaster, OrderPolicy,
    };
    pub use sensorcast_math::prelude::*;
}
