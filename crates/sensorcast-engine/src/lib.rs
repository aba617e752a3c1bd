//! # Sensorcast Engine
//!
//! Short-horizon forecasting of sampled sensor signals.
//!
//! A forecast runs five steps:
//!
//! 1. **Order policy**: the AR order is the horizon clamped to `[200, 1000]`
//! 2. **Pre-filter**: a windowed-sinc FIR low-pass suppresses noise
//! 3. **Estimation**: Burg's method fits the AR model to the filtered series
//! 4. **Extrapolation**: the model runs as an autonomous IIR recursion
//! 5. **Time axis**: relative times for observed and forecast samples
//!
//! Every step is synchronous and request-scoped. Errors surface to the
//! caller unchanged; the engine never lowers the order or retries.
//!
//! ## Example
//!
//! ```rust
//! use sensorcast_core::Series;
//! use sensorcast_engine::{ForecastRequest, Forecaster};
//! use sensorcast_math::filter::FilterSpec;
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let start = Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap();
//! let values: Vec<f64> = (0..300)
//!     .map(|t| (2.0 * std::f64::consts::PI * t as f64 / 50.0).sin())
//!     .collect();
//! let series = Series::uniform(start, Duration::seconds(1), values).unwrap();
//!
//! let request = ForecastRequest::new(series, 50, FilterSpec::new(1.0, 0.05).unwrap());
//! let result = Forecaster::new().forecast(&request).unwrap();
//!
//! assert_eq!(result.len(), 350);
//! assert_eq!(result.forecast().len(), 50);
//! assert_eq!(result.model().order(), 200);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod forecaster;
mod order;
mod request;

pub use error::{EngineError, EngineResult};
pub use forecaster::{prefilter, Forecaster};
pub use order::{order_for, OrderPolicy};
pub use request::{ForecastRequest, ForecastResult};
