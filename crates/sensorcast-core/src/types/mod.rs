//! Domain types for sampled sensor signals.
//!
//! - [`Sample`]: a timestamped reading
//! - [`Series`]: a validated, time-ordered sequence of samples
//! - [`SensorId`]: identifier of a sensor in a sample store
//! - [`TimeAxis`]: uniformly spaced relative time axis

mod sample;
mod sensor;
mod series;
mod time_axis;

pub use sample::Sample;
pub use sensor::SensorId;
pub use series::Series;
pub use time_axis::{time_axis, TimeAxis};
