//! # Sensorcast Core
//!
//! Core types and abstractions for the Sensorcast forecasting library.
//!
//! This crate provides the foundational building blocks used throughout Sensorcast:
//!
//! - **Types**: [`Sample`], [`Series`], [`SensorId`] and the [`TimeAxis`] builder
//! - **Traits**: the [`SampleSource`] boundary to historical sample stores
//!
//! ## Design Philosophy
//!
//! - **Validated Construction**: a [`Series`] is never empty and its timestamps
//!   always increase strictly
//! - **Request-Scoped Values**: nothing here holds shared mutable state
//! - **Explicit Over Implicit**: sampling frequencies are passed, never inferred
//!
//! ## Example
//!
//! ```rust
//! use sensorcast_core::prelude::*;
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let start = Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap();
//! let series = Series::uniform(start, Duration::seconds(15), vec![1.0, 2.0, 3.0]).unwrap();
//! assert_eq!(series.len(), 3);
//!
//! let axis = TimeAxis::new(0.5, 3).unwrap().build();
//! assert_eq!(axis, vec![0.0, 2.0, 4.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::traits::{InMemorySampleSource, SampleSource};
    pub use crate::types::{time_axis, Sample, SensorId, Series, TimeAxis};
}

pub use error::{CoreError, CoreResult};
pub use types::{Sample, SensorId, Series, TimeAxis};
