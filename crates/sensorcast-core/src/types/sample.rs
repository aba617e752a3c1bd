//! Single timestamped reading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single sensor reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Time the reading was taken.
    pub timestamp: DateTime<Utc>,
    /// Measured value.
    pub value: f64,
}

impl Sample {
    /// Creates a new sample.
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

impl From<(DateTime<Utc>, f64)> for Sample {
    fn from((timestamp, value): (DateTime<Utc>, f64)) -> Self {
        Self { timestamp, value }
    }
}
