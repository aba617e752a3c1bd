//! Error types for the Sensorcast core types.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building or querying core types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A series must contain at least one sample.
    #[error("Series must contain at least one sample")]
    EmptySeries,

    /// Timestamps are not strictly increasing.
    #[error("Timestamps must be strictly increasing: sample {index} is not after its predecessor")]
    NonMonotonicTimestamps {
        /// Index of the offending sample.
        index: usize,
    },

    /// Sampling frequency is zero, negative or not finite.
    #[error("Invalid sampling frequency: {value} Hz (must be positive and finite)")]
    InvalidFrequency {
        /// The rejected frequency.
        value: f64,
    },

    /// Sampling interval is zero or negative.
    #[error("Invalid sampling interval: {millis} ms (must be positive)")]
    InvalidInterval {
        /// The rejected interval in milliseconds.
        millis: i64,
    },

    /// Two sequences that must have equal length do not.
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// The requested sensor has no samples in the source.
    #[error("Sensor not found: {sensor}")]
    SensorNotFound {
        /// Identifier of the missing sensor.
        sensor: String,
    },

    /// The requested date range is empty or inverted.
    #[error("Invalid range: {reason}")]
    InvalidRange {
        /// Description of the problem.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid frequency error.
    #[must_use]
    pub fn invalid_frequency(value: f64) -> Self {
        Self::InvalidFrequency { value }
    }

    /// Creates a length mismatch error.
    #[must_use]
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }
}
