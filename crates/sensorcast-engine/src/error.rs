//! Engine error types.

use thiserror::Error;

use sensorcast_config::ConfigError;
use sensorcast_core::CoreError;
use sensorcast_math::MathError;

/// Engine operation result type.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the forecasting pipeline.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Filtering, estimation or extrapolation failed.
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    /// Series, time axis or sample source failed.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Configuration was invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Order bounds are empty or start at zero.
    #[error("Invalid order bounds: [{min}, {max}]")]
    InvalidOrderBounds {
        /// Lower bound.
        min: usize,
        /// Upper bound.
        max: usize,
    },
}

impl EngineError {
    /// Returns true if the series was too short for the model order.
    pub fn is_insufficient_samples(&self) -> bool {
        matches!(self, Self::Math(MathError::InsufficientSamples { .. }))
    }

    /// Returns true if Burg's recursion broke down.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Math(MathError::ModelDegenerate { .. }))
    }

    /// Returns true if a sampling frequency was rejected.
    pub fn is_invalid_frequency(&self) -> bool {
        matches!(
            self,
            Self::Math(MathError::InvalidFrequency { .. })
                | Self::Core(CoreError::InvalidFrequency { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let err = EngineError::from(MathError::insufficient_samples(201, 5));
        assert!(err.is_insufficient_samples());
        assert!(!err.is_degenerate());
        assert_eq!(err.to_string(), "Math error: Insufficient samples: need at least 201, got 5");

        let err = EngineError::from(MathError::degenerate_denominator(2, 0.0));
        assert!(err.is_degenerate());

        let err = EngineError::from(CoreError::invalid_frequency(0.0));
        assert!(err.is_invalid_frequency());
    }
}
