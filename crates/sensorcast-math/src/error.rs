//! Error types for numerical operations.

use thiserror::Error;

/// A specialized Result type for numerical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during filtering, estimation or extrapolation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Not enough samples for the requested model order.
    #[error("Insufficient samples: need at least {required}, got {actual}")]
    InsufficientSamples {
        /// Minimum required samples.
        required: usize,
        /// Actual number of samples.
        actual: usize,
    },

    /// Burg recursion broke down numerically.
    #[error("Model degenerate at order {order}: {quantity} is {value:.3e}")]
    ModelDegenerate {
        /// Order step at which the breakdown was detected.
        order: usize,
        /// Which quantity failed ("denominator" or "error power").
        quantity: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Sampling frequency is zero, negative or not finite.
    #[error("Invalid frequency: {value} Hz")]
    InvalidFrequency {
        /// The rejected frequency.
        value: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates an insufficient samples error.
    #[must_use]
    pub fn insufficient_samples(required: usize, actual: usize) -> Self {
        Self::InsufficientSamples { required, actual }
    }

    /// Creates a model degenerate error for a non-positive normalization.
    #[must_use]
    pub fn degenerate_denominator(order: usize, value: f64) -> Self {
        Self::ModelDegenerate {
            order,
            quantity: "denominator",
            value,
        }
    }

    /// Creates a model degenerate error for a negative prediction-error power.
    #[must_use]
    pub fn degenerate_power(order: usize, value: f64) -> Self {
        Self::ModelDegenerate {
            order,
            quantity: "error power",
            value,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::insufficient_samples(201, 5);
        assert!(err.to_string().contains("at least 201, got 5"));

        let err = MathError::degenerate_denominator(2, 0.0);
        assert!(err.to_string().contains("order 2"));
        assert!(err.to_string().contains("denominator"));
    }
}
