//! Extrapolation of sampled signals beyond their last observation.
//!
//! - [`ArExtrapolator`]: feeds a fitted AR model its own predictions, turning
//!   it into an autonomous IIR recursion
//!
//! Extrapolation here is unconditional: once observations run out there is
//! no re-estimation and no exogenous input.
//!
//! # Example
//!
//! ```rust
//! use sensorcast_math::ar::ArModel;
//! use sensorcast_math::extrapolation::{ArExtrapolator, Extrapolator};
//!
//! // x[n] = x[n-1] - x[n-2] repeats with period 6
//! let model = ArModel::from_real(&[-1.0, 1.0]);
//! let extrapolator = ArExtrapolator::new(&model);
//!
//! let out = extrapolator.extend(&[1.0, 1.0, 0.0], 3).unwrap();
//! assert_eq!(out, vec![1.0, 1.0, 0.0, -1.0, -1.0, 0.0]);
//! ```

mod recursive;

pub use recursive::ArExtrapolator;

use crate::error::MathResult;

/// Trait for extrapolation methods.
///
/// Implementations continue a history by `horizon` samples and return the
/// history followed by the continuation.
pub trait Extrapolator: Send + Sync {
    /// Returns `history` extended by `horizon` extrapolated samples.
    ///
    /// The first `history.len()` values of the result equal `history`.
    fn extend(&self, history: &[f64], horizon: usize) -> MathResult<Vec<f64>>;

    /// Returns the name of the extrapolation method.
    fn name(&self) -> &'static str;
}
