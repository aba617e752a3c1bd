//! Recursive AR extrapolation.

use super::Extrapolator;
use crate::ar::ArModel;
use crate::error::{MathError, MathResult};

/// Autonomous AR recursion.
///
/// Each new value is the negated weighted sum of the `N` most recent
/// values, newest first:
///
/// ```text
/// y[i] = -(a[1] y[i-1] + a[2] y[i-2] + ... + a[N] y[i-N])
/// ```
///
/// Only the real parts of the model coefficients are used.
#[derive(Debug, Clone, PartialEq)]
pub struct ArExtrapolator {
    weights: Vec<f64>,
}

impl ArExtrapolator {
    /// Creates an extrapolator from a fitted model.
    pub fn new(model: &ArModel) -> Self {
        Self {
            weights: model.real_coefficients(),
        }
    }

    /// Order of the underlying model.
    pub fn order(&self) -> usize {
        self.weights.len()
    }

    /// Real weights `Re(a[1..=N])`.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

impl Extrapolator for ArExtrapolator {
    fn extend(&self, history: &[f64], horizon: usize) -> MathResult<Vec<f64>> {
        let observed = history.len();
        let order = self.weights.len();
        if observed <= order {
            return Err(MathError::insufficient_samples(order + 1, observed));
        }

        let mut output = vec![0.0; observed + horizon];
        output[..observed].copy_from_slice(history);

        for i in observed..output.len() {
            let mut acc = 0.0;
            for (k, w) in self.weights.iter().enumerate() {
                acc += w * output[i - 1 - k];
            }
            output[i] = -acc;
        }

        Ok(output)
    }

    fn name(&self) -> &'static str {
        "AR"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Complex;

    #[test]
    fn test_zero_horizon_is_identity() {
        let history = vec![0.1, 0.2, 0.3, 0.4];
        let extrapolator = ArExtrapolator::new(&ArModel::from_real(&[-0.5]));

        let out = extrapolator.extend(&history, 0).unwrap();
        assert_eq!(out, history);
    }

    #[test]
    fn test_prefix_is_bit_identical() {
        let history: Vec<f64> = (0..20).map(|i| (i as f64 * 0.37).cos() / 3.0).collect();
        let extrapolator = ArExtrapolator::new(&ArModel::from_real(&[-1.2, 0.4, 0.1]));

        let out = extrapolator.extend(&history, 15).unwrap();
        assert_eq!(out.len(), 35);
        for (a, b) in out.iter().zip(&history) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_recursion_newest_first() {
        // y[i] = -(-0.5 y[i-1] - 0.25 y[i-2])
        let extrapolator = ArExtrapolator::new(&ArModel::from_real(&[-0.5, -0.25]));
        let out = extrapolator.extend(&[4.0, 8.0, 2.0], 2).unwrap();

        assert_relative_eq!(out[3], 0.5 * 2.0 + 0.25 * 8.0);
        assert_relative_eq!(out[4], 0.5 * out[3] + 0.25 * 2.0);
    }

    #[test]
    fn test_imaginary_parts_ignored() {
        let model = ArModel::new(
            vec![Complex::new(-0.8, 5.0)],
            vec![Complex::new(-0.8, 5.0)],
            1.0,
        );
        let out = ArExtrapolator::new(&model).extend(&[1.0, 2.0], 1).unwrap();
        assert_relative_eq!(out[2], 1.6);
    }

    #[test]
    fn test_sinusoid_continues() {
        let w: f64 = 2.0 * std::f64::consts::PI / 25.0;
        let history: Vec<f64> = (0..10).map(|n| (w * n as f64).sin()).collect();
        let model = ArModel::from_real(&[-2.0 * w.cos(), 1.0]);

        let out = ArExtrapolator::new(&model).extend(&history, 40).unwrap();
        for (n, &y) in out.iter().enumerate() {
            assert_relative_eq!(y, (w * n as f64).sin(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_history_must_exceed_order() {
        let extrapolator = ArExtrapolator::new(&ArModel::from_real(&[0.1, 0.2, 0.3]));
        assert_eq!(
            extrapolator.extend(&[1.0, 2.0, 3.0], 5),
            Err(MathError::InsufficientSamples {
                required: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_name_and_order() {
        let extrapolator = ArExtrapolator::new(&ArModel::from_real(&[0.1, 0.2]));
        assert_eq!(extrapolator.name(), "AR");
        assert_eq!(extrapolator.order(), 2);
        assert_eq!(extrapolator.weights(), &[0.1, 0.2]);
    }
}
