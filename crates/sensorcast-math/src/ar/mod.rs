//! Autoregressive models.
//!
//! An AR model of order `N` relates each sample to its predecessors:
//!
//! ```text
//! x[n] + a[1] x[n-1] + ... + a[N] x[n-N] = e[n]
//! ```
//!
//! where `e[n]` is the prediction error with power [`ArModel::error_power`].
//! Models are fitted with [`burg`] and consumed by
//! [`ArExtrapolator`](crate::extrapolation::ArExtrapolator).

mod burg;

pub use burg::burg;

use nalgebra::Complex;

/// Fitted autoregressive model.
///
/// Coefficients are complex because Burg's lattice recursion is defined
/// over complex sequences. For real input the imaginary parts are zero; the
/// extrapolator projects onto the real part.
#[derive(Debug, Clone, PartialEq)]
pub struct ArModel {
    coefficients: Vec<Complex<f64>>,
    reflection: Vec<Complex<f64>>,
    error_power: f64,
}

impl ArModel {
    /// Creates a model from its parts.
    ///
    /// `coefficients` holds `a[1..=N]`; the leading `a[0] = 1` is implicit.
    pub fn new(
        coefficients: Vec<Complex<f64>>,
        reflection: Vec<Complex<f64>>,
        error_power: f64,
    ) -> Self {
        Self {
            coefficients,
            reflection,
            error_power,
        }
    }

    /// Creates a model from real coefficients `a[1..=N]`.
    ///
    /// The reflection coefficients are left empty and the error power is zero.
    pub fn from_real(coefficients: &[f64]) -> Self {
        Self {
            coefficients: coefficients.iter().map(|&a| Complex::new(a, 0.0)).collect(),
            reflection: Vec::new(),
            error_power: 0.0,
        }
    }

    /// Model order `N`.
    pub fn order(&self) -> usize {
        self.coefficients.len()
    }

    /// Coefficients `a[1..=N]`.
    pub fn coefficients(&self) -> &[Complex<f64>] {
        &self.coefficients
    }

    /// Real parts of the coefficients.
    pub fn real_coefficients(&self) -> Vec<f64> {
        self.coefficients.iter().map(|a| a.re).collect()
    }

    /// Reflection coefficient of each order step.
    pub fn reflection_coefficients(&self) -> &[Complex<f64>] {
        &self.reflection
    }

    /// Final prediction-error power.
    pub fn error_power(&self) -> f64 {
        self.error_power
    }

    /// Returns `true` if every coefficient is finite.
    pub fn is_finite(&self) -> bool {
        self.coefficients
            .iter()
            .all(|a| a.re.is_finite() && a.im.is_finite())
            && self.error_power.is_finite()
    }
}
