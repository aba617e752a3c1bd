//! Burg's method.

use nalgebra::Complex;

use super::ArModel;
use crate::error::{MathError, MathResult};

/// Fits an AR model of the given order with Burg's lattice recursion.
///
/// At each order step `m` the reflection coefficient is
///
/// ```text
/// k[m] = -2 Σ conj(b[n]) f[n+1] / (Σ |f[n+1]|² + Σ |b[n]|²)
/// ```
///
/// over the current forward errors `f` and backward errors `b`. The
/// coefficients follow the Levinson update `a[i] += k[m] conj(a[m-i])` and
/// the error power shrinks by `1 - |k[m]|²`.
///
/// Error sequences live in two buffers of the input length that shrink by
/// one logical element per step; nothing is reallocated inside the loop.
///
/// # Errors
///
/// - [`MathError::InsufficientSamples`] if `order >= x.len()`
/// - [`MathError::ModelDegenerate`] if the normalization denominator is not
///   strictly positive, or the error power turns negative, at some step
///
/// # Example
///
/// ```rust
/// use sensorcast_math::ar::burg;
///
/// let x: Vec<f64> = (0..64).map(|n| (0.3 * n as f64).sin()).collect();
/// let model = burg(&x, 2).unwrap();
///
/// // A sinusoid obeys x[n] = 2cos(w) x[n-1] - x[n-2]
/// let a = model.real_coefficients();
/// assert!((a[0] + 2.0 * 0.3f64.cos()).abs() < 1e-3);
/// assert!((a[1] - 1.0).abs() < 1e-3);
/// ```
pub fn burg(x: &[f64], order: usize) -> MathResult<ArModel> {
    let len = x.len();
    if order >= len {
        return Err(MathError::insufficient_samples(order + 1, len));
    }

    let zero = Complex::new(0.0, 0.0);
    let mut forward: Vec<Complex<f64>> = x.iter().map(|&v| Complex::new(v, 0.0)).collect();
    let mut backward = forward.clone();
    let mut coefficients = vec![zero; order + 1];
    let mut previous = vec![zero; order + 1];
    let mut reflection = Vec::with_capacity(order);
    coefficients[0] = Complex::new(1.0, 0.0);

    let mut power = x.iter().map(|v| v * v).sum::<f64>() / len as f64;
    let mut active = len;

    for m in 1..=order {
        let mut numerator = zero;
        let mut denominator = 0.0;
        for n in 0..active - 1 {
            let f = forward[n + 1];
            let b = backward[n];
            numerator += b.conj() * f;
            denominator += f.norm_sqr() + b.norm_sqr();
        }

        if !(denominator.is_finite() && denominator > 0.0) {
            log::debug!("burg: denominator {:e} at order {}", denominator, m);
            return Err(MathError::degenerate_denominator(m, denominator));
        }

        let k = numerator * -2.0 / denominator;

        previous[..m].copy_from_slice(&coefficients[..m]);
        for i in 1..m {
            coefficients[i] = previous[i] + k * previous[m - i].conj();
        }
        coefficients[m] = k;

        for n in 0..active - 1 {
            let f = forward[n + 1];
            let b = backward[n];
            forward[n] = f + k * b;
            backward[n] = b + k.conj() * f;
        }
        active -= 1;

        power *= 1.0 - k.norm_sqr();
        if !(power.is_finite() && power >= 0.0) {
            log::debug!("burg: error power {:e} at order {}", power, m);
            return Err(MathError::degenerate_power(m, power));
        }

        log::trace!("burg: order {} reflection {:.6} power {:e}", m, k.re, power);
        reflection.push(k);
    }

    Ok(ArModel::new(coefficients[1..].to_vec(), reflection, power))
}
