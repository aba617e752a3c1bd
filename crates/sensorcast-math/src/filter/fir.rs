//! Windowed-sinc FIR design and causal convolution.

use std::f64::consts::PI;

use super::{window, FilterSpec};
use crate::error::{MathError, MathResult};

/// Smallest usable kernel sum before normalisation.
const MIN_KERNEL_GAIN: f64 = 1e-12;

/// Designed low-pass FIR kernel.
///
/// The kernel is the ideal low-pass impulse response truncated to
/// `taps` points, tapered by the spec's window and scaled to unit gain at
/// DC. Filtering is a plain causal convolution starting from zero state, so
/// the output lags the input by [`FirFilter::group_delay`] samples and the
/// first `taps - 1` outputs carry a start-up transient.
#[derive(Debug, Clone, PartialEq)]
pub struct FirFilter {
    coefficients: Vec<f64>,
}

impl FirFilter {
    /// Designs the kernel described by `spec`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidInput`] if the windowed kernel sums to
    /// zero, which happens when a window vanishes at every tap (two-point
    /// Hann or Blackman).
    pub fn design(spec: &FilterSpec) -> MathResult<Self> {
        let taps = spec.taps();
        let cutoff = spec.normalized_cutoff();
        let center = (taps - 1) as f64 / 2.0;

        let mut coefficients: Vec<f64> = window::coefficients(spec.window(), taps)
            .into_iter()
            .enumerate()
            .map(|(n, w)| cutoff * sinc(cutoff * (n as f64 - center)) * w)
            .collect();

        let gain: f64 = coefficients.iter().sum();
        if !(gain.is_finite() && gain.abs() > MIN_KERNEL_GAIN) {
            return Err(MathError::invalid_input(format!(
                "{}-tap {} window leaves no DC gain to normalise",
                taps,
                spec.window().name()
            )));
        }
        for c in &mut coefficients {
            *c /= gain;
        }

        log::debug!(
            "designed {}-tap {} low-pass, normalized cutoff {:.6}",
            taps,
            spec.window().name(),
            cutoff
        );

        Ok(Self { coefficients })
    }

    /// Kernel coefficients.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Number of taps.
    pub fn taps(&self) -> usize {
        self.coefficients.len()
    }

    /// Delay in samples introduced by the symmetric kernel.
    pub fn group_delay(&self) -> f64 {
        (self.coefficients.len() - 1) as f64 / 2.0
    }

    /// Gain at zero frequency.
    pub fn dc_gain(&self) -> f64 {
        self.coefficients.iter().sum()
    }

    /// Filters `input`, returning a sequence of the same length.
    pub fn apply(&self, input: &[f64]) -> Vec<f64> {
        let mut output = vec![0.0; input.len()];
        for (n, y) in output.iter_mut().enumerate() {
            let reach = n.min(self.coefficients.len() - 1);
            let mut acc = 0.0;
            for k in 0..=reach {
                acc += self.coefficients[k] * input[n - k];
            }
            *y = acc;
        }
        output
    }
}

fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}
