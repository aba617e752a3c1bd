//! Tapering windows for FIR design.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Window applied to the truncated ideal low-pass kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    /// No tapering
    Rectangular,
    /// Raised cosine reaching zero at the ends
    Hann,
    /// Raised cosine with 0.54 / 0.46 weights
    #[default]
    Hamming,
    /// Three-term cosine window
    Blackman,
}

impl WindowKind {
    /// Window value at `n` for a symmetric window of `len` points.
    pub fn value(self, n: usize, len: usize) -> f64 {
        if len <= 1 {
            return 1.0;
        }
        let phase = 2.0 * PI * n as f64 / (len - 1) as f64;
        match self {
            Self::Rectangular => 1.0,
            Self::Hann => 0.5 - 0.5 * phase.cos(),
            Self::Hamming => 0.54 - 0.46 * phase.cos(),
            Self::Blackman => 0.42 - 0.5 * phase.cos() + 0.08 * (2.0 * phase).cos(),
        }
    }

    /// Returns the name of the window.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangular => "Rectangular",
            Self::Hann => "Hann",
            Self::Hamming => "Hamming",
            Self::Blackman => "Blackman",
        }
    }
}

/// Symmetric window of `len` points.
pub fn coefficients(kind: WindowKind, len: usize) -> Vec<f64> {
    (0..len).map(|n| kind.value(n, len)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hamming_endpoints_and_peak() {
        let w = coefficients(WindowKind::Hamming, 101);
        assert_relative_eq!(w[0], 0.08, epsilon = 1e-12);
        assert_relative_eq!(w[100], 0.08, epsilon = 1e-12);
        assert_relative_eq!(w[50], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_windows_are_symmetric() {
        for kind in [
            WindowKind::Rectangular,
            WindowKind::Hann,
            WindowKind::Hamming,
            WindowKind::Blackman,
        ] {
            let w = coefficients(kind, 33);
            for i in 0..w.len() {
                assert_relative_eq!(w[i], w[w.len() - 1 - i], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_single_point_window() {
        assert_eq!(coefficients(WindowKind::Blackman, 1), vec![1.0]);
    }

    #[test]
    fn test_hann_reaches_zero() {
        let w = coefficients(WindowKind::Hann, 11);
        assert_relative_eq!(w[0], 0.0, epsilon = 1e-15);
        assert_relative_eq!(w[5], 1.0, epsilon = 1e-12);
    }
}
