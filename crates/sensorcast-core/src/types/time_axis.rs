//! Uniform time axis construction.

use crate::error::{CoreError, CoreResult};

/// Uniformly spaced relative time axis.
///
/// Values start at zero and advance by `1 / sampling_hz` seconds. A forecast
/// covering `observed + horizon` samples uses one axis for both portions;
/// [`TimeAxis::split`] separates them again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeAxis {
    sampling_hz: f64,
    count: usize,
}

impl TimeAxis {
    /// Creates a time axis of `count` points at `sampling_hz`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidFrequency`] if `sampling_hz` is zero,
    /// negative or not finite.
    pub fn new(sampling_hz: f64, count: usize) -> CoreResult<Self> {
        if !sampling_hz.is_finite() || sampling_hz <= 0.0 {
            return Err(CoreError::invalid_frequency(sampling_hz));
        }
        Ok(Self { sampling_hz, count })
    }

    /// Sampling frequency in Hz.
    pub fn sampling_hz(&self) -> f64 {
        self.sampling_hz
    }

    /// Sampling period in seconds.
    pub fn period(&self) -> f64 {
        1.0 / self.sampling_hz
    }

    /// Number of points on the axis.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` for an axis with no points.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Time of point `index` in seconds.
    pub fn at(&self, index: usize) -> f64 {
        index as f64 / self.sampling_hz
    }

    /// Materializes the axis.
    pub fn build(&self) -> Vec<f64> {
        (0..self.count).map(|i| self.at(i)).collect()
    }

    /// Builds the axis and splits it after `observed` points.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::LengthMismatch`] if `observed` exceeds the axis length.
    pub fn split(&self, observed: usize) -> CoreResult<(Vec<f64>, Vec<f64>)> {
        if observed > self.count {
            return Err(CoreError::length_mismatch(self.count, observed));
        }
        let mut head = self.build();
        let tail = head.split_off(observed);
        Ok((head, tail))
    }
}

/// Builds `count` ascending times starting at 0 with spacing `1 / sampling_hz`.
///
/// # Example
///
/// ```rust
/// use sensorcast_core::types::time_axis;
///
/// assert_eq!(time_axis(4.0, 3).unwrap(), vec![0.0, 0.25, 0.5]);
/// assert!(time_axis(0.0, 3).is_err());
/// ```
pub fn time_axis(sampling_hz: f64, count: usize) -> CoreResult<Vec<f64>> {
    TimeAxis::new(sampling_hz, count).map(|axis| axis.build())
}
