//! Time-ordered sample series.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::Sample;
use crate::error::{CoreError, CoreResult};

/// A non-empty, strictly time-ordered sequence of samples.
///
/// The sampling interval is nominal: a series built by [`Series::new`] is
/// checked for ordering only, not for uniform spacing. Forecasting assumes
/// the caller supplies gap-free data at a fixed interval.
///
/// # Example
///
/// ```rust
/// use sensorcast_core::{Sample, Series};
/// use chrono::{Duration, TimeZone, Utc};
///
/// let t0 = Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap();
/// let series = Series::new(vec![
///     Sample::new(t0, 21.5),
///     Sample::new(t0 + Duration::seconds(15), 21.7),
/// ])
/// .unwrap();
///
/// assert_eq!(series.values(), vec![21.5, 21.7]);
/// assert_eq!(series.span(), Duration::seconds(15));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Sample>", into = "Vec<Sample>")]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    /// Creates a series from samples.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptySeries`] for no samples and
    /// [`CoreError::NonMonotonicTimestamps`] if any timestamp does not
    /// strictly follow its predecessor.
    pub fn new(samples: Vec<Sample>) -> CoreResult<Self> {
        if samples.is_empty() {
            return Err(CoreError::EmptySeries);
        }

        for (i, pair) in samples.windows(2).enumerate() {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(CoreError::NonMonotonicTimestamps { index: i + 1 });
            }
        }

        Ok(Self { samples })
    }

    /// Creates a uniformly sampled series starting at `start`.
    pub fn uniform(start: DateTime<Utc>, interval: Duration, values: Vec<f64>) -> CoreResult<Self> {
        if interval <= Duration::zero() {
            return Err(CoreError::InvalidInterval {
                millis: interval.num_milliseconds(),
            });
        }

        let mut timestamp = start;
        let mut samples = Vec::with_capacity(values.len());
        for value in values {
            samples.push(Sample::new(timestamp, value));
            timestamp += interval;
        }

        Self::new(samples)
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the samples.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the sample values in time order.
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }

    /// Returns the sample timestamps in time order.
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.samples.iter().map(|s| s.timestamp).collect()
    }

    /// Returns the earliest sample.
    pub fn first(&self) -> &Sample {
        &self.samples[0]
    }

    /// Returns the latest sample.
    pub fn last(&self) -> &Sample {
        &self.samples[self.samples.len() - 1]
    }

    /// Time between the first and the last sample.
    pub fn span(&self) -> Duration {
        self.last().timestamp - self.first().timestamp
    }

    /// Interval between the first two samples, if there are two.
    pub fn nominal_interval(&self) -> Option<Duration> {
        self.samples
            .get(1)
            .map(|second| second.timestamp - self.samples[0].timestamp)
    }

    /// Returns a series with the same timestamps and new values.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::LengthMismatch`] if `values` has a different length.
    pub fn with_values(&self, values: &[f64]) -> CoreResult<Self> {
        if values.len() != self.samples.len() {
            return Err(CoreError::length_mismatch(self.samples.len(), values.len()));
        }

        let samples = self
            .samples
            .iter()
            .zip(values)
            .map(|(s, &value)| Sample::new(s.timestamp, value))
            .collect();

        Ok(Self { samples })
    }

    /// Consumes the series and returns its samples.
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl TryFrom<Vec<Sample>> for Series {
    type Error = CoreError;

    fn try_from(samples: Vec<Sample>) -> CoreResult<Self> {
        Self::new(samples)
    }
}

impl From<Series> for Vec<Sample> {
    fn from(series: Series) -> Self {
        series.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_series_rejected() {
        assert_eq!(Series::new(vec![]), Err(CoreError::EmptySeries));
    }

    #[test]
    fn test_non_monotonic_rejected() {
        let samples = vec![
            Sample::new(t0(), 1.0),
            Sample::new(t0() + Duration::seconds(15), 2.0),
            Sample::new(t0() + Duration::seconds(15), 3.0),
        ];
        assert_eq!(
            Series::new(samples),
            Err(CoreError::NonMonotonicTimestamps { index: 2 })
        );
    }

    #[test]
    fn test_uniform_series() {
        let series = Series::uniform(t0(), Duration::seconds(15), vec![1.0, 2.0, 3.0]).unwrap();

        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
        assert_eq!(series.first().value, 1.0);
        assert_eq!(series.last().value, 3.0);
        assert_eq!(series.span(), Duration::seconds(30));
        assert_eq!(series.nominal_interval(), Some(Duration::seconds(15)));
    }

    #[test]
    fn test_uniform_rejects_zero_interval() {
        let result = Series::uniform(t0(), Duration::zero(), vec![1.0, 2.0]);
        assert!(matches!(result, Err(CoreError::InvalidInterval { .. })));
    }

    #[test]
    fn test_single_sample_has_no_interval() {
        let series = Series::uniform(t0(), Duration::seconds(1), vec![5.0]).unwrap();
        assert_eq!(series.nominal_interval(), None);
        assert_eq!(series.span(), Duration::zero());
    }

    #[test]
    fn test_with_values_keeps_timestamps() {
        let series = Series::uniform(t0(), Duration::seconds(1), vec![1.0, 2.0]).unwrap();
        let replaced = series.with_values(&[10.0, 20.0]).unwrap();

        assert_eq!(replaced.timestamps(), series.timestamps());
        assert_eq!(replaced.values(), vec![10.0, 20.0]);

        assert_eq!(
            series.with_values(&[1.0]),
            Err(CoreError::length_mismatch(2, 1))
        );
    }

    #[test]
    fn test_serde_validates() {
        let series = Series::uniform(t0(), Duration::seconds(1), vec![1.0, 2.0]).unwrap();
        let json = serde_json::to_string(&series).unwrap();
        let back: Series = serde_json::from_str(&json).unwrap();
        assert_eq!(back, series);

        assert!(serde_json::from_str::<Series>("[]").is_err());
    }
}
