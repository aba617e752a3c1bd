//! Historical sample retrieval.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::error::{CoreError, CoreResult};
use crate::types::{Sample, SensorId, Series};

/// Source of historical samples for a sensor.
///
/// Implementations return the samples of `sensor` with
/// `from <= timestamp <= to`, ordered by timestamp.
pub trait SampleSource: Send + Sync {
    /// Fetches the samples of `sensor` in the closed range `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRange`] if `from > to`,
    /// [`CoreError::SensorNotFound`] for unknown sensors and
    /// [`CoreError::EmptySeries`] if the range holds no samples.
    fn fetch(&self, sensor: &SensorId, from: DateTime<Utc>, to: DateTime<Utc>)
        -> CoreResult<Series>;

    /// Returns the name of the source.
    fn name(&self) -> &'static str;
}

/// Sample source backed by in-memory vectors.
///
/// # Example
///
/// ```rust
/// use sensorcast_core::prelude::*;
/// use chrono::{Duration, TimeZone, Utc};
///
/// let t0 = Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap();
/// let mut source = InMemorySampleSource::new();
/// source.insert(
///     SensorId::from(1u32),
///     (0..10).map(|i| Sample::new(t0 + Duration::seconds(15 * i), i as f64)),
/// );
///
/// let series = source
///     .fetch(&SensorId::from(1u32), t0, t0 + Duration::seconds(45))
///     .unwrap();
/// assert_eq!(series.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySampleSource {
    samples: HashMap<SensorId, Vec<Sample>>,
}

impl InMemorySampleSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds samples for a sensor. Samples are kept sorted by timestamp.
    pub fn insert(&mut self, sensor: SensorId, samples: impl IntoIterator<Item = Sample>) {
        let stored = self.samples.entry(sensor).or_default();
        stored.extend(samples);
        stored.sort_by_key(|s| s.timestamp);
    }

    /// Number of samples stored for a sensor.
    pub fn count(&self, sensor: &SensorId) -> usize {
        self.samples.get(sensor).map_or(0, Vec::len)
    }
}

impl SampleSource for InMemorySampleSource {
    fn fetch(
        &self,
        sensor: &SensorId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> CoreResult<Series> {
        if from > to {
            return Err(CoreError::InvalidRange {
                reason: format!("{from} is after {to}"),
            });
        }

        let stored = self
            .samples
            .get(sensor)
            .ok_or_else(|| CoreError::SensorNotFound {
                sensor: sensor.to_string(),
            })?;

        let start = stored.partition_point(|s| s.timestamp < from);
        let end = stored.partition_point(|s| s.timestamp <= to);

        log::debug!(
            "fetched {} samples for sensor {} in [{}, {}]",
            end - start,
            sensor,
            from,
            to
        );

        Series::new(stored[start..end].to_vec())
    }

    fn name(&self) -> &'static str {
        "InMemory"
    }
}
