//! Forecast requests and results.

use chrono::{DateTime, Duration, Utc};

use sensorcast_config::ForecastConfig;
use sensorcast_core::{CoreResult, Sample, Series};
use sensorcast_math::ar::ArModel;
use sensorcast_math::filter::FilterSpec;

use crate::error::EngineResult;
use crate::order::OrderPolicy;

// =============================================================================
// REQUEST
// =============================================================================

/// Input to one forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    /// Observed series.
    pub series: Series,
    /// Number of future samples to produce.
    pub horizon: usize,
    /// Pre-filter specification. Its sampling frequency also drives the time axis.
    pub filter: FilterSpec,
    /// AR order policy.
    pub order_policy: OrderPolicy,
}

impl ForecastRequest {
    /// Creates a request with the default order policy.
    pub fn new(series: Series, horizon: usize, filter: FilterSpec) -> Self {
        Self {
            series,
            horizon,
            filter,
            order_policy: OrderPolicy::default(),
        }
    }

    /// Builds a request from a configuration.
    pub fn from_config(series: Series, config: &ForecastConfig) -> EngineResult<Self> {
        Ok(Self {
            series,
            horizon: config.horizon_samples(),
            filter: config.filter_spec()?,
            order_policy: OrderPolicy::new(config.min_order, config.max_order)?,
        })
    }

    /// Replaces the order policy.
    #[must_use]
    pub fn with_order_policy(mut self, order_policy: OrderPolicy) -> Self {
        self.order_policy = order_policy;
        self
    }

    /// AR order this request will be fitted with.
    pub fn order(&self) -> usize {
        self.order_policy.order_for(self.horizon)
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// Filtered observations followed by their extrapolated continuation.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    pub(crate) time_axis: Vec<f64>,
    pub(crate) values: Vec<f64>,
    pub(crate) observed_len: usize,
    pub(crate) model: ArModel,
    pub(crate) start: DateTime<Utc>,
}

impl ForecastResult {
    /// Total number of samples (observed plus forecast).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: a result holds at least the observed samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Relative times in seconds, starting at zero.
    pub fn time_axis(&self) -> &[f64] {
        &self.time_axis
    }

    /// Filtered observations and forecast, in order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Filtered observations.
    pub fn observed(&self) -> &[f64] {
        &self.values[..self.observed_len]
    }

    /// Extrapolated samples.
    pub fn forecast(&self) -> &[f64] {
        &self.values[self.observed_len..]
    }

    /// Number of observed samples; the index of the first forecast sample.
    pub fn observed_len(&self) -> usize {
        self.observed_len
    }

    /// Number of forecast samples.
    pub fn horizon(&self) -> usize {
        self.values.len() - self.observed_len
    }

    /// Relative time at which the forecast begins, in seconds.
    pub fn forecast_start_time(&self) -> f64 {
        match self.time_axis.get(self.observed_len) {
            Some(&t) => t,
            None => {
                // Zero horizon: one period past the last observation
                let period = if self.time_axis.len() > 1 {
                    self.time_axis[1] - self.time_axis[0]
                } else {
                    0.0
                };
                self.time_axis.last().map_or(0.0, |&t| t + period)
            }
        }
    }

    /// The fitted model.
    pub fn model(&self) -> &ArModel {
        &self.model
    }

    /// Timestamp of the first observed sample.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Calendar timestamps of every sample.
    ///
    /// Relative times are rounded to whole microseconds.
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.time_axis
            .iter()
            .map(|&t| self.start + Duration::microseconds((t * 1e6).round() as i64))
            .collect()
    }

    /// The whole result as a timestamped series.
    pub fn to_series(&self) -> CoreResult<Series> {
        let samples = self
            .timestamps()
            .into_iter()
            .zip(&self.values)
            .map(|(timestamp, &value)| Sample::new(timestamp, value))
            .collect();
        Series::new(samples)
    }
}
