//! Forecasting pipeline.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use sensorcast_config::ForecastConfig;
use sensorcast_core::traits::SampleSource;
use sensorcast_core::{SensorId, Series, TimeAxis};
use sensorcast_math::ar::burg;
use sensorcast_math::extrapolation::{ArExtrapolator, Extrapolator};
use sensorcast_math::filter::FilterSpec;

use crate::error::EngineResult;
use crate::request::{ForecastRequest, ForecastResult};

/// Applies the low-pass pre-filter to a series.
///
/// Returns a series with the same timestamps and filtered values.
pub fn prefilter(series: &Series, spec: &FilterSpec) -> EngineResult<Series> {
    let filtered = spec.design()?.apply(&series.values());
    Ok(series.with_values(&filtered)?)
}

/// Runs forecasts.
///
/// Stateless: every call works on its own buffers, so one forecaster may
/// serve any number of requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Forecaster;

impl Forecaster {
    /// Creates a forecaster.
    pub fn new() -> Self {
        Self
    }

    /// Forecasts `request.horizon` samples past the end of `request.series`.
    ///
    /// # Errors
    ///
    /// - `InsufficientSamples` if the series is not longer than the AR order
    /// - `ModelDegenerate` if Burg's recursion breaks down
    /// - `InvalidFrequency` if the sampling frequency is not positive
    /// - `InvalidInput` if the filter window vanishes at every tap
    pub fn forecast(&self, request: &ForecastRequest) -> EngineResult<ForecastResult> {
        let result = self.run(request);
        if let Err(ref e) = result {
            warn!(
                samples = request.series.len(),
                horizon = request.horizon,
                error = %e,
                "Forecast failed"
            );
        }
        result
    }

    fn run(&self, request: &ForecastRequest) -> EngineResult<ForecastResult> {
        let order = request.order();
        debug!(
            samples = request.series.len(),
            horizon = request.horizon,
            order,
            "Forecast started"
        );

        let filtered = prefilter(&request.series, &request.filter)?.values();
        debug!(
            taps = request.filter.taps(),
            cutoff_hz = request.filter.cutoff_hz(),
            "Series filtered"
        );

        let model = burg(&filtered, order)?;
        debug!(order, error_power = model.error_power(), "AR model fitted");

        let extrapolator = ArExtrapolator::new(&model);
        let values = extrapolator.extend(&filtered, request.horizon)?;

        let time_axis = TimeAxis::new(request.filter.sampling_hz(), values.len())?.build();

        info!(
            observed = filtered.len(),
            horizon = request.horizon,
            order,
            method = extrapolator.name(),
            "Forecast complete"
        );

        Ok(ForecastResult {
            time_axis,
            values,
            observed_len: filtered.len(),
            model,
            start: request.series.first().timestamp,
        })
    }

    /// Forecasts a series with settings from a configuration.
    pub fn forecast_with_config(
        &self,
        series: Series,
        config: &ForecastConfig,
    ) -> EngineResult<ForecastResult> {
        let request = ForecastRequest::from_config(series, config)?;
        self.forecast(&request)
    }

    /// Fetches a sensor's samples in `[from, to]` and forecasts them.
    pub fn forecast_from_source(
        &self,
        source: &dyn SampleSource,
        sensor: &SensorId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        config: &ForecastConfig,
    ) -> EngineResult<ForecastResult> {
        let series = source.fetch(sensor, from, to)?;
        debug!(
            source = source.name(),
            sensor = %sensor,
            samples = series.len(),
            "Samples fetched"
        );
        self.forecast_with_config(series, config)
    }
}
