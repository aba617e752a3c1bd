//! Integration tests: full forecasts through the public API.
//!
//! The reference signal is a sine with a 50-sample period at 1 Hz. The
//! 101-tap pre-filter delays by exactly 50 samples, one full period, so
//! once the filter has settled the filtered series lines up with the input.

use approx::assert_abs_diff_eq;
use chrono::{DateTime, Duration, TimeZone, Utc};

use sensorcast_config::{ConfigManager, ForecastConfig, HorizonSpec};
use sensorcast_core::traits::{InMemorySampleSource, SampleSource};
use sensorcast_core::{Sample, SensorId, Series};
use sensorcast_engine::{prefilter, EngineError, ForecastRequest, Forecaster, OrderPolicy};
use sensorcast_math::filter::FilterSpec;

// =============================================================================
// TEST DATA
// =============================================================================

const PERIOD: f64 = 50.0;

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2015, 6, 1, 0, 0, 0).unwrap()
}

fn wave(n: usize) -> f64 {
    (2.0 * std::f64::consts::PI * n as f64 / PERIOD).sin()
}

/// Sine plus uniform noise in `[-amplitude/2, amplitude/2)` from a fixed LCG.
fn noisy_wave(len: usize, amplitude: f64) -> Vec<f64> {
    let mut state: u64 = 12345;
    (0..len)
        .map(|n| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let noise = (state >> 33) as f64 / (1u64 << 31) as f64 - 0.5;
            wave(n) + amplitude * noise
        })
        .collect()
}

fn series(values: Vec<f64>) -> Series {
    Series::uniform(start(), Duration::seconds(1), values).unwrap()
}

fn local_maxima(values: &[f64], from: usize) -> Vec<usize> {
    (from.max(1)..values.len() - 1)
        .filter(|&i| values[i] > values[i - 1] && values[i] >= values[i + 1])
        .collect()
}

fn assert_periodic_peaks(peaks: &[usize], after: usize) {
    assert!(peaks.len() >= 3, "too few peaks: {peaks:?}");
    for pair in peaks.windows(2) {
        let spacing = pair[1] - pair[0];
        assert!(
            (45..=55).contains(&spacing),
            "peak spacing {spacing} in {peaks:?}"
        );
    }
    assert!(
        *peaks.last().unwrap() > after,
        "no peak in the forecast: {peaks:?}"
    );
}

// =============================================================================
// END TO END
// =============================================================================

#[test]
fn test_sine_forecast_continues_period() {
    let input = series((0..300).map(wave).collect());
    let spec = FilterSpec::new(1.0, 0.05).unwrap();
    let request = ForecastRequest::new(input.clone(), 50, spec);

    let result = Forecaster::new().forecast(&request).unwrap();

    assert_eq!(result.len(), 350);
    assert_eq!(result.observed_len(), 300);
    assert_eq!(result.model().order(), 200);

    // Observed part is exactly the filter output
    let filtered = prefilter(&input, &spec).unwrap().values();
    assert_eq!(result.observed(), filtered.as_slice());

    for n in 100..300 {
        assert_abs_diff_eq!(result.values()[n], wave(n), epsilon = 1e-2);
    }

    assert!(result.values().iter().all(|v| v.is_finite() && v.abs() < 1.5));
    assert_periodic_peaks(&local_maxima(result.values(), 150), 300);
}

#[test]
fn test_noisy_sine_forecast_continues_period() {
    let input = series(noisy_wave(300, 0.2));
    let request = ForecastRequest::new(input, 50, FilterSpec::new(1.0, 0.05).unwrap());

    let result = Forecaster::new().forecast(&request).unwrap();

    assert_eq!(result.forecast().len(), 50);
    assert!(result.model().error_power() >= 0.0);
    assert!(result.values().iter().all(|v| v.is_finite() && v.abs() < 1.5));
    assert_periodic_peaks(&local_maxima(result.values(), 150), 300);
}

#[test]
fn test_time_axis_spans_observed_and_forecast() {
    let request = ForecastRequest::new(
        series((0..300).map(wave).collect()),
        50,
        FilterSpec::new(1.0, 0.05).unwrap(),
    );

    let result = Forecaster::new().forecast(&request).unwrap();
    let axis = result.time_axis();

    assert_eq!(axis.len(), 350);
    assert_abs_diff_eq!(axis[0], 0.0);
    assert_abs_diff_eq!(axis[349], 349.0, epsilon = 1e-9);
    assert_abs_diff_eq!(result.forecast_start_time(), 300.0, epsilon = 1e-9);

    let stamps = result.timestamps();
    assert_eq!(stamps[300], start() + Duration::seconds(300));
}

#[test]
fn test_forecast_is_deterministic() {
    let request = ForecastRequest::new(
        series(noisy_wave(260, 0.1)),
        30,
        FilterSpec::new(1.0, 0.05).unwrap(),
    );
    let forecaster = Forecaster::new();

    let first = forecaster.forecast(&request).unwrap();
    let second = forecaster.forecast(&request).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn test_too_few_samples() {
    let request = ForecastRequest::new(
        series(vec![1.0; 5]),
        10,
        FilterSpec::new(1.0, 0.05).unwrap(),
    );

    let err = Forecaster::new().forecast(&request).unwrap_err();
    assert!(err.is_insufficient_samples());
    assert!(err.to_string().contains("201"));
}

#[test]
fn test_series_must_exceed_order() {
    // 200 samples cannot support order 200
    let request = ForecastRequest::new(
        series((0..200).map(wave).collect()),
        50,
        FilterSpec::new(1.0, 0.05).unwrap(),
    );
    assert!(Forecaster::new()
        .forecast(&request)
        .unwrap_err()
        .is_insufficient_samples());
}

#[test]
fn test_silent_series_is_degenerate() {
    let request = ForecastRequest::new(
        series(vec![0.0; 400]),
        10,
        FilterSpec::new(1.0, 0.05).unwrap(),
    )
    .with_order_policy(OrderPolicy::new(20, 20).unwrap());

    let err = Forecaster::new().forecast(&request).unwrap_err();
    assert!(err.is_degenerate(), "unexpected error: {err}");
}

// =============================================================================
// CONFIGURATION AND SOURCES
// =============================================================================

#[test]
fn test_forecast_with_preset() {
    let manager = ConfigManager::new();
    let config = manager.get("UNIT.1HZ").unwrap();

    let result = Forecaster::new()
        .forecast_with_config(series(noisy_wave(400, 0.1)), &config)
        .unwrap();

    assert_eq!(result.len(), 450);
    assert_eq!(result.model().order(), 200);
    assert_periodic_peaks(&local_maxima(result.values(), 250), 400);
}

#[test]
fn test_forecast_with_span_horizon() {
    let config = ForecastConfig::unit_rate()
        .with_horizon(HorizonSpec::Span { seconds: 20.0 })
        .with_order_bounds(30, 60);

    let result = Forecaster::new()
        .forecast_with_config(series(noisy_wave(300, 0.1)), &config)
        .unwrap();

    assert_eq!(result.forecast().len(), 20);
    assert_eq!(result.model().order(), 30);
}

#[test]
fn test_invalid_config_order_bounds() {
    let config = ForecastConfig::unit_rate().with_order_bounds(50, 10);

    let err = Forecaster::new()
        .forecast_with_config(series(noisy_wave(300, 0.1)), &config)
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidOrderBounds { min: 50, max: 10 }));
}

#[test]
fn test_forecast_from_source() {
    let sensor = SensorId::from(7u32);
    let mut source = InMemorySampleSource::new();
    source.insert(
        sensor.clone(),
        noisy_wave(500, 0.1)
            .into_iter()
            .enumerate()
            .map(|(i, v)| Sample::new(start() + Duration::seconds(i as i64), v)),
    );

    let from = start() + Duration::seconds(100);
    let to = start() + Duration::seconds(499);
    let result = Forecaster::new()
        .forecast_from_source(&source, &sensor, from, to, &ForecastConfig::unit_rate())
        .unwrap();

    assert_eq!(result.observed_len(), 400);
    assert_eq!(result.start(), from);
    assert_eq!(result.forecast().len(), 50);
}

#[test]
fn test_unknown_sensor() {
    let source = InMemorySampleSource::new();
    let err = Forecaster::new()
        .forecast_from_source(
            &source,
            &SensorId::from("missing"),
            start(),
            start() + Duration::hours(1),
            &ForecastConfig::unit_rate(),
        )
        .unwrap_err();

    assert!(matches!(err, EngineError::Core(_)));
    assert_eq!(source.name(), "InMemory");
}
