//! Forecast configuration types.
//!
//! This module defines the settings that drive one forecast: how the input
//! is sampled, how the pre-filter cutoff is chosen, how far ahead to
//! extrapolate and the bounds on the AR model order.

use serde::{Deserialize, Serialize};

use sensorcast_math::filter::{FilterSpec, WindowKind, DEFAULT_TAPS};
use sensorcast_math::MathResult;

use crate::error::{ConfigResult, Validate, ValidationError};

/// Default lower bound on the AR order.
pub const DEFAULT_MIN_ORDER: usize = 200;

/// Default upper bound on the AR order.
pub const DEFAULT_MAX_ORDER: usize = 1000;

const SECONDS_PER_DAY: f64 = 86_400.0;

// =============================================================================
// CUTOFF RULE
// =============================================================================

/// How the low-pass cutoff frequency is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum CutoffRule {
    /// Fixed cutoff in Hz.
    Fixed {
        /// Cutoff frequency in Hz.
        hz: f64,
    },
    /// Cutoff at `multiple` times the frequency of a dominant period.
    DominantPeriod {
        /// Slowest meaningful cycle in seconds.
        period_secs: f64,
        /// Multiple of the cycle frequency passed by the filter.
        multiple: f64,
    },
}

impl CutoffRule {
    /// Ten times the daily cycle frequency.
    pub fn daily() -> Self {
        Self::DominantPeriod {
            period_secs: SECONDS_PER_DAY,
            multiple: 10.0,
        }
    }

    /// Resolves the rule to a frequency in Hz.
    pub fn cutoff_hz(&self) -> f64 {
        match *self {
            Self::Fixed { hz } => hz,
            Self::DominantPeriod {
                period_secs,
                multiple,
            } => multiple / period_secs,
        }
    }
}

impl Default for CutoffRule {
    fn default() -> Self {
        Self::daily()
    }
}

// =============================================================================
// HORIZON
// =============================================================================

/// How far ahead to forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum HorizonSpec {
    /// A number of future samples.
    Samples {
        /// Sample count.
        count: usize,
    },
    /// A calendar span, divided by the sampling interval.
    Span {
        /// Span length in seconds.
        seconds: f64,
    },
}

impl HorizonSpec {
    /// Number of samples covered at the given sampling interval.
    ///
    /// Spans are rounded to the nearest whole sample.
    pub fn samples(&self, sampling_interval_secs: f64) -> usize {
        match *self {
            Self::Samples { count } => count,
            Self::Span { seconds } => {
                if sampling_interval_secs > 0.0 && seconds > 0.0 {
                    (seconds / sampling_interval_secs).round() as usize
                } else {
                    0
                }
            }
        }
    }
}

impl Default for HorizonSpec {
    fn default() -> Self {
        Self::Span {
            seconds: SECONDS_PER_DAY,
        }
    }
}

// =============================================================================
// FORECAST CONFIGURATION
// =============================================================================

/// Settings for one kind of forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Configuration name/identifier.
    pub name: String,

    /// Description of this configuration.
    #[serde(default)]
    pub description: Option<String>,

    /// Nominal time between samples, in seconds.
    pub sampling_interval_secs: f64,

    /// Pre-filter cutoff rule.
    #[serde(default)]
    pub cutoff: CutoffRule,

    /// Forecast horizon.
    #[serde(default)]
    pub horizon: HorizonSpec,

    /// Number of FIR taps.
    #[serde(default = "default_taps")]
    pub taps: usize,

    /// FIR window.
    #[serde(default)]
    pub window: WindowKind,

    /// Lower bound on the AR order.
    #[serde(default = "default_min_order")]
    pub min_order: usize,

    /// Upper bound on the AR order.
    #[serde(default = "default_max_order")]
    pub max_order: usize,

    /// Whether this configuration is read-only.
    #[serde(default)]
    pub read_only: bool,
}

fn default_taps() -> usize {
    DEFAULT_TAPS
}

fn default_min_order() -> usize {
    DEFAULT_MIN_ORDER
}

fn default_max_order() -> usize {
    DEFAULT_MAX_ORDER
}

impl ForecastConfig {
    /// Creates a configuration with default filter, horizon and order settings.
    pub fn new(name: impl Into<String>, sampling_interval_secs: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            sampling_interval_secs,
            cutoff: CutoffRule::default(),
            horizon: HorizonSpec::default(),
            taps: DEFAULT_TAPS,
            window: WindowKind::default(),
            min_order: DEFAULT_MIN_ORDER,
            max_order: DEFAULT_MAX_ORDER,
            read_only: false,
        }
    }

    /// Weather station sampling every 15 s, forecasting one day ahead.
    pub fn weather_station() -> Self {
        Self {
            description: Some("15 s weather sensor, one day ahead".to_string()),
            read_only: true,
            ..Self::new("WEATHER.15S", 15.0)
        }
    }

    /// 1 Hz signal with a 0.05 Hz cutoff, 50 samples ahead.
    pub fn unit_rate() -> Self {
        Self {
            description: Some("1 Hz signal, 50 samples ahead".to_string()),
            cutoff: CutoffRule::Fixed { hz: 0.05 },
            horizon: HorizonSpec::Samples { count: 50 },
            read_only: true,
            ..Self::new("UNIT.1HZ", 1.0)
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the cutoff rule.
    #[must_use]
    pub fn with_cutoff(mut self, cutoff: CutoffRule) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Sets the horizon.
    #[must_use]
    pub fn with_horizon(mut self, horizon: HorizonSpec) -> Self {
        self.horizon = horizon;
        self
    }

    /// Sets the filter taps and window.
    #[must_use]
    pub fn with_filter(mut self, taps: usize, window: WindowKind) -> Self {
        self.taps = taps;
        self.window = window;
        self
    }

    /// Sets the AR order bounds.
    #[must_use]
    pub fn with_order_bounds(mut self, min_order: usize, max_order: usize) -> Self {
        self.min_order = min_order;
        self.max_order = max_order;
        self
    }

    /// Sampling frequency in Hz.
    pub fn sampling_hz(&self) -> f64 {
        1.0 / self.sampling_interval_secs
    }

    /// Cutoff frequency in Hz.
    pub fn cutoff_hz(&self) -> f64 {
        self.cutoff.cutoff_hz()
    }

    /// Forecast horizon in samples.
    pub fn horizon_samples(&self) -> usize {
        self.horizon.samples(self.sampling_interval_secs)
    }

    /// Builds the pre-filter spec.
    pub fn filter_spec(&self) -> MathResult<FilterSpec> {
        Ok(FilterSpec::new(self.sampling_hz(), self.cutoff_hz())?
            .with_taps(self.taps)?
            .with_window(self.window))
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a configuration from TOML.
    pub fn from_toml(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Serializes the configuration to TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self::weather_station()
    }
}

impl Validate for ForecastConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.is_empty() {
            errors.push(ValidationError::new("name", "Name cannot be empty"));
        }

        let interval_ok =
            self.sampling_interval_secs.is_finite() && self.sampling_interval_secs > 0.0;
        if !interval_ok {
            errors.push(ValidationError::with_rule(
                "sampling_interval_secs",
                format!(
                    "Sampling interval {} must be positive",
                    self.sampling_interval_secs
                ),
                "positive_interval",
            ));
        }

        match self.cutoff {
            CutoffRule::Fixed { hz } if !(hz.is_finite() && hz > 0.0) => {
                errors.push(ValidationError::with_rule(
                    "cutoff.hz",
                    "Cutoff must be positive",
                    "positive_cutoff",
                ));
            }
            CutoffRule::DominantPeriod {
                period_secs,
                multiple,
            } if !(period_secs.is_finite()
                && period_secs > 0.0
                && multiple.is_finite()
                && multiple > 0.0) =>
            {
                errors.push(ValidationError::with_rule(
                    "cutoff",
                    "Dominant period and multiple must be positive",
                    "positive_cutoff",
                ));
            }
            _ => {
                if interval_ok && self.cutoff_hz() >= self.sampling_hz() / 2.0 {
                    errors.push(ValidationError::with_rule(
                        "cutoff",
                        format!(
                            "Cutoff {} Hz must be below the Nyquist frequency {} Hz",
                            self.cutoff_hz(),
                            self.sampling_hz() / 2.0
                        ),
                        "below_nyquist",
                    ));
                }
            }
        }

        if let HorizonSpec::Span { seconds } = self.horizon {
            if !(seconds.is_finite() && seconds >= 0.0) {
                errors.push(ValidationError::with_rule(
                    "horizon.seconds",
                    "Horizon span cannot be negative",
                    "non_negative_horizon",
                ));
            }
        }

        if self.taps == 0 {
            errors.push(ValidationError::with_rule(
                "taps",
                "Filter needs at least one tap",
                "min_taps",
            ));
        }

        // Only meaningful once the rate, cutoff and taps are sound
        if errors.is_empty() {
            if let Err(e) = self.filter_spec().and_then(|spec| spec.design()) {
                errors.push(ValidationError::with_rule(
                    "window",
                    e.to_string(),
                    "usable_window",
                ));
            }
        }

        if self.min_order == 0 || self.min_order > self.max_order {
            errors.push(ValidationError::with_rule(
                "min_order",
                format!(
                    "Order bounds [{}, {}] must satisfy 1 <= min <= max",
                    self.min_order, self.max_order
                ),
                "valid_order_bounds",
            ));
        }

        errors
    }
}
