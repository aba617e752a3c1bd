//! Sensor identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a sensor in a sample store.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct SensorId(pub String);

impl SensorId {
    /// Create a new sensor ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SensorId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SensorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u32> for SensorId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}
