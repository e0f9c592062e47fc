//! Tunable constants for path computation.

use crate::PathError;
use serde::{Deserialize, Serialize};

/// Configuration shared by every path computed in a session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathConfig {
    /// Scales the end tangents relative to the source-target distance.
    pub curve_rate: f64,
    /// The number of samples taken along the path.
    pub resolution: usize,
    /// Samples closer than this to an obstacle centre are deflected.
    pub clearance_radius: f64,
    /// How close a point must be to an obstacle to remove it.
    pub removal_radius: f64,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            curve_rate: 1.0,
            resolution: 25,
            clearance_radius: 50.0,
            removal_radius: 10.0,
        }
    }
}

impl PathConfig {
    /// Parses and validates a configuration from JSON.
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, PathError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), PathError> {
        if !self.curve_rate.is_finite() || self.curve_rate < 0.0 {
            return Err(PathError::invalid(format!(
                "curve_rate must be finite and non-negative, got {}",
                self.curve_rate
            )));
        }
        if self.resolution == 0 {
            return Err(PathError::invalid("resolution must be at least 1"));
        }
        for (name, value) in [
            ("clearance_radius", self.clearance_radius),
            ("removal_radius", self.removal_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PathError::invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
