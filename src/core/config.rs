//! Sketch configuration with documented constants
//!
//! The tunable values of the interaction are collected here with
//! explanations of their purpose and how they interact with each other.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SketchError};

/// Default closure tolerance in meters
///
/// Ten meters matches a comfortable thumb radius at neighborhood zoom
/// levels without stealing taps meant to place a vertex near the start.
pub const DEFAULT_CLOSURE_TOLERANCE_M: f64 = 10.0;

/// Configuration for a sketch session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Maximum great-circle distance (meters) between a tap and the first
    /// point for the tap to count as a close gesture
    ///
    /// Only consulted once the sketch has more than two points; before
    /// that, a tap near the start places a vertex like any other.
    pub closure_tolerance_m: f64,

    /// Number printed on the first marker label
    ///
    /// Labels count up from here ("Point 1", "Point 2", ...) and reset
    /// to it when the sketch is cleared.
    pub first_marker_number: u32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            closure_tolerance_m: DEFAULT_CLOSURE_TOLERANCE_M,
            first_marker_number: 1,
        }
    }
}

impl SketchConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.closure_tolerance_m.is_finite() || self.closure_tolerance_m <= 0.0 {
            return Err(format!(
                "closure_tolerance_m ({}) must be a positive number of meters",
                self.closure_tolerance_m
            ));
        }

        if self.first_marker_number == 0 {
            return Err("first_marker_number must be at least 1".into());
        }

        Ok(())
    }

    /// Load and validate a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate().map_err(SketchError::Config)?;
        Ok(config)
    }
}
