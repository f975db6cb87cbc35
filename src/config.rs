//! Rig Configuration
//!
//! Defines the tunable parameters for the camera rig as a data structure,
//! supplied once at construction and read-only afterwards. Values can be
//! loaded from JSON so hosts can ship them as an asset instead of
//! hardcoding numbers in game code.

use serde::{Deserialize, Serialize};

/// Tunable parameters for the camera rig.
///
/// `RigConfig::default()` returns the stock top-down setup: zoom between
/// 200 and 2000 units with a 500 unit resting distance, 500 units/s panning
/// and 30 degrees/s rotation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Closest allowed spring-arm target length
    pub zoom_min: f32,
    /// Resting spring-arm length; also the reference for speed scaling
    pub zoom_default: f32,
    /// Farthest allowed spring-arm target length
    pub zoom_max: f32,
    /// Units of target zoom added per unit of zoom-axis input
    pub zoom_change_rate: f32,
    /// Base horizontal pan speed in units per second
    pub movement_speed: f32,
    /// Orientation speed in degrees per second
    pub rotation_speed: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            zoom_min: 200.0,
            zoom_default: 500.0,
            zoom_max: 2000.0,
            zoom_change_rate: 10.0,
            movement_speed: 500.0,
            rotation_speed: 30.0,
        }
    }
}

/// Reasons a [`RigConfig`] can be rejected by [`RigConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `zoom_min <= zoom_default <= zoom_max` does not hold
    ZoomRangeInverted,
    /// A rate or speed field is zero or negative
    NonPositiveRate,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZoomRangeInverted => {
                write!(f, "zoom range must satisfy zoom_min <= zoom_default <= zoom_max")
            }
            Self::NonPositiveRate => {
                write!(f, "zoom_change_rate, movement_speed and rotation_speed must be > 0")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl RigConfig {
    /// Check that the configuration describes a usable rig.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.zoom_min <= self.zoom_default && self.zoom_default <= self.zoom_max) {
            return Err(ConfigError::ZoomRangeInverted);
        }
        if self.zoom_change_rate <= 0.0 || self.movement_speed <= 0.0 || self.rotation_speed <= 0.0
        {
            return Err(ConfigError::NonPositiveRate);
        }
        Ok(())
    }

    /// Parse a configuration from JSON and validate it.
    ///
    /// Missing fields fall back to their defaults, so a partial override like
    /// `{"zoom_max": 3000.0}` is accepted.
    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
