//! Physics configuration
//!
//! World bounds, gravity and friction are fixed for the shipped game but kept
//! in a serde struct so tools and tests can swap them. Loaded from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{FRICTION, GRAVITY, MAX_DT, WORLD_HEIGHT, WORLD_WIDTH};
use crate::math::clamp;

/// Errors raised while loading or validating a [`PhysicsConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read physics config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed physics config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value {value} for `{field}`")]
    Invalid { field: &'static str, value: f64 },
}

/// Tunable world constants used by the integrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration (units/s²)
    pub gravity: f64,
    /// Per-tick velocity multiplier, applied every tick
    pub friction: f64,
    /// Logical world size
    pub world_width: f64,
    pub world_height: f64,
    /// Largest frame delta callers should feed the integrator (seconds)
    pub max_dt: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            friction: FRICTION,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            max_dt: MAX_DT,
        }
    }
}

impl PhysicsConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded physics config from {}", path.display());
        Ok(config)
    }

    /// Like [`load`](Self::load) but falls back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default physics config ({e})");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("max_dt", self.max_dt),
        ];
        for (field, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid { field, value });
            }
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(ConfigError::Invalid {
                field: "friction",
                value: self.friction,
            });
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::Invalid {
                field: "gravity",
                value: self.gravity,
            });
        }
        Ok(())
    }

    /// Clamp a raw frame delta into `[0, max_dt]` (NaN becomes 0)
    pub fn clamp_dt(&self, dt: f64) -> f64 {
        if dt.is_nan() {
            return 0.0;
        }
        clamp(dt, 0.0, self.max_dt)
    }
}
