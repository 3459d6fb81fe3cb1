//! Game settings and tuning
//!
//! Loaded from a JSON file when one is given; every field falls back to the
//! defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// How obstacle scale is treated on a round reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScaleReset {
    /// Multiply the current scale by a fresh factor (scales shrink over rounds)
    #[default]
    Compound,
    /// Restore scale to 1 before applying the fresh factor
    Rebase,
}

impl ScaleReset {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleReset::Compound => "compound",
            ScaleReset::Rebase => "rebase",
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("lane bounds are empty: min {min} >= max {max}")]
    EmptyLane { min: f32, max: f32 },
    #[error("obstacle count must be at least 1")]
    NoObstacles,
    #[error("field length must be positive, got {0}")]
    FieldLength(f32),
    #[error("spawn scale range [{min}, {max}) is invalid")]
    SpawnScale { min: f32, max: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
}

/// Game settings/tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; `None` picks one from the clock at startup
    pub seed: Option<u64>,

    // === Scene binding ===
    /// Name prefix identifying obstacle transforms
    pub obstacle_prefix: String,
    /// Number of obstacles the scene must contain
    pub obstacle_count: usize,

    // === Lane ===
    pub lane_min_y: f32,
    pub lane_max_y: f32,
    /// Keep the duck inside the lane
    pub enforce_lane_bounds: bool,

    // === Obstacle field ===
    pub field_origin_x: f32,
    pub field_length: f32,
    pub near_boundary_x: f32,
    pub obstacle_speed: f32,
    pub min_spawn_scale: f32,
    pub max_spawn_scale: f32,
    pub scale_reset: ScaleReset,

    // === Duck ===
    pub steer_speed: f32,
    pub boost_speed: f32,
    pub tilt_rate: f32,
    pub max_tilt_degrees: f32,
    pub wobble_period: f32,
    pub wobble_degrees: f32,

    pub collision_threshold: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,

            obstacle_prefix: OBSTACLE_PREFIX.to_string(),
            obstacle_count: OBSTACLE_COUNT,

            lane_min_y: LANE_MIN_Y,
            lane_max_y: LANE_MAX_Y,
            enforce_lane_bounds: true,

            field_origin_x: FIELD_ORIGIN_X,
            field_length: FIELD_LENGTH,
            near_boundary_x: NEAR_BOUNDARY_X,
            obstacle_speed: OBSTACLE_SPEED,
            min_spawn_scale: MIN_SPAWN_SCALE,
            max_spawn_scale: MAX_SPAWN_SCALE,
            scale_reset: ScaleReset::Compound,

            steer_speed: STEER_SPEED,
            boost_speed: BOOST_SPEED,
            tilt_rate: TILT_RATE,
            max_tilt_degrees: MAX_TILT_DEGREES,
            wobble_period: WOBBLE_PERIOD,
            wobble_degrees: WOBBLE_DEGREES,

            collision_threshold: COLLISION_THRESHOLD,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path`, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings ({e})");
                Self::default()
            }
        }
    }

    /// Check the ranges the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        // `!(a < b)` also rejects NaN
        if !(self.lane_min_y < self.lane_max_y) {
            return Err(SettingsError::EmptyLane {
                min: self.lane_min_y,
                max: self.lane_max_y,
            });
        }
        if self.obstacle_count == 0 {
            return Err(SettingsError::NoObstacles);
        }
        if !(self.field_length > 0.0) {
            return Err(SettingsError::FieldLength(self.field_length));
        }
        if !(0.0 <= self.min_spawn_scale && self.min_spawn_scale < self.max_spawn_scale) {
            return Err(SettingsError::SpawnScale {
                min: self.min_spawn_scale,
                max: self.max_spawn_scale,
            });
        }
        if !(self.wobble_period > 0.0) {
            return Err(SettingsError::NonPositive {
                name: "wobble_period",
                value: self.wobble_period,
            });
        }
        if !(self.max_tilt_degrees > 0.0) {
            return Err(SettingsError::NonPositive {
                name: "max_tilt_degrees",
                value: self.max_tilt_degrees,
            });
        }
        Ok(())
    }

    /// Longitudinal gap between consecutive obstacles
    pub fn obstacle_spacing(&self) -> f32 {
        self.field_length / self.obstacle_count as f32
    }

    /// Seed to use for this run
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
