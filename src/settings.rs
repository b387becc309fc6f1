//! Physics configuration
//!
//! Every tunable constant of the simulation, overridable from a JSON file.
//! Missing fields fall back to the defaults in `crate::consts`.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::polygon::is_selectable;

/// How friction damps the ball each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FrictionModel {
    /// `v *= 1 - friction·dt` (first-order, frame-rate dependent)
    #[default]
    Linear,
    /// `v *= exp(-friction·dt)`
    Exponential,
}

impl FrictionModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrictionModel::Linear => "linear",
            FrictionModel::Exponential => "exponential",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "linear" => Some(FrictionModel::Linear),
            "exponential" | "exp" => Some(FrictionModel::Exponential),
            _ => None,
        }
    }
}

/// Simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Polygon rotation speed (degrees per second)
    pub rotation_speed: f32,
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Fraction of velocity lost per second
    pub friction: f32,
    pub friction_model: FrictionModel,
    /// Launch speed (pixels/s)
    pub launch_speed: f32,
    /// Polygon circumradius (pixels)
    pub polygon_radius: f32,
    pub ball_radius: f32,
    /// World-space center of the polygon
    pub center: Vec2,
    /// Side count at startup
    pub initial_sides: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            rotation_speed: ROTATION_SPEED,
            gravity: GRAVITY,
            friction: FRICTION,
            friction_model: FrictionModel::Linear,
            launch_speed: LAUNCH_SPEED,
            polygon_radius: POLYGON_RADIUS,
            ball_radius: BALL_RADIUS,
            center: Vec2::new(ARENA_CENTER_X, ARENA_CENTER_Y),
            initial_sides: DEFAULT_SIDES,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.rotation_speed.is_finite() {
            return Err("rotation_speed must be finite".to_string());
        }
        if !self.gravity.is_finite() {
            return Err("gravity must be finite".to_string());
        }
        if !self.friction.is_finite() || self.friction < 0.0 {
            return Err("friction must be finite and >= 0".to_string());
        }
        if !self.launch_speed.is_finite() || self.launch_speed < 0.0 {
            return Err("launch_speed must be finite and >= 0".to_string());
        }
        if !self.polygon_radius.is_finite() || self.polygon_radius <= 0.0 {
            return Err("polygon_radius must be finite and > 0".to_string());
        }
        if !self.ball_radius.is_finite() || self.ball_radius <= 0.0 {
            return Err("ball_radius must be finite and > 0".to_string());
        }
        if !self.center.is_finite() {
            return Err("center must be finite".to_string());
        }
        if !is_selectable(self.initial_sides) {
            return Err(format!(
                "initial_sides must be between {} and {}",
                MIN_SIDES, MAX_SIDES
            ));
        }
        // Ball has to fit inside the smallest selectable shape (the triangle)
        let min_apothem = self.polygon_radius * (std::f32::consts::PI / MIN_SIDES as f32).cos();
        if self.ball_radius >= min_apothem {
            return Err("ball_radius must be smaller than the triangle apothem".to_string());
        }
        Ok(())
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read {}: {}, using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded physics config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Invalid config {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
