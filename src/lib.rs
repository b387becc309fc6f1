//! Spin Bounce - a ball bouncing inside a rotating regular polygon
//!
//! Core modules:
//! - `sim`: Simulation (polygon geometry, collisions, launch/reset state machine)
//! - `settings`: Physics configuration loaded from JSON
//! - `platform`: Input events mapped onto simulation requests
//! - `ui`: Instructions text and shape-selection tab layout
//! - `renderer`: CPU-side mesh building from simulation snapshots
//! - `app`: Fixed timestep driver tying the above together

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use app::Game;
pub use settings::{FrictionModel, PhysicsConfig};

use glam::Vec2;

/// Default configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the driver (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the driver accepts before clamping
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Polygon rotation speed (degrees per second)
    pub const ROTATION_SPEED: f32 = 30.0;
    /// Downward acceleration (pixels/s², screen y grows downward)
    pub const GRAVITY: f32 = 0.0;
    /// Fraction of velocity lost per second
    pub const FRICTION: f32 = 0.0;
    /// Initial launch speed (pixels/s)
    pub const LAUNCH_SPEED: f32 = 300.0;

    /// Boundary polygon
    pub const POLYGON_RADIUS: f32 = 250.0;
    pub const ARENA_CENTER_X: f32 = 400.0;
    pub const ARENA_CENTER_Y: f32 = 320.0;

    /// Shape selection range (triangle through decagon)
    pub const MIN_SIDES: u32 = 3;
    pub const MAX_SIDES: u32 = 10;
    pub const DEFAULT_SIDES: u32 = 3;

    /// Ball
    pub const BALL_RADIUS: f32 = 10.0;

    /// Window the layout is designed for
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;

    /// Aim guide: dotted line toward the pointer
    pub const AIM_GUIDE_MAX_LENGTH: f32 = 100.0;
    pub const AIM_DOT_SPACING: f32 = 10.0;
    pub const AIM_DOT_RADIUS: f32 = 2.0;
}

/// Dot product of two vectors
#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.x * b.x + a.y * b.y
}

/// Euclidean length, always >= 0
#[inline]
pub fn length(v: Vec2) -> f32 {
    dot(v, v).sqrt()
}

/// Unit vector in the direction of `v`.
///
/// A vector of exactly zero length maps to the zero vector instead of NaN.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let len = length(v);
    if len != 0.0 { v / len } else { Vec2::ZERO }
}

/// Rotate `v` about the origin by `degrees`
#[inline]
pub fn rotate_deg(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
