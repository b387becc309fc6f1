//! Simulation state and the ball launch/reset state machine
//!
//! One `SimulationState` owns the boundary polygon, its rotation and the ball.
//! It is created once at startup and passed explicitly to whoever advances it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::polygon::RegularPolygon;
use crate::normalize;
use crate::settings::PhysicsConfig;

/// Ball state - resting at the center or in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BallState {
    /// Waiting for launch, pinned to the polygon center
    #[default]
    Idle,
    /// Physics active
    Launched,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub state: BallState,
}

impl Ball {
    /// New idle ball resting at `center`
    pub fn idle_at(center: Vec2, radius: f32) -> Self {
        Self {
            pos: center,
            vel: Vec2::ZERO,
            radius,
            state: BallState::Idle,
        }
    }

    #[inline]
    pub fn is_launched(&self) -> bool {
        self.state == BallState::Launched
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        crate::length(self.vel)
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    /// Physics constants this state was built with
    pub config: PhysicsConfig,
    /// Boundary polygon (local space)
    pub polygon: RegularPolygon,
    /// Current polygon rotation in degrees (accumulates, never wrapped)
    pub rotation_deg: f32,
    /// Seconds elapsed since the current polygon was created
    pub elapsed: f32,
    /// Ticks since startup
    pub time_ticks: u64,
    /// The ball
    pub ball: Ball,
}

impl SimulationState {
    /// Create the initial state: unrotated polygon, idle ball at its center.
    ///
    /// The config is expected to be validated; a degenerate polygon panics.
    pub fn new(config: PhysicsConfig) -> Self {
        let polygon = RegularPolygon::new(config.initial_sides, config.polygon_radius);
        let ball = Ball::idle_at(config.center, config.ball_radius);
        Self {
            config,
            polygon,
            rotation_deg: 0.0,
            elapsed: 0.0,
            time_ticks: 0,
            ball,
        }
    }

    /// World-space center of the boundary
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.config.center
    }

    #[inline]
    pub fn sides(&self) -> u32 {
        self.polygon.sides()
    }

    /// Boundary vertices in world space for the current rotation
    pub fn world_vertices(&self) -> Vec<Vec2> {
        self.polygon.world_vertices(self.rotation_deg, self.center())
    }

    /// Launch the idle ball along `direction` at `speed`.
    ///
    /// Returns false (and changes nothing) if the ball is already in flight.
    /// A zero direction launches a stationary ball.
    pub fn launch(&mut self, direction: Vec2, speed: f32) -> bool {
        if self.ball.is_launched() {
            return false;
        }
        self.ball.vel = normalize(direction) * speed;
        self.ball.state = BallState::Launched;
        log::info!(
            "Ball launched: vel ({:.1}, {:.1})",
            self.ball.vel.x,
            self.ball.vel.y
        );
        true
    }

    /// Replace the boundary with a fresh `sides`-gon and reset the ball.
    ///
    /// The new polygon starts unrotated. Panics on fewer than 3 sides.
    pub fn select_shape(&mut self, sides: u32) {
        self.polygon = RegularPolygon::new(sides, self.config.polygon_radius);
        self.rotation_deg = 0.0;
        self.elapsed = 0.0;
        self.reset_ball();
        log::info!("Shape changed to {} sides", sides);
    }

    /// Put the ball back at the center, idle. Position and velocity reset together.
    pub fn reset_ball(&mut self) {
        self.ball = Ball::idle_at(self.center(), self.config.ball_radius);
    }
}
