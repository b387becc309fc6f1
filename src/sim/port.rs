//! Capability interface between the simulation and its collaborators
//!
//! Input handling and presentation never hold the simulation; they issue
//! requests through `SimulationPort` and read `Snapshot` copies. Anything that
//! implements the trait can be driven headlessly in tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::polygon::is_selectable;
use super::state::SimulationState;
use crate::consts::{MAX_SIDES, MIN_SIDES};

/// Read-only view of the simulation for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    /// Boundary vertices in world space (post-rotation)
    pub vertices: Vec<Vec2>,
    pub launched: bool,
    pub sides: u32,
    pub rotation_deg: f32,
    pub center: Vec2,
}

/// Requests the outside world may make of the simulation
pub trait SimulationPort {
    /// Launch the ball toward `direction`. Ignored (returns false) unless idle.
    fn request_launch(&mut self, direction: Vec2) -> bool;

    /// Switch to a `sides`-gon. Rejected outside the selectable range.
    fn request_shape_change(&mut self, sides: u32) -> Result<(), String>;

    /// Put the ball back at the center
    fn request_reset(&mut self);

    fn snapshot(&self) -> Snapshot;
}

impl SimulationPort for SimulationState {
    fn request_launch(&mut self, direction: Vec2) -> bool {
        let speed = self.config.launch_speed;
        let launched = self.launch(direction, speed);
        if !launched {
            log::debug!("Launch ignored: ball already in flight");
        }
        launched
    }

    fn request_shape_change(&mut self, sides: u32) -> Result<(), String> {
        if !is_selectable(sides) {
            log::debug!("Shape change to {} sides rejected", sides);
            return Err(format!(
                "sides must be between {} and {}, got {}",
                MIN_SIDES, MAX_SIDES, sides
            ));
        }
        self.select_shape(sides);
        Ok(())
    }

    fn request_reset(&mut self) {
        self.reset_ball();
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball_pos: self.ball.pos,
            ball_radius: self.ball.radius,
            vertices: self.world_vertices(),
            launched: self.ball.is_launched(),
            sides: self.sides(),
            rotation_deg: self.rotation_deg,
            center: self.center(),
        }
    }
}
