//! Simulation tick
//!
//! Advances the boundary rotation and, once launched, the ball: gravity,
//! friction, integration, then collision against every edge.

use glam::Vec2;

use super::collision::resolve_polygon;
use super::state::SimulationState;
use crate::settings::FrictionModel;

/// One-shot requests applied at the start of a tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Replace the boundary with this many sides (resets the ball)
    pub select_shape: Option<u32>,
    /// Put the ball back at the center
    pub reset: bool,
    /// Launch direction (ignored unless the ball is idle)
    pub launch: Option<Vec2>,
}

/// Advance the simulation by `dt` seconds.
///
/// `TickInput::default()` gives a plain physics step.
pub fn tick(state: &mut SimulationState, input: &TickInput, dt: f32) {
    debug_assert!(dt >= 0.0, "negative dt: {dt}");

    if let Some(sides) = input.select_shape {
        state.select_shape(sides);
    }
    if input.reset {
        state.reset_ball();
    }
    if let Some(direction) = input.launch {
        let speed = state.config.launch_speed;
        state.launch(direction, speed);
    }

    state.time_ticks += 1;
    state.elapsed += dt;
    state.rotation_deg += state.config.rotation_speed * dt;

    if !state.ball.is_launched() {
        // Idle ball stays pinned to the center
        state.ball.pos = state.center();
        state.ball.vel = Vec2::ZERO;
        return;
    }

    let config = &state.config;
    let ball = &mut state.ball;

    ball.vel.y += config.gravity * dt;
    ball.vel *= damping_factor(config.friction_model, config.friction, dt);
    ball.pos += ball.vel * dt;

    state.ball = resolve_polygon(&state.polygon, state.rotation_deg, state.center(), state.ball);
}

/// Velocity multiplier for one step of friction
pub fn damping_factor(model: FrictionModel, friction: f32, dt: f32) -> f32 {
    match model {
        // First-order decay; clamped so a long step never reverses the ball
        FrictionModel::Linear => (1.0 - friction * dt).max(0.0),
        FrictionModel::Exponential => (-friction * dt).exp(),
    }
}
