//! Fixed timestep driver
//!
//! Owns the simulation plus its collaborators and advances it from variable
//! frame times in fixed `SIM_DT` steps.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::platform::{InputController, InputEvent, InputOutcome};
use crate::renderer::{FrameMesh, build_frame};
use crate::settings::PhysicsConfig;
use crate::sim::{SimulationPort, SimulationState, Snapshot, TickInput, tick};

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    state: SimulationState,
    controller: InputController,
    accumulator: f32,
    quit: bool,
}

impl Game {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            state: SimulationState::new(config),
            controller: InputController::default(),
            accumulator: 0.0,
            quit: false,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn controller(&self) -> &InputController {
        &self.controller
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Feed one input event to the simulation
    pub fn handle_event(&mut self, event: InputEvent) -> InputOutcome {
        let outcome = self.controller.handle_event(event, &mut self.state);
        if outcome == InputOutcome::Quit {
            log::info!("Quit requested");
            self.quit = true;
        }
        outcome
    }

    /// Run simulation ticks for a frame that took `frame_dt` seconds.
    ///
    /// Returns the number of ticks run.
    pub fn update(&mut self, frame_dt: f32) -> u32 {
        let dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let input = TickInput::default();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        if substeps == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
            log::debug!("Dropping {:.4}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        substeps
    }

    /// Mesh for the current frame
    pub fn frame(&self) -> FrameMesh {
        build_frame(
            &self.state.snapshot(),
            self.controller.pointer(),
            self.controller.tabs(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PointerButton;
    use glam::Vec2;

    #[test]
    fn test_update_runs_fixed_steps() {
        let mut game = Game::new(PhysicsConfig::default());
        // 1/30 s = four 1/120 s steps
        let ticks = game.update(1.0 / 30.0 + 1e-6);
        assert_eq!(ticks, 4);
        assert_eq!(game.state().time_ticks, 4);
    }

    #[test]
    fn test_update_accumulates_short_frames() {
        let mut game = Game::new(PhysicsConfig::default());
        assert_eq!(game.update(SIM_DT * 0.6), 0);
        assert_eq!(game.update(SIM_DT * 0.6), 1);
    }

    #[test]
    fn test_update_caps_substeps() {
        let mut game = Game::new(PhysicsConfig::default());
        let ticks = game.update(5.0);
        assert_eq!(ticks, MAX_SUBSTEPS);
        // Backlog dropped, next short frame starts fresh
        assert_eq!(game.update(0.0), 0);
    }

    #[test]
    fn test_click_launch_and_fly() {
        let mut game = Game::new(PhysicsConfig::default());
        let center = game.state().center();
        game.handle_event(InputEvent::PointerPressed {
            button: PointerButton::Secondary,
            pos: center + Vec2::new(0.0, 50.0),
        });
        for _ in 0..60 {
            game.update(1.0 / 60.0);
        }
        let snap = game.snapshot();
        assert!(snap.launched);
        assert!(snap.ball_pos != center);
    }

    #[test]
    fn test_close_sets_quit() {
        let mut game = Game::new(PhysicsConfig::default());
        assert!(!game.should_quit());
        game.handle_event(InputEvent::CloseRequested);
        assert!(game.should_quit());
    }

    #[test]
    fn test_frame_includes_tabs() {
        let game = Game::new(PhysicsConfig::default());
        let mesh = game.frame();
        assert_eq!(mesh.labels.len(), 9);
        assert!(mesh.triangle_count() > 0);
    }
}
