//! Platform abstraction layer
//!
//! Window systems deliver pointer and window events; this layer turns them into
//! requests on a `SimulationPort`:
//! - Primary click on a shape tab: switch shape
//! - Secondary click: launch the ball toward the pointer
//! - Close: quit

use glam::Vec2;

use crate::sim::SimulationPort;
use crate::ui::{ShapeTab, layout_tabs, tab_at};

/// Pointer buttons the controller cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button / tap
    Primary,
    /// Right mouse button
    Secondary,
}

/// Events delivered by the windowing backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved(Vec2),
    PointerPressed { button: PointerButton, pos: Vec2 },
    ResetRequested,
    CloseRequested,
}

/// What an event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    None,
    ShapeChanged(u32),
    Launched,
    Reset,
    Quit,
}

/// Maps input events onto simulation requests
#[derive(Debug, Clone)]
pub struct InputController {
    tabs: Vec<ShapeTab>,
    /// Last known pointer position (for the aim guide)
    pointer: Vec2,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(layout_tabs())
    }
}

impl InputController {
    pub fn new(tabs: Vec<ShapeTab>) -> Self {
        Self {
            tabs,
            pointer: Vec2::ZERO,
        }
    }

    pub fn tabs(&self) -> &[ShapeTab] {
        &self.tabs
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Handle one event against the simulation
    pub fn handle_event<P: SimulationPort>(&mut self, event: InputEvent, port: &mut P) -> InputOutcome {
        match event {
            InputEvent::PointerMoved(pos) => {
                self.pointer = pos;
                InputOutcome::None
            }
            InputEvent::PointerPressed {
                button: PointerButton::Primary,
                pos,
            } => {
                self.pointer = pos;
                let Some(sides) = tab_at(&self.tabs, pos).map(|tab| tab.sides) else {
                    return InputOutcome::None;
                };
                match port.request_shape_change(sides) {
                    Ok(()) => InputOutcome::ShapeChanged(sides),
                    Err(e) => {
                        log::warn!("Shape tab rejected: {}", e);
                        InputOutcome::None
                    }
                }
            }
            InputEvent::PointerPressed {
                button: PointerButton::Secondary,
                pos,
            } => {
                self.pointer = pos;
                let snapshot = port.snapshot();
                if snapshot.launched {
                    return InputOutcome::None;
                }
                if port.request_launch(pos - snapshot.ball_pos) {
                    InputOutcome::Launched
                } else {
                    InputOutcome::None
                }
            }
            InputEvent::ResetRequested => {
                port.request_reset();
                InputOutcome::Reset
            }
            InputEvent::CloseRequested => InputOutcome::Quit,
        }
    }
}
