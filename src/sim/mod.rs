//! Simulation module
//!
//! All physics lives here. This module must stay free of windowing and
//! rendering concerns:
//! - World state is owned by `SimulationState` and passed explicitly
//! - `dt` comes from the caller; the core never measures time
//! - Outer layers talk to it only through `SimulationPort`

pub mod collision;
pub mod polygon;
pub mod port;
pub mod state;
pub mod tick;

pub use collision::{
    CollisionResult, edge_contact, inward_normal, max_penetration, reflect_velocity,
    resolve_edge, resolve_polygon,
};
pub use polygon::{RegularPolygon, SHAPE_OPTIONS, is_selectable, shape_name};
pub use port::{SimulationPort, Snapshot};
pub use state::{Ball, BallState, SimulationState};
pub use tick::{TickInput, damping_factor, tick};
