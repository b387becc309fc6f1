//! Presentation module
//!
//! Builds a CPU-side triangle list for one frame from a simulation snapshot.
//! The vertex layout is `Pod`, so any GPU backend can upload it as-is.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::consts::{AIM_DOT_RADIUS, AIM_DOT_SPACING, AIM_GUIDE_MAX_LENGTH};
use crate::sim::Snapshot;
use crate::ui::{INSTRUCTIONS, ShapeTab, instructions_anchor};
use vertex::colors;

pub use vertex::Vertex;

/// Polygon outline thickness (pixels)
pub const OUTLINE_THICKNESS: f32 = 2.0;
/// Tab border thickness (pixels)
pub const TAB_BORDER_THICKNESS: f32 = 1.0;
/// Segments used for the ball
pub const BALL_SEGMENTS: u32 = 32;

/// A text label for the backend to draw, centered on `pos`
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: &'static str,
    pub pos: Vec2,
    pub size: u32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Default)]
pub struct FrameMesh {
    pub vertices: Vec<Vertex>,
    pub labels: Vec<TextLabel>,
}

impl FrameMesh {
    /// Raw vertex bytes, ready for a vertex buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices.as_slice())
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

/// Build the frame: boundary, tabs, aim guide (while idle), ball
pub fn build_frame(snapshot: &Snapshot, pointer: Vec2, tabs: &[ShapeTab]) -> FrameMesh {
    let mut mesh = FrameMesh::default();

    mesh.vertices.extend(shapes::polygon_outline(
        &snapshot.vertices,
        OUTLINE_THICKNESS,
        colors::OUTLINE,
    ));

    if !snapshot.launched {
        let end = shapes::aim_guide_end(snapshot.ball_pos, pointer, AIM_GUIDE_MAX_LENGTH);
        mesh.vertices.extend(shapes::dotted_line(
            snapshot.ball_pos,
            end,
            AIM_DOT_SPACING,
            AIM_DOT_RADIUS,
            colors::AIM_DOT,
        ));
    }

    mesh.vertices.extend(shapes::circle(
        snapshot.ball_pos,
        snapshot.ball_radius,
        colors::BALL,
        BALL_SEGMENTS,
    ));

    mesh.labels.push(TextLabel {
        text: INSTRUCTIONS,
        pos: instructions_anchor(),
        size: 16,
    });

    for tab in tabs {
        mesh.vertices.extend(shapes::rect(tab.min, tab.size, colors::TAB_FILL));
        let corners = [
            tab.min,
            tab.min + Vec2::new(tab.size.x, 0.0),
            tab.min + tab.size,
            tab.min + Vec2::new(0.0, tab.size.y),
        ];
        mesh.vertices.extend(shapes::polygon_outline(
            &corners,
            TAB_BORDER_THICKNESS,
            colors::TAB_BORDER,
        ));
        mesh.labels.push(TextLabel {
            text: tab.label,
            pos: tab.center(),
            size: 14,
        });
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::PhysicsConfig;
    use crate::sim::{SimulationPort, SimulationState};
    use crate::ui::layout_tabs;

    fn ball_vertex_count() -> usize {
        (BALL_SEGMENTS * 3) as usize
    }

    #[test]
    fn test_idle_frame_has_aim_guide() {
        let state = SimulationState::new(PhysicsConfig::default());
        let snapshot = state.snapshot();
        let pointer = snapshot.ball_pos + Vec2::new(200.0, 0.0);

        let with_guide = build_frame(&snapshot, pointer, &[]);
        let without_guide = build_frame(&snapshot, snapshot.ball_pos, &[]);
        // Guide clamped to 100 px with dots every 10 px
        let dots = 10;
        let dot_vertices = dots * 8 * 3;
        assert_eq!(
            with_guide.vertices.len(),
            without_guide.vertices.len() + dot_vertices
        );
        assert_eq!(
            without_guide.vertices.len(),
            3 * 6 + ball_vertex_count()
        );
    }

    #[test]
    fn test_launched_frame_has_no_aim_guide() {
        let mut state = SimulationState::new(PhysicsConfig::default());
        state.request_launch(Vec2::new(1.0, 0.0));
        let snapshot = state.snapshot();
        let mesh = build_frame(&snapshot, Vec2::new(0.0, 0.0), &[]);
        assert_eq!(mesh.vertices.len(), 3 * 6 + ball_vertex_count());
    }

    #[test]
    fn test_tabs_and_labels() {
        let state = SimulationState::new(PhysicsConfig::default());
        let tabs = layout_tabs();
        let mesh = build_frame(&state.snapshot(), state.center(), &tabs);
        assert_eq!(mesh.labels.len(), 1 + tabs.len());
        assert_eq!(mesh.labels[1].text, "Triangle");
        assert_eq!(mesh.vertices.len() % 3, 0);
    }

    #[test]
    fn test_as_bytes_matches_layout() {
        let state = SimulationState::new(PhysicsConfig::default());
        let mesh = build_frame(&state.snapshot(), state.center(), &[]);
        assert_eq!(
            mesh.as_bytes().len(),
            mesh.vertices.len() * std::mem::size_of::<Vertex>()
        );
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
    }
}
