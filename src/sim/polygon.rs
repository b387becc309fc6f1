//! Regular polygon geometry for the rotating boundary
//!
//! Vertices are stored in local space only (centered on the origin, unrotated).
//! World positions are derived on demand by rotating first, then translating,
//! so the boundary never drifts no matter how long it spins.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SIDES, MIN_SIDES};
use crate::{polar_to_cartesian, rotate_deg};

/// Selectable shapes, in tab order
pub const SHAPE_OPTIONS: [(u32, &str); 8] = [
    (3, "Triangle"),
    (4, "Square"),
    (5, "Pentagon"),
    (6, "Hexagon"),
    (7, "Heptagon"),
    (8, "Octagon"),
    (9, "Nonagon"),
    (10, "Decagon"),
];

/// Display name for a side count, if it is one of the selectable shapes
pub fn shape_name(sides: u32) -> Option<&'static str> {
    SHAPE_OPTIONS
        .iter()
        .find(|(n, _)| *n == sides)
        .map(|(_, name)| *name)
}

/// Whether `sides` is in the selectable range
#[inline]
pub fn is_selectable(sides: u32) -> bool {
    (MIN_SIDES..=MAX_SIDES).contains(&sides)
}

/// A regular convex polygon in local space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegularPolygon {
    sides: u32,
    radius: f32,
    /// Local-space vertices, increasing angle order (vertex 0 on top)
    vertices: Vec<Vec2>,
}

impl RegularPolygon {
    /// Build a regular polygon with `sides` vertices on a circle of `radius`.
    ///
    /// Vertex `i` sits at `360·i/sides − 90` degrees, so vertex 0 is straight
    /// up in screen space. Panics on fewer than 3 sides or a non-positive
    /// radius: either would break the inward-normal assumption.
    pub fn new(sides: u32, radius: f32) -> Self {
        assert!(sides >= 3, "polygon needs at least 3 sides, got {sides}");
        assert!(
            radius > 0.0 && radius.is_finite(),
            "polygon radius must be positive, got {radius}"
        );

        let vertices = (0..sides)
            .map(|i| {
                let angle_deg = 360.0 * i as f32 / sides as f32 - 90.0;
                polar_to_cartesian(radius, angle_deg.to_radians())
            })
            .collect();

        Self {
            sides,
            radius,
            vertices,
        }
    }

    #[inline]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Circumradius (center to vertex)
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Inradius (center to edge midpoint)
    pub fn apothem(&self) -> f32 {
        self.radius * (std::f32::consts::PI / self.sides as f32).cos()
    }

    /// Local-space vertices
    pub fn local_vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Vertex `i` (taken modulo the side count) in world space
    #[inline]
    pub fn world_vertex(&self, i: usize, rotation_deg: f32, center: Vec2) -> Vec2 {
        let local = self.vertices[i % self.vertices.len()];
        rotate_deg(local, rotation_deg) + center
    }

    /// All vertices in world space for the given transform
    pub fn world_vertices(&self, rotation_deg: f32, center: Vec2) -> Vec<Vec2> {
        (0..self.vertices.len())
            .map(|i| self.world_vertex(i, rotation_deg, center))
            .collect()
    }

    /// World-space edges `(vertex[i], vertex[i + 1])` in vertex order
    pub fn edges(&self, rotation_deg: f32, center: Vec2) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        (0..self.vertices.len()).map(move |i| {
            (
                self.world_vertex(i, rotation_deg, center),
                self.world_vertex(i + 1, rotation_deg, center),
            )
        })
    }

    /// Check if a world-space point lies inside (or on) the transformed polygon
    pub fn contains_point(&self, point: Vec2, rotation_deg: f32, center: Vec2) -> bool {
        self.edges(rotation_deg, center).all(|(a, b)| {
            let e = b - a;
            // Inside is to the left of every edge
            e.perp_dot(point - a) >= 0.0
        })
    }
}
