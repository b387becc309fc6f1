//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::{length, normalize};

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a thick line segment (one quad)
pub fn line(from: Vec2, to: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = normalize(to - from);
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let offset = Vec2::new(-dir.y, dir.x) * (thickness / 2.0);

    let a = from + offset;
    let b = from - offset;
    let c = to + offset;
    let d = to - offset;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Generate vertices for a closed polygon outline
pub fn polygon_outline(vertices: &[Vec2], thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let n = vertices.len();
    (0..n)
        .flat_map(|i| line(vertices[i], vertices[(i + 1) % n], thickness, color))
        .collect()
}

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Centers of the dots of a dotted line from `start` to `end`
pub fn dot_positions(start: Vec2, end: Vec2, spacing: f32) -> Vec<Vec2> {
    let dist = length(end - start);
    if dist == 0.0 || spacing <= 0.0 {
        return Vec::new();
    }
    let dir = normalize(end - start);

    let count = (dist / spacing).ceil() as usize;
    (0..count)
        .map(|i| start + dir * (i as f32 * spacing))
        .filter(|p| length(*p - start) < dist)
        .collect()
}

/// Generate vertices for a dotted line of small filled circles
pub fn dotted_line(
    start: Vec2,
    end: Vec2,
    spacing: f32,
    dot_radius: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    dot_positions(start, end, spacing)
        .into_iter()
        .flat_map(|p| circle(p, dot_radius, color, 8))
        .collect()
}

/// End point of the aim guide: toward `pointer`, at most `max_length` away
pub fn aim_guide_end(ball_pos: Vec2, pointer: Vec2, max_length: f32) -> Vec2 {
    let diff = pointer - ball_pos;
    ball_pos + normalize(diff) * length(diff).min(max_length)
}
