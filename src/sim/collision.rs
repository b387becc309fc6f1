//! Collision detection and response against the rotating boundary
//!
//! Each edge is checked on its own, once per tick: signed distance of the ball
//! center along the edge's inward normal, then an elastic reflection if the ball
//! overlaps the edge while still moving toward it. Detection is discrete, so a
//! very fast ball (speed·dt close to its radius) can tunnel through an edge.

use glam::Vec2;

use super::polygon::RegularPolygon;
use super::state::Ball;
use crate::{dot, normalize};

/// Result of a ball/edge overlap check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the ball overlaps the edge
    pub hit: bool,
    /// Inward unit normal of the edge
    pub normal: Vec2,
    /// Signed distance from the ball center to the edge line (positive inside)
    pub distance: f32,
    /// Penetration depth (ball_radius - distance)
    pub penetration: f32,
}

/// Inward unit normal of the edge `a -> b`.
///
/// Vertices run in increasing-angle order, so the left-hand perpendicular of
/// every edge points into the polygon.
#[inline]
pub fn inward_normal(a: Vec2, b: Vec2) -> Vec2 {
    let edge = b - a;
    normalize(Vec2::new(-edge.y, edge.x))
}

/// Check overlap between a ball and the edge `a -> b` without responding to it
pub fn edge_contact(a: Vec2, b: Vec2, ball_pos: Vec2, ball_radius: f32) -> CollisionResult {
    let normal = inward_normal(a, b);
    let distance = dot(ball_pos - a, normal);
    CollisionResult {
        hit: distance < ball_radius,
        normal,
        distance,
        penetration: ball_radius - distance,
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * dot(velocity, normal) * normal
}

/// Resolve a ball against a single edge.
///
/// Returns the new `(position, velocity)`. Only a ball that overlaps the edge
/// and is still moving toward it is changed: its velocity is reflected and it
/// is pushed back out along the normal. A ball already moving away is left
/// alone even while overlapping, which keeps it from sticking to the wall.
pub fn resolve_edge(
    edge_start: Vec2,
    edge_end: Vec2,
    ball_pos: Vec2,
    velocity: Vec2,
    ball_radius: f32,
) -> (Vec2, Vec2) {
    let contact = edge_contact(edge_start, edge_end, ball_pos, ball_radius);
    if contact.hit && dot(velocity, contact.normal) < 0.0 {
        let new_vel = reflect_velocity(velocity, contact.normal);
        let new_pos = ball_pos + contact.penetration * contact.normal;
        (new_pos, new_vel)
    } else {
        (ball_pos, velocity)
    }
}

/// Resolve a ball against every edge of the transformed polygon.
///
/// Edges are processed in vertex order and each sees the previous result, so
/// near a corner the first edge's correction wins and later edges refine it.
pub fn resolve_polygon(
    polygon: &RegularPolygon,
    rotation_deg: f32,
    center: Vec2,
    mut ball: Ball,
) -> Ball {
    for (i, (a, b)) in polygon.edges(rotation_deg, center).enumerate() {
        let (pos, vel) = resolve_edge(a, b, ball.pos, ball.vel, ball.radius);
        if vel != ball.vel {
            log::trace!(
                "bounce off edge {} at ({:.1}, {:.1}), vel ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                i,
                pos.x,
                pos.y,
                ball.vel.x,
                ball.vel.y,
                vel.x,
                vel.y
            );
        }
        ball.pos = pos;
        ball.vel = vel;
    }
    ball
}

/// Deepest penetration of a ball against any edge (<= 0 when clear of all edges)
pub fn max_penetration(
    polygon: &RegularPolygon,
    rotation_deg: f32,
    center: Vec2,
    ball_pos: Vec2,
    ball_radius: f32,
) -> f32 {
    polygon
        .edges(rotation_deg, center)
        .map(|(a, b)| edge_contact(a, b, ball_pos, ball_radius).penetration)
        .fold(f32::NEG_INFINITY, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length;
    use crate::sim::state::BallState;
    use proptest::prelude::*;

    fn free_ball(pos: Vec2, vel: Vec2) -> Ball {
        Ball {
            pos,
            vel,
            radius: 10.0,
            state: BallState::Launched,
        }
    }

    #[test]
    fn test_reflect_velocity() {
        // Ball moving right, hits vertical wall (normal pointing left)
        let reflected = reflect_velocity(Vec2::new(100.0, 0.0), Vec2::new(-1.0, 0.0));
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }

    #[test]
    fn test_inward_normal_is_left_hand() {
        // Edge pointing +x: left-hand normal is +y
        let n = inward_normal(Vec2::ZERO, Vec2::new(5.0, 0.0));
        assert!((n - Vec2::new(0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_degenerate_edge_is_ignored() {
        let p = Vec2::new(3.0, 3.0);
        let (pos, vel) = resolve_edge(p, p, p, Vec2::new(0.0, -50.0), 10.0);
        assert_eq!(pos, p);
        assert_eq!(vel, Vec2::new(0.0, -50.0));
    }

    #[test]
    fn test_resolve_edge_bounces_and_pushes_out() {
        // Floor-like edge along x, interior is +y
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 0.0);
        let (pos, vel) = resolve_edge(a, b, Vec2::new(50.0, 4.0), Vec2::new(30.0, -40.0), 10.0);
        assert!((vel - Vec2::new(30.0, 40.0)).length() < 1e-4);
        assert!((pos.y - 10.0).abs() < 1e-4);
        assert!((pos.x - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_resolve_edge_ignores_separating_ball() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 0.0);
        // Overlapping, but already moving away
        let (pos, vel) = resolve_edge(a, b, Vec2::new(50.0, 4.0), Vec2::new(0.0, 40.0), 10.0);
        assert_eq!(pos, Vec2::new(50.0, 4.0));
        assert_eq!(vel, Vec2::new(0.0, 40.0));
    }

    #[test]
    fn test_resolve_edge_ignores_distant_ball() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 0.0);
        let (pos, vel) = resolve_edge(a, b, Vec2::new(50.0, 40.0), Vec2::new(0.0, -40.0), 10.0);
        assert_eq!(pos, Vec2::new(50.0, 40.0));
        assert_eq!(vel, Vec2::new(0.0, -40.0));
    }

    #[test]
    fn test_edge_contact_reports_penetration() {
        let contact = edge_contact(Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(5.0, -2.0), 10.0);
        assert!(contact.hit);
        assert!((contact.distance + 2.0).abs() < 1e-5);
        assert!((contact.penetration - 12.0).abs() < 1e-5);
    }

    #[test]
    fn test_resolve_polygon_bounces_off_square_floor() {
        let poly = RegularPolygon::new(4, 100.0);
        let center = Vec2::ZERO;
        // Rotate 45 degrees so the square is axis aligned, bottom edge at y = apothem
        let floor_y = poly.apothem();
        let ball = free_ball(Vec2::new(0.0, floor_y - 5.0), Vec2::new(0.0, 120.0));
        let out = resolve_polygon(&poly, 45.0, center, ball);
        assert!(out.vel.y < 0.0);
        assert!((out.vel.y + 120.0).abs() < 1e-3);
        assert!(out.pos.y <= floor_y - 10.0 + 1e-3);
    }

    #[test]
    fn test_resolve_polygon_corner_clears_both_edges() {
        let poly = RegularPolygon::new(4, 100.0);
        let center = Vec2::ZERO;
        let a = poly.apothem();
        // Heading into the bottom-right corner of the axis aligned square
        let ball = free_ball(Vec2::new(a - 4.0, a - 4.0), Vec2::new(50.0, 50.0));
        let out = resolve_polygon(&poly, 45.0, center, ball);
        assert!(out.vel.x < 0.0 && out.vel.y < 0.0);
        assert!(max_penetration(&poly, 45.0, center, out.pos, out.radius) < 1e-3);
    }

    #[test]
    fn test_max_penetration_at_center_is_negative() {
        let poly = RegularPolygon::new(3, 250.0);
        let center = Vec2::new(400.0, 320.0);
        let pen = max_penetration(&poly, 0.0, center, center, 10.0);
        assert!((pen - (10.0 - poly.apothem())).abs() < 1e-2);
    }

    proptest! {
        #[test]
        fn reflection_flips_normal_component(
            edge_angle in 0f32..std::f32::consts::TAU,
            speed in 1f32..800.0,
            incidence in 0.05f32..(std::f32::consts::PI - 0.05),
            depth in 0.5f32..9.0,
        ) {
            let dir = Vec2::from_angle(edge_angle);
            let a = Vec2::new(200.0, 200.0);
            let b = a + dir * 100.0;
            let n = inward_normal(a, b);
            // Velocity pointing into the wall (negative normal component)
            let v = (dir * incidence.cos() - n * incidence.sin()) * speed;
            prop_assume!(dot(v, n) < 0.0);
            let pos = a + dir * 50.0 + n * (10.0 - depth);

            let (new_pos, new_vel) = resolve_edge(a, b, pos, v, 10.0);
            prop_assert!((dot(new_vel, n) + dot(v, n)).abs() < 1e-2 * speed.max(1.0));
            prop_assert!((length(new_vel) - length(v)).abs() < 1e-2 * speed.max(1.0));
            prop_assert!(dot(new_pos - a, n) >= 10.0 - 1e-2);
        }

        #[test]
        fn resting_ball_is_left_unchanged(
            sides in 3u32..=10,
            rotation in 0f32..360.0,
            ox in -300f32..300.0,
            oy in -300f32..300.0,
        ) {
            let poly = RegularPolygon::new(sides, 250.0);
            let center = Vec2::new(400.0, 320.0);
            let ball = free_ball(center + Vec2::new(ox, oy), Vec2::ZERO);
            let out = resolve_polygon(&poly, rotation, center, ball);
            prop_assert_eq!(out, ball);
        }

        #[test]
        fn ball_clear_of_every_edge_is_left_unchanged(
            sides in 3u32..=10,
            rotation in 0f32..360.0,
            angle in 0f32..std::f32::consts::TAU,
            speed in 0f32..600.0,
        ) {
            let poly = RegularPolygon::new(sides, 250.0);
            let center = Vec2::new(400.0, 320.0);
            let ball = free_ball(center + Vec2::new(20.0, -15.0), Vec2::from_angle(angle) * speed);
            let out = resolve_polygon(&poly, rotation, center, ball);
            prop_assert_eq!(out, ball);
        }

        #[test]
        fn single_step_resolution_leaves_no_penetration(
            sides in 3u32..=10,
            rotation in 0f32..360.0,
            angle in 0f32..std::f32::consts::TAU,
        ) {
            // Ball fired from the center and stepped just past the wall it hits
            let poly = RegularPolygon::new(sides, 250.0);
            let center = Vec2::new(400.0, 320.0);
            let dir = Vec2::from_angle(angle);
            let reach = poly.apothem() - 10.0 + 4.0;
            let ball = free_ball(center + dir * reach, dir * 300.0);
            let before = max_penetration(&poly, rotation, center, ball.pos, ball.radius);
            let out = resolve_polygon(&poly, rotation, center, ball);
            let after = max_penetration(&poly, rotation, center, out.pos, out.radius);
            prop_assert!(after <= before.max(0.0) + 1e-3);
            prop_assert!(after < 1e-2);
        }
    }
}
