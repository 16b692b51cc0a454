//! Shape generation for 2D primitives
//!
//! Filled shapes are triangle lists; outlines are line lists (vertex pairs).

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

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

/// Closed outline through `points`
pub fn closed_outline(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(points.len() * 2);
    for (i, p) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        vertices.push(Vertex::new(p.x, p.y, color));
        vertices.push(Vertex::new(next.x, next.y, color));
    }
    vertices
}

/// Jagged asteroid silhouette: vertex `k` sits at `radius * offsets[k]`
/// along `angle + k * 2pi / n`
pub fn asteroid_points(center: Vec2, radius: f32, angle: f32, offsets: &[f32]) -> Vec<Vec2> {
    let n = offsets.len() as f32;
    offsets
        .iter()
        .enumerate()
        .map(|(k, offset)| {
            let theta = angle + k as f32 * 2.0 * PI / n;
            center + Vec2::new(theta.cos(), theta.sin()) * radius * offset
        })
        .collect()
}

/// Ship triangle: nose at 4/3 r ahead, two rear corners (screen y down)
pub fn ship_points(center: Vec2, radius: f32, angle: f32) -> [Vec2; 3] {
    let (sin, cos) = angle.sin_cos();
    [
        Vec2::new(
            center.x + 4.0 / 3.0 * radius * cos,
            center.y - 4.0 / 3.0 * radius * sin,
        ),
        Vec2::new(
            center.x - radius * (2.0 / 3.0 * cos + sin),
            center.y + radius * (2.0 / 3.0 * sin - cos),
        ),
        Vec2::new(
            center.x - radius * (2.0 / 3.0 * cos - sin),
            center.y + radius * (2.0 / 3.0 * sin + cos),
        ),
    ]
}

/// Thruster flame behind the ship
pub fn flame_points(center: Vec2, radius: f32, angle: f32) -> [Vec2; 3] {
    let (sin, cos) = angle.sin_cos();
    [
        Vec2::new(
            center.x - radius * (2.0 / 3.0 * cos + 0.5 * sin),
            center.y + radius * (2.0 / 3.0 * sin - 0.5 * cos),
        ),
        Vec2::new(
            center.x - radius * 5.0 / 3.0 * cos,
            center.y + radius * 5.0 / 3.0 * sin,
        ),
        Vec2::new(
            center.x - radius * (2.0 / 3.0 * cos - 0.5 * sin),
            center.y + radius * (2.0 / 3.0 * sin + 0.5 * cos),
        ),
    ]
}

/// Filled triangle
pub fn triangle(points: [Vec2; 3], color: [f32; 4]) -> Vec<Vertex> {
    points
        .iter()
        .map(|p| Vertex::new(p.x, p.y, color))
        .collect()
}
