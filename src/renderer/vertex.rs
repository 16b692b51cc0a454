//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (playfield pixels, y down) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride for a vertex buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    pub const SHIP: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const THRUST_OUTER: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const THRUST_INNER: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const LASER: [f32; 4] = [0.98, 0.5, 0.45, 1.0]; // Salmon
    pub const LASER_EXPLOSION: [f32; 4] = [1.0, 0.5, 0.0, 1.0];
    pub const ASTEROID: [f32; 4] = [0.7, 0.7, 0.8, 1.0];
    pub const PARTICLE: [f32; 4] = [1.0, 0.6, 0.1, 1.0];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const STATUS: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    /// Same color with its alpha scaled
    pub fn faded(color: [f32; 4], alpha: f32) -> [f32; 4] {
        [color[0], color[1], color[2], color[3] * alpha.clamp(0.0, 1.0)]
    }

    /// CSS `rgba()` string for canvas styles
    pub fn to_css(color: [f32; 4]) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({}, {}, {}, {})",
            channel(color[0]),
            channel(color[1]),
            channel(color[2]),
            color[3].clamp(0.0, 1.0)
        )
    }
}
