//! Rock Drift - a wrap-around asteroid field arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, spawning)
//! - `game`: Session controller (levels, lives, score, game over)
//! - `snapshot`: Read-only per-tick view for presentation
//! - `renderer`: Vertex generation for any 2D backend
//! - `platform`: Input mapping and fixed-step timing
//! - `persistence`: Key-value storage backends
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use game::{Game, GamePhase, StatusText};
pub use highscores::HighScores;
pub use snapshot::Snapshot;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 120;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the fixed-step clock will account for (seconds)
    pub const MAX_FRAME_TIME: f32 = 0.1;

    /// Score table, credited to the destroying event
    pub const SCORE_LARGE: u64 = 20;
    pub const SCORE_MEDIUM: u64 = 50;
    pub const SCORE_SMALL: u64 = 80;

    /// Extra asteroids per level on top of the base belt
    pub const ASTEROIDS_PER_LEVEL: u32 = 2;
    /// Asteroid speed gain per level (multiplier is `1 + this * level`)
    pub const LEVEL_SPEED_GAIN: f32 = 0.1;

    /// Laser disc radius as a fraction of ship size
    pub const LASER_SIZE_FRACTION: f32 = 1.0 / 15.0;
    /// Laser muzzle offset from ship centre, in ship radii
    pub const SHIP_NOSE_OFFSET: f32 = 4.0 / 3.0;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Toroidal wrap for a single axis.
///
/// An entity whose centre leaves `[-radius, extent + radius]` re-enters at the
/// opposite edge, just outside the playfield, so its bounding circle always
/// touches the visible area.
#[inline]
pub fn wrap_coordinate(value: f32, radius: f32, extent: f32) -> f32 {
    if value < -radius {
        extent + radius
    } else if value > extent + radius {
        -radius
    } else {
        value
    }
}

/// Wrap a position on both axes of a `width` x `height` playfield
#[inline]
pub fn wrap_position(pos: Vec2, radius: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        wrap_coordinate(pos.x, radius, width),
        wrap_coordinate(pos.y, radius, height),
    )
}

/// Unit heading for an angle in screen space (y grows downward, angle is
/// counter-clockwise from +x)
#[inline]
pub fn heading_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), -angle.sin())
}
