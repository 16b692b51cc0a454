//! Game session and core simulation types
//!
//! All gameplay state lives in [`GameSession`]; presentation only ever sees
//! a [`crate::Snapshot`] built from it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::particles::ParticlePool;
use crate::tuning::Tuning;
use crate::consts::*;

/// Asteroid size ladder. Splitting only ever moves down the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidSize {
    Large,
    Medium,
    Small,
}

impl AsteroidSize {
    /// Size of each child produced by a split (None = fully destroyed)
    pub fn child(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }

    /// Score credited for destroying an asteroid of this size
    pub fn score(self) -> u64 {
        match self {
            AsteroidSize::Large => SCORE_LARGE,
            AsteroidSize::Medium => SCORE_MEDIUM,
            AsteroidSize::Small => SCORE_SMALL,
        }
    }

    /// Collision radius given the large-asteroid radius
    pub fn radius(self, large_radius: f32) -> f32 {
        match self {
            AsteroidSize::Large => large_radius,
            AsteroidSize::Medium => large_radius / 2.0,
            AsteroidSize::Small => large_radius / 4.0,
        }
    }
}

/// An asteroid. Shape (vertex count and offsets) is fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    pub size: AsteroidSize,
    pub radius: f32,
    /// Silhouette rotation (radians)
    pub angle: f32,
    /// Per-vertex radial multipliers; `offsets.len()` is the vertex count
    pub offsets: Vec<f32>,
}

impl Asteroid {
    pub fn vertex_count(&self) -> usize {
        self.offsets.len()
    }
}

/// A laser bolt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Laser {
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    /// Accumulated travel in pixels
    pub distance: f32,
    /// Ticks left in the post-hit explosion (0 = in flight)
    pub explode_ticks: u32,
}

impl Laser {
    pub fn is_exploding(&self) -> bool {
        self.explode_ticks > 0
    }
}

/// Ship life-cycle. Exactly one phase holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipPhase {
    /// Under player control
    Piloting,
    /// Blown up, counting down to respawn or game over
    Exploding { ticks_left: u32 },
    /// Out of lives
    Dead,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Velocity in pixels per tick (accumulated thrust)
    pub vel: Vec2,
    /// Heading (radians, counter-clockwise from +x, screen y down)
    pub angle: f32,
    pub radius: f32,
    /// Current turn rate in radians per tick
    pub rotation: f32,
    pub thrusting: bool,
    pub phase: ShipPhase,
    /// Ticks until the current blink half-cycle ends
    pub blink_ticks: u32,
    /// Remaining blink half-cycles; invincible while non-zero
    pub blink_cycles: u32,
    /// Fire gate: consumed by a shot, reopened only by a fire release
    pub can_fire: bool,
    /// Active lasers (never more than `Tuning::laser_max`)
    pub lasers: Vec<Laser>,
}

impl Ship {
    /// Fresh ship at the playfield centre, pointing up, fully invincible
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.centre(),
            vel: Vec2::ZERO,
            angle: std::f32::consts::FRAC_PI_2,
            radius: tuning.ship_radius(),
            rotation: 0.0,
            thrusting: false,
            phase: ShipPhase::Piloting,
            blink_ticks: tuning.blink_ticks(),
            blink_cycles: tuning.blink_cycles(),
            can_fire: true,
            lasers: Vec::with_capacity(tuning.laser_max),
        }
    }

    pub fn is_piloting(&self) -> bool {
        self.phase == ShipPhase::Piloting
    }

    pub fn is_exploding(&self) -> bool {
        matches!(self.phase, ShipPhase::Exploding { .. })
    }

    pub fn is_dead(&self) -> bool {
        self.phase == ShipPhase::Dead
    }

    pub fn is_invincible(&self) -> bool {
        self.blink_cycles > 0
    }

    /// Blink visibility: shown on even half-cycles
    pub fn blink_visible(&self) -> bool {
        self.blink_cycles % 2 == 0
    }

    /// Muzzle position (ship nose)
    pub fn nose(&self) -> Vec2 {
        self.pos + crate::heading_vector(self.angle) * self.radius * SHIP_NOSE_OFFSET
    }
}

/// Complete session state, owned by the game controller and lent to the
/// simulation each tick
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gameplay RNG (belt placement, shapes, velocities)
    pub rng: Pcg32,
    /// Current level (0-based)
    pub level: u32,
    pub lives: u8,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ship: Ship,
    /// Active asteroids
    pub asteroids: Vec<Asteroid>,
    /// Explosion effect (not gameplay-affecting)
    pub particles: ParticlePool,
}

impl GameSession {
    /// Create a new session with the given seed. The belt is requested by
    /// the controller on entry to the first level.
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            level: 0,
            lives: tuning.starting_lives,
            score: 0,
            time_ticks: 0,
            ship: Ship::spawn(tuning),
            asteroids: Vec::new(),
            particles: ParticlePool::new(seed, tuning.particle_count),
        }
    }
}
