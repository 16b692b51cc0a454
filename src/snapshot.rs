//! Read-only view of the game for presentation
//!
//! Built once per tick by [`crate::Game::snapshot`]. Renderers and HUDs read
//! this and never touch the session directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::game::{GamePhase, StatusText};
use crate::sim::particles::Particle;
use crate::sim::state::{Asteroid, GameSession, Laser, Ship};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub pos: Vec2,
    pub angle: f32,
    pub radius: f32,
    /// Not out of lives
    pub alive: bool,
    pub exploding: bool,
    /// Draw this tick (false on blink-off ticks, while exploding, or dead)
    pub visible: bool,
    pub thrusting: bool,
}

impl ShipView {
    fn from_ship(ship: &Ship) -> Self {
        Self {
            pos: ship.pos,
            angle: ship.angle,
            radius: ship.radius,
            alive: !ship.is_dead(),
            exploding: ship.is_exploding(),
            visible: ship.is_piloting() && ship.blink_visible(),
            thrusting: ship.is_piloting() && ship.thrusting,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaserView {
    pub pos: Vec2,
    pub radius: f32,
    pub exploding: bool,
}

impl LaserView {
    fn from_laser(laser: &Laser, radius: f32) -> Self {
        Self {
            pos: laser.pos,
            radius,
            exploding: laser.is_exploding(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsteroidView {
    pub pos: Vec2,
    pub radius: f32,
    pub angle: f32,
    pub vertex_count: usize,
    pub offsets: Vec<f32>,
}

impl From<&Asteroid> for AsteroidView {
    fn from(a: &Asteroid) -> Self {
        Self {
            pos: a.pos,
            radius: a.radius,
            angle: a.angle,
            vertex_count: a.vertex_count(),
            offsets: a.offsets.clone(),
        }
    }
}

/// Everything a frame needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub ship: ShipView,
    pub lasers: Vec<LaserView>,
    pub asteroids: Vec<AsteroidView>,
    pub particles: Vec<Particle>,
    pub score: u64,
    pub high_score: u64,
    pub lives: u8,
    /// 0-based level
    pub level: u32,
    pub status: Option<StatusText>,
    pub playfield: Vec2,
}

impl Snapshot {
    pub fn capture(
        session: &GameSession,
        tuning: &Tuning,
        phase: GamePhase,
        status: Option<&StatusText>,
        high_score: u64,
    ) -> Self {
        let laser_radius = tuning.laser_radius();
        Self {
            phase,
            ship: ShipView::from_ship(&session.ship),
            lasers: session
                .ship
                .lasers
                .iter()
                .map(|l| LaserView::from_laser(l, laser_radius))
                .collect(),
            asteroids: session.asteroids.iter().map(AsteroidView::from).collect(),
            particles: session.particles.particles().to_vec(),
            score: session.score,
            high_score: high_score.max(session.score),
            lives: session.lives,
            level: session.level,
            status: status.cloned(),
            playfield: Vec2::new(tuning.playfield_width, tuning.playfield_height),
        }
    }
}
