//! Explosion particles
//!
//! Purely cosmetic. The pool draws from its own RNG stream so the number of
//! particles spawned never shifts gameplay randomness.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Radius lost per tick
const PARTICLE_SHRINK: f32 = 0.02;
/// Max speed per axis (pixels per tick)
const PARTICLE_SPEED: f32 = 5.0;
const PARTICLE_MIN_RADIUS: f32 = 2.0;
const PARTICLE_MAX_RADIUS: f32 = 5.0;
/// Mixed into the session seed so the pool gets an independent stream
const PARTICLE_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// A single explosion particle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Recycled pool of explosion particles
#[derive(Debug, Clone)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    capacity: usize,
    origin: Vec2,
    rng: Pcg32,
}

impl ParticlePool {
    pub fn new(seed: u64, capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            capacity,
            origin: Vec2::ZERO,
            rng: Pcg32::seed_from_u64(seed ^ PARTICLE_SEED_SALT),
        }
    }

    fn fresh(&mut self) -> Particle {
        Particle {
            pos: self.origin,
            vel: Vec2::new(
                self.rng.random_range(-PARTICLE_SPEED..PARTICLE_SPEED),
                self.rng.random_range(-PARTICLE_SPEED..PARTICLE_SPEED),
            ),
            radius: self.rng.random_range(PARTICLE_MIN_RADIUS..PARTICLE_MAX_RADIUS),
        }
    }

    /// Fill the pool with particles at `origin`
    pub fn burst(&mut self, origin: Vec2) {
        self.origin = origin;
        self.particles.clear();
        for _ in 0..self.capacity {
            let p = self.fresh();
            self.particles.push(p);
        }
    }

    /// Drift and shrink; burnt-out particles respawn at the origin
    pub fn update(&mut self) {
        for i in 0..self.particles.len() {
            let p = &mut self.particles[i];
            p.pos += p.vel;
            p.radius -= PARTICLE_SHRINK;
            if p.radius < 0.0 {
                self.particles[i] = self.fresh();
            }
        }
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
