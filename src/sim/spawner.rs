//! Asteroid belt generation and splitting
//!
//! All randomness comes from the caller's RNG so belts and splits replay
//! exactly for a given seed.

use glam::Vec2;
use rand::Rng;

use super::state::{Asteroid, AsteroidSize};
use crate::consts::LEVEL_SPEED_GAIN;
use crate::tuning::Tuning;

/// Resample budget per asteroid before falling back to the far point
const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Children produced by destroying one asteroid
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    /// Score credited for the destruction
    pub score: u64,
    /// Zero or two smaller asteroids at the parent's position
    pub children: Vec<Asteroid>,
}

/// Asteroid speed multiplier for a level
pub fn speed_multiplier_for_level(level: u32) -> f32 {
    1.0 + LEVEL_SPEED_GAIN * level as f32
}

/// One velocity axis: uniform magnitude, random sign
fn random_axis_speed<R: Rng>(rng: &mut R, max: f32) -> f32 {
    if max <= 0.0 {
        return 0.0;
    }
    let speed = rng.random_range(0.0..max);
    if rng.random_bool(0.5) { speed } else { -speed }
}

/// Create an asteroid with fresh random velocity and silhouette
pub fn new_asteroid<R: Rng>(
    pos: Vec2,
    size: AsteroidSize,
    level: u32,
    tuning: &Tuning,
    rng: &mut R,
) -> Asteroid {
    let max_speed = tuning.asteroid_speed_per_tick() * speed_multiplier_for_level(level);
    let vel = Vec2::new(
        random_axis_speed(rng, max_speed),
        random_axis_speed(rng, max_speed),
    );

    let base = tuning.asteroid_vertices;
    let vertex_count = rng.random_range(base / 2..=base / 2 + base) as usize;
    let j = tuning.asteroid_jaggedness;
    let offsets = (0..vertex_count)
        .map(|_| rng.random_range(1.0 - j..=1.0 + j))
        .collect();

    Asteroid {
        pos,
        vel,
        size,
        radius: size.radius(tuning.large_asteroid_radius()),
        angle: rng.random_range(0.0..std::f32::consts::TAU),
        offsets,
    }
}

/// Place `count` large asteroids uniformly over the playfield, resampling any
/// candidate closer than `min_clearance` to `avoid`
pub fn spawn_belt<R: Rng>(
    count: usize,
    avoid: Vec2,
    min_clearance: f32,
    level: u32,
    tuning: &Tuning,
    rng: &mut R,
) -> Vec<Asteroid> {
    let (w, h) = (tuning.playfield_width, tuning.playfield_height);
    let mut belt = Vec::with_capacity(count);

    for _ in 0..count {
        let mut placed = None;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let candidate = Vec2::new(rng.random_range(0.0..w), rng.random_range(0.0..h));
            if crate::distance(candidate, avoid) >= min_clearance {
                placed = Some(candidate);
                break;
            }
        }
        let pos = placed.unwrap_or_else(|| {
            log::warn!("Belt placement exhausted retries, using far point");
            Vec2::new((avoid.x + w / 2.0) % w, (avoid.y + h / 2.0) % h)
        });
        belt.push(new_asteroid(pos, AsteroidSize::Large, level, tuning, rng));
    }

    log::debug!("Spawned belt of {} asteroids for level {}", belt.len(), level);
    belt
}

/// Destroy an asteroid: large and medium break into two of the next size
/// down, small ones vanish
pub fn split<R: Rng>(asteroid: &Asteroid, level: u32, tuning: &Tuning, rng: &mut R) -> SplitOutcome {
    let children: Vec<Asteroid> = match asteroid.size.child() {
        Some(child) => (0..2)
            .map(|_| new_asteroid(asteroid.pos, child, level, tuning, rng))
            .collect(),
        None => Vec::new(),
    };
    debug_assert!(children.iter().all(|c| c.radius < asteroid.radius));

    SplitOutcome {
        score: asteroid.size.score(),
        children,
    }
}
