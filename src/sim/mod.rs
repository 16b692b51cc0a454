//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (reverse index scans for in-place removal)
//! - No rendering or platform dependencies

pub mod collision;
pub mod particles;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, first_laser_hit, laser_hits_asteroid, ship_hits_asteroid};
pub use particles::{Particle, ParticlePool};
pub use spawner::{SplitOutcome, new_asteroid, spawn_belt, speed_multiplier_for_level, split};
pub use state::{Asteroid, AsteroidSize, GameSession, Laser, Ship, ShipPhase};
pub use tick::{GameEvent, Rotation, TickInput, fire_laser, tick};
