//! Collision predicates
//!
//! Everything collides as a circle. Checks are discrete per tick; there is
//! no swept test, so a fast bolt can in principle skip a thin target.

use glam::Vec2;

use super::state::{Asteroid, Laser, Ship};
use crate::distance;

/// Two circles overlap (strictly)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    distance(a, b) < ra + rb
}

/// A laser centre lies inside the asteroid's bounding circle.
/// Exploding lasers never hit.
pub fn laser_hits_asteroid(laser: &Laser, asteroid: &Asteroid) -> bool {
    !laser.is_exploding() && distance(asteroid.pos, laser.pos) < asteroid.radius
}

/// Ship and asteroid bounding circles overlap
pub fn ship_hits_asteroid(ship: &Ship, asteroid: &Asteroid) -> bool {
    circles_overlap(ship.pos, ship.radius, asteroid.pos, asteroid.radius)
}

/// Index of the first in-flight laser inside `asteroid`
pub fn first_laser_hit(lasers: &[Laser], asteroid: &Asteroid) -> Option<usize> {
    lasers.iter().position(|l| laser_hits_asteroid(l, asteroid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::AsteroidSize;
    use crate::tuning::Tuning;

    fn rock(pos: Vec2, radius: f32) -> Asteroid {
        Asteroid {
            pos,
            vel: Vec2::ZERO,
            size: AsteroidSize::Large,
            radius,
            angle: 0.0,
            offsets: vec![1.0; 8],
        }
    }

    fn bolt(pos: Vec2) -> Laser {
        Laser {
            pos,
            vel: Vec2::ZERO,
            distance: 0.0,
            explode_ticks: 0,
        }
    }

    #[test]
    fn test_laser_inside_asteroid() {
        let a = rock(Vec2::new(100.0, 100.0), 50.0);
        assert!(laser_hits_asteroid(&bolt(Vec2::new(120.0, 100.0)), &a));
        assert!(!laser_hits_asteroid(&bolt(Vec2::new(151.0, 100.0)), &a));
        // Exactly on the rim is a miss
        assert!(!laser_hits_asteroid(&bolt(Vec2::new(150.0, 100.0)), &a));
    }

    #[test]
    fn test_exploding_laser_never_hits() {
        let a = rock(Vec2::ZERO, 50.0);
        let mut l = bolt(Vec2::ZERO);
        l.explode_ticks = 5;
        assert!(!laser_hits_asteroid(&l, &a));
    }

    #[test]
    fn test_first_laser_hit_skips_exploding() {
        let a = rock(Vec2::ZERO, 50.0);
        let mut lasers = vec![bolt(Vec2::new(500.0, 0.0)), bolt(Vec2::ZERO), bolt(Vec2::ZERO)];
        lasers[1].explode_ticks = 3;
        assert_eq!(first_laser_hit(&lasers, &a), Some(2));
        assert_eq!(first_laser_hit(&lasers[..2], &a), None);
    }

    #[test]
    fn test_ship_asteroid_overlap() {
        let ship = Ship::spawn(&Tuning::default());
        // Ship radius 15 + asteroid radius 50
        let near = rock(ship.pos + Vec2::new(64.0, 0.0), 50.0);
        let far = rock(ship.pos + Vec2::new(66.0, 0.0), 50.0);
        assert!(ship_hits_asteroid(&ship, &near));
        assert!(!ship_hits_asteroid(&ship, &far));
    }
}
