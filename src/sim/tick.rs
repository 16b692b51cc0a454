//! Fixed timestep simulation tick
//!
//! Advances a [`GameSession`] by exactly one tick. Stage order is fixed:
//! ship, lasers, laser hits, ship hits, asteroid motion, level check.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{first_laser_hit, ship_hits_asteroid};
use super::spawner::{spawn_belt, split};
use super::state::{AsteroidSize, GameSession, Laser, Ship, ShipPhase};
use crate::tuning::Tuning;
use crate::{heading_vector, wrap_position};

/// Turn direction held by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    None,
    /// Counter-clockwise
    Left,
    /// Clockwise
    Right,
}

impl Rotation {
    fn sign(self) -> f32 {
        match self {
            Rotation::None => 0.0,
            Rotation::Left => 1.0,
            Rotation::Right => -1.0,
        }
    }
}

/// Edge of the fire key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireAction {
    /// Shoot if the gate is open, then close it
    Press,
    /// Reopen the gate
    Release,
}

/// Input intents for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub rotation: Rotation,
    pub thrusting: bool,
    /// Fire key edges since the last tick, in arrival order (one-shot)
    pub fire: Vec<FireAction>,
}

impl TickInput {
    pub fn press_fire(&mut self) {
        self.fire.push(FireAction::Press);
    }

    pub fn release_fire(&mut self) {
        self.fire.push(FireAction::Release);
    }

    /// Drop the one-shot edges once a tick has consumed them
    pub fn clear_one_shots(&mut self) {
        self.fire.clear();
    }
}

/// Lifecycle events emitted by a tick, in the order they happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    LaserFired,
    AsteroidDestroyed {
        size: AsteroidSize,
        pos: Vec2,
        score: u64,
        /// Destroyed by ramming rather than a laser
        by_ship: bool,
    },
    ShipExploded { pos: Vec2 },
    ShipRespawned { lives: u8 },
    /// Lives exhausted; the ship is dead
    GameOver { score: u64, level: u32 },
    /// Belt cleared; `level` is the level just entered
    LevelCleared { level: u32 },
}

/// Advance the session by one fixed timestep
pub fn tick(state: &mut GameSession, input: &TickInput, tuning: &Tuning) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    apply_input(&mut state.ship, input, tuning, &mut events);
    update_ship(state, tuning, &mut events);
    update_lasers(&mut state.ship.lasers, tuning);
    resolve_laser_hits(state, tuning, &mut events);
    resolve_ship_hit(state, tuning, &mut events);

    for asteroid in &mut state.asteroids {
        asteroid.pos = wrap_position(
            asteroid.pos + asteroid.vel,
            asteroid.radius,
            tuning.playfield_width,
            tuning.playfield_height,
        );
    }

    if state.asteroids.is_empty() {
        next_level(state, tuning, &mut events);
    }

    debug_assert!(state.ship.lasers.len() <= tuning.laser_max);
    events
}

/// Latch intents onto a piloted ship. Other phases ignore input.
fn apply_input(ship: &mut Ship, input: &TickInput, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    if !ship.is_piloting() {
        return;
    }

    ship.rotation = input.rotation.sign() * tuning.turn_per_tick();
    ship.thrusting = input.thrusting;

    for action in &input.fire {
        match action {
            FireAction::Press => fire_laser(ship, tuning, events),
            FireAction::Release => ship.can_fire = true,
        }
    }
}

/// Shoot from the nose if the gate is open and below the cap. A press always
/// closes the gate, even when no laser comes out.
pub fn fire_laser(ship: &mut Ship, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    if ship.can_fire && ship.lasers.len() < tuning.laser_max {
        ship.lasers.push(Laser {
            pos: ship.nose(),
            vel: heading_vector(ship.angle) * tuning.laser_speed_per_tick(),
            distance: 0.0,
            explode_ticks: 0,
        });
        events.push(GameEvent::LaserFired);
    }
    ship.can_fire = false;
}

fn update_ship(state: &mut GameSession, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    match state.ship.phase {
        ShipPhase::Exploding { ticks_left } => {
            state.particles.update();
            let ticks_left = ticks_left.saturating_sub(1);
            if ticks_left > 0 {
                state.ship.phase = ShipPhase::Exploding { ticks_left };
                return;
            }

            state.lives = state.lives.saturating_sub(1);
            state.particles.clear();
            if state.lives == 0 {
                state.ship.phase = ShipPhase::Dead;
                // Bolts still in flight cannot score for a dead ship
                state.ship.lasers.clear();
                log::info!("Game over at level {} with score {}", state.level, state.score);
                events.push(GameEvent::GameOver {
                    score: state.score,
                    level: state.level,
                });
            } else {
                state.ship = Ship::spawn(tuning);
                log::debug!("Ship respawned, {} lives left", state.lives);
                events.push(GameEvent::ShipRespawned { lives: state.lives });
            }
        }

        ShipPhase::Piloting => {
            let ship = &mut state.ship;
            ship.angle += ship.rotation;

            if ship.thrusting {
                ship.vel += heading_vector(ship.angle) * tuning.thrust_per_tick();
            } else {
                ship.vel -= ship.vel * tuning.friction_per_tick();
            }

            ship.pos = wrap_position(
                ship.pos + ship.vel,
                ship.radius,
                tuning.playfield_width,
                tuning.playfield_height,
            );

            if ship.blink_cycles > 0 {
                ship.blink_ticks = ship.blink_ticks.saturating_sub(1);
                if ship.blink_ticks == 0 {
                    ship.blink_ticks = tuning.blink_ticks();
                    ship.blink_cycles -= 1;
                }
            }
        }

        ShipPhase::Dead => {}
    }
}

/// Expire, count down or move each laser. Reverse order so removal does not
/// skip the next element.
fn update_lasers(lasers: &mut Vec<Laser>, tuning: &Tuning) {
    let max_distance = tuning.laser_max_distance();
    let radius = tuning.laser_radius();

    for i in (0..lasers.len()).rev() {
        let laser = &mut lasers[i];

        if laser.distance > max_distance {
            lasers.remove(i);
            continue;
        }

        if laser.is_exploding() {
            laser.explode_ticks -= 1;
            if laser.explode_ticks == 0 {
                lasers.remove(i);
            }
            continue;
        }

        laser.pos += laser.vel;
        laser.distance += laser.vel.length();
        laser.pos = wrap_position(laser.pos, radius, tuning.playfield_width, tuning.playfield_height);
    }
}

/// Each asteroid takes at most one laser per tick. The laser that hits
/// switches to its explosion phase and cannot hit again.
fn resolve_laser_hits(state: &mut GameSession, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    // Children are appended past `i`, so they are not scanned this tick
    for i in (0..state.asteroids.len()).rev() {
        let Some(hit) = first_laser_hit(&state.ship.lasers, &state.asteroids[i]) else {
            continue;
        };

        let asteroid = state.asteroids.remove(i);
        let outcome = split(&asteroid, state.level, tuning, &mut state.rng);
        state.score += outcome.score;
        state.asteroids.extend(outcome.children);
        state.ship.lasers[hit].explode_ticks = tuning.laser_explode_ticks();

        log::debug!("Laser destroyed {:?} asteroid (+{})", asteroid.size, outcome.score);
        events.push(GameEvent::AsteroidDestroyed {
            size: asteroid.size,
            pos: asteroid.pos,
            score: outcome.score,
            by_ship: false,
        });
    }
}

/// Ramming: only a piloted, vulnerable ship collides, and only with the
/// first overlapping asteroid
fn resolve_ship_hit(state: &mut GameSession, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    if !state.ship.is_piloting() || state.ship.is_invincible() {
        return;
    }

    let Some(i) = state
        .asteroids
        .iter()
        .position(|a| ship_hits_asteroid(&state.ship, a))
    else {
        return;
    };

    let asteroid = state.asteroids.remove(i);
    let outcome = split(&asteroid, state.level, tuning, &mut state.rng);
    state.score += outcome.score;
    state.asteroids.extend(outcome.children);

    let ship = &mut state.ship;
    ship.phase = ShipPhase::Exploding {
        ticks_left: tuning.ship_explode_ticks(),
    };
    ship.thrusting = false;
    ship.rotation = 0.0;
    state.particles.burst(ship.pos);

    log::debug!("Ship hit a {:?} asteroid at {:?}", asteroid.size, ship.pos);
    events.push(GameEvent::AsteroidDestroyed {
        size: asteroid.size,
        pos: asteroid.pos,
        score: outcome.score,
        by_ship: true,
    });
    events.push(GameEvent::ShipExploded { pos: ship.pos });
}

/// Belt cleared: advance the level and spawn a bigger, faster belt away from
/// the ship. A ship that is not piloting will respawn at the centre, so the
/// belt keeps clear of that point instead.
fn next_level(state: &mut GameSession, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    state.level += 1;
    let avoid = if state.ship.is_piloting() {
        state.ship.pos
    } else {
        tuning.centre()
    };
    state.asteroids = spawn_belt(
        tuning.belt_size(state.level),
        avoid,
        tuning.spawn_clearance(),
        state.level,
        tuning,
        &mut state.rng,
    );
    log::info!("Level {} ({} asteroids)", state.level + 1, state.asteroids.len());
    events.push(GameEvent::LevelCleared { level: state.level });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Asteroid;

    fn session() -> (GameSession, Tuning) {
        let tuning = Tuning::default();
        let mut state = GameSession::new(12345, &tuning);
        // One parked rock far from the ship keeps the level from clearing
        state.asteroids.push(rock(Vec2::new(60.0, 60.0), AsteroidSize::Large, &tuning));
        (state, tuning)
    }

    fn rock(pos: Vec2, size: AsteroidSize, tuning: &Tuning) -> Asteroid {
        Asteroid {
            pos,
            vel: Vec2::ZERO,
            size,
            radius: size.radius(tuning.large_asteroid_radius()),
            angle: 0.0,
            offsets: vec![1.0; 10],
        }
    }

    fn fire() -> TickInput {
        TickInput {
            fire: vec![FireAction::Press],
            ..Default::default()
        }
    }

    fn release() -> TickInput {
        TickInput {
            fire: vec![FireAction::Release],
            ..Default::default()
        }
    }

    #[test]
    fn test_rotation_and_thrust() {
        let (mut state, tuning) = session();
        let start = state.ship.angle;

        let input = TickInput {
            rotation: Rotation::Left,
            ..Default::default()
        };
        tick(&mut state, &input, &tuning);
        assert!((state.ship.angle - start - tuning.turn_per_tick()).abs() < 1e-6);

        let input = TickInput {
            rotation: Rotation::Right,
            ..Default::default()
        };
        tick(&mut state, &input, &tuning);
        assert!((state.ship.angle - start).abs() < 1e-6);

        // Pointing up: thrust moves the ship toward smaller y
        let input = TickInput {
            thrusting: true,
            ..Default::default()
        };
        let y0 = state.ship.pos.y;
        for _ in 0..10 {
            tick(&mut state, &input, &tuning);
        }
        assert!(state.ship.vel.y < 0.0);
        assert!(state.ship.pos.y < y0);
    }

    #[test]
    fn test_friction_decays_velocity() {
        let (mut state, tuning) = session();
        state.ship.vel = Vec2::new(2.0, 0.0);
        tick(&mut state, &TickInput::default(), &tuning);
        let expected = 2.0 * (1.0 - tuning.friction_per_tick());
        assert!((state.ship.vel.x - expected).abs() < 1e-6);

        for _ in 0..2000 {
            tick(&mut state, &TickInput::default(), &tuning);
        }
        assert!(state.ship.vel.length() < 0.01);
    }

    #[test]
    fn test_fire_gate_single_shot_per_press() {
        let (mut state, tuning) = session();

        let events = tick(&mut state, &fire(), &tuning);
        assert_eq!(events, vec![GameEvent::LaserFired]);
        assert_eq!(state.ship.lasers.len(), 1);

        // Held key repeats: gate stays closed
        tick(&mut state, &fire(), &tuning);
        tick(&mut state, &fire(), &tuning);
        assert_eq!(state.ship.lasers.len(), 1);

        tick(&mut state, &release(), &tuning);
        tick(&mut state, &fire(), &tuning);
        assert_eq!(state.ship.lasers.len(), 2);
    }

    #[test]
    fn test_laser_cap() {
        let (mut state, tuning) = session();
        for _ in 0..tuning.laser_max {
            tick(&mut state, &fire(), &tuning);
            tick(&mut state, &release(), &tuning);
        }
        assert_eq!(state.ship.lasers.len(), tuning.laser_max);

        // At the cap: no-op, but the press still consumes the gate
        let events = tick(&mut state, &fire(), &tuning);
        assert!(events.is_empty());
        assert_eq!(state.ship.lasers.len(), tuning.laser_max);
        assert!(!state.ship.can_fire);
    }

    #[test]
    fn test_laser_expires_after_max_distance() {
        let (mut state, tuning) = session();
        // Fire sideways so nothing is in the way
        state.ship.angle = 0.0;
        tick(&mut state, &fire(), &tuning);

        let ticks_to_expire =
            (tuning.laser_max_distance() / tuning.laser_speed_per_tick()).ceil() as usize + 2;
        for _ in 0..ticks_to_expire {
            tick(&mut state, &TickInput::default(), &tuning);
        }
        assert!(state.ship.lasers.is_empty());
    }

    #[test]
    fn test_laser_hit_splits_and_lingers() {
        let (mut state, tuning) = session();
        let target = state.ship.pos - Vec2::new(0.0, 120.0);
        state.asteroids.push(rock(target, AsteroidSize::Large, &tuning));

        tick(&mut state, &fire(), &tuning);
        let mut hit_events = Vec::new();
        for _ in 0..60 {
            hit_events.extend(tick(&mut state, &TickInput::default(), &tuning));
            if state.score > 0 {
                break;
            }
        }

        assert_eq!(state.score, 20);
        assert_eq!(state.asteroids.len(), 3);
        assert!(matches!(
            hit_events[0],
            GameEvent::AsteroidDestroyed { size: AsteroidSize::Large, by_ship: false, .. }
        ));
        // The bolt lingers through its explosion, then disappears
        assert_eq!(state.ship.lasers.len(), 1);
        assert!(state.ship.lasers[0].is_exploding());

        for _ in 0..tuning.laser_explode_ticks() {
            tick(&mut state, &TickInput::default(), &tuning);
        }
        assert!(state.ship.lasers.is_empty());
        // The medium children sat on the exploding bolt without being hit
        assert_eq!(state.score, 20);
    }

    #[test]
    fn test_fire_edges_apply_in_arrival_order() {
        let (mut state, tuning) = session();
        state.ship.angle = 0.0;
        tick(&mut state, &fire(), &tuning);
        assert_eq!(state.ship.lasers.len(), 1);

        // Key up then a fresh key down before the next tick: one new shot
        let mut input = TickInput::default();
        input.release_fire();
        input.press_fire();
        tick(&mut state, &input, &tuning);
        assert_eq!(state.ship.lasers.len(), 2);

        // Auto-repeat while still held: gate stays closed
        tick(&mut state, &fire(), &tuning);
        assert_eq!(state.ship.lasers.len(), 2);
        assert!(!state.ship.can_fire);

        // Tap inside one tick: shoots and reopens
        let mut input = TickInput::default();
        input.press_fire();
        input.release_fire();
        tick(&mut state, &input, &tuning);
        assert_eq!(state.ship.lasers.len(), 3);
        assert!(state.ship.can_fire);
    }

    fn parked_laser(pos: Vec2) -> Laser {
        Laser {
            pos,
            vel: Vec2::ZERO,
            distance: 0.0,
            explode_ticks: 0,
        }
    }

    #[test]
    fn test_one_laser_destroys_one_of_overlapping_asteroids() {
        let (mut state, tuning) = session();
        let spot = Vec2::new(200.0, 450.0);
        state.asteroids.push(rock(spot, AsteroidSize::Large, &tuning));
        state.asteroids.push(rock(spot, AsteroidSize::Large, &tuning));
        state.ship.lasers.push(parked_laser(spot));

        let events = tick(&mut state, &TickInput::default(), &tuning);

        let destroyed = events
            .iter()
            .filter(|e| matches!(e, GameEvent::AsteroidDestroyed { .. }))
            .count();
        assert_eq!(destroyed, 1);
        assert_eq!(state.score, 20);
        let large = state
            .asteroids
            .iter()
            .filter(|a| a.size == AsteroidSize::Large)
            .count();
        // Parked rock plus the surviving overlapping one
        assert_eq!(large, 2);
        assert_eq!(state.asteroids.len(), 4);
        assert!(state.ship.lasers[0].is_exploding());
    }

    #[test]
    fn test_two_lasers_in_one_asteroid() {
        let (mut state, tuning) = session();
        let spot = Vec2::new(200.0, 450.0);
        state.asteroids.push(rock(spot, AsteroidSize::Large, &tuning));
        state.ship.lasers.push(parked_laser(spot));
        state.ship.lasers.push(parked_laser(spot));

        tick(&mut state, &TickInput::default(), &tuning);

        assert_eq!(state.score, 20);
        let exploding = state.ship.lasers.iter().filter(|l| l.is_exploding()).count();
        assert_eq!(state.ship.lasers.len(), 2);
        assert_eq!(exploding, 1);
    }

    #[test]
    fn test_ship_resolves_first_overlap_only() {
        let (mut state, tuning) = session();
        state.ship.blink_cycles = 0;
        let mut first = rock(state.ship.pos, AsteroidSize::Large, &tuning);
        first.angle = 1.0;
        let mut second = rock(state.ship.pos, AsteroidSize::Large, &tuning);
        second.angle = 2.0;
        state.asteroids.push(first);
        state.asteroids.push(second);

        let events = tick(&mut state, &TickInput::default(), &tuning);

        let rammed: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::AsteroidDestroyed { by_ship: true, .. }))
            .collect();
        assert_eq!(rammed.len(), 1);
        assert_eq!(state.score, 20);
        assert!(state.ship.is_exploding());
        assert!(
            state
                .asteroids
                .iter()
                .any(|a| a.size == AsteroidSize::Large && a.angle == 2.0)
        );
        assert!(
            !state
                .asteroids
                .iter()
                .any(|a| a.size == AsteroidSize::Large && a.angle == 1.0)
        );
    }

    #[test]
    fn test_ramming_last_rock_keeps_respawn_point_clear() {
        let tuning = Tuning::default();
        let mut state = GameSession::new(31, &tuning);
        let crash = Vec2::new(60.0, 60.0);
        state.ship.pos = crash;
        state.ship.blink_cycles = 0;
        state.asteroids = vec![rock(crash, AsteroidSize::Small, &tuning)];

        let events = tick(&mut state, &TickInput::default(), &tuning);

        assert!(events.contains(&GameEvent::LevelCleared { level: 1 }));
        assert!(state.ship.is_exploding());
        assert_eq!(state.asteroids.len(), tuning.belt_size(1));
        for a in &state.asteroids {
            assert!(crate::distance(a.pos, tuning.centre()) >= tuning.spawn_clearance() - 1.0);
        }
    }

    #[test]
    fn test_dead_ship_drops_lasers() {
        let (mut state, tuning) = session();
        state.lives = 1;
        state.ship.angle = 0.0;
        tick(&mut state, &fire(), &tuning);
        assert_eq!(state.ship.lasers.len(), 1);
        // Parked bolt never reaches its range
        state.ship.lasers[0].vel = Vec2::ZERO;

        state.ship.blink_cycles = 0;
        state.asteroids.push(rock(state.ship.pos, AsteroidSize::Small, &tuning));
        tick(&mut state, &TickInput::default(), &tuning);
        assert!(state.ship.is_exploding());
        for _ in 0..tuning.ship_explode_ticks() {
            tick(&mut state, &TickInput::default(), &tuning);
        }
        assert!(state.ship.is_dead());
        assert!(state.ship.lasers.is_empty());
    }

    #[test]
    fn test_invincibility_window() {
        let (mut state, tuning) = session();
        state.asteroids.push(rock(state.ship.pos, AsteroidSize::Large, &tuning));

        let window = tuning.blink_ticks() * tuning.blink_cycles();
        for _ in 1..window {
            tick(&mut state, &TickInput::default(), &tuning);
            assert!(state.ship.is_piloting());
        }
        assert_eq!(state.ship.blink_cycles, 1);

        let events = tick(&mut state, &TickInput::default(), &tuning);
        assert!(!state.ship.is_invincible());
        assert!(state.ship.is_exploding());
        assert!(events.iter().any(|e| matches!(e, GameEvent::ShipExploded { .. })));
        assert_eq!(state.score, 20);
    }

    #[test]
    fn test_explosion_respawn_and_game_over() {
        let (mut state, tuning) = session();

        for round in 1..=3u8 {
            state.ship.blink_cycles = 0;
            state.asteroids = vec![
                rock(Vec2::new(60.0, 60.0), AsteroidSize::Small, &tuning),
                rock(state.ship.pos, AsteroidSize::Small, &tuning),
            ];
            tick(&mut state, &TickInput::default(), &tuning);
            assert!(state.ship.is_exploding());
            assert!(!state.particles.is_empty());

            let mut events = Vec::new();
            for _ in 0..tuning.ship_explode_ticks() {
                events.extend(tick(&mut state, &TickInput::default(), &tuning));
            }
            assert_eq!(state.lives, 3 - round);
            if round < 3 {
                assert!(state.ship.is_piloting());
                assert!(state.ship.is_invincible());
                assert_eq!(events, vec![GameEvent::ShipRespawned { lives: 3 - round }]);
            } else {
                assert!(state.ship.is_dead());
                assert_eq!(
                    events,
                    vec![GameEvent::GameOver {
                        score: 3 * 80,
                        level: 0
                    }]
                );
            }
        }

        // Dead ships ignore input
        tick(&mut state, &fire(), &tuning);
        assert!(state.ship.lasers.is_empty());
    }

    #[test]
    fn test_respawn_clears_lasers() {
        let (mut state, tuning) = session();
        state.ship.angle = 0.0;
        tick(&mut state, &fire(), &tuning);
        assert_eq!(state.ship.lasers.len(), 1);

        state.ship.blink_cycles = 0;
        state.asteroids.push(rock(state.ship.pos, AsteroidSize::Small, &tuning));
        tick(&mut state, &TickInput::default(), &tuning);
        assert!(state.ship.is_exploding());
        for _ in 0..tuning.ship_explode_ticks() {
            tick(&mut state, &TickInput::default(), &tuning);
        }
        assert!(state.ship.is_piloting());
        assert!(state.ship.lasers.is_empty());
    }

    #[test]
    fn test_level_completion() {
        let tuning = Tuning::default();
        let mut state = GameSession::new(77, &tuning);
        state.asteroids = spawn_belt(
            tuning.belt_size(0),
            state.ship.pos,
            tuning.spawn_clearance(),
            0,
            &tuning,
            &mut state.rng,
        );
        assert_eq!(state.asteroids.len(), 10);

        // Every rock destroyed without splitting
        state.asteroids.clear();
        let events = tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(events, vec![GameEvent::LevelCleared { level: 1 }]);
        assert_eq!(state.level, 1);
        assert_eq!(state.asteroids.len(), tuning.belt_size(1));
        assert_eq!(state.asteroids.len(), 12);
        for a in &state.asteroids {
            assert!(crate::distance(a.pos, state.ship.pos) >= tuning.spawn_clearance() - 1.0);
        }

        let events = tick(&mut state, &TickInput::default(), &tuning);
        assert!(events.is_empty());
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed produce identical results
        let tuning = Tuning::default();
        let mut s1 = GameSession::new(99999, &tuning);
        let mut s2 = GameSession::new(99999, &tuning);

        let inputs = [
            TickInput {
                rotation: Rotation::Left,
                thrusting: true,
                ..Default::default()
            },
            fire(),
            release(),
            TickInput::default(),
        ];

        for _ in 0..200 {
            for input in &inputs {
                tick(&mut s1, input, &tuning);
                tick(&mut s2, input, &tuning);
            }
        }

        assert_eq!(s1.time_ticks, s2.time_ticks);
        assert_eq!(s1.score, s2.score);
        assert_eq!(s1.level, s2.level);
        assert_eq!(s1.ship.pos, s2.ship.pos);
        assert_eq!(s1.asteroids.len(), s2.asteroids.len());
        for (a, b) in s1.asteroids.iter().zip(&s2.asteroids) {
            assert_eq!(a.pos, b.pos);
        }
    }
}
