//! Game state controller
//!
//! Owns the [`GameSession`] and drives it one tick at a time. Layered over
//! the simulation's ship life-cycle it tracks:
//! - Spawning -> LevelActive on belt creation
//! - LevelActive <-> ShipExploding on ship hit / respawn
//! - GameOver when lives run out, held for a few seconds, then a full reset
//!
//! Input arrives through [`Controls`] and only latches intents; nothing
//! changes until the next [`Game::step`].

use serde::{Deserialize, Serialize};

use crate::highscores::HighScores;
use crate::persistence::{KeyValueStore, MemoryStore};
use crate::sim::spawner::spawn_belt;
use crate::sim::state::GameSession;
use crate::sim::tick::{GameEvent, Rotation, TickInput, tick};
use crate::snapshot::Snapshot;
use crate::tuning::Tuning;

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a belt
    Spawning,
    /// Ship piloting (possibly invincible)
    LevelActive,
    /// Ship blown up, respawn or game over pending
    ShipExploding,
    /// Out of lives, showing "Game Over" before the reset
    GameOver,
}

/// Transient status line with fade-out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusText {
    pub text: String,
    /// 1.0 = fully opaque
    pub alpha: f32,
}

impl StatusText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alpha: 1.0,
        }
    }
}

/// Player intents delivered by an input adapter
pub trait Controls {
    /// Held turn direction (`Rotation::None` to stop)
    fn apply_rotation(&mut self, rotation: Rotation);
    fn set_thrusting(&mut self, thrusting: bool);
    /// Fire key pressed
    fn request_fire(&mut self);
    /// Fire key released; allows the next press to shoot
    fn release_fire_gate(&mut self);
}

/// Derive the seed of the next run
fn next_seed(seed: u64) -> u64 {
    seed.wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(1_442_695_040_888_963_407)
}

/// Game controller
pub struct Game<S: KeyValueStore = MemoryStore> {
    tuning: Tuning,
    session: GameSession,
    phase: GamePhase,
    /// Intents for the next tick
    input: TickInput,
    status: Option<StatusText>,
    /// Ticks left in the game-over hold
    game_over_ticks: u32,
    high_scores: HighScores<S>,
}

impl<S: KeyValueStore> Game<S> {
    /// New game; the high score is read from `store` once, here
    pub fn new(seed: u64, tuning: Tuning, store: S) -> Self {
        let high_scores = HighScores::load(store);
        log::info!("New game (seed {}, high score {})", seed, high_scores.best());
        Self {
            session: GameSession::new(seed, &tuning),
            tuning,
            phase: GamePhase::Spawning,
            input: TickInput::default(),
            status: None,
            game_over_ticks: 0,
            high_scores,
        }
    }

    /// Advance one fixed tick. Returns the simulation events of this tick.
    pub fn step(&mut self) -> Vec<GameEvent> {
        if self.phase == GamePhase::GameOver {
            self.game_over_ticks = self.game_over_ticks.saturating_sub(1);
            if self.game_over_ticks == 0 {
                self.reset();
            }
        }

        if self.phase == GamePhase::Spawning {
            self.enter_level();
        }

        let events = tick(&mut self.session, &self.input, &self.tuning);
        self.input.clear_one_shots();

        for event in &events {
            self.handle_event(event);
        }

        if self.high_scores.qualifies(self.session.score) {
            self.high_scores.submit(self.session.score, self.session.level);
        }

        self.fade_status();
        events
    }

    /// Spawn the belt for the current level around the ship
    fn enter_level(&mut self) {
        let session = &mut self.session;
        session.asteroids = spawn_belt(
            self.tuning.belt_size(session.level),
            session.ship.pos,
            self.tuning.spawn_clearance(),
            session.level,
            &self.tuning,
            &mut session.rng,
        );
        log::info!(
            "Level {} started with {} asteroids",
            session.level + 1,
            session.asteroids.len()
        );
        self.status = Some(StatusText::new(format!("Level {}", session.level + 1)));
        self.phase = GamePhase::LevelActive;
    }

    fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ShipExploded { .. } => {
                self.phase = GamePhase::ShipExploding;
            }
            GameEvent::ShipRespawned { .. } => {
                self.phase = GamePhase::LevelActive;
            }
            GameEvent::GameOver { score, level } => {
                self.phase = GamePhase::GameOver;
                self.game_over_ticks = self.tuning.game_over_ticks();
                self.input = TickInput::default();
                self.status = Some(StatusText::new("Game Over"));
                if self.high_scores.submit(*score, *level) {
                    log::info!("New high score: {}", score);
                }
            }
            GameEvent::LevelCleared { level } if self.phase != GamePhase::GameOver => {
                self.status = Some(StatusText::new(format!("Level {}", level + 1)));
            }
            GameEvent::LevelCleared { .. }
            | GameEvent::LaserFired
            | GameEvent::AsteroidDestroyed { .. } => {}
        }
    }

    fn fade_status(&mut self) {
        if let Some(status) = &mut self.status {
            status.alpha -= self.tuning.text_fade_per_tick();
            if status.alpha <= 0.0 {
                self.status = None;
            }
        }
    }

    /// Fresh session after game over. The high score carries over.
    fn reset(&mut self) {
        let seed = next_seed(self.session.seed);
        log::info!("Resetting session (seed {})", seed);
        self.session = GameSession::new(seed, &self.tuning);
        self.input = TickInput::default();
        self.status = None;
        self.phase = GamePhase::Spawning;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(
            &self.session,
            &self.tuning,
            self.phase,
            self.status.as_ref(),
            self.high_scores.best(),
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn status(&self) -> Option<&StatusText> {
        self.status.as_ref()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn high_score(&self) -> u64 {
        self.high_scores.best()
    }

    pub fn high_scores(&self) -> &HighScores<S> {
        &self.high_scores
    }
}

impl<S: KeyValueStore> Controls for Game<S> {
    fn apply_rotation(&mut self, rotation: Rotation) {
        if self.phase != GamePhase::GameOver {
            self.input.rotation = rotation;
        }
    }

    fn set_thrusting(&mut self, thrusting: bool) {
        if self.phase != GamePhase::GameOver {
            self.input.thrusting = thrusting;
        }
    }

    fn request_fire(&mut self) {
        if self.phase != GamePhase::GameOver {
            self.input.press_fire();
        }
    }

    fn release_fire_gate(&mut self) {
        if self.phase != GamePhase::GameOver {
            self.input.release_fire();
        }
    }
}
