//! Data-driven game balance
//!
//! Every constant is stored per second (or per unit) and converted to
//! per-tick deltas by dividing by the fixed tick rate. The simulation never
//! integrates a measured frame time.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::{ASTEROIDS_PER_LEVEL, LASER_SIZE_FRACTION, TICK_RATE};

/// Errors from loading or validating a tuning document
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    /// File could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not valid tuning JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Document parsed but a value is out of range
    #[error("Invalid tuning: {0}")]
    Invalid(String),
}

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Simulation ticks per second
    pub tick_rate: u32,
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Ship ===
    /// Ship size in pixels (radius is half)
    pub ship_size: f32,
    /// Turn speed in degrees per second
    pub turn_speed_deg: f32,
    /// Thrust acceleration (pixels per second, applied each tick)
    pub ship_thrust: f32,
    /// Friction coefficient (0 = frictionless space)
    pub friction: f32,
    /// Explosion duration in seconds
    pub ship_explode_duration: f32,
    /// Post-respawn invincibility in seconds
    pub ship_invincibility_duration: f32,
    /// Blink period while invincible, in seconds
    pub ship_blink_duration: f32,
    pub starting_lives: u8,

    // === Lasers ===
    pub laser_max: usize,
    /// Pixels per second
    pub laser_speed: f32,
    /// Max travel as a fraction of playfield width
    pub laser_distance: f32,
    /// Seconds a laser lingers after a hit
    pub laser_explode_duration: f32,

    // === Asteroids ===
    /// Large asteroids in the level-0 belt
    pub asteroid_count: u32,
    /// Diameter of a large asteroid in pixels
    pub asteroid_size: f32,
    /// Max speed per axis in pixels per second at level 0
    pub asteroid_speed: f32,
    /// Average polygon vertex count
    pub asteroid_vertices: u32,
    /// Vertex offset spread (0 = round)
    pub asteroid_jaggedness: f32,

    // === Presentation ===
    /// Status text fade time, also the game-over hold time (seconds)
    pub text_fade_duration: f32,
    /// Explosion particle pool size
    pub particle_count: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            playfield_width: 800.0,
            playfield_height: 600.0,

            ship_size: 30.0,
            turn_speed_deg: 360.0,
            ship_thrust: 5.0,
            friction: 0.5,
            ship_explode_duration: 0.3,
            ship_invincibility_duration: 2.0,
            ship_blink_duration: 0.1,
            starting_lives: 3,

            laser_max: 10,
            laser_speed: 500.0,
            laser_distance: 0.6,
            laser_explode_duration: 0.1,

            asteroid_count: 10,
            asteroid_size: 100.0,
            asteroid_speed: 50.0,
            asteroid_vertices: 10,
            asteroid_jaggedness: 0.3,

            text_fade_duration: 2.5,
            particle_count: 30,
        }
    }
}

/// Whole ticks covering `seconds` at `rate` (never below one)
fn ticks_for(seconds: f32, rate: u32) -> u32 {
    ((seconds * rate as f32).ceil() as u32).max(1)
}

impl Tuning {
    /// Parse a JSON tuning document; omitted fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read and parse a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read a tuning file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Using default tuning ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |msg: &str| Err(TuningError::Invalid(msg.to_string()));

        if self.tick_rate == 0 {
            return invalid("tick_rate must be positive");
        }
        if self.playfield_width <= 0.0 || self.playfield_height <= 0.0 {
            return invalid("playfield dimensions must be positive");
        }
        if self.ship_size <= 0.0 || self.asteroid_size <= 0.0 {
            return invalid("ship_size and asteroid_size must be positive");
        }
        if self.laser_max == 0 {
            return invalid("laser_max must be at least 1");
        }
        if self.starting_lives == 0 {
            return invalid("starting_lives must be at least 1");
        }
        if !(0.0..1.0).contains(&self.asteroid_jaggedness) {
            return invalid("asteroid_jaggedness must be in [0, 1)");
        }
        if self.asteroid_vertices < 2 {
            return invalid("asteroid_vertices must be at least 2");
        }
        if self.ship_blink_duration <= 0.0 {
            return invalid("ship_blink_duration must be positive");
        }
        // Belt placement must be able to find a spot outside the clearance ring
        let clearance = self.spawn_clearance();
        let half_diagonal = self.centre().length();
        if clearance >= half_diagonal {
            return invalid("spawn clearance does not fit inside the playfield");
        }
        Ok(())
    }

    /// Fixed tick interval in seconds
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    pub fn ship_radius(&self) -> f32 {
        self.ship_size / 2.0
    }

    pub fn laser_radius(&self) -> f32 {
        self.ship_size * LASER_SIZE_FRACTION
    }

    /// Radius of a large asteroid
    pub fn large_asteroid_radius(&self) -> f32 {
        self.asteroid_size / 2.0
    }

    /// Minimum distance between a new belt asteroid and the ship spawn point
    pub fn spawn_clearance(&self) -> f32 {
        self.asteroid_size * 2.0 + self.ship_radius()
    }

    /// Centre of the playfield (ship spawn point)
    pub fn centre(&self) -> glam::Vec2 {
        glam::Vec2::new(self.playfield_width / 2.0, self.playfield_height / 2.0)
    }

    /// Large asteroids in the belt for `level`
    pub fn belt_size(&self, level: u32) -> usize {
        (self.asteroid_count + ASTEROIDS_PER_LEVEL * level) as usize
    }

    /// Heading change per tick while a turn key is held (radians)
    pub fn turn_per_tick(&self) -> f32 {
        self.turn_speed_deg.to_radians() / self.tick_rate as f32
    }

    /// Velocity gain per tick while thrusting
    pub fn thrust_per_tick(&self) -> f32 {
        self.ship_thrust / self.tick_rate as f32
    }

    /// Fraction of velocity shed per tick while coasting
    pub fn friction_per_tick(&self) -> f32 {
        self.friction / self.tick_rate as f32
    }

    pub fn laser_speed_per_tick(&self) -> f32 {
        self.laser_speed / self.tick_rate as f32
    }

    /// Max laser travel in pixels
    pub fn laser_max_distance(&self) -> f32 {
        self.laser_distance * self.playfield_width
    }

    /// Max asteroid speed per axis per tick at level 0
    pub fn asteroid_speed_per_tick(&self) -> f32 {
        self.asteroid_speed / self.tick_rate as f32
    }

    pub fn ship_explode_ticks(&self) -> u32 {
        ticks_for(self.ship_explode_duration, self.tick_rate)
    }

    pub fn laser_explode_ticks(&self) -> u32 {
        ticks_for(self.laser_explode_duration, self.tick_rate)
    }

    /// Ticks per blink half-cycle
    pub fn blink_ticks(&self) -> u32 {
        ticks_for(self.ship_blink_duration, self.tick_rate)
    }

    /// Blink half-cycles that make up the invincibility window
    pub fn blink_cycles(&self) -> u32 {
        (self.ship_invincibility_duration / self.ship_blink_duration).ceil() as u32
    }

    /// How long the game-over screen holds before a new session starts
    pub fn game_over_ticks(&self) -> u32 {
        ticks_for(self.text_fade_duration, self.tick_rate)
    }

    /// Status text alpha lost per tick
    pub fn text_fade_per_tick(&self) -> f32 {
        1.0 / (self.text_fade_duration * self.tick_rate as f32).max(1.0)
    }
}
