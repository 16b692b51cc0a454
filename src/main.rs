//! Rock Drift entry point
//!
//! Native builds run a scripted headless session: the ship spins and taps
//! fire while the simulation plays out at real tick rate with no window.
//! The browser build starts `platform::web` on the page's canvas.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rock_drift::persistence::FileStore;
    use rock_drift::platform::{FixedStep, InputState, Key, KeyEvent};
    use rock_drift::sim::{GameEvent, Rotation};
    use rock_drift::{Game, GamePhase, Tuning};

    /// Simulated display refresh
    const FRAME_TIME: f32 = 1.0 / 60.0;
    const RUN_SECONDS: f32 = 60.0;
    /// Frames between fire taps
    const FIRE_EVERY: u32 = 20;

    env_logger::init();
    log::info!("Rock Drift (native, headless) starting...");

    let tuning = match std::env::var("ROCK_DRIFT_TUNING") {
        Ok(path) => Tuning::load_or_default(path),
        Err(_) => Tuning::default(),
    };
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });

    let store = FileStore::new("rock_drift_scores.json");
    let mut timer = FixedStep::new(tuning.tick_dt());
    let mut game = Game::new(seed, tuning, store);
    let mut input = InputState::new();

    input.handle(KeyEvent::Pressed(Key::Left), &mut game);

    let frames = (RUN_SECONDS / FRAME_TIME) as u32;
    for frame in 0..frames {
        match frame % FIRE_EVERY {
            0 => input.handle(KeyEvent::Pressed(Key::Fire), &mut game),
            1 => input.handle(KeyEvent::Released(Key::Fire), &mut game),
            _ => {}
        }

        for _ in 0..timer.advance(FRAME_TIME) {
            for event in game.step() {
                match event {
                    GameEvent::LaserFired => {}
                    GameEvent::ShipExploded { pos } => {
                        log::info!("Ship destroyed at ({:.0}, {:.0})", pos.x, pos.y)
                    }
                    GameEvent::LevelCleared { level } => log::info!("Reached level {}", level + 1),
                    other => log::debug!("{:?}", other),
                }
            }
        }

        // Held keys are dropped on game over; press again for the next run
        if game.phase() == GamePhase::GameOver {
            input = InputState::new();
        } else if input.rotation() == Rotation::None {
            input.handle(KeyEvent::Pressed(Key::Left), &mut game);
        }
    }

    let snapshot = game.snapshot();
    log::info!(
        "Finished: level {}, score {}, lives {}, {} asteroids, high score {}",
        snapshot.level + 1,
        snapshot.score,
        snapshot.lives,
        snapshot.asteroids.len(),
        snapshot.high_score
    );
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), wasm_bindgen::JsValue> {
    rock_drift::platform::web::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main
}
