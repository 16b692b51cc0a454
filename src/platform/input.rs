//! Keyboard to control intents

use crate::game::Controls;
use crate::sim::tick::Rotation;

/// Game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Thrust,
    Fire,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code`
    pub fn from_code(code: &str) -> Option<Key> {
        match code {
            "ArrowLeft" | "KeyA" => Some(Key::Left),
            "ArrowRight" | "KeyD" => Some(Key::Right),
            "ArrowUp" | "KeyW" => Some(Key::Thrust),
            "Space" => Some(Key::Fire),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

/// Held-key tracker. Turns raw key events into [`Controls`] calls.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    thrust: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn direction from held keys; both or neither cancel out
    pub fn rotation(&self) -> Rotation {
        match (self.left, self.right) {
            (true, false) => Rotation::Left,
            (false, true) => Rotation::Right,
            _ => Rotation::None,
        }
    }

    pub fn handle<C: Controls + ?Sized>(&mut self, event: KeyEvent, controls: &mut C) {
        match event {
            KeyEvent::Pressed(Key::Left) => {
                self.left = true;
                controls.apply_rotation(self.rotation());
            }
            KeyEvent::Released(Key::Left) => {
                self.left = false;
                controls.apply_rotation(self.rotation());
            }
            KeyEvent::Pressed(Key::Right) => {
                self.right = true;
                controls.apply_rotation(self.rotation());
            }
            KeyEvent::Released(Key::Right) => {
                self.right = false;
                controls.apply_rotation(self.rotation());
            }
            KeyEvent::Pressed(Key::Thrust) => {
                self.thrust = true;
                controls.set_thrusting(true);
            }
            KeyEvent::Released(Key::Thrust) => {
                self.thrust = false;
                controls.set_thrusting(false);
            }
            // Auto-repeat presses are forwarded too; the fire gate drops them
            KeyEvent::Pressed(Key::Fire) => controls.request_fire(),
            KeyEvent::Released(Key::Fire) => controls.release_fire_gate(),
        }
    }

    pub fn is_thrusting(&self) -> bool {
        self.thrust
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        rotation: Rotation,
        thrusting: bool,
        fires: u32,
        releases: u32,
    }

    impl Controls for Recorder {
        fn apply_rotation(&mut self, rotation: Rotation) {
            self.rotation = rotation;
        }
        fn set_thrusting(&mut self, thrusting: bool) {
            self.thrusting = thrusting;
        }
        fn request_fire(&mut self) {
            self.fires += 1;
        }
        fn release_fire_gate(&mut self) {
            self.releases += 1;
        }
    }

    #[test]
    fn test_key_codes() {
        assert_eq!(Key::from_code("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_code("ArrowUp"), Some(Key::Thrust));
        assert_eq!(Key::from_code("Space"), Some(Key::Fire));
        assert_eq!(Key::from_code("Escape"), None);
    }

    #[test]
    fn test_opposing_turns_cancel() {
        let mut input = InputState::new();
        let mut rec = Recorder::default();

        input.handle(KeyEvent::Pressed(Key::Left), &mut rec);
        assert_eq!(rec.rotation, Rotation::Left);
        input.handle(KeyEvent::Pressed(Key::Right), &mut rec);
        assert_eq!(rec.rotation, Rotation::None);
        input.handle(KeyEvent::Released(Key::Left), &mut rec);
        assert_eq!(rec.rotation, Rotation::Right);
        input.handle(KeyEvent::Released(Key::Right), &mut rec);
        assert_eq!(rec.rotation, Rotation::None);
    }

    #[test]
    fn test_thrust_and_fire() {
        let mut input = InputState::new();
        let mut rec = Recorder::default();

        input.handle(KeyEvent::Pressed(Key::Thrust), &mut rec);
        assert!(rec.thrusting);
        assert!(input.is_thrusting());
        input.handle(KeyEvent::Released(Key::Thrust), &mut rec);
        assert!(!rec.thrusting);

        input.handle(KeyEvent::Pressed(Key::Fire), &mut rec);
        input.handle(KeyEvent::Pressed(Key::Fire), &mut rec);
        input.handle(KeyEvent::Released(Key::Fire), &mut rec);
        assert_eq!(rec.fires, 2);
        assert_eq!(rec.releases, 1);
    }

    #[test]
    fn test_drives_game() {
        use crate::persistence::MemoryStore;
        use crate::{Game, Tuning};

        let mut game = Game::new(11, Tuning::default(), MemoryStore::new());
        game.step();
        let mut input = InputState::new();

        // Held fire with auto-repeat shoots once
        input.handle(KeyEvent::Pressed(Key::Fire), &mut game);
        game.step();
        input.handle(KeyEvent::Pressed(Key::Fire), &mut game);
        game.step();
        assert_eq!(game.session().ship.lasers.len(), 1);

        input.handle(KeyEvent::Released(Key::Fire), &mut game);
        game.step();
        input.handle(KeyEvent::Pressed(Key::Fire), &mut game);
        game.step();
        assert_eq!(game.session().ship.lasers.len(), 2);
    }
}
