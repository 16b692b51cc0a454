//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/ticks (`time::FixedStep`)
//! - Input events (`input::InputState`)
//! - The browser front end (`web`, wasm32 only)
//!
//! Storage lives in [`crate::persistence`].

pub mod input;
pub mod time;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{InputState, Key, KeyEvent};
pub use time::FixedStep;
