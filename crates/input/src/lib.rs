//! Terminal input module.
//!
//! Turns raw `crossterm` events into [`crate::types::GameAction`]s: arrow
//! and letter keys through [`map`], mouse drags through [`swipe`]. Each
//! discrete key press or drag yields at most one action.

pub mod map;
pub mod swipe;

pub use forge_2048_types as types;

pub use map::{handle_key_event, should_quit};
pub use swipe::SwipeTracker;
