//! Terminal front end: rendering and bell audio.
//!
//! Renders into a simple framebuffer that is flushed to the terminal with
//! crossterm, diffing against the previous frame.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: pure snapshot-to-framebuffer layout (testable)
//! - [`renderer`]: raw-mode terminal output
//! - [`screen`]: [`TerminalScreen`], the core `Renderer` implementation
//! - [`bell`]: [`TerminalBell`], the core `AudioSink` implementation, and
//!   [`audio_sink`] to pick it or silence

pub mod bell;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use forge_2048_core as core;
pub use forge_2048_types as types;

pub use bell::{audio_sink, TerminalBell};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::TerminalScreen;
