//! TerminalBell: audio feedback through the terminal bell.
//!
//! One ring for a merge, two for a win, three for a loss.

use std::io::{self, Write};

use crate::core::{AudioSink, SilentAudio};
use crate::types::GameStatus;

const BEL: &[u8] = b"\x07";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalBell;

impl TerminalBell {
    pub fn new() -> Self {
        Self
    }

    /// Ring count for a terminal status
    pub fn rings_for(status: GameStatus) -> usize {
        match status {
            GameStatus::Playing => 0,
            GameStatus::Won => 2,
            GameStatus::Lost => 3,
        }
    }

    fn ring(&self, times: usize) {
        if let Err(err) = ring_into(&mut io::stdout(), times) {
            tracing::trace!(error = %err, times, "bell write failed");
        }
    }
}

impl AudioSink for TerminalBell {
    fn merge_occurred(&mut self) {
        self.ring(1);
    }

    fn game_ended(&mut self, status: GameStatus) {
        self.ring(Self::rings_for(status));
    }
}

/// Write `times` BEL characters and flush
pub fn ring_into<W: Write>(out: &mut W, times: usize) -> io::Result<()> {
    if times == 0 {
        return Ok(());
    }
    out.write_all(&BEL.repeat(times))?;
    out.flush()
}

/// The bell when audio is enabled, otherwise a sink that plays nothing
pub fn audio_sink(enabled: bool) -> Box<dyn AudioSink> {
    if enabled {
        Box::new(TerminalBell::new())
    } else {
        Box::new(SilentAudio)
    }
}
