//! TerminalScreen: the terminal implementation of the core `Renderer`.

use crate::core::{GameSnapshot, Renderer};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

/// Fallback when the terminal size cannot be queried
const DEFAULT_VIEWPORT: (u16, u16) = (80, 24);

pub struct TerminalScreen {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalScreen {
    pub fn new(renderer: TerminalRenderer, view: GameView) -> Self {
        Self {
            renderer,
            view,
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer {
        &mut self.renderer
    }

    /// Force a full repaint on the next frame (e.g. after a resize)
    pub fn invalidate(&mut self) {
        self.renderer.invalidate();
    }
}

impl Renderer for TerminalScreen {
    fn render(&mut self, snap: &GameSnapshot) {
        let (w, h) = crossterm::terminal::size().unwrap_or(DEFAULT_VIEWPORT);
        self.view.render_into(snap, Viewport::new(w, h), &mut self.fb);
        if let Err(err) = self.renderer.draw(&self.fb) {
            tracing::warn!(error = %err, "terminal draw failed");
        }
    }
}
