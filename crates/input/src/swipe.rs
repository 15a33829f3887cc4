//! Swipe detection from pointer drags.
//!
//! A swipe starts when the primary button goes down and ends when it is
//! released. The axis with the larger absolute displacement decides the
//! direction; horizontal wins only when strictly larger. The displacement
//! along that axis must exceed the threshold, otherwise the gesture is
//! discarded.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Direction, GameAction, SWIPE_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeTracker {
    start: Option<(i32, i32)>,
    threshold: i32,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_threshold(SWIPE_THRESHOLD)
    }

    pub fn with_threshold(threshold: i32) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    /// Record the start point of a gesture
    pub fn begin(&mut self, x: i32, y: i32) {
        self.start = Some((x, y));
    }

    /// Finish the gesture at `(x, y)`.
    ///
    /// Returns `None` when no gesture was started or the drag was too short.
    pub fn end(&mut self, x: i32, y: i32) -> Option<Direction> {
        let (sx, sy) = self.start.take()?;
        let dx = x - sx;
        let dy = y - sy;

        if dx.abs() > dy.abs() {
            if dx > self.threshold {
                Some(Direction::Right)
            } else if dx < -self.threshold {
                Some(Direction::Left)
            } else {
                None
            }
        } else if dy > self.threshold {
            Some(Direction::Down)
        } else if dy < -self.threshold {
            Some(Direction::Up)
        } else {
            None
        }
    }

    /// Feed a terminal mouse event; yields an action when a swipe completes
    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<GameAction> {
        let (x, y) = (event.column as i32, event.row as i32);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.begin(x, y);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => self.end(x, y).map(GameAction::Slide),
            _ => None,
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}
