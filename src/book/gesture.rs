//! Horizontal swipe tracking for the mobile book.
//!
//! A release commits when the drag travelled far enough OR moved fast enough, so both slow long
//! drags and short flicks turn the page. Leftward travel means "forward".

use crate::{
    config::GestureConfig,
    foundation::core::{Direction, Millis},
};

/// In-progress touch drag.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DragState {
    pub start_x: f64,
    pub current_x: f64,
    pub started_at: Millis,
}

impl DragState {
    pub fn new(x: f64, now: Millis) -> Self {
        Self {
            start_x: x,
            current_x: x,
            started_at: now,
        }
    }

    /// Signed displacement; negative is a forward swipe.
    pub fn displacement(&self) -> f64 {
        self.current_x - self.start_x
    }

    /// Displacement normalized into `[-1, 1]`.
    pub fn progress(&self, cfg: &GestureConfig) -> f64 {
        (self.displacement() / cfg.max_drag_px).clamp(-1.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "decision", content = "direction", rename_all = "snake_case")]
pub enum SwipeDecision {
    Turn(Direction),
    SnapBack,
}

/// Measured release of a drag.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SwipeRelease {
    pub distance_px: f64,
    pub velocity_px_per_ms: f64,
    pub decision: SwipeDecision,
}

/// Decide what a release at `now` means. Page availability is the caller's concern.
pub fn recognize(drag: &DragState, now: Millis, cfg: &GestureConfig) -> SwipeRelease {
    let dx = drag.displacement();
    let distance_px = dx.abs();
    let elapsed_ms = now.since(drag.started_at).max(1);
    let velocity_px_per_ms = distance_px / elapsed_ms as f64;

    let committed =
        distance_px > cfg.min_swipe_px || velocity_px_per_ms > cfg.min_velocity_px_per_ms;
    let decision = if !committed || dx == 0.0 {
        SwipeDecision::SnapBack
    } else if dx < 0.0 {
        SwipeDecision::Turn(Direction::Next)
    } else {
        SwipeDecision::Turn(Direction::Prev)
    };

    SwipeRelease {
        distance_px,
        velocity_px_per_ms,
        decision,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/book/gesture.rs"]
mod tests;
