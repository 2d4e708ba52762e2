//! Mobile book: one page at a time, turned by buttons, arrow keys or a page-curl swipe.
//!
//! ```text
//! Loading -> Opening -> Open                     (intro, input inert until Open)
//!
//! Idle -> Dragging -> Idle                       (snap back)
//!   \        \-----> Turning -> Idle             (swipe committed)
//!    \-------------> Turning -> Idle             (button / key)
//!                    |- commit: current = incoming
//!                    `- settle: session cleared
//! ```
//!
//! Time moves with the `now` passed into [`TurnController::advance`] and every input handler.
//! Input first fires the steps already due, so state never depends on how often the host polls.

use std::str::FromStr;

use crate::{
    book::{
        gesture::{DragState, SwipeDecision, SwipeRelease, recognize},
        intro::{IntroPhase, IntroSequence},
    },
    config::{GestureConfig, TurnTimings, ViewerConfig},
    foundation::{
        core::{Direction, Millis},
        error::YearbookError,
    },
};

/// An accepted turn from `outgoing` to `incoming`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TurnStart {
    pub direction: Direction,
    pub outgoing: usize,
    pub incoming: usize,
}

/// The single in-flight turn. Its deadlines run to completion once accepted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TurnSession {
    pub direction: Direction,
    pub outgoing: usize,
    pub incoming: usize,
    pub started_at: Millis,
    pub commit_at: Millis,
    pub settle_at: Millis,
    pub committed: bool,
    /// Drag progress when the finger lifted; the curl continues from here.
    pub release_progress: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Motion {
    Idle,
    Dragging(DragState),
    Turning(TurnSession),
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TurnEvent {
    PhaseChanged { phase: IntroPhase },
    TurnStarted(TurnStart),
    PageCommitted { index: usize },
    TurnSettled { index: usize },
    SnappedBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum TurnRejection {
    #[error("book is not open yet")]
    NotOpen,
    #[error("a page turn is already in flight")]
    TurnInFlight,
    #[error("no page in that direction")]
    OutOfRange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl FromStr for Key {
    type Err = YearbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arrowleft" | "left" => Ok(Self::ArrowLeft),
            "arrowright" | "right" => Ok(Self::ArrowRight),
            "escape" | "esc" => Ok(Self::Escape),
            other => Err(YearbookError::validation(format!("unknown key '{other}'"))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum KeyOutcome {
    Ignored,
    Turn(TurnStart),
    Rejected { reason: TurnRejection },
    Close,
}

/// Page-curl rendering values for the current instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CurlVisual {
    /// Rotation of the curling page; negative curls toward the next page.
    pub rotation_deg: f64,
    /// Shadow strength under the curl in `[0, 1]`.
    pub shadow: f64,
}

impl CurlVisual {
    pub const FLAT: CurlVisual = CurlVisual {
        rotation_deg: 0.0,
        shadow: 0.0,
    };
}

#[derive(Clone, Debug, PartialEq)]
pub struct TurnController {
    page_count: usize,
    current: usize,
    intro: IntroSequence,
    motion: Motion,
    closed: bool,
    /// Steps fired while handling input, handed out by the next `advance`.
    fired: Vec<TurnEvent>,
    timings: TurnTimings,
    gesture: GestureConfig,
}

impl TurnController {
    pub fn new(page_count: usize, cfg: &ViewerConfig, now: Millis) -> Self {
        Self {
            page_count,
            current: 0,
            intro: IntroSequence::start(now, &cfg.intro),
            motion: Motion::Idle,
            closed: false,
            fired: Vec::new(),
            timings: cfg.turn.clone(),
            gesture: cfg.gesture.clone(),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn phase(&self) -> IntroPhase {
        self.intro.phase()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_turning(&self) -> bool {
        matches!(self.motion, Motion::Turning(_))
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.motion, Motion::Dragging(_))
    }

    pub fn turn(&self) -> Option<&TurnSession> {
        match &self.motion {
            Motion::Turning(session) => Some(session),
            _ => None,
        }
    }

    /// Normalized gesture displacement in `[-1, 1]`; zero when idle.
    pub fn drag_progress(&self) -> f64 {
        match &self.motion {
            Motion::Idle => 0.0,
            Motion::Dragging(drag) => drag.progress(&self.gesture),
            Motion::Turning(session) => session.release_progress,
        }
    }

    pub fn has_next(&self) -> bool {
        Direction::Next.step(self.current, self.page_count).is_some()
    }

    pub fn has_prev(&self) -> bool {
        Direction::Prev.step(self.current, self.page_count).is_some()
    }

    /// Fire every intro and turn step due by `now`, in order. Steps that input handlers already
    /// fired at an earlier `now` are returned first.
    pub fn advance(&mut self, now: Millis) -> Vec<TurnEvent> {
        self.fire_due(now);
        std::mem::take(&mut self.fired)
    }

    /// Bring the intro and any in-flight turn up to `now`. Every input handler starts here, so
    /// state follows elapsed time even when the host never polls.
    fn fire_due(&mut self, now: Millis) {
        if self.closed {
            return;
        }
        let start = self.fired.len();

        self.fired.extend(
            self.intro
                .advance(now)
                .into_iter()
                .map(|phase| TurnEvent::PhaseChanged { phase }),
        );

        if let Motion::Turning(session) = &mut self.motion {
            if !session.committed && now >= session.commit_at {
                session.committed = true;
                self.current = session.incoming;
                self.fired.push(TurnEvent::PageCommitted {
                    index: session.incoming,
                });
            }
            if session.committed && now >= session.settle_at {
                self.motion = Motion::Idle;
                self.fired.push(TurnEvent::TurnSettled {
                    index: self.current,
                });
            }
        }

        for event in &self.fired[start..] {
            tracing::trace!(?event, "mobile book step");
        }
    }

    pub fn request_turn(
        &mut self,
        direction: Direction,
        now: Millis,
    ) -> Result<TurnStart, TurnRejection> {
        self.start_turn(direction, now, 0.0)
    }

    pub fn next(&mut self, now: Millis) -> Result<TurnStart, TurnRejection> {
        self.request_turn(Direction::Next, now)
    }

    pub fn previous(&mut self, now: Millis) -> Result<TurnStart, TurnRejection> {
        self.request_turn(Direction::Prev, now)
    }

    fn start_turn(
        &mut self,
        direction: Direction,
        now: Millis,
        release_progress: f64,
    ) -> Result<TurnStart, TurnRejection> {
        self.fire_due(now);
        if self.closed || !self.intro.is_open() {
            return Err(TurnRejection::NotOpen);
        }
        if self.is_turning() {
            tracing::debug!(?direction, "turn dropped, another is in flight");
            return Err(TurnRejection::TurnInFlight);
        }
        let incoming = direction
            .step(self.current, self.page_count)
            .ok_or(TurnRejection::OutOfRange)?;

        let start = TurnStart {
            direction,
            outgoing: self.current,
            incoming,
        };
        self.motion = Motion::Turning(TurnSession {
            direction,
            outgoing: self.current,
            incoming,
            started_at: now,
            commit_at: now.after(self.timings.commit_after_ms),
            settle_at: now.after(self.timings.settle_after_ms),
            committed: false,
            release_progress,
        });
        tracing::debug!(?direction, from = start.outgoing, to = incoming, "page turn started");
        Ok(start)
    }

    fn accepts_gestures(&self) -> bool {
        !self.closed && self.intro.is_open()
    }

    /// Touch down. Ignored unless open and idle.
    pub fn drag_start(&mut self, x: f64, now: Millis) -> bool {
        self.fire_due(now);
        if !self.accepts_gestures() || !matches!(self.motion, Motion::Idle) {
            return false;
        }
        self.motion = Motion::Dragging(DragState::new(x, now));
        true
    }

    /// Touch move. Returns the new drag progress while a drag is active.
    pub fn drag_move(&mut self, x: f64, _now: Millis) -> Option<f64> {
        let Motion::Dragging(drag) = &mut self.motion else {
            return None;
        };
        drag.current_x = x;
        Some(drag.progress(&self.gesture))
    }

    /// Touch up: commit a turn when the swipe passes the distance or velocity threshold and a
    /// page exists that way, otherwise snap back.
    pub fn drag_end(&mut self, now: Millis) -> Option<(SwipeRelease, TurnEvent)> {
        let Motion::Dragging(drag) = self.motion else {
            return None;
        };
        self.motion = Motion::Idle;

        let release = recognize(&drag, now, &self.gesture);
        let progress = drag.progress(&self.gesture);
        let event = match release.decision {
            SwipeDecision::Turn(direction) => self
                .start_turn(direction, now, progress)
                .map(TurnEvent::TurnStarted)
                .unwrap_or(TurnEvent::SnappedBack),
            SwipeDecision::SnapBack => TurnEvent::SnappedBack,
        };
        tracing::trace!(
            distance = release.distance_px,
            velocity = release.velocity_px_per_ms,
            ?event,
            "swipe released"
        );
        Some((release, event))
    }

    /// Keyboard shortcuts, live only while the book is open.
    pub fn key(&mut self, key: Key, now: Millis) -> KeyOutcome {
        self.fire_due(now);
        if !self.accepts_gestures() {
            return KeyOutcome::Ignored;
        }
        let direction = match key {
            Key::Escape => return KeyOutcome::Close,
            Key::ArrowLeft => Direction::Prev,
            Key::ArrowRight => Direction::Next,
        };
        match self.request_turn(direction, now) {
            Ok(start) => KeyOutcome::Turn(start),
            Err(reason) => KeyOutcome::Rejected { reason },
        }
    }

    /// Tear down: pending commit/settle steps and any drag are discarded together.
    pub fn close(&mut self) {
        if let Motion::Turning(session) = &self.motion {
            tracing::debug!(incoming = session.incoming, "closing with a turn in flight");
        }
        self.motion = Motion::Idle;
        self.fired.clear();
        self.closed = true;
    }

    pub fn curl(&self, now: Millis) -> CurlVisual {
        match &self.motion {
            Motion::Idle => CurlVisual::FLAT,
            Motion::Dragging(drag) => {
                let p = drag.progress(&self.gesture);
                CurlVisual {
                    rotation_deg: p * 180.0,
                    shadow: p.abs(),
                }
            }
            Motion::Turning(session) => {
                let t = self.timings.ease.progress(
                    now.since(session.started_at),
                    self.timings.settle_after_ms,
                );
                let from = session.release_progress * 180.0;
                let to = session.direction.sign() * 180.0;
                CurlVisual {
                    rotation_deg: from + (to - from) * t,
                    shadow: 1.0 - (2.0 * t - 1.0).abs(),
                }
            }
        }
    }

    /// Header counter, e.g. `3 / 12`.
    pub fn page_label(&self) -> String {
        if self.page_count == 0 {
            return "0 / 0".to_owned();
        }
        format!("{} / {}", self.current + 1, self.page_count)
    }

    pub fn show_swipe_hint(&self) -> bool {
        self.page_count > 0 && self.current == 0
    }

    /// Page dots; `true` marks the current page.
    pub fn indicators(&self) -> Vec<bool> {
        (0..self.page_count).map(|i| i == self.current).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/book/mobile.rs"]
mod tests;
