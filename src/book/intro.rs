use crate::{config::IntroTimings, foundation::core::Millis};

/// Intro animation phase; the book only reacts to input once `Open`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntroPhase {
    #[default]
    Loading,
    Opening,
    Open,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntroSequence {
    phase: IntroPhase,
    opening_at: Millis,
    open_at: Millis,
}

impl IntroSequence {
    pub fn start(now: Millis, timings: &IntroTimings) -> Self {
        let opening_at = now.after(timings.opening_after_ms);
        Self {
            phase: IntroPhase::Loading,
            opening_at,
            open_at: opening_at.after(timings.open_after_ms),
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == IntroPhase::Open
    }

    /// Fire every phase change due by `now`, in order.
    pub fn advance(&mut self, now: Millis) -> Vec<IntroPhase> {
        let mut fired = Vec::new();
        if self.phase == IntroPhase::Loading && now >= self.opening_at {
            self.phase = IntroPhase::Opening;
            fired.push(IntroPhase::Opening);
        }
        if self.phase == IntroPhase::Opening && now >= self.open_at {
            self.phase = IntroPhase::Open;
            fired.push(IntroPhase::Open);
        }
        fired
    }
}

#[cfg(test)]
#[path = "../../tests/unit/book/intro.rs"]
mod tests;
