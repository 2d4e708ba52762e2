/// Monotonic host timestamp in milliseconds.
///
/// Controllers never read a clock; the host passes `now` into every call.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    pub fn after(self, delay_ms: u64) -> Millis {
        Millis(self.0.saturating_add(delay_ms))
    }
}

/// Navigation direction through the book.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    /// Target index one step away from `current`, or `None` when it leaves `[0, len)`.
    pub fn step(self, current: usize, len: usize) -> Option<usize> {
        match self {
            Self::Next => current.checked_add(1).filter(|&t| t < len),
            Self::Prev => current.checked_sub(1),
        }
    }

    pub fn sign(self) -> f64 {
        match self {
            Self::Next => -1.0,
            Self::Prev => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
