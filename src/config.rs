//! Viewer tuning: timings, gesture thresholds, breakpoints and image base paths.
//!
//! Every section has defaults matching the shipped yearbook, so an empty JSON object is a
//! valid configuration.

use std::path::Path;

use anyhow::Context as _;

use crate::{
    animation::ease::Ease,
    foundation::error::{YearbookError, YearbookResult},
};

/// Complete viewer configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Viewport breakpoint between the mobile and desktop books.
    pub viewport: ViewportConfig,
    /// Desktop sheet rendering depth.
    pub desktop: DesktopConfig,
    /// Mobile turn animation windows.
    pub turn: TurnTimings,
    /// Mobile intro gating windows.
    pub intro: IntroTimings,
    /// Swipe recognition thresholds.
    pub gesture: GestureConfig,
    /// Image path resolution.
    pub images: ImageConfig,
}

/// Viewport breakpoint policy.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Widths strictly below this use the mobile book.
    pub mobile_breakpoint_px: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 768,
        }
    }
}

/// Desktop book geometry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Per-sheet depth step used for the stacked z offset.
    pub sheet_thickness_px: f64,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            sheet_thickness_px: 4.0,
        }
    }
}

/// Mobile turn windows, both measured from the moment the turn is accepted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TurnTimings {
    /// When the current page index switches to the incoming page.
    pub commit_after_ms: u64,
    /// When the turn session ends and the controller is idle again.
    pub settle_after_ms: u64,
    /// Curve applied to the curl rotation while turning.
    pub ease: Ease,
}

impl Default for TurnTimings {
    fn default() -> Self {
        Self {
            commit_after_ms: 300,
            settle_after_ms: 700,
            ease: Ease::InOutCubic,
        }
    }
}

/// Intro sequence windows.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct IntroTimings {
    /// Loading → opening.
    pub opening_after_ms: u64,
    /// Opening → open, measured from the start of opening.
    pub open_after_ms: u64,
}

impl Default for IntroTimings {
    fn default() -> Self {
        Self {
            opening_after_ms: 50,
            open_after_ms: 1200,
        }
    }
}

/// Threshold-or-velocity swipe recognition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Horizontal displacement that maps to a drag progress of ±1.
    pub max_drag_px: f64,
    /// Displacement strictly above this commits a turn.
    pub min_swipe_px: f64,
    /// Release velocity strictly above this commits a turn.
    pub min_velocity_px_per_ms: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            max_drag_px: 300.0,
            min_swipe_px: 50.0,
            min_velocity_px_per_ms: 0.5,
        }
    }
}

/// Image source resolution.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Deployment base path prefixed to relative image paths (`/` in development).
    pub base_url: String,
    /// Size requested from the keyword placeholder service.
    pub placeholder_width: u32,
    pub placeholder_height: u32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_owned(),
            placeholder_width: 600,
            placeholder_height: 800,
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a configuration from JSON text.
    pub fn from_json_str(s: &str) -> YearbookResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: &Path) -> YearbookResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read viewer config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> YearbookResult<()> {
        if self.viewport.mobile_breakpoint_px == 0 {
            return Err(YearbookError::config("viewport.mobile_breakpoint_px must be > 0"));
        }
        if !(self.desktop.sheet_thickness_px.is_finite() && self.desktop.sheet_thickness_px >= 0.0)
        {
            return Err(YearbookError::config(
                "desktop.sheet_thickness_px must be finite and >= 0",
            ));
        }
        if self.turn.commit_after_ms == 0 {
            return Err(YearbookError::config("turn.commit_after_ms must be > 0"));
        }
        if self.turn.settle_after_ms <= self.turn.commit_after_ms {
            return Err(YearbookError::config(
                "turn.settle_after_ms must be greater than turn.commit_after_ms",
            ));
        }
        for (name, v) in [
            ("gesture.max_drag_px", self.gesture.max_drag_px),
            ("gesture.min_swipe_px", self.gesture.min_swipe_px),
            (
                "gesture.min_velocity_px_per_ms",
                self.gesture.min_velocity_px_per_ms,
            ),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(YearbookError::config(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if self.images.base_url.is_empty() {
            return Err(YearbookError::config("images.base_url must be non-empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
