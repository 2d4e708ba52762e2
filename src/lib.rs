//! Navigation core for a digital yearbook rendered as an interactive book.
//!
//! The crate turns a static yearbook record into a [`Story`] and drives two independent
//! navigation state machines over it:
//!
//! 1. **Desktop**: a two-up 3D book. [`map_sheet`] places pages on physical sheets and
//!    [`FlipController`] tracks which sheets are turned and how they stack around the spine.
//! 2. **Mobile**: a single page with a page-curl. [`TurnController`] combines buttons, arrow keys
//!    and swipe gestures, gates input behind an intro sequence and runs each turn through a
//!    commit step (content swaps) and a settle step (animation ends).
//!
//! [`ViewHolder`] picks between the two by viewport width and owns the landing/book switch.
//!
//! Constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No clocks**: controllers take `now` from the host, so every sequence is reproducible.
//! - **Never fails on navigation**: out-of-range moves are no-ops or typed rejections; sound and
//!   image preloading failures are logged and dropped.
#![forbid(unsafe_code)]

pub mod animation;
pub mod book;
pub mod config;
pub mod content;
pub mod foundation;
pub mod view;

pub use animation::ease::Ease;
pub use book::desktop::{FlipController, SheetVisual};
pub use book::gesture::{DragState, SwipeDecision, SwipeRelease, recognize};
pub use book::intro::{IntroPhase, IntroSequence};
pub use book::mobile::{
    CurlVisual, Key, KeyOutcome, TurnController, TurnEvent, TurnRejection, TurnSession, TurnStart,
};
pub use book::sheet::{CoverVariant, PageSide, Sheet, SheetFace, map_sheet, total_sheets};
pub use book::sound::{Silent, SoundCue, SoundPlayer, play_best_effort};
pub use config::{
    DesktopConfig, GestureConfig, ImageConfig, IntroTimings, TurnTimings, ViewerConfig,
    ViewportConfig,
};
pub use content::images::{ImageResolver, ImageSource};
pub use content::model::{PROFILE_HEADER, Page, PageKind, PageLayout, Story};
pub use content::preload::{PreloadReport, PreloadedImage, local_path, preload_images};
pub use content::source::{
    ChapterRecord, PROFILE_CHAPTER_TITLE, SourceMetadata, StudentRecord, YearbookMetadata,
    YearbookSource, load_story,
};
pub use foundation::core::{Direction, Millis, ViewportSize};
pub use foundation::error::{YearbookError, YearbookResult};
pub use view::{AppView, BookController, ViewHolder, ViewportMode};
