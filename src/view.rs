//! Top-level view switch: landing screen or an open book, desktop or mobile by viewport width.

use std::sync::Arc;

use crate::{
    book::{
        desktop::FlipController,
        gesture::SwipeRelease,
        mobile::{Key, KeyOutcome, TurnController, TurnEvent},
        sound::{Silent, SoundCue, SoundPlayer, play_best_effort},
    },
    config::ViewerConfig,
    content::model::Story,
    foundation::core::{Millis, ViewportSize},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppView {
    #[default]
    Home,
    Book,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportMode {
    Mobile,
    Desktop,
}

impl ViewportMode {
    pub fn from_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// The navigation state machine behind the open book.
#[derive(Clone, Debug, PartialEq)]
pub enum BookController {
    Desktop(FlipController),
    Mobile(TurnController),
}

impl BookController {
    pub fn mode(&self) -> ViewportMode {
        match self {
            Self::Desktop(_) => ViewportMode::Desktop,
            Self::Mobile(_) => ViewportMode::Mobile,
        }
    }
}

pub struct ViewHolder {
    config: ViewerConfig,
    viewport: ViewportSize,
    view: AppView,
    story: Option<Arc<Story>>,
    book: Option<BookController>,
    sound: Box<dyn SoundPlayer>,
}

impl ViewHolder {
    pub fn new(config: ViewerConfig, viewport: ViewportSize) -> Self {
        Self {
            config,
            viewport,
            view: AppView::Home,
            story: None,
            book: None,
            sound: Box::new(Silent),
        }
    }

    pub fn with_sound(mut self, sound: Box<dyn SoundPlayer>) -> Self {
        self.sound = sound;
        self
    }

    pub fn view(&self) -> AppView {
        self.view
    }

    pub fn mode(&self) -> ViewportMode {
        ViewportMode::from_width(
            self.viewport.width,
            self.config.viewport.mobile_breakpoint_px,
        )
    }

    pub fn story(&self) -> Option<&Arc<Story>> {
        self.story.as_ref()
    }

    pub fn book(&self) -> Option<&BookController> {
        self.book.as_ref()
    }

    fn build_controller(&self, page_count: usize, now: Millis) -> BookController {
        match self.mode() {
            ViewportMode::Desktop => {
                BookController::Desktop(FlipController::new(page_count, &self.config.desktop))
            }
            ViewportMode::Mobile => {
                BookController::Mobile(TurnController::new(page_count, &self.config, now))
            }
        }
    }

    pub fn open_book(&mut self, story: Arc<Story>, now: Millis) {
        let book = self.build_controller(story.page_count(), now);
        tracing::debug!(mode = ?book.mode(), pages = story.page_count(), "opening book");
        self.book = Some(book);
        self.story = Some(story);
        self.view = AppView::Book;
    }

    /// Back to the landing screen. The story stays cached; navigation state does not.
    pub fn close_book(&mut self) {
        if let Some(BookController::Mobile(c)) = &mut self.book {
            c.close();
        }
        self.book = None;
        self.view = AppView::Home;
    }

    /// Re-evaluate the viewport. Crossing the breakpoint with a book open rebuilds its
    /// controller. Returns whether the mode changed.
    pub fn resize(&mut self, size: ViewportSize, now: Millis) -> bool {
        let before = self.mode();
        self.viewport = size;
        let after = self.mode();
        if before == after {
            return false;
        }
        tracing::debug!(?before, ?after, width = size.width, "viewport mode changed");

        if self.book.is_some() {
            if let Some(page_count) = self.story.as_ref().map(|s| s.page_count()) {
                self.book = Some(self.build_controller(page_count, now));
            }
        }
        true
    }

    pub fn advance(&mut self, now: Millis) -> Vec<TurnEvent> {
        match &mut self.book {
            Some(BookController::Mobile(c)) => c.advance(now),
            _ => Vec::new(),
        }
    }

    fn page_turned(&mut self) {
        play_best_effort(self.sound.as_mut(), SoundCue::PageTurn);
    }

    /// Next button. Returns whether a flip or turn was accepted.
    pub fn next(&mut self, now: Millis) -> bool {
        let moved = match &mut self.book {
            Some(BookController::Desktop(c)) => c.next(),
            Some(BookController::Mobile(c)) => c.next(now).is_ok(),
            None => false,
        };
        if moved {
            self.page_turned();
        }
        moved
    }

    /// Previous button. Returns whether a flip or turn was accepted.
    pub fn previous(&mut self, now: Millis) -> bool {
        let moved = match &mut self.book {
            Some(BookController::Desktop(c)) => c.previous(),
            Some(BookController::Mobile(c)) => c.previous(now).is_ok(),
            None => false,
        };
        if moved {
            self.page_turned();
        }
        moved
    }

    /// Desktop sheet click.
    pub fn click_sheet(&mut self, index: usize) -> bool {
        let moved = match &mut self.book {
            Some(BookController::Desktop(c)) => c.click_sheet(index),
            _ => false,
        };
        if moved {
            self.page_turned();
        }
        moved
    }

    /// Keyboard input for the mobile book; `Escape` closes it.
    pub fn key(&mut self, key: Key, now: Millis) -> KeyOutcome {
        let outcome = match &mut self.book {
            Some(BookController::Mobile(c)) => c.key(key, now),
            _ => KeyOutcome::Ignored,
        };
        match outcome {
            KeyOutcome::Turn(_) => self.page_turned(),
            KeyOutcome::Close => self.close_book(),
            KeyOutcome::Ignored | KeyOutcome::Rejected { .. } => {}
        }
        outcome
    }

    pub fn drag_start(&mut self, x: f64, now: Millis) -> bool {
        match &mut self.book {
            Some(BookController::Mobile(c)) => c.drag_start(x, now),
            _ => false,
        }
    }

    pub fn drag_move(&mut self, x: f64, now: Millis) -> Option<f64> {
        match &mut self.book {
            Some(BookController::Mobile(c)) => c.drag_move(x, now),
            _ => None,
        }
    }

    pub fn drag_end(&mut self, now: Millis) -> Option<(SwipeRelease, TurnEvent)> {
        let released = match &mut self.book {
            Some(BookController::Mobile(c)) => c.drag_end(now),
            _ => None,
        };
        if let Some((_, TurnEvent::TurnStarted(_))) = released {
            self.page_turned();
        }
        released
    }
}

#[cfg(test)]
#[path = "../tests/unit/view/view.rs"]
mod tests;
