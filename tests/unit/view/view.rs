use std::{cell::Cell, rc::Rc};

use super::*;
use crate::{
    content::model::Page,
    foundation::error::{YearbookError, YearbookResult},
};

struct Counting {
    plays: Rc<Cell<usize>>,
    fail: bool,
}

impl SoundPlayer for Counting {
    fn play(&mut self, _cue: SoundCue) -> YearbookResult<()> {
        self.plays.set(self.plays.get() + 1);
        if self.fail {
            return Err(YearbookError::Other(anyhow::anyhow!("autoplay blocked")));
        }
        Ok(())
    }
}

fn story(pages: usize) -> Arc<Story> {
    Arc::new(Story {
        title: "Memories".into(),
        author: "Class of 2025".into(),
        pages: (0..pages)
            .map(|i| Page::chapter(format!("p{i}"), ""))
            .collect(),
    })
}

fn holder(width: u32) -> ViewHolder {
    ViewHolder::new(ViewerConfig::default(), ViewportSize::new(width, 900))
}

#[test]
fn breakpoint_splits_mobile_and_desktop() {
    assert_eq!(ViewportMode::from_width(767, 768), ViewportMode::Mobile);
    assert_eq!(ViewportMode::from_width(768, 768), ViewportMode::Desktop);
    assert_eq!(holder(375).mode(), ViewportMode::Mobile);
    assert_eq!(holder(1440).mode(), ViewportMode::Desktop);
}

#[test]
fn opens_the_controller_for_the_viewport() {
    let mut h = holder(1024);
    assert_eq!(h.view(), AppView::Home);
    h.open_book(story(5), Millis(0));
    assert_eq!(h.view(), AppView::Book);
    assert_eq!(h.book().unwrap().mode(), ViewportMode::Desktop);

    let mut h = holder(400);
    h.open_book(story(5), Millis(0));
    assert_eq!(h.book().unwrap().mode(), ViewportMode::Mobile);
}

#[test]
fn resize_across_breakpoint_rebuilds_controller() {
    let mut h = holder(1024);
    h.open_book(story(5), Millis(0));
    assert!(h.next(Millis(10)));

    assert!(!h.resize(ViewportSize::new(900, 700), Millis(20)));
    match h.book().unwrap() {
        BookController::Desktop(c) => assert_eq!(c.current_sheet(), 1),
        other => panic!("expected desktop, got {other:?}"),
    }

    assert!(h.resize(ViewportSize::new(500, 700), Millis(30)));
    match h.book().unwrap() {
        BookController::Mobile(c) => assert_eq!(c.current_page(), 0),
        other => panic!("expected mobile, got {other:?}"),
    }
}

#[test]
fn resize_on_home_only_changes_mode() {
    let mut h = holder(1024);
    assert!(h.resize(ViewportSize::new(320, 640), Millis(0)));
    assert!(h.book().is_none());
    assert_eq!(h.mode(), ViewportMode::Mobile);
}

#[test]
fn escape_closes_the_mobile_book_but_keeps_story() {
    let mut h = holder(400);
    h.open_book(story(3), Millis(0));
    h.advance(Millis(2000));
    assert_eq!(h.key(Key::Escape, Millis(2001)), KeyOutcome::Close);
    assert_eq!(h.view(), AppView::Home);
    assert!(h.book().is_none());
    assert!(h.story().is_some());
}

#[test]
fn sound_failures_never_block_navigation() {
    let plays = Rc::new(Cell::new(0));
    let mut h = holder(400).with_sound(Box::new(Counting {
        plays: plays.clone(),
        fail: true,
    }));
    h.open_book(story(3), Millis(0));
    h.advance(Millis(2000));

    assert!(h.next(Millis(2000)));
    h.advance(Millis(3000));
    match h.book().unwrap() {
        BookController::Mobile(c) => assert_eq!(c.current_page(), 1),
        other => panic!("expected mobile, got {other:?}"),
    }
    assert_eq!(plays.get(), 1);

    assert!(h.previous(Millis(3000)));
    assert_eq!(plays.get(), 2);
    // Rejected turns stay silent.
    assert!(!h.previous(Millis(3010)));
    assert_eq!(plays.get(), 2);
}

#[test]
fn swipe_through_view_turns_and_plays() {
    let plays = Rc::new(Cell::new(0));
    let mut h = holder(400).with_sound(Box::new(Counting {
        plays: plays.clone(),
        fail: false,
    }));
    h.open_book(story(3), Millis(0));
    h.advance(Millis(2000));

    assert!(h.drag_start(300.0, Millis(2000)));
    assert_eq!(h.drag_move(200.0, Millis(2100)), Some(-100.0 / 300.0));
    let (_, event) = h.drag_end(Millis(2200)).unwrap();
    assert!(matches!(event, TurnEvent::TurnStarted(_)));
    assert_eq!(plays.get(), 1);
}

#[test]
fn desktop_clicks_and_buttons_move_one_sheet() {
    let mut h = holder(1280);
    h.open_book(story(2), Millis(0));
    assert!(h.click_sheet(0));
    assert!(h.click_sheet(1));
    assert!(h.previous(Millis(0)));
    assert!(h.next(Millis(0)));
    assert!(!h.next(Millis(0)));
    assert_eq!(h.key(Key::ArrowRight, Millis(0)), KeyOutcome::Ignored);
    assert!(h.advance(Millis(100)).is_empty());
}

#[test]
fn nothing_moves_without_a_book() {
    let mut h = holder(1280);
    assert!(!h.next(Millis(0)));
    assert!(!h.drag_start(1.0, Millis(0)));
    assert!(h.drag_end(Millis(0)).is_none());
}

#[test]
fn input_without_polling_follows_the_clock() {
    let mut h = holder(400);
    h.open_book(story(3), Millis(0));

    assert!(h.next(Millis(5000)));
    assert!(h.next(Millis(10_000)));
    h.advance(Millis(20_000));
    match h.book().unwrap() {
        BookController::Mobile(c) => assert_eq!(c.current_page(), 2),
        other => panic!("expected mobile, got {other:?}"),
    }
}

#[test]
fn empty_story_opens_an_empty_mobile_book() {
    let mut h = holder(400);
    h.open_book(story(0), Millis(0));
    assert!(!h.next(Millis(5000)));
    match h.book().unwrap() {
        BookController::Mobile(c) => assert_eq!(c.page_label(), "0 / 0"),
        other => panic!("expected mobile, got {other:?}"),
    }
}
