use super::*;

#[test]
fn phases_follow_their_deadlines() {
    let timings = IntroTimings {
        opening_after_ms: 50,
        open_after_ms: 1200,
    };
    let mut intro = IntroSequence::start(Millis(1000), &timings);
    assert_eq!(intro.phase(), IntroPhase::Loading);

    assert!(intro.advance(Millis(1049)).is_empty());
    assert_eq!(intro.advance(Millis(1050)), vec![IntroPhase::Opening]);
    assert!(!intro.is_open());
    assert!(intro.advance(Millis(2249)).is_empty());
    assert_eq!(intro.advance(Millis(2250)), vec![IntroPhase::Open]);
    assert!(intro.is_open());
    assert!(intro.advance(Millis(9999)).is_empty());
}

#[test]
fn late_advance_fires_both_phases_in_order() {
    let mut intro = IntroSequence::start(Millis(0), &IntroTimings::default());
    assert_eq!(
        intro.advance(Millis(10_000)),
        vec![IntroPhase::Opening, IntroPhase::Open]
    );
}
