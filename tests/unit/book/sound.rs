use super::*;
use crate::foundation::error::YearbookError;

struct Refusing {
    attempts: usize,
}

impl SoundPlayer for Refusing {
    fn play(&mut self, _cue: SoundCue) -> YearbookResult<()> {
        self.attempts += 1;
        Err(YearbookError::Other(anyhow::anyhow!("autoplay blocked")))
    }
}

#[test]
fn failures_are_swallowed() {
    let mut player = Refusing { attempts: 0 };
    play_best_effort(&mut player, SoundCue::PageTurn);
    play_best_effort(&mut player, SoundCue::PageTurn);
    assert_eq!(player.attempts, 2);
}

#[test]
fn silent_always_succeeds() {
    assert!(Silent.play(SoundCue::PageTurn).is_ok());
}
