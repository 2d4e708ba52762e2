use crate::foundation::error::YearbookResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    PageTurn,
}

/// Host audio output. Playback may be refused (autoplay policies, missing device).
pub trait SoundPlayer {
    fn play(&mut self, cue: SoundCue) -> YearbookResult<()>;
}

/// Player that never makes a sound.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl SoundPlayer for Silent {
    fn play(&mut self, _cue: SoundCue) -> YearbookResult<()> {
        Ok(())
    }
}

/// Play `cue`, logging and discarding any failure. Navigation never waits on audio.
pub fn play_best_effort(player: &mut dyn SoundPlayer, cue: SoundCue) {
    if let Err(err) = player.play(cue) {
        tracing::debug!(?cue, %err, "sound playback failed");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/book/sound.rs"]
mod tests;
