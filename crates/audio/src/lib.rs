//! Sound effects output.
//!
//! The game core reports what happened as [`SoundCue`]s; this crate decides
//! what, if anything, the player hears. The terminal has no tone generator,
//! so [`TerminalBell`] rings the bell for the cues that matter and drops the
//! chatty movement cues. Every failure here is non-fatal: a broken sink is
//! logged and the game carries on.

use std::io::{self, Write};

use blockfall_types::{SoundCue, Tone};

pub use blockfall_types as types;

/// Anything that can play a sound cue.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue, tone: Tone) -> anyhow::Result<()>;
}

impl<A: AudioSink + ?Sized> AudioSink for &mut A {
    fn play(&mut self, cue: SoundCue, tone: Tone) -> anyhow::Result<()> {
        (**self).play(cue, tone)
    }
}

impl<A: AudioSink + ?Sized> AudioSink for Box<A> {
    fn play(&mut self, cue: SoundCue, tone: Tone) -> anyhow::Result<()> {
        (**self).play(cue, tone)
    }
}

/// Sink that plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl AudioSink for SilentSink {
    fn play(&mut self, _cue: SoundCue, _tone: Tone) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Rings the terminal bell (BEL, 0x07) for lock, line clear and game over.
pub struct TerminalBell<W: Write = io::Stdout> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn rings_for(cue: SoundCue) -> bool {
        matches!(cue, SoundCue::Lock | SoundCue::LineClear | SoundCue::GameOver)
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: SoundCue, _tone: Tone) -> anyhow::Result<()> {
        if !Self::rings_for(cue) {
            return Ok(());
        }
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Mute-aware front for an [`AudioSink`].
pub struct Speaker<A> {
    sink: A,
    muted: bool,
}

impl<A: AudioSink> Speaker<A> {
    pub fn new(sink: A, muted: bool) -> Self {
        Self { sink, muted }
    }

    pub fn set_muted(&mut self, muted: bool) {
        if self.muted != muted {
            log::debug!("sound {}", if muted { "muted" } else { "unmuted" });
        }
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn sink(&self) -> &A {
        &self.sink
    }

    /// Play cues in order. Does nothing while muted.
    pub fn emit(&mut self, cues: &[SoundCue]) {
        if self.muted {
            return;
        }
        for &cue in cues {
            if let Err(err) = self.sink.play(cue, cue.tone()) {
                log::debug!("sound cue {} failed: {err:#}", cue.as_str());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recording {
        played: Vec<(SoundCue, Tone)>,
    }

    impl AudioSink for Recording {
        fn play(&mut self, cue: SoundCue, tone: Tone) -> anyhow::Result<()> {
            self.played.push((cue, tone));
            Ok(())
        }
    }

    struct Broken;

    impl AudioSink for Broken {
        fn play(&mut self, _cue: SoundCue, _tone: Tone) -> anyhow::Result<()> {
            anyhow::bail!("no audio device")
        }
    }

    #[test]
    fn speaker_plays_cues_in_order_with_their_tones() {
        let mut speaker = Speaker::new(Recording::default(), false);
        speaker.emit(&[SoundCue::Lock, SoundCue::LineClear]);

        let played = &speaker.sink().played;
        assert_eq!(played.len(), 2);
        assert_eq!(played[0], (SoundCue::Lock, SoundCue::Lock.tone()));
        assert_eq!(played[1].0, SoundCue::LineClear);
    }

    #[test]
    fn muted_speaker_is_silent() {
        let mut speaker = Speaker::new(Recording::default(), true);
        speaker.emit(&[SoundCue::Move, SoundCue::GameOver]);
        assert!(speaker.sink().played.is_empty());

        speaker.set_muted(false);
        speaker.emit(&[SoundCue::Move]);
        assert_eq!(speaker.sink().played.len(), 1);
    }

    #[test]
    fn sink_errors_are_swallowed() {
        let mut speaker = Speaker::new(Broken, false);
        speaker.emit(&[SoundCue::Lock, SoundCue::GameOver]);
        assert!(!speaker.is_muted());
    }

    #[test]
    fn bell_rings_only_for_important_cues() {
        let mut bell = TerminalBell::new(Vec::new());
        for cue in [
            SoundCue::Move,
            SoundCue::Rotate,
            SoundCue::SoftDrop,
            SoundCue::Lock,
            SoundCue::LineClear,
            SoundCue::GameOver,
        ] {
            bell.play(cue, cue.tone()).unwrap();
        }
        assert_eq!(bell.into_inner(), b"\x07\x07\x07".to_vec());
    }

    #[test]
    fn silent_sink_accepts_everything() {
        let mut speaker = Speaker::new(SilentSink, false);
        speaker.emit(&[SoundCue::LineClear]);
    }
}
