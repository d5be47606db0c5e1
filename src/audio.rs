//! Sound cue playback.
//!
//! A terminal has exactly one instrument, the bell. Clips flagged `bell`
//! ring it; every cue is logged either way.

use crate::core::assets::{LoadedAssets, SoundClip};
use crate::flappy::events::{SimEvent, SoundCue};
use log::{debug, warn};
use std::io::Write;

/// Something that can play a resolved clip.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue, clip: SoundClip);
}

/// Rings the terminal bell on `out`.
pub struct TerminalBell<W: Write> {
    out: W,
    muted: bool,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W, muted: bool) -> Self {
        Self { out, muted }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: SoundCue, clip: SoundClip) {
        debug!("sound: {}", cue.asset_name());
        if !clip.bell || self.muted {
            return;
        }
        if let Err(e) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            warn!("bell for {} failed: {}", cue.asset_name(), e);
        }
    }
}

/// Play every sound cue found in `events`, in order. Returns how many were
/// played.
pub fn play_cues(events: &[SimEvent], assets: &LoadedAssets, sink: &mut impl AudioSink) -> usize {
    let mut played = 0;
    for event in events {
        if let SimEvent::Sound(cue) = event {
            sink.play(*cue, assets.sound(*cue));
            played += 1;
        }
    }
    played
}
