//! Side effects produced by a tick.
//!
//! The simulation never touches audio or the screen; the host maps these
//! events to sounds, HUD updates and log lines.

use super::types::{CrashCause, PairId, PillarSide};

/// Named sound cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SoundCue {
    Flap,
    Score,
    Hit,
    Die,
}

impl SoundCue {
    pub const ALL: [SoundCue; 4] = [
        SoundCue::Flap,
        SoundCue::Score,
        SoundCue::Hit,
        SoundCue::Die,
    ];

    /// Asset catalog name of the clip for this cue.
    pub fn asset_name(self) -> &'static str {
        match self {
            SoundCue::Flap => "flap",
            SoundCue::Score => "score",
            SoundCue::Hit => "hit",
            SoundCue::Die => "die",
        }
    }
}

/// A single event produced by a tick, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    /// Idle → Running.
    RunStarted,
    /// The player flapped.
    Flapped,
    /// A pillar pair entered on the right.
    PairSpawned {
        pair_id: PairId,
        bottom_height: f64,
        top_height: f64,
    },
    /// A pillar left the world and was removed.
    ObstacleDestroyed { pair_id: PairId, side: PillarSide },
    /// A pair was cleared. `score` is the new total.
    Point { score: u32 },
    /// Running → GameOver.
    GameOver {
        score: u32,
        best_score: u32,
        cause: CrashCause,
    },
    /// GameOver → Idle; the old run was discarded.
    ReturnedToIdle,
    /// Play a sound.
    Sound(SoundCue),
}
