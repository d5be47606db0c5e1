//! Maps [`SimEvent`]s to HUD effects, sound and log lines.
//!
//! Binary-only: it bridges pure simulation events to terminal types like
//! [`HudState`] and the bell.

use crate::ui::HudState;
use log::info;
use skyflap::audio::{play_cues, AudioSink};
use skyflap::core::assets::LoadedAssets;
use skyflap::SimEvent;

/// How long the score stays highlighted after a point.
const POINT_FLASH_MS: u64 = 250;

pub fn apply_sim_events(
    hud: &mut HudState,
    events: &[SimEvent],
    assets: &LoadedAssets,
    audio: &mut impl AudioSink,
) {
    for event in events {
        match event {
            SimEvent::RunStarted => {
                hud.runs += 1;
                hud.crash = None;
                info!("run {} started", hud.runs);
            }
            SimEvent::Point { .. } => {
                hud.point_flash_ms = POINT_FLASH_MS;
            }
            SimEvent::GameOver {
                score,
                best_score,
                cause,
            } => {
                hud.crash = Some(*cause);
                hud.point_flash_ms = 0;
                info!("run {} over: {:?}, score {} (best {})", hud.runs, cause, score, best_score);
            }
            SimEvent::ReturnedToIdle => {
                hud.crash = None;
            }
            SimEvent::Flapped
            | SimEvent::PairSpawned { .. }
            | SimEvent::ObstacleDestroyed { .. }
            | SimEvent::Sound(_) => {}
        }
    }
    play_cues(events, assets, audio);
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyflap::core::assets::{AssetCatalog, SoundClip};
    use skyflap::flappy::{CrashCause, SoundCue};

    struct Silent(usize);

    impl AudioSink for Silent {
        fn play(&mut self, _cue: SoundCue, _clip: SoundClip) {
            self.0 += 1;
        }
    }

    #[test]
    fn test_point_flashes_and_crash_is_recorded() {
        let assets = AssetCatalog::builtin().preload(3).unwrap();
        let mut hud = HudState::default();
        let mut audio = Silent(0);

        apply_sim_events(
            &mut hud,
            &[
                SimEvent::RunStarted,
                SimEvent::Point { score: 1 },
                SimEvent::Sound(SoundCue::Score),
            ],
            &assets,
            &mut audio,
        );
        assert_eq!(hud.runs, 1);
        assert_eq!(hud.point_flash_ms, POINT_FLASH_MS);
        assert_eq!(audio.0, 1);

        apply_sim_events(
            &mut hud,
            &[SimEvent::GameOver {
                score: 1,
                best_score: 1,
                cause: CrashCause::Ceiling,
            }],
            &assets,
            &mut audio,
        );
        assert_eq!(hud.crash, Some(CrashCause::Ceiling));
        assert_eq!(hud.point_flash_ms, 0);

        apply_sim_events(&mut hud, &[SimEvent::ReturnedToIdle], &assets, &mut audio);
        assert_eq!(hud.crash, None);
    }
}
