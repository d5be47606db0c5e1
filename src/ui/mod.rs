pub mod flappy_scene;
pub mod game_common;
pub mod responsive;

use ratatui::layout::Rect;
use skyflap::flappy::CrashCause;

/// Clickable controls on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Start,
    Resume,
}

/// Where the last frame drew its clickable areas. Rebuilt on every draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hitboxes {
    pub start: Option<Rect>,
    pub resume: Option<Rect>,
    pub play_area: Option<Rect>,
}

/// Frontend state that outlives a single frame.
#[derive(Debug, Default)]
pub struct UiState {
    pub hitboxes: Hitboxes,
    /// Control currently under the pointer.
    pub hovered: Option<Control>,
}

impl UiState {
    /// Forget every hitbox. Called before each draw so stale controls
    /// can't be clicked.
    pub fn clear_hitboxes(&mut self) {
        self.hitboxes = Hitboxes::default();
    }
}

/// Short-lived HUD effects driven by simulation events.
#[derive(Debug, Default)]
pub struct HudState {
    /// Remaining milliseconds of the score flash.
    pub point_flash_ms: u64,
    /// Set when the last run ended; cleared on resume.
    pub crash: Option<CrashCause>,
    /// Run count in this session.
    pub runs: u32,
}

impl HudState {
    pub fn decay(&mut self, dt_ms: u64) {
        self.point_flash_ms = self.point_flash_ms.saturating_sub(dt_ms);
    }
}
