//! Game configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes. Values are checked by [`GameConfig::validate`] before a world is
//! built; nothing out of range is silently clamped.

use crate::core::constants::*;
use crate::core::error::ConfigError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Whether pillars spawn as a top/bottom pair or as a lone bottom pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PillarLayout {
    #[default]
    Paired,
    Single,
}

/// Play-area geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    /// Height of the ground strip at the bottom of the world.
    pub ground_height: f64,
    /// Background parallax speed in px/s.
    pub background_scroll_speed: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            ground_height: GROUND_HEIGHT,
            background_scroll_speed: BACKGROUND_SCROLL_SPEED,
        }
    }
}

impl WorldConfig {
    /// Y coordinate of the ground surface.
    pub fn ground_top(&self) -> f64 {
        self.height - self.ground_height
    }
}

/// Player size, spawn point and flight tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Spawn center. `None` means the middle of the world.
    pub start_x: Option<f64>,
    pub start_y: Option<f64>,
    pub width: f64,
    pub height: f64,
    /// Downward acceleration in px/s².
    pub gravity: f64,
    /// Velocity set (not added) by a flap, in px/s. Must be negative.
    pub flap_velocity: f64,
    pub max_fall_speed: f64,
    pub anim_fps: f64,
    pub frame_count: usize,
    pub idle_bob_range: f64,
    pub idle_bob_speed: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start_x: None,
            start_y: None,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            max_fall_speed: MAX_FALL_SPEED,
            anim_fps: PLAYER_ANIM_FPS,
            frame_count: PLAYER_FRAME_COUNT,
            idle_bob_range: IDLE_BOB_RANGE,
            idle_bob_speed: IDLE_BOB_SPEED,
        }
    }
}

/// Pillar geometry and spawn cadence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    pub width: f64,
    /// Vertical opening between the top and bottom pillar.
    pub gap: f64,
    pub min_bottom_height: f64,
    pub max_bottom_height: f64,
    /// Leftward speed in px/s.
    pub speed: f64,
    pub spawn_interval_ms: u64,
    pub layout: PillarLayout,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            width: PILLAR_WIDTH,
            gap: PILLAR_GAP,
            min_bottom_height: MIN_BOTTOM_HEIGHT,
            max_bottom_height: MAX_BOTTOM_HEIGHT,
            speed: PILLAR_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            layout: PillarLayout::Paired,
        }
    }
}

/// Fixed-step simulation timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub step_ms: u64,
    /// Longest frame delta accepted by a single tick.
    pub max_frame_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            step_ms: PHYSICS_STEP_MS,
            max_frame_ms: MAX_FRAME_MS,
        }
    }
}

impl TimingConfig {
    /// Length of one physics step in seconds.
    pub fn step_secs(&self) -> f64 {
        self.step_ms as f64 / 1000.0
    }
}

/// Complete game configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    pub world: WorldConfig,
    pub player: PlayerConfig,
    pub obstacles: ObstacleConfig,
    pub timing: TimingConfig,
    /// RNG seed for reproducible pillar heights. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Parse a config from JSON text. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Read a config file. The result is not validated yet.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config from `path`, or from the platform config directory
    /// when no path is given and a file exists there, or fall back to
    /// defaults. The result is not validated yet so callers can apply
    /// overrides first.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Horizontal spawn position of the player.
    pub fn start_x(&self) -> f64 {
        self.player.start_x.unwrap_or(self.world.width / 2.0)
    }

    /// Vertical spawn position of the player.
    pub fn start_y(&self) -> f64 {
        self.player.start_y.unwrap_or(self.world.height / 2.0)
    }

    /// Reject any value that would make the world impossible to simulate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let world = &self.world;
        positive("world.width", world.width)?;
        positive("world.height", world.height)?;
        non_negative("world.ground_height", world.ground_height)?;
        non_negative(
            "world.background_scroll_speed",
            world.background_scroll_speed,
        )?;
        if world.ground_height >= world.height {
            return Err(ConfigError::invalid(
                "world.ground_height",
                format!(
                    "ground ({}) must be lower than the world height ({})",
                    world.ground_height, world.height
                ),
            ));
        }

        let player = &self.player;
        positive("player.width", player.width)?;
        positive("player.height", player.height)?;
        non_negative("player.gravity", player.gravity)?;
        positive("player.max_fall_speed", player.max_fall_speed)?;
        non_negative("player.anim_fps", player.anim_fps)?;
        non_negative("player.idle_bob_range", player.idle_bob_range)?;
        non_negative("player.idle_bob_speed", player.idle_bob_speed)?;
        if !(player.flap_velocity.is_finite() && player.flap_velocity < 0.0) {
            return Err(ConfigError::invalid(
                "player.flap_velocity",
                format!("must be negative (upward), got {}", player.flap_velocity),
            ));
        }
        if player.frame_count == 0 {
            return Err(ConfigError::invalid(
                "player.frame_count",
                "needs at least one animation frame",
            ));
        }
        let (start_x, start_y) = (self.start_x(), self.start_y());
        let half_width = player.width / 2.0;
        if start_x - half_width < 0.0 || start_x + half_width > world.width {
            return Err(ConfigError::invalid(
                "player.start_x",
                format!(
                    "{} puts the player outside the world (0..={})",
                    start_x, world.width
                ),
            ));
        }
        let half_height = player.height / 2.0;
        if start_y - half_height <= 0.0 || start_y + half_height > world.ground_top() {
            return Err(ConfigError::invalid(
                "player.start_y",
                format!(
                    "{} puts the player outside the open sky (0..{})",
                    start_y,
                    world.ground_top()
                ),
            ));
        }

        let obstacles = &self.obstacles;
        positive("obstacles.width", obstacles.width)?;
        positive("obstacles.gap", obstacles.gap)?;
        positive("obstacles.speed", obstacles.speed)?;
        non_negative("obstacles.min_bottom_height", obstacles.min_bottom_height)?;
        non_negative("obstacles.max_bottom_height", obstacles.max_bottom_height)?;
        if obstacles.min_bottom_height > obstacles.max_bottom_height {
            return Err(ConfigError::invalid(
                "obstacles.min_bottom_height",
                format!(
                    "{} is above max_bottom_height {}",
                    obstacles.min_bottom_height, obstacles.max_bottom_height
                ),
            ));
        }
        let tallest_stack = obstacles.max_bottom_height + obstacles.gap;
        if tallest_stack > world.ground_top() {
            return Err(ConfigError::invalid(
                "obstacles.gap",
                format!(
                    "gap {} plus max_bottom_height {} does not fit in {} px of sky",
                    obstacles.gap,
                    obstacles.max_bottom_height,
                    world.ground_top()
                ),
            ));
        }
        if obstacles.spawn_interval_ms == 0 {
            return Err(ConfigError::invalid(
                "obstacles.spawn_interval_ms",
                "must be greater than zero",
            ));
        }

        let timing = &self.timing;
        if timing.step_ms == 0 {
            return Err(ConfigError::invalid("timing.step_ms", "must be greater than zero"));
        }
        if timing.max_frame_ms < timing.step_ms {
            return Err(ConfigError::invalid(
                "timing.max_frame_ms",
                format!(
                    "{} is shorter than one step ({} ms)",
                    timing.max_frame_ms, timing.step_ms
                ),
            ));
        }
        Ok(())
    }
}

/// Location of the optional per-user config file.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "skyflap").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("must be positive, got {}", value),
        ))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("must not be negative, got {}", value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_field(config: &GameConfig) -> &'static str {
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => field,
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.world.width, 288.0);
        assert_eq!(config.world.height, 512.0);
        assert_eq!(config.start_x(), 144.0);
        assert_eq!(config.start_y(), 256.0);
        assert_eq!(config.world.ground_top(), 462.0);
    }

    #[test]
    fn test_negative_width_rejected() {
        let mut config = GameConfig::default();
        config.world.width = -288.0;
        assert_eq!(invalid_field(&config), "world.width");
    }

    #[test]
    fn test_zero_player_height_rejected() {
        let mut config = GameConfig::default();
        config.player.height = 0.0;
        assert_eq!(invalid_field(&config), "player.height");
    }

    #[test]
    fn test_nan_rejected() {
        let mut config = GameConfig::default();
        config.obstacles.gap = f64::NAN;
        assert_eq!(invalid_field(&config), "obstacles.gap");
    }

    #[test]
    fn test_ground_taller_than_world_rejected() {
        let mut config = GameConfig::default();
        config.world.ground_height = 600.0;
        assert_eq!(invalid_field(&config), "world.ground_height");
    }

    #[test]
    fn test_gap_that_does_not_fit_rejected() {
        let mut config = GameConfig::default();
        config.obstacles.gap = 200.0; // 300 + 200 > 462
        assert_eq!(invalid_field(&config), "obstacles.gap");
    }

    #[test]
    fn test_inverted_bottom_range_rejected() {
        let mut config = GameConfig::default();
        config.obstacles.min_bottom_height = 310.0;
        assert_eq!(invalid_field(&config), "obstacles.min_bottom_height");
    }

    #[test]
    fn test_positive_flap_rejected() {
        let mut config = GameConfig::default();
        config.player.flap_velocity = 200.0;
        assert_eq!(invalid_field(&config), "player.flap_velocity");
    }

    #[test]
    fn test_start_inside_ground_rejected() {
        let mut config = GameConfig::default();
        config.player.start_y = Some(470.0);
        assert_eq!(invalid_field(&config), "player.start_y");
    }

    #[test]
    fn test_start_x_outside_world_rejected() {
        let mut config = GameConfig::default();
        // Left edge at -12: pillars would be culled before they could score
        config.player.start_x = Some(5.0);
        assert_eq!(invalid_field(&config), "player.start_x");
        config.player.start_x = Some(280.0);
        assert_eq!(invalid_field(&config), "player.start_x");
        // Flush with the left edge is fine
        config.player.start_x = Some(17.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_step_longer_than_frame_clamp_rejected() {
        let mut config = GameConfig::default();
        config.timing.step_ms = 200;
        assert_eq!(invalid_field(&config), "timing.max_frame_ms");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json(
            r#"{ "obstacles": { "gap": 120, "layout": "single" }, "seed": 7 }"#,
        )
        .unwrap();
        assert_eq!(config.obstacles.gap, 120.0);
        assert_eq!(config.obstacles.layout, PillarLayout::Single);
        assert_eq!(config.obstacles.width, PILLAR_WIDTH);
        assert_eq!(config.world, WorldConfig::default());
        assert_eq!(config.seed, Some(7));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = Path::new("/definitely/not/here/skyflap.json");
        match GameConfig::load(Some(path)) {
            Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
