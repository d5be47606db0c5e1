// World geometry (pixels)
pub const WORLD_WIDTH: f64 = 288.0;
pub const WORLD_HEIGHT: f64 = 512.0;
pub const GROUND_HEIGHT: f64 = 50.0;
pub const BACKGROUND_SCROLL_SPEED: f64 = 30.0; // px/s, parallax layer

// Player
pub const PLAYER_WIDTH: f64 = 34.0;
pub const PLAYER_HEIGHT: f64 = 24.0;
pub const GRAVITY: f64 = 400.0; // px/s²
pub const FLAP_VELOCITY: f64 = -200.0; // px/s, negative = upward
pub const MAX_FALL_SPEED: f64 = 400.0;
pub const PLAYER_ANIM_FPS: f64 = 6.0;
pub const PLAYER_FRAME_COUNT: usize = 3;
pub const IDLE_BOB_RANGE: f64 = 50.0;
pub const IDLE_BOB_SPEED: f64 = 60.0;

// Obstacles
pub const PILLAR_WIDTH: f64 = 52.0;
pub const PILLAR_GAP: f64 = 150.0;
pub const MIN_BOTTOM_HEIGHT: f64 = 100.0;
pub const MAX_BOTTOM_HEIGHT: f64 = 300.0;
pub const PILLAR_SPEED: f64 = 100.0; // px/s leftward
pub const SPAWN_INTERVAL_MS: u64 = 1500;

// Fixed-step timing
pub const PHYSICS_STEP_MS: u64 = 16; // ~60 FPS
pub const MAX_FRAME_MS: u64 = 100; // clamp after a stall so physics doesn't explode

// Files
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "skyflap.log";
pub const LOG_FILTER_ENV: &str = "SKYFLAP_LOG";
