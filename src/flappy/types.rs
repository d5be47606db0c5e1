//! Actors and run state.
//!
//! Positions are actor centers in world pixels, y grows downward, and
//! velocities are px/s.

use crate::core::config::GameConfig;

/// Axis-aligned box described by its center and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// True when the two boxes share interior area. Touching edges don't count.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}

/// The bird.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerActor {
    pub x: f64,
    pub y: f64,
    /// Vertical velocity, positive = downward.
    pub velocity_y: f64,
    pub width: f64,
    pub height: f64,
    /// Fractional animation clock, in frames.
    pub anim_clock: f64,
    /// Current wing frame, `0..frame_count`.
    pub frame: usize,
    /// Gravity and flaps apply only while alive.
    pub alive: bool,
    pub visible: bool,
    /// Idle hover direction: -1.0 rising, 1.0 sinking.
    pub bob_direction: f64,
}

impl PlayerActor {
    /// A fresh, resting player at the configured start position.
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            x: config.start_x(),
            y: config.start_y(),
            velocity_y: 0.0,
            width: config.player.width,
            height: config.player.height,
            anim_clock: 0.0,
            frame: 0,
            alive: false,
            visible: true,
            bob_direction: 1.0,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    /// Advance the wing animation by `dt` seconds.
    pub fn animate(&mut self, dt: f64, fps: f64, frame_count: usize) {
        let frames = frame_count.max(1);
        self.anim_clock = (self.anim_clock + dt * fps) % frames as f64;
        self.frame = (self.anim_clock.floor() as usize).min(frames - 1);
    }
}

/// Links the members of one spawned pillar pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairId(pub u64);

/// Which half of a pair an obstacle is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PillarSide {
    Top,
    Bottom,
}

/// A pillar.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleActor {
    pub pair_id: PairId,
    pub side: PillarSide,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal velocity, negative = leftward.
    pub velocity_x: f64,
    /// Set once the pillar's right edge is behind the player.
    pub scored: bool,
}

impl ObstacleActor {
    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Left the world through its left edge.
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }
}

/// Geometry of a spawned pair. `members` is 1 for a lone bottom pillar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstaclePair {
    pub id: PairId,
    pub bottom_height: f64,
    pub top_height: f64,
    pub members: u8,
}

/// Phase of the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    /// Waiting for the start input.
    #[default]
    Idle,
    Running,
    GameOver,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    Obstacle,
    Ground,
    Ceiling,
}

/// Phase and score. Decides whether physics, spawning and scoring run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    pub phase: RunPhase,
    pub score: u32,
    /// Best score seen by this process. Not saved anywhere.
    pub best_score: u32,
    pub crash: Option<CrashCause>,
}

impl RunState {
    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }
}
