//! The world: everything one game session owns, in one explicit struct.

use super::input::{InputQueue, SimInput};
use super::scoring::ScoringTracker;
use super::spawner::ObstacleSpawner;
use super::types::{ObstacleActor, PlayerActor, RunPhase, RunState};
use crate::core::config::GameConfig;
use crate::core::error::ConfigError;

#[derive(Debug, Clone)]
pub struct World {
    pub config: GameConfig,
    pub run: RunState,
    pub player: PlayerActor,
    /// Live pillars, in spawn order.
    pub obstacles: Vec<ObstacleActor>,
    pub spawner: ObstacleSpawner,
    pub scoring: ScoringTracker,
    pub inputs: InputQueue,
    /// Parallax offset of the background layer, `0..world.width`.
    pub background_offset: f64,
    /// Real time not yet consumed by a fixed step (milliseconds).
    pub accumulated_ms: u64,
    /// Fixed steps executed so far.
    pub step_count: u64,
}

impl World {
    /// Build an idle world. Fails if the config is invalid.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            run: RunState::default(),
            player: PlayerActor::spawn(&config),
            obstacles: Vec::new(),
            spawner: ObstacleSpawner::new(&config.obstacles),
            scoring: ScoringTracker::new(),
            inputs: InputQueue::new(),
            background_offset: 0.0,
            accumulated_ms: 0,
            step_count: 0,
            config,
        })
    }

    /// Queue an input for the next tick.
    pub fn queue_input(&mut self, input: SimInput) {
        self.inputs.push(input);
    }

    pub fn phase(&self) -> RunPhase {
        self.run.phase
    }

    pub fn score(&self) -> u32 {
        self.run.score
    }

    pub fn ground_top(&self) -> f64 {
        self.config.world.ground_top()
    }

    /// Discard the current run wholesale and wait for a new start: fresh
    /// player, no pillars, score 0, spawn timer stopped. Best score survives.
    pub fn reset_run(&mut self) {
        self.spawner.clear(&mut self.obstacles);
        self.spawner.timer.stop();
        self.scoring.clear();
        self.player = PlayerActor::spawn(&self.config);
        self.run.phase = RunPhase::Idle;
        self.run.score = 0;
        self.run.crash = None;
        self.accumulated_ms = 0;
    }
}
