//! Obstacle spawner: creates pillar pairs on a timer and removes pillars
//! that have left the world.
//!
//! Every pillar is created here and destroyed here, exactly once. The
//! `spawned`/`destroyed` counters make that observable.

use super::types::{ObstacleActor, ObstaclePair, PairId, PillarSide, RunState};
use crate::core::config::{GameConfig, ObstacleConfig, PillarLayout};
use log::debug;
use rand::Rng;

/// Repeating countdown that only runs between `start` and `stop`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodicTimer {
    interval_ms: u64,
    elapsed_ms: u64,
    active: bool,
}

impl PeriodicTimer {
    /// A stopped timer.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0,
            active: false,
        }
    }

    /// Begin counting from zero.
    pub fn start(&mut self) {
        self.active = true;
        self.elapsed_ms = 0;
    }

    /// Stop and forget any partial interval.
    pub fn stop(&mut self) {
        self.active = false;
        self.elapsed_ms = 0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Advance by `dt_ms`. Returns true when an interval completed. Any
    /// overshoot carries into the next interval.
    pub fn advance(&mut self, dt_ms: u64) -> bool {
        if !self.active {
            return false;
        }
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            true
        } else {
            false
        }
    }
}

/// Draw a bottom pillar height uniformly from the configured range, in
/// whole pixels.
pub fn draw_bottom_height<R: Rng>(config: &ObstacleConfig, rng: &mut R) -> f64 {
    let (min, max) = (config.min_bottom_height, config.max_bottom_height);
    if max <= min {
        return min;
    }
    rng.gen_range(min..=max).round().clamp(min, max)
}

#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    pub timer: PeriodicTimer,
    next_pair_id: u64,
    spawned: u64,
    destroyed: u64,
}

impl ObstacleSpawner {
    pub fn new(config: &ObstacleConfig) -> Self {
        Self {
            timer: PeriodicTimer::new(config.spawn_interval_ms),
            next_pair_id: 0,
            spawned: 0,
            destroyed: 0,
        }
    }

    /// Pillars created since the spawner was built.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Pillars removed since the spawner was built.
    pub fn destroyed(&self) -> u64 {
        self.destroyed
    }

    /// Spawn one pair when `interval_elapsed` is set and the run is live.
    pub fn on_tick<R: Rng>(
        &mut self,
        interval_elapsed: bool,
        run: &RunState,
        config: &GameConfig,
        obstacles: &mut Vec<ObstacleActor>,
        rng: &mut R,
    ) -> Option<ObstaclePair> {
        if !interval_elapsed || !run.is_running() {
            return None;
        }
        let bottom_height = draw_bottom_height(&config.obstacles, rng);
        Some(self.spawn_with_bottom(config, bottom_height, obstacles))
    }

    /// Spawn a pair at the right edge of the world with the given bottom
    /// pillar height. The top pillar fills the rest of the sky above the gap.
    pub fn spawn_with_bottom(
        &mut self,
        config: &GameConfig,
        bottom_height: f64,
        obstacles: &mut Vec<ObstacleActor>,
    ) -> ObstaclePair {
        let oc = &config.obstacles;
        let ground_top = config.world.ground_top();
        let top_height = ground_top - oc.gap - bottom_height;
        let pair_id = PairId(self.next_pair_id);
        self.next_pair_id += 1;

        let pillar = |side: PillarSide, y: f64, height: f64| ObstacleActor {
            pair_id,
            side,
            x: config.world.width,
            y,
            width: oc.width,
            height,
            velocity_x: -oc.speed,
            scored: false,
        };

        obstacles.push(pillar(
            PillarSide::Bottom,
            ground_top - bottom_height / 2.0,
            bottom_height,
        ));
        let mut members = 1;
        if oc.layout == PillarLayout::Paired {
            obstacles.push(pillar(PillarSide::Top, top_height / 2.0, top_height));
            members += 1;
        }
        self.spawned += members as u64;

        debug!(
            "spawned pair {} (bottom {}, top {}, {} pillar(s))",
            pair_id.0, bottom_height, top_height, members
        );
        ObstaclePair {
            id: pair_id,
            bottom_height,
            top_height,
            members,
        }
    }

    /// Move every pillar by its velocity over `dt` seconds, then remove the
    /// ones whose right edge has crossed `x = 0`. Returns the removed pillars.
    pub fn advance_obstacles(
        &mut self,
        obstacles: &mut Vec<ObstacleActor>,
        dt: f64,
    ) -> Vec<(PairId, PillarSide)> {
        for obstacle in obstacles.iter_mut() {
            obstacle.x += obstacle.velocity_x * dt;
        }

        let mut removed = Vec::new();
        obstacles.retain(|o| {
            if o.is_off_screen() {
                removed.push((o.pair_id, o.side));
                false
            } else {
                true
            }
        });
        self.destroyed += removed.len() as u64;
        for (pair_id, side) in &removed {
            debug!("destroyed {:?} pillar of pair {}", side, pair_id.0);
        }
        removed
    }

    /// Drop every live pillar at once (run discarded). They count as
    /// destroyed.
    pub fn clear(&mut self, obstacles: &mut Vec<ObstacleActor>) {
        self.destroyed += obstacles.len() as u64;
        obstacles.clear();
    }
}
