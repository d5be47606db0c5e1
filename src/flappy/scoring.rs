//! Scoring tracker.
//!
//! A pillar is cleared when its right edge is behind the player's left
//! edge. A pair scores one point once all of its members are cleared, and
//! never again. Pairs are identified by the `PairId` given at spawn time.

use super::types::{ObstacleActor, ObstaclePair, PairId, PlayerActor, RunState};
use log::debug;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PairProgress {
    members: u8,
    cleared: u8,
    live: u8,
    counted: bool,
}

impl PairProgress {
    fn new(members: u8) -> Self {
        Self {
            members,
            cleared: 0,
            live: members,
            counted: false,
        }
    }
}

/// Per-pair clearing ledger. Holds only pairs that still have live pillars.
#[derive(Debug, Clone, Default)]
pub struct ScoringTracker {
    pairs: BTreeMap<PairId, PairProgress>,
}

impl ScoringTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a freshly spawned pair.
    pub fn register(&mut self, pair: &ObstaclePair) {
        self.pairs.insert(pair.id, PairProgress::new(pair.members.max(1)));
    }

    /// Mark newly cleared pillars and award points for completed pairs.
    /// Returns the new score after each point, in order.
    pub fn on_tick(
        &mut self,
        player: &PlayerActor,
        obstacles: &mut [ObstacleActor],
        run: &mut RunState,
    ) -> Vec<u32> {
        let player_left = player.bounds().left();
        for obstacle in obstacles.iter_mut() {
            if obstacle.scored || obstacle.right() >= player_left {
                continue;
            }
            obstacle.scored = true;
            // A pillar nobody registered is its own pair of one
            let progress = self
                .pairs
                .entry(obstacle.pair_id)
                .or_insert_with(|| PairProgress::new(1));
            progress.cleared = progress.cleared.saturating_add(1);
        }

        let mut points = Vec::new();
        for (id, progress) in self.pairs.iter_mut() {
            if !progress.counted && progress.cleared >= progress.members {
                progress.counted = true;
                run.score += 1;
                debug!("pair {} cleared, score {}", id.0, run.score);
                points.push(run.score);
            }
        }
        points
    }

    /// A pillar of `pair_id` left the world. The pair is forgotten once all
    /// of its pillars are gone.
    pub fn on_destroyed(&mut self, pair_id: PairId) {
        if let Some(progress) = self.pairs.get_mut(&pair_id) {
            progress.live = progress.live.saturating_sub(1);
            if progress.live == 0 {
                self.pairs.remove(&pair_id);
            }
        }
    }

    /// True once the pair has contributed its point.
    pub fn is_counted(&self, pair_id: PairId) -> bool {
        self.pairs.get(&pair_id).is_some_and(|p| p.counted)
    }

    /// Number of pairs still being tracked.
    pub fn tracked_pairs(&self) -> usize {
        self.pairs.len()
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::flappy::spawner::ObstacleSpawner;
    use crate::flappy::types::{PillarSide, RunPhase};

    struct Fixture {
        config: GameConfig,
        player: PlayerActor,
        spawner: ObstacleSpawner,
        obstacles: Vec<ObstacleActor>,
        tracker: ScoringTracker,
        run: RunState,
    }

    impl Fixture {
        fn new() -> Self {
            let config = GameConfig::default();
            Self {
                player: PlayerActor::spawn(&config),
                spawner: ObstacleSpawner::new(&config.obstacles),
                obstacles: Vec::new(),
                tracker: ScoringTracker::new(),
                run: RunState {
                    phase: RunPhase::Running,
                    ..Default::default()
                },
                config,
            }
        }

        fn spawn(&mut self) -> PairId {
            let pair = self
                .spawner
                .spawn_with_bottom(&self.config, 150.0, &mut self.obstacles);
            self.tracker.register(&pair);
            pair.id
        }

        fn tick(&mut self) -> Vec<u32> {
            self.tracker
                .on_tick(&self.player, &mut self.obstacles, &mut self.run)
        }

        /// X at which a 52px pillar's right edge is just behind the player.
        fn cleared_x(&self) -> f64 {
            self.player.bounds().left() - 26.0 - 0.5
        }
    }

    #[test]
    fn test_pair_scores_once() {
        let mut f = Fixture::new();
        f.spawn();
        assert!(f.tick().is_empty());

        let x = f.cleared_x();
        for o in f.obstacles.iter_mut() {
            o.x = x;
        }
        assert_eq!(f.tick(), vec![1]);
        for _ in 0..10 {
            assert!(f.tick().is_empty());
        }
        assert_eq!(f.run.score, 1);
        assert!(f.obstacles.iter().all(|o| o.scored));
    }

    #[test]
    fn test_pair_waits_for_both_members() {
        let mut f = Fixture::new();
        let id = f.spawn();
        let x = f.cleared_x();

        // Only the bottom pillar clears this tick
        f.obstacles[0].x = x;
        assert!(f.tick().is_empty());
        assert_eq!(f.run.score, 0);
        assert!(!f.tracker.is_counted(id));

        // Many ticks later the top pillar follows
        for _ in 0..30 {
            f.tick();
        }
        f.obstacles[1].x = x;
        assert_eq!(f.tick(), vec![1]);
        assert!(f.tracker.is_counted(id));
    }

    #[test]
    fn test_right_edge_touching_player_is_not_cleared() {
        let mut f = Fixture::new();
        f.spawn();
        let touching = f.player.bounds().left() - 26.0;
        for o in f.obstacles.iter_mut() {
            o.x = touching;
        }
        assert!(f.tick().is_empty());
        assert!(f.obstacles.iter().all(|o| !o.scored));
    }

    #[test]
    fn test_unregistered_pillar_scores_as_singleton() {
        let mut f = Fixture::new();
        let x = f.cleared_x();
        f.obstacles.push(ObstacleActor {
            pair_id: PairId(99),
            side: PillarSide::Bottom,
            x,
            y: 400.0,
            width: 52.0,
            height: 100.0,
            velocity_x: -100.0,
            scored: false,
        });
        assert_eq!(f.tick(), vec![1]);
        assert!(f.tick().is_empty());
    }

    #[test]
    fn test_several_pairs_in_one_tick() {
        let mut f = Fixture::new();
        f.spawn();
        f.spawn();
        let x = f.cleared_x();
        for o in f.obstacles.iter_mut() {
            o.x = x;
        }
        assert_eq!(f.tick(), vec![1, 2]);
    }

    #[test]
    fn test_ledger_forgets_destroyed_pairs() {
        let mut f = Fixture::new();
        let id = f.spawn();
        assert_eq!(f.tracker.tracked_pairs(), 1);
        f.tracker.on_destroyed(id);
        assert_eq!(f.tracker.tracked_pairs(), 1);
        f.tracker.on_destroyed(id);
        assert_eq!(f.tracker.tracked_pairs(), 0);
    }
}
