//! Integration test: run lifecycle
//!
//! Drives a whole world through Idle → Running → GameOver → Idle using only
//! the public API, the same way the terminal host does.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skyflap::flappy::{tick_world, CrashCause, RunPhase, SimEvent};
use skyflap::{GameConfig, GameLoop, SimInput, World};

fn new_world() -> World {
    let mut world = World::new(GameConfig::default()).unwrap();
    world.initialize();
    world
}

fn start(world: &mut World, rng: &mut ChaCha8Rng) -> Vec<SimEvent> {
    world.queue_input(SimInput::Start);
    tick_world(world, 0, rng)
}

/// Put `count` pairs behind the player where they still sit on screen, so
/// the next step scores each of them.
fn place_cleared_pairs(world: &mut World, count: usize) {
    for _ in 0..count {
        let pair = world
            .spawner
            .spawn_with_bottom(&world.config, 200.0, &mut world.obstacles);
        world.scoring.register(&pair);
    }
    for pillar in world.obstacles.iter_mut() {
        // right edge at 86, player's left edge at 127
        pillar.x = 60.0;
    }
}

/// Tick in 100 ms frames until the run ends or `max_frames` pass.
fn run_until_game_over(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    max_frames: usize,
) -> Vec<SimEvent> {
    let mut events = Vec::new();
    for _ in 0..max_frames {
        events.extend(world.tick(100, rng));
        if world.phase() == RunPhase::GameOver {
            break;
        }
    }
    events
}

#[test]
fn test_score_three_crash_then_resume_to_start_position() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut world = new_world();
    assert_eq!(world.config.world.width, 288.0);
    assert_eq!(world.config.world.height, 512.0);
    assert_eq!(world.config.world.ground_height, 50.0);
    assert_eq!((world.player.x, world.player.y), (144.0, 256.0));

    let events = start(&mut world, &mut rng);
    assert!(events.contains(&SimEvent::RunStarted));
    assert_eq!(world.phase(), RunPhase::Running);

    place_cleared_pairs(&mut world, 3);
    let events = world.tick(16, &mut rng);
    let points: Vec<u32> = events
        .iter()
        .filter_map(|e| match e {
            SimEvent::Point { score } => Some(*score),
            _ => None,
        })
        .collect();
    assert_eq!(points, vec![1, 2, 3]);

    // No flaps: the bird falls onto the ground well before the first spawn
    let events = run_until_game_over(&mut world, &mut rng, 50);
    assert_eq!(world.phase(), RunPhase::GameOver);
    assert_eq!(world.run.crash, Some(CrashCause::Ground));
    assert_eq!(world.score(), 3);
    assert_eq!(world.run.best_score, 3);
    assert!(events.contains(&SimEvent::GameOver {
        score: 3,
        best_score: 3,
        cause: CrashCause::Ground,
    }));

    world.queue_input(SimInput::Resume);
    let events = tick_world(&mut world, 0, &mut rng);
    assert_eq!(events, vec![SimEvent::ReturnedToIdle]);
    assert_eq!(world.phase(), RunPhase::Idle);
    assert_eq!(world.score(), 0);
    assert_eq!((world.player.x, world.player.y), (144.0, 256.0));
    assert_eq!(world.player.velocity_y, 0.0);
    assert!(world.obstacles.is_empty());
    assert_eq!(world.run.best_score, 3);
}

#[test]
fn test_game_over_freezes_the_world() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut world = new_world();
    start(&mut world, &mut rng);

    // Keep the bird up long enough for a pair to appear, then let it fall
    for frame in 0..20 {
        if frame % 10 == 0 {
            world.queue_input(SimInput::Flap);
        }
        world.tick(100, &mut rng);
    }
    run_until_game_over(&mut world, &mut rng, 100);
    assert_eq!(world.phase(), RunPhase::GameOver);

    let player_y = world.player.y;
    let positions: Vec<f64> = world.obstacles.iter().map(|o| o.x).collect();
    let spawned = world.spawner.spawned();
    assert!(!world.spawner.timer.is_active());

    for _ in 0..30 {
        world.queue_input(SimInput::Flap);
        let events = world.tick(100, &mut rng);
        assert!(events.is_empty());
    }
    assert_eq!(world.player.y, player_y);
    assert_eq!(world.spawner.spawned(), spawned);
    let after: Vec<f64> = world.obstacles.iter().map(|o| o.x).collect();
    assert_eq!(after, positions);
}

#[test]
fn test_start_resets_score_from_previous_run() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut world = new_world();
    start(&mut world, &mut rng);
    place_cleared_pairs(&mut world, 2);
    run_until_game_over(&mut world, &mut rng, 50);
    assert_eq!(world.score(), 2);

    world.queue_input(SimInput::Resume);
    world.tick(0, &mut rng);
    // Leftover score from a host that skipped the reset
    world.run.score = 2;

    start(&mut world, &mut rng);
    assert_eq!(world.phase(), RunPhase::Running);
    assert_eq!(world.score(), 0);
    assert_eq!(world.run.best_score, 2);
}

#[test]
fn test_inputs_apply_in_queue_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut world = new_world();

    // Start then Flap in the same tick: both take effect, in order
    world.queue_input(SimInput::Start);
    world.queue_input(SimInput::Flap);
    let events = tick_world(&mut world, 0, &mut rng);
    assert_eq!(events[0], SimEvent::RunStarted);
    assert!(events.contains(&SimEvent::Flapped));
    assert_eq!(world.player.velocity_y, world.config.player.flap_velocity);
    assert!(world.inputs.is_empty());
}

#[test]
fn test_idle_world_spawns_nothing() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut world = new_world();
    for _ in 0..100 {
        world.tick(100, &mut rng);
    }
    assert_eq!(world.phase(), RunPhase::Idle);
    assert!(world.obstacles.is_empty());
    assert_eq!(world.spawner.spawned(), 0);
    let center = world.config.start_y();
    let range = world.config.player.idle_bob_range;
    assert!(world.player.y >= center - range && world.player.y <= center + range);
}
