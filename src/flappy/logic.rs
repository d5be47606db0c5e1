//! Collision and lifecycle controller.
//!
//! `Idle → Running → GameOver → Idle`. Each tick drains the input queue
//! once, then advances the world in fixed steps. A running step always goes
//! (1) player physics, (2) spawner, (3) scoring, (4) collision and bounds.

use super::events::{SimEvent, SoundCue};
use super::input::SimInput;
use super::types::{CrashCause, PlayerActor, RunPhase};
use super::world::World;
use crate::core::assets::{AssetCatalog, LoadedAssets};
use crate::core::error::AssetError;
use crate::core::game_loop::GameLoop;
use log::{info, trace};
use rand::Rng;

/// Apply one input to the world. Inputs that don't fit the current phase
/// are dropped.
pub fn process_input(world: &mut World, input: SimInput, events: &mut Vec<SimEvent>) {
    match (input, world.run.phase) {
        (SimInput::Start, RunPhase::Idle) => start_run(world, events),
        (SimInput::Flap, RunPhase::Running) if world.player.alive => {
            world.player.velocity_y = world.config.player.flap_velocity;
            events.push(SimEvent::Flapped);
            events.push(SimEvent::Sound(SoundCue::Flap));
        }
        (SimInput::Resume, RunPhase::GameOver) => {
            world.reset_run();
            info!("back to the start screen");
            events.push(SimEvent::ReturnedToIdle);
        }
        (input, phase) => trace!("ignoring {:?} while {:?}", input, phase),
    }
}

/// Idle → Running.
fn start_run(world: &mut World, events: &mut Vec<SimEvent>) {
    world.spawner.clear(&mut world.obstacles);
    world.scoring.clear();
    world.player = PlayerActor::spawn(&world.config);
    world.player.alive = true;
    world.player.visible = true;
    world.run.phase = RunPhase::Running;
    world.run.score = 0;
    world.run.crash = None;
    world.accumulated_ms = 0;
    world.spawner.timer.start();
    info!("run started");
    events.push(SimEvent::RunStarted);
}

/// Running → GameOver. Freezes every actor and stops the spawn timer.
fn end_run(world: &mut World, cause: CrashCause, events: &mut Vec<SimEvent>) {
    world.run.phase = RunPhase::GameOver;
    world.run.crash = Some(cause);
    world.run.best_score = world.run.best_score.max(world.run.score);
    world.player.velocity_y = 0.0;
    world.player.alive = false;
    for obstacle in world.obstacles.iter_mut() {
        obstacle.velocity_x = 0.0;
    }
    world.spawner.timer.stop();
    world.accumulated_ms = 0;

    info!(
        "run over ({:?}) with score {}, best {}",
        cause, world.run.score, world.run.best_score
    );
    events.push(SimEvent::Sound(SoundCue::Hit));
    events.push(SimEvent::Sound(SoundCue::Die));
    events.push(SimEvent::GameOver {
        score: world.run.score,
        best_score: world.run.best_score,
        cause,
    });
}

/// Advance the world by `dt_ms` of real time. Queued input is applied
/// first, then as many fixed steps as the accumulated time allows.
pub fn tick_world<R: Rng>(world: &mut World, dt_ms: u64, rng: &mut R) -> Vec<SimEvent> {
    let mut events = Vec::new();
    for input in world.inputs.drain() {
        process_input(world, input, &mut events);
    }

    // GameOver suspends stepping entirely
    if world.run.phase == RunPhase::GameOver {
        return events;
    }

    let step_ms = world.config.timing.step_ms;
    world.accumulated_ms += dt_ms.min(world.config.timing.max_frame_ms);
    while world.accumulated_ms >= step_ms {
        world.accumulated_ms -= step_ms;
        step(world, rng, &mut events);
        if world.run.phase == RunPhase::GameOver {
            break;
        }
    }
    events
}

/// One fixed step.
fn step<R: Rng>(world: &mut World, rng: &mut R, events: &mut Vec<SimEvent>) {
    world.step_count += 1;
    let dt = world.config.timing.step_secs();

    let width = world.config.world.width;
    world.background_offset =
        (world.background_offset + world.config.world.background_scroll_speed * dt) % width;

    match world.run.phase {
        RunPhase::Idle => hover(world, dt),
        RunPhase::Running => step_running(world, dt, rng, events),
        RunPhase::GameOver => {}
    }
}

/// Idle hover: bob around the start height and keep flapping wings.
fn hover(world: &mut World, dt: f64) {
    let pc = &world.config.player;
    let center = world.config.start_y();
    let player = &mut world.player;

    player.y += player.bob_direction * pc.idle_bob_speed * dt;
    if player.y <= center - pc.idle_bob_range {
        player.y = center - pc.idle_bob_range;
        player.bob_direction = 1.0;
    } else if player.y >= center + pc.idle_bob_range {
        player.y = center + pc.idle_bob_range;
        player.bob_direction = -1.0;
    }
    player.animate(dt, pc.anim_fps, pc.frame_count);
}

fn step_running<R: Rng>(world: &mut World, dt: f64, rng: &mut R, events: &mut Vec<SimEvent>) {
    // 1. Player physics
    let grounded = apply_player_physics(world, dt);

    // 2. Spawner: move and cull, then maybe spawn
    for (pair_id, side) in world.spawner.advance_obstacles(&mut world.obstacles, dt) {
        world.scoring.on_destroyed(pair_id);
        events.push(SimEvent::ObstacleDestroyed { pair_id, side });
    }
    let interval_elapsed = world.spawner.timer.advance(world.config.timing.step_ms);
    if let Some(pair) = world.spawner.on_tick(
        interval_elapsed,
        &world.run,
        &world.config,
        &mut world.obstacles,
        rng,
    ) {
        world.scoring.register(&pair);
        events.push(SimEvent::PairSpawned {
            pair_id: pair.id,
            bottom_height: pair.bottom_height,
            top_height: pair.top_height,
        });
    }

    // 3. Scoring
    for score in world
        .scoring
        .on_tick(&world.player, &mut world.obstacles, &mut world.run)
    {
        events.push(SimEvent::Point { score });
        events.push(SimEvent::Sound(SoundCue::Score));
    }

    // 4. Collision and bounds
    if let Some(cause) = detect_crash(world, grounded) {
        end_run(world, cause, events);
    }
}

/// Gravity, integration, animation and ground clamp. Returns true when the
/// player was snapped onto the ground this step.
fn apply_player_physics(world: &mut World, dt: f64) -> bool {
    let pc = &world.config.player;
    let ground_top = world.config.world.ground_top();
    let player = &mut world.player;

    player.velocity_y = (player.velocity_y + pc.gravity * dt).min(pc.max_fall_speed);
    player.y += player.velocity_y * dt;
    player.animate(dt, pc.anim_fps, pc.frame_count);

    if player.y + player.half_height() > ground_top {
        player.y = ground_top - player.half_height();
        player.velocity_y = 0.0;
        return true;
    }
    false
}

fn detect_crash(world: &World, grounded: bool) -> Option<CrashCause> {
    let bounds = world.player.bounds();
    if world.obstacles.iter().any(|o| bounds.overlaps(&o.bounds())) {
        Some(CrashCause::Obstacle)
    } else if grounded {
        Some(CrashCause::Ground)
    } else if world.player.y <= 0.0 {
        Some(CrashCause::Ceiling)
    } else {
        None
    }
}

impl GameLoop for World {
    fn load(&mut self, catalog: &AssetCatalog) -> Result<LoadedAssets, AssetError> {
        let assets = catalog.preload(self.config.player.frame_count)?;
        info!("loaded {} assets", catalog.len());
        Ok(assets)
    }

    fn initialize(&mut self) {
        self.reset_run();
        self.inputs.clear();
        self.background_offset = 0.0;
        self.step_count = 0;
    }

    fn tick(&mut self, dt_ms: u64, rng: &mut impl Rng) -> Vec<SimEvent> {
        tick_world(self, dt_ms, rng)
    }
}
