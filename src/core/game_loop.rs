//! Lifecycle hooks shared by the terminal host and headless drivers.
//!
//! The host calls `load` once, `initialize` once, and then `tick` every
//! frame. Tests and benchmarks drive the same trait without a terminal.

use crate::core::assets::{AssetCatalog, LoadedAssets};
use crate::core::error::AssetError;
use crate::flappy::events::SimEvent;
use rand::Rng;

pub trait GameLoop {
    /// Resolve every asset the game will draw or play.
    fn load(&mut self, catalog: &AssetCatalog) -> Result<LoadedAssets, AssetError>;

    /// Put the game into a fresh, idle run.
    fn initialize(&mut self);

    /// Apply queued input and advance the simulation by `dt_ms` of real time.
    /// Returns what happened, in order.
    fn tick(&mut self, dt_ms: u64, rng: &mut impl Rng) -> Vec<SimEvent>;
}
