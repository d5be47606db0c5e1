//! Flappy simulation core.
//!
//! A bird falls under gravity and flaps upward on input while pillar pairs
//! scroll in from the right. Clearing a pair scores a point; touching a
//! pillar, the ground or the top of the sky ends the run. Nothing in here
//! draws, plays audio or reads devices.

pub mod events;
pub mod input;
pub mod logic;
pub mod scoring;
pub mod spawner;
pub mod types;
pub mod world;

pub use events::{SimEvent, SoundCue};
pub use input::{InputQueue, SimInput};
pub use logic::{process_input, tick_world};
pub use types::*;
pub use world::World;
