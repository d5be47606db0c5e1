//! Skyflap - terminal Flappy Bird
//!
//! The library holds the engine-independent simulation and its startup
//! plumbing. The terminal frontend lives in the binary.

pub mod audio;
pub mod build_info;
pub mod core;
pub mod flappy;

pub use crate::core::{GameConfig, GameLoop};
pub use flappy::{SimEvent, SimInput, World};
