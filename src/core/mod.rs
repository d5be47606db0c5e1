//! Configuration, errors, assets and the lifecycle contract.

pub mod assets;
pub mod config;
pub mod constants;
pub mod error;
pub mod game_loop;
pub mod logging;

pub use config::{GameConfig, PillarLayout};
pub use error::{AssetError, ConfigError, GameError};
pub use game_loop::GameLoop;
