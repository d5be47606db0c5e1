//! Error types for startup: configuration, assets, and the terminal host.
//!
//! Nothing in here is raised while a run is in progress. Collisions, bounds
//! and pairing are state transitions, not errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The configuration could not be read or describes an impossible world.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config file {path} is not valid JSON")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// What kind of asset a name was expected to resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Audio,
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Image => write!(f, "image"),
            AssetKind::Audio => write!(f, "audio"),
        }
    }
}

/// An asset required by the game could not be resolved. Always fatal.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("missing asset `{name}`")]
    Missing { name: String },
    #[error("asset `{name}` is not an {expected} asset")]
    WrongKind { name: String, expected: AssetKind },
    #[error("asset `{name}` has unknown color `{color}`")]
    InvalidColor { name: String, color: String },
    #[error("asset `{name}` has an empty glyph")]
    EmptyGlyph { name: String },
    #[error("could not read asset manifest {path}")]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("asset manifest {path} is not valid JSON")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level error for the `skyflap` binary.
#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error("terminal error")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Usage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_message_names_field() {
        let err = ConfigError::invalid("world.width", "must be positive, got -1");
        assert_eq!(
            err.to_string(),
            "invalid config value `world.width`: must be positive, got -1"
        );
    }

    #[test]
    fn test_wrong_kind_message() {
        let err = AssetError::WrongKind {
            name: "flap".to_string(),
            expected: AssetKind::Audio,
        };
        assert_eq!(err.to_string(), "asset `flap` is not an audio asset");
    }

    #[test]
    fn test_game_error_is_transparent_for_assets() {
        let err: GameError = AssetError::Missing {
            name: "bird1".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "missing asset `bird1`");
    }
}
