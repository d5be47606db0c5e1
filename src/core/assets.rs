//! Asset catalog.
//!
//! Images are single-cell terminal glyphs with a color and audio clips are
//! bell flags, so the whole catalog fits in a small JSON manifest. Every name
//! the game draws or plays is resolved once in the load phase; a missing or
//! mistyped asset aborts startup.

use crate::core::error::{AssetError, AssetKind};
use crate::flappy::events::SoundCue;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const BACKGROUND: &str = "background";
pub const PILLAR: &str = "pillar";
pub const PILLAR_CAP: &str = "pillar_cap";
pub const GROUND: &str = "ground";
pub const BIRD_FRAME_PREFIX: &str = "bird";

/// Catalog entry as written in a manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssetSpec {
    Image { glyph: String, color: String },
    Audio { bell: bool },
}

impl AssetSpec {
    fn image(glyph: &str, color: &str) -> Self {
        AssetSpec::Image {
            glyph: glyph.to_string(),
            color: color.to_string(),
        }
    }
}

/// A resolved image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub glyph: char,
    pub color: Color,
}

/// A resolved audio clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundClip {
    /// Ring the terminal bell when played.
    pub bell: bool,
}

/// Named assets available to the game.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    entries: BTreeMap<String, AssetSpec>,
}

impl AssetCatalog {
    /// A catalog with nothing in it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The assets the game ships with.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        catalog.insert(BACKGROUND, AssetSpec::image("·", "darkgray"));
        catalog.insert(PILLAR, AssetSpec::image("█", "green"));
        catalog.insert(PILLAR_CAP, AssetSpec::image("▓", "lightgreen"));
        catalog.insert(GROUND, AssetSpec::image("▒", "yellow"));
        catalog.insert("bird1", AssetSpec::image("◆", "lightyellow"));
        catalog.insert("bird2", AssetSpec::image("◈", "lightyellow"));
        catalog.insert("bird3", AssetSpec::image("◇", "lightyellow"));
        catalog.insert(SoundCue::Flap.asset_name(), AssetSpec::Audio { bell: false });
        catalog.insert(SoundCue::Score.asset_name(), AssetSpec::Audio { bell: true });
        catalog.insert(SoundCue::Hit.asset_name(), AssetSpec::Audio { bell: true });
        catalog.insert(SoundCue::Die.asset_name(), AssetSpec::Audio { bell: false });
        catalog
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, name: impl Into<String>, spec: AssetSpec) {
        self.entries.insert(name.into(), spec);
    }

    pub fn get(&self, name: &str) -> Option<&AssetSpec> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlay the entries of a JSON manifest (`{"name": {"kind": ...}}`).
    pub fn merge_manifest(&mut self, path: &Path) -> Result<usize, AssetError> {
        let text = fs::read_to_string(path).map_err(|source| AssetError::ManifestIo {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: BTreeMap<String, AssetSpec> =
            serde_json::from_str(&text).map_err(|source| AssetError::ManifestParse {
                path: path.to_path_buf(),
                source,
            })?;
        let count = manifest.len();
        self.entries.extend(manifest);
        Ok(count)
    }

    /// Resolve an image asset.
    pub fn resolve_image(&self, name: &str) -> Result<Sprite, AssetError> {
        match self.lookup(name)? {
            AssetSpec::Image { glyph, color } => {
                let glyph = glyph.chars().next().ok_or_else(|| AssetError::EmptyGlyph {
                    name: name.to_string(),
                })?;
                let color = Color::from_str(color).map_err(|_| AssetError::InvalidColor {
                    name: name.to_string(),
                    color: color.clone(),
                })?;
                Ok(Sprite { glyph, color })
            }
            AssetSpec::Audio { .. } => Err(AssetError::WrongKind {
                name: name.to_string(),
                expected: AssetKind::Image,
            }),
        }
    }

    /// Resolve an audio asset.
    pub fn resolve_audio(&self, name: &str) -> Result<SoundClip, AssetError> {
        match self.lookup(name)? {
            AssetSpec::Audio { bell } => Ok(SoundClip { bell: *bell }),
            AssetSpec::Image { .. } => Err(AssetError::WrongKind {
                name: name.to_string(),
                expected: AssetKind::Audio,
            }),
        }
    }

    /// Resolve everything the game needs, failing on the first bad entry.
    pub fn preload(&self, bird_frames: usize) -> Result<LoadedAssets, AssetError> {
        let frames = (1..=bird_frames.max(1))
            .map(|i| self.resolve_image(&format!("{}{}", BIRD_FRAME_PREFIX, i)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut sounds = BTreeMap::new();
        for cue in SoundCue::ALL {
            sounds.insert(cue, self.resolve_audio(cue.asset_name())?);
        }

        Ok(LoadedAssets {
            background: self.resolve_image(BACKGROUND)?,
            pillar: self.resolve_image(PILLAR)?,
            pillar_cap: self.resolve_image(PILLAR_CAP)?,
            ground: self.resolve_image(GROUND)?,
            bird_frames: frames,
            sounds,
        })
    }

    fn lookup(&self, name: &str) -> Result<&AssetSpec, AssetError> {
        self.entries.get(name).ok_or_else(|| AssetError::Missing {
            name: name.to_string(),
        })
    }
}

/// Everything the frontend draws or plays, resolved up front.
#[derive(Debug, Clone)]
pub struct LoadedAssets {
    pub background: Sprite,
    pub pillar: Sprite,
    pub pillar_cap: Sprite,
    pub ground: Sprite,
    pub bird_frames: Vec<Sprite>,
    sounds: BTreeMap<SoundCue, SoundClip>,
}

impl LoadedAssets {
    /// Sprite for an animation frame index; wraps around.
    pub fn bird_frame(&self, frame: usize) -> Sprite {
        self.bird_frames[frame % self.bird_frames.len()]
    }

    pub fn sound(&self, cue: SoundCue) -> SoundClip {
        self.sounds
            .get(&cue)
            .copied()
            .unwrap_or(SoundClip { bell: false })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_preloads() {
        let assets = AssetCatalog::builtin().preload(3).unwrap();
        assert_eq!(assets.bird_frames.len(), 3);
        assert_eq!(assets.pillar.glyph, '█');
        assert_eq!(assets.pillar.color, Color::Green);
        assert!(assets.sound(SoundCue::Score).bell);
        assert!(!assets.sound(SoundCue::Flap).bell);
    }

    #[test]
    fn test_bird_frame_wraps() {
        let assets = AssetCatalog::builtin().preload(3).unwrap();
        assert_eq!(assets.bird_frame(4), assets.bird_frame(1));
    }

    #[test]
    fn test_missing_frame_is_fatal() {
        // builtin only ships three frames
        match AssetCatalog::builtin().preload(4) {
            Err(AssetError::Missing { name }) => assert_eq!(name, "bird4"),
            other => panic!("expected Missing, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_sound_is_fatal() {
        let mut catalog = AssetCatalog::builtin();
        catalog.entries.remove("die");
        assert!(matches!(
            catalog.preload(3),
            Err(AssetError::Missing { ref name }) if name == "die"
        ));
    }

    #[test]
    fn test_wrong_kind() {
        let mut catalog = AssetCatalog::builtin();
        catalog.insert("flap", AssetSpec::image("x", "red"));
        assert!(matches!(
            catalog.resolve_audio("flap"),
            Err(AssetError::WrongKind {
                expected: AssetKind::Audio,
                ..
            })
        ));
    }

    #[test]
    fn test_bad_color() {
        let mut catalog = AssetCatalog::empty();
        catalog.insert(PILLAR, AssetSpec::image("#", "not-a-color"));
        assert!(matches!(
            catalog.resolve_image(PILLAR),
            Err(AssetError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_empty_glyph() {
        let mut catalog = AssetCatalog::empty();
        catalog.insert(GROUND, AssetSpec::image("", "yellow"));
        assert!(matches!(
            catalog.resolve_image(GROUND),
            Err(AssetError::EmptyGlyph { .. })
        ));
    }

    #[test]
    fn test_manifest_format() {
        let manifest: BTreeMap<String, AssetSpec> = serde_json::from_str(
            r##"{
                "pillar": { "kind": "image", "glyph": "#", "color": "magenta" },
                "score": { "kind": "audio", "bell": false }
            }"##,
        )
        .unwrap();
        let mut catalog = AssetCatalog::builtin();
        catalog.entries.extend(manifest);
        let assets = catalog.preload(3).unwrap();
        assert_eq!(assets.pillar.glyph, '#');
        assert_eq!(assets.pillar.color, Color::Magenta);
        assert!(!assets.sound(SoundCue::Score).bell);
    }
}
