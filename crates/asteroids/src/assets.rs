//! Game asset definitions
//!
//! The simulation needs no files, but a presentation layer does. The
//! manifest lists every sprite and sound it loads so a missing file stops
//! startup before the first tick instead of failing mid-game.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::audio::AudioCue;
use crate::components::AsteroidSize;

/// Asset errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset root does not exist or is not a directory
    #[error("asset root {0} not found")]
    RootNotFound(PathBuf),

    /// A required file is missing
    #[error("missing asset {path}")]
    Missing {
        /// Full path that was checked
        path: PathBuf,
    },
}

/// Background image
pub const BACKGROUND: &str = "images/nebula.png";

/// Ship sprite
pub const SHIP_SPRITE: &str = "images/ship.bmp";

/// Missile sprite
pub const MISSILE_SPRITE: &str = "images/missile.bmp";

/// Explosion animation frames, in order
pub const EXPLOSION_FRAMES: [&str; 9] = [
    "images/explosion1.bmp",
    "images/explosion2.bmp",
    "images/explosion3.bmp",
    "images/explosion4.bmp",
    "images/explosion5.bmp",
    "images/explosion6.bmp",
    "images/explosion7.bmp",
    "images/explosion8.bmp",
    "images/explosion9.bmp",
];

/// Sprite for an asteroid tier
pub const fn asteroid_sprite(size: AsteroidSize) -> &'static str {
    match size {
        AsteroidSize::Small => "images/asteroid_small.bmp",
        AsteroidSize::Medium => "images/asteroid_med.bmp",
        AsteroidSize::Large => "images/asteroid_big.bmp",
        AsteroidSize::Powerful => "images/asteroid_powerful.bmp",
    }
}

/// Files the presentation layer loads at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    entries: Vec<PathBuf>,
}

impl AssetManifest {
    /// Manifest with explicit entries
    pub fn new(entries: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Relative paths in the manifest
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Check every entry exists under `root`, failing on the first gap
    pub fn verify(&self, root: &Path) -> Result<(), AssetError> {
        if !root.is_dir() {
            return Err(AssetError::RootNotFound(root.to_path_buf()));
        }
        for entry in &self.entries {
            let path = root.join(entry);
            if !path.is_file() {
                return Err(AssetError::Missing { path });
            }
        }
        log::info!("Verified {} assets under {}", self.entries.len(), root.display());
        Ok(())
    }
}

impl Default for AssetManifest {
    fn default() -> Self {
        let sprites = [
            BACKGROUND,
            SHIP_SPRITE,
            MISSILE_SPRITE,
            asteroid_sprite(AsteroidSize::Small),
            asteroid_sprite(AsteroidSize::Medium),
            asteroid_sprite(AsteroidSize::Large),
            asteroid_sprite(AsteroidSize::Powerful),
        ];
        let sounds = [
            AudioCue::Theme,
            AudioCue::Thrust,
            AudioCue::Fire,
            AudioCue::Explosion,
            AudioCue::LevelUp,
        ]
        .map(AudioCue::asset);

        Self::new(sprites.into_iter().chain(EXPLOSION_FRAMES).chain(sounds))
    }
}
