//! Game configuration
//!
//! Every tunable of the simulation lives here. Defaults reproduce the
//! classic feel: a 640x480 field stepped 50 times per second, with speeds
//! expressed in units per tick.

use std::path::{Path, PathBuf};

use arcade_engine::config::{Config, ConfigError};
use arcade_engine::foundation::math::Playfield;
use serde::{Deserialize, Serialize};

/// Default location of the configuration file, relative to the working directory
pub const CONFIG_PATH: &str = "asteroids.toml";

/// Top-level game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield size and tick rate
    pub playfield: PlayfieldConfig,

    /// Player ship handling
    pub ship: ShipConfig,

    /// Missile behaviour
    pub missile: MissileConfig,

    /// Asteroid tiers and scoring
    pub asteroid: AsteroidConfig,

    /// Level progression
    pub level: LevelConfig,

    /// Visual effects timing
    pub effects: EffectsConfig,

    /// Leaderboard name entry
    pub name_entry: NameEntryConfig,

    /// Leaderboard storage
    pub leaderboard: LeaderboardConfig,

    /// Presentation assets
    pub assets: AssetsConfig,

    /// Headless session settings
    pub session: SessionConfig,
}

/// Playfield configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldConfig {
    /// Width in world units
    pub width: f32,

    /// Height in world units
    pub height: f32,

    /// Simulation ticks per second
    pub tick_rate: u32,
}

/// Ship configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Degrees turned per tick while a turn input is held
    pub rotation_step: f32,

    /// Velocity added per tick of thrust
    pub velocity_step: f32,

    /// Per-axis velocity cap
    pub velocity_max: f32,

    /// Ticks between missile launches
    pub missile_delay: u32,

    /// Collision radius
    pub radius: f32,

    /// Hit points; one collision is fatal by default
    pub hit_points: u32,
}

/// Missile configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissileConfig {
    /// Distance ahead of the ship's center where missiles appear
    pub nose_buffer: f32,

    /// Speed along the firing angle, units per tick
    pub speed: f32,

    /// Ticks before a missile expires
    pub lifetime: u32,

    /// Collision radius
    pub radius: f32,
}

/// Asteroid configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidConfig {
    /// Speed scale shared by every tier
    pub base_speed: f32,

    /// Score numerator; a kill awards `points / tier size`
    pub points: u32,

    /// Children spawned when a splittable asteroid dies
    pub spawn_count: u32,

    /// Hit points of powerful asteroids placed at level start
    pub powerful_hit_points: u32,

    /// Collision radius of small asteroids
    pub small_radius: f32,

    /// Collision radius of medium asteroids
    pub medium_radius: f32,

    /// Collision radius of large asteroids
    pub large_radius: f32,

    /// Collision radius of powerful asteroids
    pub powerful_radius: f32,
}

/// Level progression configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Reserved space around the ship when placing new asteroids
    pub spawn_buffer: f32,

    /// How long the "Level N" banner stays up, in seconds
    pub level_banner_seconds: f32,

    /// How long the "Game over" banner stays up, in seconds
    pub game_over_banner_seconds: f32,
}

/// Effect timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Frames in the explosion animation
    pub explosion_frames: u32,

    /// Ticks each explosion frame is shown
    pub explosion_frame_ticks: u32,
}

/// Name entry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameEntryConfig {
    /// Fixed prompt shown before the name
    pub prompt: String,

    /// Maximum length of prompt plus name, in characters
    pub max_line_length: usize,

    /// Ticks a held key must wait before it registers again
    pub repeat_delay: u32,

    /// Name recorded when the player confirms without typing
    pub default_name: String,
}

/// Leaderboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    /// Flat score file
    pub path: PathBuf,

    /// Entries shown on the leaderboard
    pub top_count: usize,
}

/// Asset configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding `images/` and `sounds/`; verified at startup when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

/// Headless session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Stop the headless run after this many ticks
    pub max_ticks: u64,

    /// Fixed RNG seed for reproducible runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Pace ticks against the wall clock instead of running flat out
    pub realtime: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield: PlayfieldConfig::default(),
            ship: ShipConfig::default(),
            missile: MissileConfig::default(),
            asteroid: AsteroidConfig::default(),
            level: LevelConfig::default(),
            effects: EffectsConfig::default(),
            name_entry: NameEntryConfig::default(),
            leaderboard: LeaderboardConfig::default(),
            assets: AssetsConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            tick_rate: 50,
        }
    }
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            rotation_step: 5.0,
            velocity_step: 0.07,
            velocity_max: 4.0,
            missile_delay: 20,
            radius: 20.0,
            hit_points: 1,
        }
    }
}

impl Default for MissileConfig {
    fn default() -> Self {
        Self {
            nose_buffer: 40.0,
            speed: 12.0,
            lifetime: 30,
            radius: 4.0,
        }
    }
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            base_speed: 2.0,
            points: 30,
            spawn_count: 2,
            powerful_hit_points: 3,
            small_radius: 12.0,
            medium_radius: 24.0,
            large_radius: 40.0,
            powerful_radius: 30.0,
        }
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            spawn_buffer: 150.0,
            level_banner_seconds: 3.0,
            game_over_banner_seconds: 1.0,
        }
    }
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            explosion_frames: 9,
            explosion_frame_ticks: 2,
        }
    }
}

impl Default for NameEntryConfig {
    fn default() -> Self {
        Self {
            prompt: "Enter your name: ".to_string(),
            max_line_length: 25,
            repeat_delay: 5,
            default_name: "PLAYER".to_string(),
        }
    }
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("database/scores.txt"),
            top_count: 3,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_ticks: 50 * 60 * 10,
            seed: None,
            realtime: false,
        }
    }
}

impl Config for GameConfig {}

impl PlayfieldConfig {
    /// Playfield geometry for the simulation
    pub const fn playfield(&self) -> Playfield {
        Playfield::new(self.width, self.height)
    }

    /// Convert a duration in seconds to whole ticks
    pub fn ticks(&self, seconds: f32) -> u32 {
        (seconds * self.tick_rate as f32).round().max(1.0) as u32
    }
}

impl EffectsConfig {
    /// Total ticks an explosion stays on screen
    pub const fn explosion_ticks(&self) -> u32 {
        self.explosion_frames * self.explosion_frame_ticks
    }
}

impl GameConfig {
    /// Load configuration from `path`, or defaults if the file doesn't exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let config = Self::load_from_file(path)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let field = &self.playfield;
        if field.width <= 0.0 || field.height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "playfield must be non-empty, got {}x{}",
                field.width, field.height
            )));
        }
        if field.tick_rate == 0 {
            return Err(ConfigError::Invalid("tick_rate must be positive".to_string()));
        }
        if self.ship.hit_points == 0 {
            return Err(ConfigError::Invalid("ship hit_points must be positive".to_string()));
        }
        if self.effects.explosion_ticks() == 0 {
            return Err(ConfigError::Invalid("explosion must last at least one tick".to_string()));
        }
        if self.name_entry.prompt.chars().count() > self.name_entry.max_line_length {
            return Err(ConfigError::Invalid(format!(
                "prompt {:?} is longer than max_line_length {}",
                self.name_entry.prompt, self.name_entry.max_line_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_ticks_from_seconds() {
        let field = PlayfieldConfig::default();
        assert_eq!(field.ticks(3.0), 150);
        assert_eq!(field.ticks(1.0), 50);
        assert_eq!(field.ticks(0.0), 1);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_file_overrides_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("asteroids.toml");
        std::fs::write(&path, "[ship]\nmissile_delay = 7\n\n[session]\nseed = 42\n").unwrap();
        let config = GameConfig::load_or_default(&path).unwrap();
        assert_eq!(config.ship.missile_delay, 7);
        assert_eq!(config.ship.velocity_max, 4.0);
        assert_eq!(config.session.seed, Some(42));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("asteroids.toml");
        let mut config = GameConfig::default();
        config.level.spawn_buffer = 90.0;
        config.save_to_file(&path).unwrap();
        assert_eq!(GameConfig::load_or_default(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_playfield_rejected() {
        let mut config = GameConfig::default();
        config.playfield.width = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_prompt_longer_than_line_rejected() {
        let mut config = GameConfig::default();
        config.name_entry.max_line_length = 4;
        assert!(config.validate().is_err());
    }
}
