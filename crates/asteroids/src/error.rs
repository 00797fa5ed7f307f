//! Top-level error type

use arcade_engine::config::ConfigError;
use thiserror::Error;

use crate::assets::AssetError;
use crate::leaderboard::LeaderboardError;

/// Anything that can stop the game outside the tick loop
#[derive(Error, Debug)]
pub enum GameError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Required assets are missing
    #[error(transparent)]
    Assets(#[from] AssetError),

    /// Leaderboard could not be read or written
    #[error(transparent)]
    Leaderboard(#[from] LeaderboardError),
}
