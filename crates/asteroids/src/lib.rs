//! # Asteroids
//!
//! Simulation core of a wrap-around space shooter. The ship turns, thrusts
//! and fires; asteroids split when shot; clearing the field starts the next
//! level; losing the ship ends the run and records it on a leaderboard.
//!
//! Rendering, sound playback and keyboard handling stay outside: the
//! simulation takes [`input::ControlState`] per tick and hands back
//! [`snapshot::RenderSnapshot`]s and queued [`simulation::GameEvent`]s.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod audio;
pub mod autopilot;
pub mod collision;
pub mod components;
pub mod config;
pub mod director;
pub mod entities;
pub mod error;
pub mod input;
pub mod leaderboard;
pub mod session;
pub mod simulation;
pub mod snapshot;

/// Common imports for game users
pub mod prelude {
    pub use crate::{
        audio::{AudioCue, AudioSink, LogAudioSink},
        components::{AsteroidSize, EntityKind, GameEntity},
        config::GameConfig,
        director::Phase,
        error::GameError,
        input::{ControlState, FrameInput, TextKey},
        leaderboard::{FileLeaderboard, LeaderboardStore, MemoryLeaderboard, ScoreRecord},
        session::Session,
        simulation::{GameEvent, Simulation},
        snapshot::RenderSnapshot,
    };
}
