//! # Arcade Engine
//!
//! Game-agnostic pieces of a 2D arcade simulation:
//!
//! - **Foundation**: vector math, toroidal playfield wrap, fixed timestep, logging
//! - **ECS**: generational entity storage
//! - **Physics**: circle overlap and collision layers
//! - **Events**: deferred event queue
//! - **Config**: TOML/RON configuration files

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod ecs;
pub mod events;
pub mod foundation;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        ecs::{Entity, World},
        events::EventQueue,
        foundation::{
            math::{heading, Edges, Playfield, Vec2},
            time::{FixedTimestep, Timer},
        },
        physics::{overlapping_pairs, BoundingCircle, Collider, CollisionLayers, CollisionPair},
    };
}
