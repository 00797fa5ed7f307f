//! Entity storage
//!
//! Entities are generational handles into a [`World`]; a stale handle never
//! aliases a newer entity that reuses the same slot.

pub mod entity;
pub mod world;

pub use entity::Entity;
pub use world::World;
