//! Physics module for overlap detection
//!
//! Circle-vs-circle overlap on the toroidal playfield, filtered by
//! collision layers.

pub mod collision;
pub mod collision_layers;

pub use collision::{overlapping_pairs, BoundingCircle, Collider, CollisionPair};
pub use collision_layers::CollisionLayers;
