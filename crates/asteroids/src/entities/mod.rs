//! Kind-specific behaviour
//!
//! Each module adds an `impl Simulation` block for one entity kind: how it
//! spawns, how it acts during a tick, and what happens when it dies.

mod asteroid;
mod effects;
mod missile;
mod ship;

pub use ship::clamp_velocity;
