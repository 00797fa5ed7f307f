//! Circle overlap tests and pair detection

use super::CollisionLayers;
use crate::ecs::Entity;
use crate::foundation::math::{Playfield, Vec2};

/// A bounding circle in playfield coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingCircle {
    /// Center position
    pub center: Vec2,
    /// Radius
    pub radius: f32,
}

impl BoundingCircle {
    /// Creates a new bounding circle
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Whether two circles overlap, measuring across the wrapped edges.
    /// Touching circles count as overlapping.
    pub fn overlaps(&self, other: &Self, field: &Playfield) -> bool {
        let reach = self.radius + other.radius;
        field.delta(self.center, other.center).magnitude_squared() <= reach * reach
    }
}

/// Everything pair detection needs to know about one collidable entity
#[derive(Debug, Clone, Copy)]
pub struct Collider {
    /// Owning entity
    pub entity: Entity,
    /// World-space bounds
    pub bounds: BoundingCircle,
    /// Layers this entity sits on
    pub layer: CollisionLayers,
    /// Layers this entity reacts to
    pub mask: CollisionLayers,
}

/// Two entities whose bounds overlap this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionPair {
    /// First participant
    pub a: Entity,
    /// Second participant
    pub b: Entity,
}

/// Find every overlapping pair among `colliders`.
///
/// Brute force; entity counts in an arcade field stay in the dozens. Each
/// unordered pair is reported at most once, in input order.
pub fn overlapping_pairs(colliders: &[Collider], field: &Playfield) -> Vec<CollisionPair> {
    let mut pairs = Vec::new();
    for (i, a) in colliders.iter().enumerate() {
        for b in &colliders[i + 1..] {
            if !CollisionLayers::should_collide(a.layer, a.mask, b.layer, b.mask) {
                continue;
            }
            if a.bounds.overlaps(&b.bounds, field) {
                pairs.push(CollisionPair {
                    a: a.entity,
                    b: b.entity,
                });
            }
        }
    }
    pairs
}
