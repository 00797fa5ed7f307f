//! Collision layer system for filtering collision detection

use bitflags::bitflags;

bitflags! {
    /// Collision layer bits. An entity sits on one or more layers and
    /// carries a mask of the layers it reacts to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CollisionLayers: u32 {
        /// Player-controlled ship
        const PLAYER = 1 << 0;
        /// Hazards the player must avoid or destroy
        const HAZARD = 1 << 1;
        /// Projectiles fired by the player
        const PROJECTILE = 1 << 2;
    }
}

impl CollisionLayers {
    /// Check if two entities should collide based on their layers and masks.
    ///
    /// Both sides have to opt in: A's mask must include B's layer and B's
    /// mask must include A's layer.
    pub fn should_collide(layer_a: Self, mask_a: Self, layer_b: Self, mask_b: Self) -> bool {
        mask_a.intersects(layer_b) && mask_b.intersects(layer_a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_collide_mutual() {
        assert!(CollisionLayers::should_collide(
            CollisionLayers::PROJECTILE,
            CollisionLayers::HAZARD,
            CollisionLayers::HAZARD,
            CollisionLayers::PLAYER | CollisionLayers::PROJECTILE,
        ));
    }

    #[test]
    fn test_should_not_collide_one_way() {
        // Hazards ignore each other even though the projectile mask would not matter here
        assert!(!CollisionLayers::should_collide(
            CollisionLayers::HAZARD,
            CollisionLayers::PLAYER | CollisionLayers::PROJECTILE,
            CollisionLayers::HAZARD,
            CollisionLayers::PLAYER | CollisionLayers::PROJECTILE,
        ));
        assert!(!CollisionLayers::should_collide(
            CollisionLayers::PLAYER,
            CollisionLayers::HAZARD,
            CollisionLayers::PROJECTILE,
            CollisionLayers::HAZARD,
        ));
    }
}
