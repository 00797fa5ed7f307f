//! World implementation

use super::Entity;
use slotmap::SlotMap;

/// Owning store for every live entity of one simulation.
///
/// `T` is the game's entity record. Removal is idempotent: removing a handle
/// that is already gone returns `None` and changes nothing.
pub struct World<T> {
    entities: SlotMap<Entity, T>,
    spawned: u64,
    despawned: u64,
}

impl<T> World<T> {
    /// Create an empty world
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
            spawned: 0,
            despawned: 0,
        }
    }

    /// Add an entity and return its handle
    pub fn spawn(&mut self, entity: T) -> Entity {
        self.spawned += 1;
        self.entities.insert(entity)
    }

    /// Remove an entity, returning it if it was still alive
    pub fn despawn(&mut self, entity: Entity) -> Option<T> {
        let removed = self.entities.remove(entity);
        if removed.is_some() {
            self.despawned += 1;
        }
        removed
    }

    /// Whether the handle still refers to a live entity
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains_key(entity)
    }

    /// Get an entity
    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.entities.get(entity)
    }

    /// Get a mutable entity
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.entities.get_mut(entity)
    }

    /// Get an iterator over all live entities
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.entities.iter()
    }

    /// Get a mutable iterator over all live entities
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        self.entities.iter_mut()
    }

    /// Snapshot of the live handles, safe to hold while the world is mutated
    pub fn handles(&self) -> Vec<Entity> {
        self.entities.keys().collect()
    }

    /// Total entities ever spawned
    pub fn spawned_count(&self) -> u64 {
        self.spawned
    }

    /// Total entities ever despawned
    pub fn despawned_count(&self) -> u64 {
        self.despawned
    }
}

impl<T> Default for World<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_and_get() {
        let mut world = World::new();
        let e = world.spawn("rock");
        assert_eq!(world.get(e), Some(&"rock"));
        assert_eq!(world.handles(), vec![e]);
    }

    #[test]
    fn test_despawn_is_idempotent() {
        let mut world = World::new();
        let e = world.spawn(1_u32);
        assert_eq!(world.despawn(e), Some(1));
        assert_eq!(world.despawn(e), None);
        assert_eq!(world.despawned_count(), 1);
        assert!(world.handles().is_empty());
    }

    #[test]
    fn test_stale_handle_does_not_alias() {
        let mut world = World::new();
        let old = world.spawn(1_u32);
        world.despawn(old);
        let new = world.spawn(2_u32);
        assert!(!world.contains(old));
        assert_eq!(world.get(new), Some(&2));
        assert_ne!(old.id(), new.id());
    }
}
