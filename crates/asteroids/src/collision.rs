//! Collision resolution
//!
//! Pairs are found against the positions after this tick's motion. Each
//! pair damages both sides by one before either side's death runs, so a
//! missile and the small asteroid it hits always die together.

use arcade_engine::physics::{overlapping_pairs, Collider, CollisionPair};

use crate::simulation::Simulation;

impl Simulation {
    /// Resolve every overlapping pair once. Returns the number of pairs
    /// that dealt damage.
    ///
    /// Entities removed by an earlier pair in the same pass are skipped;
    /// entities spawned during the pass (asteroid fragments) wait for the
    /// next tick.
    pub(crate) fn resolve_collisions(&mut self) -> usize {
        let colliders: Vec<Collider> = self
            .world
            .iter()
            .filter_map(|(id, entity)| entity.collider(id))
            .collect();
        let pairs = overlapping_pairs(&colliders, &self.field);

        let mut resolved = 0;
        for CollisionPair { a, b } in pairs {
            if !self.world.contains(a) || !self.world.contains(b) {
                continue;
            }
            let a_died = self.wound(a);
            let b_died = self.wound(b);
            if a_died {
                self.on_death(a);
            }
            if b_died {
                self.on_death(b);
            }
            resolved += 1;
        }

        if resolved > 0 {
            log::trace!("Resolved {} collisions on tick {}", resolved, self.tick_count());
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::AsteroidSize;
    use crate::config::GameConfig;
    use crate::director::Phase;
    use arcade_engine::foundation::math::Vec2;

    fn playing() -> Simulation {
        let mut sim = Simulation::with_seed(GameConfig::default(), 21);
        sim.phase = Phase::Playing;
        sim
    }

    fn hold_still(sim: &mut Simulation, entity: arcade_engine::ecs::Entity) {
        if let Some(record) = sim.world.get_mut(entity) {
            record.body.velocity = Vec2::zeros();
        }
    }

    #[test]
    fn test_missile_and_small_die_together() {
        let mut sim = playing();
        let rock = sim.spawn_asteroid(AsteroidSize::Small, 1, Vec2::new(100.0, 100.0));
        sim.spawn_asteroid(AsteroidSize::Large, 1, Vec2::new(500.0, 400.0));
        let missile = sim.spawn_missile(Vec2::new(100.0, 140.0), 0.0);
        hold_still(&mut sim, missile);

        assert_eq!(sim.resolve_collisions(), 1);
        assert!(sim.entity(rock).is_none());
        assert!(sim.entity(missile).is_none());
        assert_eq!(sim.score(), 30);
        assert_eq!(sim.live_asteroids(), 1);
    }

    #[test]
    fn test_asteroids_pass_through_each_other() {
        let mut sim = playing();
        let a = sim.spawn_asteroid(AsteroidSize::Large, 1, Vec2::new(50.0, 50.0));
        let b = sim.spawn_asteroid(AsteroidSize::Large, 1, Vec2::new(55.0, 50.0));
        assert_eq!(sim.resolve_collisions(), 0);
        assert!(sim.entity(a).is_some() && sim.entity(b).is_some());
    }

    #[test]
    fn test_overlap_across_the_wrap() {
        let mut sim = playing();
        let rock = sim.spawn_asteroid(AsteroidSize::Small, 1, Vec2::new(2.0, 200.0));
        let missile = sim.spawn_missile(Vec2::new(638.0, 240.0), 0.0);
        assert_eq!(sim.resolve_collisions(), 1);
        assert!(sim.entity(rock).is_none());
        assert!(sim.entity(missile).is_none());
    }

    #[test]
    fn test_fragments_wait_for_next_pass() {
        let mut sim = playing();
        let rock = sim.spawn_asteroid(AsteroidSize::Medium, 1, Vec2::new(100.0, 100.0));
        let missile = sim.spawn_missile(Vec2::new(100.0, 140.0), 0.0);
        hold_still(&mut sim, missile);
        let second = sim.spawn_missile(Vec2::new(100.0, 140.0), 0.0);

        // first missile kills the medium; the second had a pair with it too
        assert_eq!(sim.resolve_collisions(), 1);
        assert!(sim.entity(rock).is_none());
        assert!(sim.entity(second).is_some());
        assert_eq!(sim.live_asteroids(), 2);
    }

    #[test]
    fn test_ship_collision_ends_run_at_transition() {
        let mut sim = playing();
        let ship = sim.ship().unwrap();
        let centre = sim.playfield().center();
        sim.spawn_asteroid(AsteroidSize::Powerful, 3, centre);

        sim.resolve_collisions();
        assert!(sim.entity(ship).is_none());
        assert_eq!(sim.phase(), Phase::Playing);
        assert_eq!(sim.live_asteroids(), 1);

        sim.apply_transitions();
        assert_eq!(sim.phase(), Phase::GameOver);
        assert_eq!(sim.live_asteroids(), 0);
    }
}
