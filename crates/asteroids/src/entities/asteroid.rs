//! Asteroids
//!
//! The live asteroid counter moves only here: up on every spawn, down on
//! every removal, whether the asteroid was shot or cleared at game over.

use arcade_engine::ecs::Entity;
use arcade_engine::foundation::math::Vec2;
use rand::Rng;

use crate::components::{Asteroid, AsteroidSize, Body, EntityKind, GameEntity, Health};
use crate::director::Phase;
use crate::simulation::{GameEvent, Simulation};

impl Simulation {
    /// Spawn an asteroid at `position` with a random drift.
    ///
    /// The live counter is incremented before the asteroid exists, so a
    /// parent dying and spawning children never lets it touch zero.
    pub fn spawn_asteroid(&mut self, size: AsteroidSize, hit_points: u32, position: Vec2) -> Entity {
        self.live_asteroids += 1;
        let velocity = Vec2::new(self.drift(size), self.drift(size));
        let body = Body::at(self.field.wrap(position), size.radius(&self.config.asteroid)).with_velocity(velocity);
        self.world.spawn(GameEntity::new(
            EntityKind::Asteroid(Asteroid { size }),
            body,
            Health::new(hit_points.max(1)),
        ))
    }

    /// One axis of drift: random sign, magnitude up to `base * 2.5 / scale`
    fn drift(&mut self, size: AsteroidSize) -> f32 {
        let sign = if self.rng.gen::<bool>() { 1.0 } else { -1.0 };
        sign * self.config.asteroid.base_speed * self.rng.gen::<f32>() * 2.5 / size.scale()
    }

    pub(crate) fn asteroid_died(&mut self, entity: Entity, size: AsteroidSize, position: Vec2) {
        let points = size.points(self.config.asteroid.points);
        self.score = self.score.saturating_add(points);
        self.live_asteroids = self.live_asteroids.saturating_sub(1);

        if let Some(child) = size.split_into() {
            for _ in 0..self.config.asteroid.spawn_count {
                self.spawn_asteroid(child, 1, position);
            }
            log::debug!("{:?} asteroid split into {} {:?}", size, self.config.asteroid.spawn_count, child);
        }

        if self.live_asteroids == 0 && self.phase == Phase::Playing {
            self.pending.advance_level = true;
        }

        self.events.push(GameEvent::AsteroidDestroyed { size, points });
        self.spawn_explosion(position);
        self.destroy(entity);
    }

    /// Remove an asteroid without scoring, splitting or counting toward a
    /// level clear. Returns `false` if `entity` is not a live asteroid.
    pub fn totally_die(&mut self, entity: Entity) -> bool {
        if self.world.get(entity).and_then(GameEntity::as_asteroid).is_none() {
            return false;
        }
        self.live_asteroids = self.live_asteroids.saturating_sub(1);
        self.destroy(entity);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioCue;
    use crate::config::GameConfig;

    fn sim() -> Simulation {
        Simulation::with_seed(GameConfig::default(), 11)
    }

    fn count(sim: &Simulation, size: AsteroidSize) -> usize {
        sim.entities()
            .filter(|(_, e)| e.as_asteroid().map(|a| a.size) == Some(size))
            .count()
    }

    #[test]
    fn test_drift_bounded_by_tier() {
        let mut sim = sim();
        for size in [AsteroidSize::Small, AsteroidSize::Medium, AsteroidSize::Large, AsteroidSize::Powerful] {
            let limit = 2.0 * 2.5 / size.scale();
            for _ in 0..50 {
                let id = sim.spawn_asteroid(size, 1, Vec2::new(10.0, 10.0));
                let v = sim.entity(id).unwrap().body.velocity;
                assert!(v.x.abs() <= limit && v.y.abs() <= limit);
            }
        }
    }

    #[test]
    fn test_large_splits_into_two_medium() {
        let mut sim = sim();
        let rock = sim.spawn_asteroid(AsteroidSize::Large, 1, Vec2::new(100.0, 100.0));
        assert!(sim.damage(rock));
        assert_eq!(sim.score(), 10);
        assert_eq!(sim.live_asteroids(), 2);
        assert_eq!(count(&sim, AsteroidSize::Medium), 2);
        let children: Vec<_> = sim
            .entities()
            .filter(|(_, e)| e.as_asteroid().is_some())
            .map(|(_, e)| e.body.position)
            .collect();
        assert!(children.iter().all(|p| *p == Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn test_powerful_takes_three_hits() {
        let mut sim = sim();
        let rock = sim.spawn_asteroid(AsteroidSize::Powerful, 3, Vec2::new(50.0, 50.0));
        assert!(!sim.damage(rock));
        assert!(!sim.damage(rock));
        assert_eq!(sim.score(), 0);
        assert!(sim.damage(rock));
        assert_eq!(sim.score(), 20);
        assert_eq!(sim.live_asteroids(), 0);
        assert_eq!(sim.asteroid_count(), 0);
    }

    #[test]
    fn test_death_queues_explosion() {
        let mut sim = sim();
        let rock = sim.spawn_asteroid(AsteroidSize::Small, 1, Vec2::new(50.0, 50.0));
        sim.damage(rock);
        let events = sim.drain_events();
        assert!(events.contains(&GameEvent::Cue(AudioCue::Explosion)));
        assert!(events.contains(&GameEvent::AsteroidDestroyed { size: AsteroidSize::Small, points: 30 }));
    }

    #[test]
    fn test_totally_die_is_silent() {
        let mut sim = sim();
        let rock = sim.spawn_asteroid(AsteroidSize::Large, 1, Vec2::new(50.0, 50.0));
        sim.drain_events();
        assert!(sim.totally_die(rock));
        assert!(!sim.totally_die(rock));
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.live_asteroids(), 0);
        assert_eq!(sim.entities().count(), 1);
        assert!(sim.drain_events().is_empty());
    }

    #[test]
    fn test_totally_die_rejects_other_kinds() {
        let mut sim = sim();
        let ship = sim.ship().unwrap();
        assert!(!sim.totally_die(ship));
        assert!(sim.entity(ship).is_some());
    }
}
