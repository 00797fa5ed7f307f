//! Missiles

use arcade_engine::ecs::Entity;
use arcade_engine::foundation::math::{heading, Vec2};

use crate::audio::AudioCue;
use crate::components::{Body, EntityKind, GameEntity, Health, Missile};
use crate::simulation::{GameEvent, Simulation};

impl Simulation {
    /// Launch a missile from the nose of a ship at `ship_position` facing
    /// `ship_angle`. The missile ignores the ship's own velocity.
    pub(crate) fn spawn_missile(&mut self, ship_position: Vec2, ship_angle: f32) -> Entity {
        let tuning = self.config.missile;
        let facing = heading(ship_angle);
        let position = self.field.wrap(ship_position + facing * tuning.nose_buffer);
        let body = Body::at(position, tuning.radius)
            .with_velocity(facing * tuning.speed)
            .with_angle(ship_angle);
        let missile = Missile {
            remaining_lifetime: tuning.lifetime.max(1),
        };

        let id = self
            .world
            .spawn(GameEntity::new(EntityKind::Missile(missile), body, Health::new(1)));
        self.events.push(GameEvent::Cue(AudioCue::Fire));
        log::debug!("Missile fired at ({:.1}, {:.1}) heading {:.0}", position.x, position.y, ship_angle);
        id
    }

    pub(crate) fn missile_died(&mut self, entity: Entity, position: Vec2) {
        self.spawn_explosion(position);
        self.destroy(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::input::ControlState;
    use approx::assert_relative_eq;

    #[test]
    fn test_missile_starts_ahead_of_ship() {
        let mut sim = Simulation::with_seed(GameConfig::default(), 5);
        let missile = sim.spawn_missile(Vec2::new(100.0, 100.0), 90.0);
        let body = sim.entity(missile).unwrap().body;
        assert_relative_eq!(body.position.x, 140.0, epsilon = 1e-4);
        assert_relative_eq!(body.position.y, 100.0, epsilon = 1e-4);
        assert_relative_eq!(body.velocity.x, 12.0, epsilon = 1e-4);
        assert_relative_eq!(body.velocity.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_spawn_position_wraps() {
        let mut sim = Simulation::with_seed(GameConfig::default(), 5);
        let missile = sim.spawn_missile(Vec2::new(320.0, 10.0), 0.0);
        let body = sim.entity(missile).unwrap().body;
        assert_relative_eq!(body.position.y, 450.0, epsilon = 1e-4);
    }

    #[test]
    fn test_missile_expires_silently() {
        let mut sim = Simulation::with_seed(GameConfig::default(), 5);
        sim.phase = crate::director::Phase::GameOver;
        let missile = sim.spawn_missile(Vec2::new(320.0, 240.0), 0.0);
        sim.drain_events();
        let idle = ControlState::default();
        for _ in 0..29 {
            sim.tick(&idle);
        }
        assert!(sim.entity(missile).is_some());
        sim.tick(&idle);
        assert!(sim.entity(missile).is_none());
        assert_eq!(sim.score(), 0);
        assert!(!sim.drain_events().contains(&GameEvent::Cue(AudioCue::Explosion)));
    }

    #[test]
    fn test_fired_missile_gets_full_lifetime() {
        let mut sim = Simulation::with_seed(GameConfig::default(), 5);
        sim.phase = crate::director::Phase::GameOver;
        sim.tick(&ControlState {
            fire: true,
            ..ControlState::default()
        });
        let missile = sim
            .entities()
            .find(|(_, e)| matches!(e.kind, EntityKind::Missile(_)))
            .map(|(id, _)| id)
            .unwrap();
        match &sim.entity(missile).unwrap().kind {
            EntityKind::Missile(m) => assert_eq!(m.remaining_lifetime, 30),
            other => panic!("expected missile, got {other:?}"),
        }

        // present for 30 collision passes, gone on the 31st tick
        let idle = ControlState::default();
        for _ in 0..29 {
            sim.tick(&idle);
        }
        assert!(sim.entity(missile).is_some());
        sim.tick(&idle);
        assert!(sim.entity(missile).is_none());
    }
}
