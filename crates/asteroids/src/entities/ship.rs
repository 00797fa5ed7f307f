//! Player ship

use arcade_engine::ecs::Entity;
use arcade_engine::foundation::math::{heading, Vec2};

use crate::audio::AudioCue;
use crate::components::{Body, EntityKind, GameEntity, Health, Ship};
use crate::input::ControlState;
use crate::simulation::{GameEvent, Simulation};

/// Clamp each axis of `velocity` to `[-max, max]` independently
pub fn clamp_velocity(velocity: Vec2, max: f32) -> Vec2 {
    Vec2::new(velocity.x.clamp(-max, max), velocity.y.clamp(-max, max))
}

impl Simulation {
    pub(crate) fn spawn_ship(&mut self, position: Vec2) -> Entity {
        let ship = self.config.ship;
        self.world.spawn(GameEntity::new(
            EntityKind::Ship(Ship::default()),
            Body::at(position, ship.radius),
            Health::new(ship.hit_points),
        ))
    }

    /// Apply one tick of controls to the ship, if it is alive
    pub(crate) fn steer_ship(&mut self, controls: &ControlState) {
        let Some(id) = self.ship else {
            return;
        };
        let tuning = self.config.ship;
        let Some(record) = self.world.get_mut(id) else {
            return;
        };
        let EntityKind::Ship(ship) = &mut record.kind else {
            return;
        };
        let body = &mut record.body;

        if controls.turn_left {
            body.angle -= tuning.rotation_step;
        }
        if controls.turn_right {
            body.angle += tuning.rotation_step;
        }
        body.angle = body.angle.rem_euclid(360.0);

        // forward then reverse, each clamped on its own
        let facing = heading(body.angle);
        if controls.thrust {
            body.velocity = clamp_velocity(body.velocity + facing * tuning.velocity_step, tuning.velocity_max);
        }
        if controls.reverse {
            body.velocity = clamp_velocity(body.velocity - facing * tuning.velocity_step, tuning.velocity_max);
        }

        ship.missile_cooldown = ship.missile_cooldown.saturating_sub(1);
        let fire = controls.fire && ship.missile_cooldown == 0;
        if fire {
            ship.missile_cooldown = tuning.missile_delay;
        }

        let (position, angle) = (body.position, body.angle);
        if controls.thrust || controls.reverse {
            self.events.push(GameEvent::Cue(AudioCue::Thrust));
        }
        if fire {
            self.spawn_missile(position, angle);
        }
    }

    pub(crate) fn ship_died(&mut self, entity: Entity, position: Vec2) {
        log::info!("Ship destroyed at level {} with score {}", self.level, self.score);
        self.pending.game_over = true;
        self.spawn_explosion(position);
        self.destroy(entity);
    }
}
