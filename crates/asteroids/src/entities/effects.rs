//! Explosions and banners
//!
//! Neither collides. Both count down a tick budget and disappear silently.

use arcade_engine::ecs::Entity;
use arcade_engine::foundation::math::Vec2;

use crate::audio::AudioCue;
use crate::components::{Banner, BannerKind, Body, EntityKind, Explosion, GameEntity, Health};
use crate::simulation::{GameEvent, Simulation};

impl Simulation {
    /// Play the explosion animation at `position`
    pub(crate) fn spawn_explosion(&mut self, position: Vec2) -> Entity {
        let effects = self.config.effects;
        let total = effects.explosion_ticks().max(1);
        let explosion = Explosion {
            remaining: total,
            frame_ticks: effects.explosion_frame_ticks.max(1),
            total,
        };
        self.events.push(GameEvent::Cue(AudioCue::Explosion));
        self.world.spawn(GameEntity::new(
            EntityKind::Explosion(explosion),
            Body::at(position, 0.0),
            Health::default(),
        ))
    }

    /// Show `text` at `position` for `ticks` ticks
    pub(crate) fn spawn_banner(&mut self, kind: BannerKind, text: String, position: Vec2, ticks: u32) -> Entity {
        log::debug!("Banner {:?} for {} ticks", text, ticks);
        let banner = Banner {
            kind,
            text,
            remaining: ticks.max(1),
        };
        self.world.spawn(GameEntity::new(
            EntityKind::Banner(banner),
            Body::at(position, 0.0),
            Health::default(),
        ))
    }
}
