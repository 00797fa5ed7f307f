//! Read-only view for a presentation layer
//!
//! A snapshot is everything needed to draw one frame. Entities whose extent
//! crosses a playfield edge report the edges, and the renderer draws them a
//! second time on the far side, so motion across the wrap stays continuous.

use arcade_engine::foundation::math::{Edges, Playfield, Vec2};

use crate::components::{AsteroidSize, EntityKind};
use crate::director::Phase;
use crate::simulation::Simulation;

/// What to draw for an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sprite {
    /// Asteroid of a tier
    Asteroid(AsteroidSize),

    /// Missile
    Missile,

    /// Player ship
    Ship,

    /// Explosion animation frame
    Explosion {
        /// Frame index, from 0
        frame: u32,
    },

    /// Text banner
    Banner {
        /// Displayed text
        text: String,
    },
}

impl Sprite {
    /// Draw order, back to front
    pub const fn layer(&self) -> u8 {
        match self {
            Self::Asteroid(_) => 0,
            Self::Missile => 1,
            Self::Ship => 2,
            Self::Explosion { .. } => 3,
            Self::Banner { .. } => 4,
        }
    }
}

/// One drawable entity
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySnapshot {
    /// Stable id for the entity's lifetime
    pub id: u64,

    /// What to draw
    pub sprite: Sprite,

    /// Center position
    pub position: Vec2,

    /// Facing in degrees
    pub angle: f32,

    /// Edges the entity's extent crosses
    pub edges: Edges,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    /// Tick the snapshot was taken after
    pub tick: u64,

    /// Run phase
    pub phase: Phase,

    /// Current level
    pub level: u32,

    /// Current score
    pub score: u32,

    /// Playfield geometry
    pub playfield: Playfield,

    /// Entities, back to front
    pub entities: Vec<EntitySnapshot>,
}

impl Simulation {
    /// Capture the current frame
    pub fn snapshot(&self) -> RenderSnapshot {
        let field = self.playfield();
        let mut entities: Vec<EntitySnapshot> = self
            .entities()
            .map(|(id, entity)| {
                let sprite = match &entity.kind {
                    EntityKind::Ship(_) => Sprite::Ship,
                    EntityKind::Missile(_) => Sprite::Missile,
                    EntityKind::Asteroid(asteroid) => Sprite::Asteroid(asteroid.size),
                    EntityKind::Explosion(explosion) => Sprite::Explosion {
                        frame: explosion.frame(),
                    },
                    EntityKind::Banner(banner) => Sprite::Banner {
                        text: banner.text.clone(),
                    },
                };
                EntitySnapshot {
                    id: id.id(),
                    sprite,
                    position: entity.body.position,
                    angle: entity.body.angle,
                    edges: field.straddled_edges(entity.body.position, entity.body.half_extent()),
                }
            })
            .collect();
        entities.sort_by_key(|e| e.sprite.layer());

        RenderSnapshot {
            tick: self.tick_count(),
            phase: self.phase(),
            level: self.level(),
            score: self.score(),
            playfield: field,
            entities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_snapshot_orders_layers() {
        let mut sim = Simulation::with_seed(GameConfig::default(), 8);
        sim.start();
        sim.spawn_explosion(Vec2::new(5.0, 5.0));
        let snapshot = sim.snapshot();
        let layers: Vec<_> = snapshot.entities.iter().map(|e| e.sprite.layer()).collect();
        assert!(layers.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(snapshot.level, 1);
        assert_eq!(snapshot.phase, Phase::Playing);
    }

    #[test]
    fn test_straddling_entity_reports_edges() {
        let mut sim = Simulation::with_seed(GameConfig::default(), 8);
        let rock = sim.spawn_asteroid(AsteroidSize::Large, 1, Vec2::new(10.0, 470.0));
        let snapshot = sim.snapshot();
        let entry = snapshot.entities.iter().find(|e| e.id == rock.id()).unwrap();
        assert_eq!(entry.edges, Edges::LEFT | Edges::BOTTOM);

        let ship = snapshot.entities.iter().find(|e| e.sprite == Sprite::Ship).unwrap();
        assert!(ship.edges.is_empty());
    }
}
