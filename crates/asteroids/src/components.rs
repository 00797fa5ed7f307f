//! Game entity data
//!
//! Every simulated object is a [`GameEntity`]: shared motion state, an
//! explicit hit point counter, and a tagged [`EntityKind`] carrying the
//! kind-specific data. Behaviour is dispatched on the kind.

use arcade_engine::ecs::Entity;
use arcade_engine::foundation::math::{Playfield, Vec2};
use arcade_engine::physics::{BoundingCircle, Collider, CollisionLayers};

use crate::config::AsteroidConfig;

/// Asteroid size tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsteroidSize {
    /// Smallest fragment (destroyed completely)
    Small,

    /// Splits into two small asteroids
    Medium,

    /// Splits into two medium asteroids
    Large,

    /// Tough tier between small and medium; never splits
    Powerful,
}

impl AsteroidSize {
    /// Numeric size of the tier. Speed and score both divide by it.
    pub const fn scale(self) -> f32 {
        match self {
            Self::Small => 1.0,
            Self::Medium => 2.0,
            Self::Large => 3.0,
            Self::Powerful => 1.5,
        }
    }

    /// Points awarded for destroying this tier: `floor(base / scale)`
    pub fn points(self, base: u32) -> u32 {
        (base as f32 / self.scale()).floor() as u32
    }

    /// Tier of the children spawned on death, if any
    pub const fn split_into(self) -> Option<Self> {
        match self {
            Self::Large => Some(Self::Medium),
            Self::Medium => Some(Self::Small),
            Self::Small | Self::Powerful => None,
        }
    }

    /// Collision radius for this tier
    pub const fn radius(self, config: &AsteroidConfig) -> f32 {
        match self {
            Self::Small => config.small_radius,
            Self::Medium => config.medium_radius,
            Self::Large => config.large_radius,
            Self::Powerful => config.powerful_radius,
        }
    }
}

/// Hit point counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    /// Current hit points
    pub current: u32,
}

impl Health {
    /// Create a new health counter at full
    pub const fn new(hit_points: u32) -> Self {
        Self { current: hit_points }
    }

    /// Take damage, never going below zero.
    ///
    /// Returns `true` only for the hit that brings the counter to zero, so
    /// extra damage landing on an already dead entity reports nothing.
    pub fn take_damage(&mut self, damage: u32) -> bool {
        let was_alive = self.current > 0;
        self.current = self.current.saturating_sub(damage);
        was_alive && self.current == 0
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Motion state shared by every entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Center position
    pub position: Vec2,

    /// Units per tick
    pub velocity: Vec2,

    /// Facing in degrees, 0 = up, clockwise positive
    pub angle: f32,

    /// Half of the bounding extent, also the collision radius
    pub radius: f32,
}

impl Body {
    /// Stationary body at `position`
    pub fn at(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::zeros(),
            angle: 0.0,
            radius,
        }
    }

    /// Same body with a velocity
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Same body facing `angle`
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Integrate `position += velocity * dt`, then wrap into the playfield
    pub fn advance(&mut self, dt: f32, field: &Playfield) {
        self.position = field.wrap(self.position + self.velocity * dt);
    }

    /// Bounding circle at the current position
    pub const fn bounds(&self) -> BoundingCircle {
        BoundingCircle::new(self.position, self.radius)
    }

    /// Half-extent box around the position
    pub fn half_extent(&self) -> Vec2 {
        Vec2::new(self.radius, self.radius)
    }
}

/// Player ship data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ship {
    /// Ticks until the next missile may launch
    pub missile_cooldown: u32,
}

/// Missile data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Missile {
    /// Ticks left before the missile expires
    pub remaining_lifetime: u32,
}

/// Asteroid data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asteroid {
    /// Size tier
    pub size: AsteroidSize,
}

/// Explosion animation data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Explosion {
    /// Ticks left in the animation
    pub remaining: u32,

    /// Ticks each frame is shown
    pub frame_ticks: u32,

    /// Total ticks of the animation
    pub total: u32,
}

impl Explosion {
    /// Current animation frame, starting at 0
    pub const fn frame(&self) -> u32 {
        (self.total - self.remaining) / self.frame_ticks
    }
}

/// What a banner announces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    /// A new level started
    Level,

    /// The run is over
    GameOver,
}

/// Transient on-screen text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Purpose of the banner
    pub kind: BannerKind,

    /// Displayed text
    pub text: String,

    /// Ticks left on screen
    pub remaining: u32,
}

/// Kind-specific entity data
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    /// The player ship
    Ship(Ship),

    /// A missile fired by the ship
    Missile(Missile),

    /// An asteroid
    Asteroid(Asteroid),

    /// Decorative explosion
    Explosion(Explosion),

    /// Level or game-over text
    Banner(Banner),
}

/// Data-free copy of an entity's kind, for dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindTag {
    /// The player ship
    Ship,
    /// A missile
    Missile,
    /// An asteroid of the given tier
    Asteroid(AsteroidSize),
    /// An explosion
    Explosion,
    /// A banner
    Banner,
}

impl EntityKind {
    /// Kind without its data
    pub const fn tag(&self) -> KindTag {
        match self {
            Self::Ship(_) => KindTag::Ship,
            Self::Missile(_) => KindTag::Missile,
            Self::Asteroid(asteroid) => KindTag::Asteroid(asteroid.size),
            Self::Explosion(_) => KindTag::Explosion,
            Self::Banner(_) => KindTag::Banner,
        }
    }

    /// Collision layer and mask, or `None` for entities never tested for overlap
    pub const fn collision_layers(&self) -> Option<(CollisionLayers, CollisionLayers)> {
        match self {
            Self::Ship(_) => Some((CollisionLayers::PLAYER, CollisionLayers::HAZARD)),
            Self::Missile(_) => Some((CollisionLayers::PROJECTILE, CollisionLayers::HAZARD)),
            Self::Asteroid(_) => Some((
                CollisionLayers::HAZARD,
                CollisionLayers::PLAYER.union(CollisionLayers::PROJECTILE),
            )),
            Self::Explosion(_) | Self::Banner(_) => None,
        }
    }
}

/// One simulated object
#[derive(Debug, Clone, PartialEq)]
pub struct GameEntity {
    /// Kind-specific data
    pub kind: EntityKind,

    /// Motion state
    pub body: Body,

    /// Hit points; only meaningful for collidable kinds
    pub health: Health,
}

impl GameEntity {
    /// Build an entity
    pub const fn new(kind: EntityKind, body: Body, health: Health) -> Self {
        Self { kind, body, health }
    }

    /// Whether the entity takes part in collision resolution
    pub const fn is_collidable(&self) -> bool {
        self.kind.collision_layers().is_some()
    }

    /// Collider for pair detection, if the entity is collidable
    pub fn collider(&self, entity: Entity) -> Option<Collider> {
        let (layer, mask) = self.kind.collision_layers()?;
        Some(Collider {
            entity,
            bounds: self.body.bounds(),
            layer,
            mask,
        })
    }

    /// Asteroid data, if this is an asteroid
    pub const fn as_asteroid(&self) -> Option<&Asteroid> {
        match &self.kind {
            EntityKind::Asteroid(asteroid) => Some(asteroid),
            _ => None,
        }
    }

    /// Ship data, if this is the ship
    pub const fn as_ship(&self) -> Option<&Ship> {
        match &self.kind {
            EntityKind::Ship(ship) => Some(ship),
            _ => None,
        }
    }

    /// Missile data, if this is a missile
    pub const fn as_missile(&self) -> Option<&Missile> {
        match &self.kind {
            EntityKind::Missile(missile) => Some(missile),
            _ => None,
        }
    }
}
