//! Simulation context
//!
//! [`Simulation`] owns everything that changes during a run: the entity
//! set, the live asteroid counter, score, level and phase. Nothing here is
//! global; two simulations never share state.
//!
//! One [`Simulation::tick`] runs these steps in order:
//!
//! 1. ship controls (rotation, thrust, fire)
//! 2. motion for every entity, then wrap
//! 3. lifetimes (missiles, explosions, banners) of entities that existed
//!    before the tick, so a fresh missile gets its full lifetime of
//!    collision passes
//! 4. collision resolution
//! 5. transitions queued during the tick (level advance, then game over)
//!
//! Kind-specific behaviour lives next to each kind in [`crate::entities`];
//! level flow lives in [`crate::director`].

use arcade_engine::ecs::{Entity, World};
use arcade_engine::events::EventQueue;
use arcade_engine::foundation::math::Playfield;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::audio::AudioCue;
use crate::components::{AsteroidSize, BannerKind, EntityKind, GameEntity, KindTag};
use crate::config::GameConfig;
use crate::director::Phase;
use crate::input::ControlState;

/// Notification for the layers around the simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Play a sound cue
    Cue(AudioCue),

    /// A level started
    LevelStarted {
        /// The new level
        level: u32,
    },

    /// An asteroid was shot down or rammed
    AsteroidDestroyed {
        /// Tier of the destroyed asteroid
        size: AsteroidSize,
        /// Points awarded
        points: u32,
    },

    /// The ship was destroyed
    GameOver {
        /// Final score
        score: u32,
        /// Level reached
        level: u32,
    },

    /// The game-over banner finished; the run's score awaits a name
    LeaderboardEntry {
        /// Final score
        score: u32,
    },
}

/// Transitions requested during a tick and applied at its end
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Transitions {
    pub(crate) advance_level: bool,
    pub(crate) game_over: bool,
}

/// One run of the game
pub struct Simulation {
    pub(crate) config: GameConfig,
    pub(crate) field: Playfield,
    pub(crate) world: World<GameEntity>,
    pub(crate) rng: StdRng,
    pub(crate) events: EventQueue<GameEvent>,
    pub(crate) ship: Option<Entity>,
    pub(crate) live_asteroids: u32,
    pub(crate) score: u32,
    pub(crate) level: u32,
    pub(crate) phase: Phase,
    pub(crate) pending: Transitions,
    tick_count: u64,
}

impl Simulation {
    /// New run seeded from the OS
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// New run with a fixed seed, for reproducible play
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let field = config.playfield.playfield();
        let mut simulation = Self {
            config,
            field,
            world: World::new(),
            rng,
            events: EventQueue::new(),
            ship: None,
            live_asteroids: 0,
            score: 0,
            level: 0,
            phase: Phase::NotStarted,
            pending: Transitions::default(),
            tick_count: 0,
        };
        simulation.ship = Some(simulation.spawn_ship(field.center()));
        simulation
    }

    /// Start the run: theme cue, then level 1.
    ///
    /// Refused once started, and when the ship was destroyed beforehand
    /// since such a run could never end.
    pub fn start(&mut self) {
        if self.phase != Phase::NotStarted {
            log::warn!("start() ignored in phase {:?}", self.phase);
            return;
        }
        if self.ship.is_none() {
            log::warn!("start() ignored: no ship");
            return;
        }
        self.events.push(GameEvent::Cue(AudioCue::Theme));
        self.phase = Phase::Playing;
        self.advance();
    }

    /// Advance the simulation by one tick.
    ///
    /// Does nothing before [`start`](Self::start) and once the run has moved
    /// on to the leaderboard.
    pub fn tick(&mut self, controls: &ControlState) {
        if !self.phase.is_simulating() {
            return;
        }
        self.tick_count += 1;
        let existing = self.world.handles();

        self.steer_ship(controls);
        for (_, entity) in self.world.iter_mut() {
            entity.body.advance(1.0, &self.field);
        }
        self.age_entities(&existing);
        self.resolve_collisions();
        self.apply_transitions();
    }

    /// Apply one point of damage from outside the collision pass.
    ///
    /// Returns `true` if this hit destroyed the entity. Death effects and
    /// any transition they trigger have run by the time this returns.
    pub fn damage(&mut self, entity: Entity) -> bool {
        let died = self.wound(entity);
        if died {
            self.on_death(entity);
            self.apply_transitions();
        }
        died
    }

    /// Take one hit point without running death effects. `true` exactly
    /// once, for the hit that reaches zero.
    pub(crate) fn wound(&mut self, entity: Entity) -> bool {
        match self.world.get_mut(entity) {
            Some(record) if record.is_collidable() => record.health.take_damage(1),
            _ => false,
        }
    }

    /// Run the kind's death effects, then remove the entity
    pub(crate) fn on_death(&mut self, entity: Entity) {
        let Some(record) = self.world.get(entity) else {
            return;
        };
        let position = record.body.position;
        match record.kind.tag() {
            KindTag::Asteroid(size) => self.asteroid_died(entity, size, position),
            KindTag::Ship => self.ship_died(entity, position),
            KindTag::Missile => self.missile_died(entity, position),
            KindTag::Explosion | KindTag::Banner => {
                self.destroy(entity);
            }
        }
    }

    /// Remove an entity from the active set. A second call is a no-op.
    pub(crate) fn destroy(&mut self, entity: Entity) -> Option<GameEntity> {
        let removed = self.world.despawn(entity);
        if removed.is_some() && self.ship == Some(entity) {
            self.ship = None;
        }
        removed
    }

    fn age_entities(&mut self, handles: &[Entity]) {
        for &id in handles {
            let Some(record) = self.world.get_mut(id) else {
                continue;
            };
            let expired = match &mut record.kind {
                EntityKind::Missile(missile) => {
                    missile.remaining_lifetime = missile.remaining_lifetime.saturating_sub(1);
                    missile.remaining_lifetime == 0
                }
                EntityKind::Explosion(explosion) => {
                    explosion.remaining = explosion.remaining.saturating_sub(1);
                    explosion.remaining == 0
                }
                EntityKind::Banner(banner) => {
                    banner.remaining = banner.remaining.saturating_sub(1);
                    banner.remaining == 0
                }
                EntityKind::Ship(_) | EntityKind::Asteroid(_) => false,
            };
            if !expired {
                continue;
            }
            // expiry is silent: no score, no explosion
            if let Some(GameEntity { kind: EntityKind::Banner(banner), .. }) = self.destroy(id) {
                if banner.kind == BannerKind::GameOver {
                    self.on_game_over_banner_expired();
                }
            }
        }
    }

    pub(crate) fn apply_transitions(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        if pending.advance_level {
            self.on_asteroid_count_zero();
        }
        if pending.game_over {
            self.on_ship_destroyed();
        }
    }

    /// Take every event queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain().collect()
    }

    /// Configuration this run was built with
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Playfield geometry
    pub const fn playfield(&self) -> Playfield {
        self.field
    }

    /// Current phase
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Current level, 0 before the run starts
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Run score
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Live asteroid counter
    pub const fn live_asteroids(&self) -> u32 {
        self.live_asteroids
    }

    /// Ticks simulated so far
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Handle of the ship while it is alive
    pub const fn ship(&self) -> Option<Entity> {
        self.ship
    }

    /// Look up an entity
    pub fn entity(&self, entity: Entity) -> Option<&GameEntity> {
        self.world.get(entity)
    }

    /// Every active entity
    pub fn entities(&self) -> impl Iterator<Item = (Entity, &GameEntity)> {
        self.world.iter()
    }

    /// Entities spawned over the whole run, effects included
    pub fn entities_spawned(&self) -> u64 {
        self.world.spawned_count()
    }

    /// Entities removed over the whole run
    pub fn entities_removed(&self) -> u64 {
        self.world.despawned_count()
    }

    /// Asteroid entities currently in the active set
    pub fn asteroid_count(&self) -> usize {
        self.world.iter().filter(|(_, e)| e.as_asteroid().is_some()).count()
    }
}
