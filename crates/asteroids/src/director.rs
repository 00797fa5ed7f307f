//! Level flow
//!
//! Levels start with `level` asteroids placed away from the ship, alternating
//! large and powerful. Clearing every asteroid starts the next level; losing
//! the ship ends the run.

use arcade_engine::ecs::Entity;
use arcade_engine::foundation::math::Vec2;
use rand::Rng;

use crate::audio::AudioCue;
use crate::components::{AsteroidSize, BannerKind};
use crate::simulation::{GameEvent, Simulation};

/// Where the run is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Built but not started
    NotStarted,

    /// Ship alive, levels advancing
    Playing,

    /// Ship lost; remaining effects play out under the game-over banner
    GameOver,

    /// Waiting for the player's name
    LeaderboardEntry,

    /// Showing the best runs
    LeaderboardDisplay,
}

impl Phase {
    /// Whether ticks still move entities
    pub const fn is_simulating(self) -> bool {
        matches!(self, Self::Playing | Self::GameOver)
    }
}

impl Simulation {
    /// Start the next level: bump the counter and place that many asteroids.
    ///
    /// Even slots get a large asteroid, odd slots a powerful one. Levels
    /// after the first also raise a level-up cue and a banner.
    pub fn advance(&mut self) {
        self.level = self.level.saturating_add(1);
        let powerful_hit_points = self.config.asteroid.powerful_hit_points;

        for slot in 0..self.level {
            let position = self.placement();
            if slot % 2 == 0 {
                self.spawn_asteroid(AsteroidSize::Large, 1, position);
            } else {
                self.spawn_asteroid(AsteroidSize::Powerful, powerful_hit_points, position);
            }
        }

        if self.level > 1 {
            self.events.push(GameEvent::Cue(AudioCue::LevelUp));
            let ticks = self.config.playfield.ticks(self.config.level.level_banner_seconds);
            let position = Vec2::new(self.field.width / 2.0, self.field.height / 10.0);
            self.spawn_banner(BannerKind::Level, format!("Level {}", self.level), position, ticks);
        }

        self.events.push(GameEvent::LevelStarted { level: self.level });
        log::info!("Level {} started with {} asteroids", self.level, self.level);
    }

    /// Random spawn point at least the spawn buffer away from the ship,
    /// measured as wrapped `|dx| + |dy|`.
    ///
    /// The buffer is split at random between the axes; each axis then draws
    /// an offset that keeps at least its share of distance in both
    /// directions around the torus.
    pub(crate) fn placement(&mut self) -> Vec2 {
        let buffer = self.config.level.spawn_buffer.max(0.0) as u32;
        let x_min = if buffer == 0 { 0 } else { self.rng.gen_range(0..buffer) };
        let y_min = buffer - x_min;

        let x_offset = self.draw_between(x_min, (self.field.width as u32).saturating_sub(x_min));
        let y_offset = self.draw_between(y_min, (self.field.height as u32).saturating_sub(y_min));

        let origin = self
            .ship
            .and_then(|id| self.world.get(id))
            .map_or_else(|| self.field.center(), |ship| ship.body.position);
        self.field.wrap(origin + Vec2::new(x_offset as f32, y_offset as f32))
    }

    fn draw_between(&mut self, low: u32, high: u32) -> u32 {
        if high > low {
            self.rng.gen_range(low..high)
        } else {
            low
        }
    }

    /// Live counter reached zero during a tick
    pub(crate) fn on_asteroid_count_zero(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        log::info!("Level {} cleared, score {}", self.level, self.score);
        self.advance();
    }

    /// Ship was destroyed during a tick: clear the field and raise the
    /// game-over banner.
    pub(crate) fn on_ship_destroyed(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.phase = Phase::GameOver;

        let asteroids: Vec<Entity> = self
            .world
            .iter()
            .filter(|(_, e)| e.as_asteroid().is_some())
            .map(|(id, _)| id)
            .collect();
        let cleared = asteroids.len();
        for id in asteroids {
            self.totally_die(id);
        }

        let ticks = self.config.playfield.ticks(self.config.level.game_over_banner_seconds);
        self.spawn_banner(BannerKind::GameOver, "Game over".to_string(), self.field.center(), ticks);
        self.events.push(GameEvent::GameOver {
            score: self.score,
            level: self.level,
        });
        log::info!(
            "Game over at level {} with score {} ({} asteroids cleared)",
            self.level,
            self.score,
            cleared
        );
    }

    pub(crate) fn on_game_over_banner_expired(&mut self) {
        self.phase = Phase::LeaderboardEntry;
        self.events.push(GameEvent::LeaderboardEntry { score: self.score });
    }

    /// Move from name entry to the leaderboard display
    pub fn show_leaderboard(&mut self) {
        if self.phase == Phase::LeaderboardEntry {
            self.phase = Phase::LeaderboardDisplay;
        }
    }
}
