//! Headless asteroids runner
//!
//! Plays one run with the autopilot, records it on the leaderboard and logs
//! the standings. Pass a config path as the first argument to override
//! `asteroids.toml`.

use std::path::PathBuf;

use arcade_engine::foundation::logging;
use arcade_engine::foundation::time::{FixedTimestep, Timer};
use asteroids::assets::AssetManifest;
use asteroids::autopilot::Autopilot;
use asteroids::config::CONFIG_PATH;
use asteroids::prelude::*;

/// Name the autopilot signs the leaderboard with
const PILOT_NAME: &str = "AUTOPILOT";

struct HeadlessApp {
    config: GameConfig,
    session: Session<FileLeaderboard>,
    pilot: Autopilot,
    audio: LogAudioSink,
    timestep: FixedTimestep,
    timer: Timer,
}

impl HeadlessApp {
    fn new(config: GameConfig) -> Self {
        let simulation = match config.session.seed {
            Some(seed) => {
                log::info!("Using fixed seed {}", seed);
                Simulation::with_seed(config.clone(), seed)
            }
            None => Simulation::new(config.clone()),
        };
        let store = FileLeaderboard::new(&config.leaderboard.path);
        let timestep = FixedTimestep::new(config.playfield.tick_rate).with_max_ticks_per_frame(5);
        Self {
            session: Session::new(simulation, store),
            pilot: Autopilot::new(PILOT_NAME),
            audio: LogAudioSink::default(),
            timestep,
            timer: Timer::new(),
            config,
        }
    }

    fn initialize(&mut self) -> Result<(), GameError> {
        match &self.config.assets.root {
            Some(root) => AssetManifest::default().verify(root)?,
            None => log::debug!("No asset root configured, skipping asset check"),
        }
        self.session.start();
        Ok(())
    }

    fn run(&mut self) -> Result<(), GameError> {
        let max_ticks = self.config.session.max_ticks;
        let mut ticks = 0_u64;

        while !self.session.is_finished() {
            if ticks >= max_ticks {
                log::warn!("Stopping after {} ticks without finishing the run", ticks);
                return Ok(());
            }

            let due = if self.config.session.realtime {
                self.timer.update();
                let due = self.timestep.accumulate(self.timer.delta_time());
                if due == 0 {
                    std::thread::sleep(self.timestep.tick_duration() / 4);
                }
                due
            } else {
                1
            };

            for _ in 0..due {
                self.step()?;
                ticks += 1;
            }
        }

        self.report();
        Ok(())
    }

    fn step(&mut self) -> Result<(), GameError> {
        let input = self.pilot.input_for(&self.session);
        self.session.update(&input)?;

        for event in self.session.drain_events() {
            match event {
                GameEvent::Cue(cue) => self.audio.play(cue),
                GameEvent::LevelStarted { level } => log::info!("Level {}", level),
                GameEvent::AsteroidDestroyed { size, points } => {
                    log::debug!("{:?} asteroid destroyed for {} points", size, points);
                }
                GameEvent::GameOver { score, level } => {
                    log::info!("Game over: score {} at level {}", score, level);
                }
                GameEvent::LeaderboardEntry { score } => {
                    log::info!("Entering name for score {}", score);
                }
            }
        }
        Ok(())
    }

    fn report(&self) {
        let simulation = self.session.simulation();
        log::info!(
            "Run finished after {} ticks ({} entities spawned, {} removed), {} sound cues",
            simulation.tick_count(),
            simulation.entities_spawned(),
            simulation.entities_removed(),
            self.audio.played()
        );
        if self.config.session.realtime {
            log::info!(
                "Wall clock {:.1}s over {} frames",
                self.timer.total_time(),
                self.timer.frame_count()
            );
        }
        if let Some(record) = self.session.submitted() {
            log::info!("Recorded {} with {} points", record.name, record.score);
        }
        for (rank, record) in self.session.standings().iter().enumerate() {
            log::info!("{}. {} {}", rank + 1, record.name, record.score);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    log::info!("Starting headless asteroids");

    let config_path = std::env::args().nth(1).map_or_else(|| PathBuf::from(CONFIG_PATH), PathBuf::from);
    let config = GameConfig::load_or_default(&config_path).map_err(GameError::from)?;

    let mut app = HeadlessApp::new(config);
    app.initialize()?;
    if let Err(e) = app.run() {
        log::error!("Run failed: {}", e);
        return Err(e.into());
    }
    Ok(())
}
