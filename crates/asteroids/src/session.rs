//! One run from first tick to leaderboard
//!
//! [`Session`] drives a [`Simulation`] through play, collects the player's
//! name once the game-over banner clears, records the run, and holds the
//! standings for display.

use crate::director::Phase;
use crate::input::{FrameInput, NameEntry};
use crate::leaderboard::{LeaderboardError, LeaderboardStore, ScoreRecord};
use crate::simulation::{GameEvent, Simulation};

/// A run plus the leaderboard it reports to
pub struct Session<S: LeaderboardStore> {
    simulation: Simulation,
    store: S,
    name_entry: Option<NameEntry>,
    confirmed_name: Option<String>,
    submitted: Option<ScoreRecord>,
    standings: Vec<ScoreRecord>,
}

impl<S: LeaderboardStore> Session<S> {
    /// Wrap a simulation that has not started yet
    pub const fn new(simulation: Simulation, store: S) -> Self {
        Self {
            simulation,
            store,
            name_entry: None,
            confirmed_name: None,
            submitted: None,
            standings: Vec::new(),
        }
    }

    /// Start play
    pub fn start(&mut self) {
        self.simulation.start();
    }

    /// Feed one tick of input.
    ///
    /// Flight controls drive the simulation while it is live; text keys
    /// drive name entry once it is waiting for a name. Confirming a name
    /// writes the record and loads the standings. If the store fails, the
    /// error is returned and the next update tries again with the same name.
    pub fn update(&mut self, input: &FrameInput) -> Result<(), LeaderboardError> {
        match self.simulation.phase() {
            Phase::Playing | Phase::GameOver => self.simulation.tick(&input.controls),
            Phase::LeaderboardEntry => self.enter_name(input)?,
            Phase::NotStarted | Phase::LeaderboardDisplay => {}
        }
        Ok(())
    }

    fn enter_name(&mut self, input: &FrameInput) -> Result<(), LeaderboardError> {
        if self.submitted.is_none() {
            if self.confirmed_name.is_none() {
                let config = &self.simulation.config().name_entry;
                let entry = self.name_entry.get_or_insert_with(|| NameEntry::new(config));
                self.confirmed_name = entry.update(&input.text_keys);
            }
            let Some(name) = self.confirmed_name.take() else {
                return Ok(());
            };

            let score = self.simulation.score();
            if let Err(e) = self.store.append_record(&name, score) {
                log::warn!("Recording {name} failed, will retry: {e}");
                self.confirmed_name = Some(name);
                return Err(e);
            }
            self.submitted = Some(ScoreRecord::new(name, score));
        }

        // record is written; only the standings remain to load
        self.standings = self.store.top_n(self.simulation.config().leaderboard.top_count)?;
        self.simulation.show_leaderboard();
        Ok(())
    }

    /// Take events queued by the simulation
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.simulation.drain_events()
    }

    /// The wrapped simulation
    pub const fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Mutable access to the wrapped simulation
    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.simulation
    }

    /// Name entry state, once it has begun
    pub const fn name_entry(&self) -> Option<&NameEntry> {
        self.name_entry.as_ref()
    }

    /// The record written for this run
    pub const fn submitted(&self) -> Option<&ScoreRecord> {
        self.submitted.as_ref()
    }

    /// Best runs, loaded after this run was recorded
    pub fn standings(&self) -> &[ScoreRecord] {
        &self.standings
    }

    /// Whether the leaderboard is on display
    pub fn is_finished(&self) -> bool {
        self.simulation.phase() == Phase::LeaderboardDisplay
    }

    /// Leaderboard backing this session
    pub const fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::input::TextKey;
    use crate::leaderboard::{FileLeaderboard, MemoryLeaderboard};

    fn finished_run() -> Session<MemoryLeaderboard> {
        let mut store = MemoryLeaderboard::new();
        store.append_record("OLD", 5).unwrap();
        finished_with(store)
    }

    fn finished_with<S: LeaderboardStore>(store: S) -> Session<S> {
        let mut session = Session::new(Simulation::with_seed(GameConfig::default(), 6), store);
        session.start();
        let ship = session.simulation().ship().unwrap();
        session.simulation.damage(ship);
        let idle = FrameInput::default();
        while session.simulation().phase() == Phase::GameOver {
            session.update(&idle).unwrap();
        }
        session
    }

    #[test]
    fn test_name_entry_starts_after_banner() {
        let session = finished_run();
        assert_eq!(session.simulation().phase(), Phase::LeaderboardEntry);
        assert!(session.name_entry().is_none());
    }

    #[test]
    fn test_confirm_records_run() {
        let mut session = finished_run();
        session.update(&FrameInput::keys([TextKey::Confirm])).unwrap();
        assert!(session.is_finished());
        assert_eq!(session.submitted(), Some(&ScoreRecord::new("PLAYER", 0)));
        assert_eq!(
            session.standings(),
            &[ScoreRecord::new("OLD", 5), ScoreRecord::new("PLAYER", 0)]
        );
        assert_eq!(session.store().records().len(), 2);
    }

    #[test]
    fn test_input_ignored_after_display() {
        let mut session = finished_run();
        session.update(&FrameInput::keys([TextKey::Confirm])).unwrap();
        session.update(&FrameInput::keys([TextKey::Confirm])).unwrap();
        assert_eq!(session.store().records().len(), 2);
    }

    #[test]
    fn test_failed_append_is_retried() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("database");
        std::fs::write(&blocker, "not a directory").unwrap();
        let mut session = finished_with(FileLeaderboard::new(blocker.join("scores.txt")));

        let confirm = FrameInput::keys([TextKey::Confirm]);
        assert!(session.update(&confirm).is_err());
        assert_eq!(session.simulation().phase(), Phase::LeaderboardEntry);
        assert!(session.submitted().is_none());
        assert!(session.update(&FrameInput::default()).is_err());

        std::fs::remove_file(&blocker).unwrap();
        session.update(&FrameInput::default()).unwrap();
        assert!(session.is_finished());
        assert_eq!(session.submitted(), Some(&ScoreRecord::new("PLAYER", 0)));
        assert_eq!(session.standings(), &[ScoreRecord::new("PLAYER", 0)]);
    }
}
