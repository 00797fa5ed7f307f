//! Scripted input for headless runs
//!
//! Spins in place, fires whenever the cooldown allows, and gives a short
//! burst of thrust now and then so the ship drifts across the wrap. Once
//! the run is over it types its name one key at a time and confirms.

use crate::director::Phase;
use crate::input::{ControlState, FrameInput, TextKey};
use crate::leaderboard::LeaderboardStore;
use crate::session::Session;

/// Ticks between thrust bursts
const THRUST_PERIOD: u64 = 90;

/// Length of a thrust burst
const THRUST_TICKS: u64 = 12;

/// Input source that plays without a human
#[derive(Debug, Clone)]
pub struct Autopilot {
    name: Vec<char>,
}

impl Autopilot {
    /// Pilot that signs the leaderboard as `name`.
    ///
    /// Characters name entry would reject are dropped up front.
    pub fn new(name: &str) -> Self {
        Self {
            name: name
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .map(|c| c.to_ascii_uppercase())
                .collect(),
        }
    }

    /// Name as it will be recorded, before any length limit
    pub fn name(&self) -> String {
        self.name.iter().collect()
    }

    /// Flight controls for the given tick
    pub const fn controls(tick: u64) -> ControlState {
        ControlState {
            turn_left: false,
            turn_right: true,
            thrust: tick % THRUST_PERIOD < THRUST_TICKS,
            reverse: false,
            fire: true,
        }
    }

    /// Input for the session's next update
    pub fn input_for<S: LeaderboardStore>(&self, session: &Session<S>) -> FrameInput {
        let simulation = session.simulation();
        match simulation.phase() {
            Phase::Playing | Phase::GameOver => FrameInput::controls(Self::controls(simulation.tick_count())),
            Phase::LeaderboardEntry => {
                let (typed, full) = session
                    .name_entry()
                    .map_or((0, false), |entry| (entry.name().len(), entry.is_full()));
                match self.name.get(typed) {
                    Some(&c) if !full => FrameInput::keys([TextKey::Char(c)]),
                    _ => FrameInput::keys([TextKey::Confirm]),
                }
            }
            Phase::NotStarted | Phase::LeaderboardDisplay => FrameInput::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::AsteroidSize;
    use crate::config::GameConfig;
    use crate::leaderboard::{MemoryLeaderboard, ScoreRecord};
    use crate::simulation::Simulation;

    #[test]
    fn test_name_is_sanitized() {
        assert_eq!(Autopilot::new("auto-pilot 9").name(), "AUTOPILOT9");
    }

    #[test]
    fn test_thrust_bursts() {
        assert!(Autopilot::controls(0).thrust);
        assert!(!Autopilot::controls(THRUST_TICKS).thrust);
        assert!(Autopilot::controls(THRUST_PERIOD).thrust);
        assert!(Autopilot::controls(5).fire);
    }

    #[test]
    fn test_autopilot_finishes_a_run() {
        let pilot = Autopilot::new("bot");
        let mut session = Session::new(Simulation::with_seed(GameConfig::default(), 13), MemoryLeaderboard::new());
        session.start();
        let ship = session.simulation().ship().unwrap();
        let at = session.simulation().entity(ship).unwrap().body.position;
        session.simulation_mut().spawn_asteroid(AsteroidSize::Small, 1, at);

        for _ in 0..1_000 {
            if session.is_finished() {
                break;
            }
            let input = pilot.input_for(&session);
            session.update(&input).unwrap();
        }
        assert!(session.is_finished());
        let record = session.submitted().unwrap();
        assert_eq!(record.name, "BOT");
        assert_eq!(session.standings(), &[ScoreRecord::new("BOT", record.score)]);
    }
}
