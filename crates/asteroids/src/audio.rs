//! Audio cues
//!
//! The simulation never plays sound itself. It queues fire-and-forget cues
//! that the presentation layer hands to an [`AudioSink`] after each tick.

/// Sound cue emitted by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// Background theme starts looping
    Theme,

    /// Engine thrust while a thrust input is held
    Thrust,

    /// Missile launched
    Fire,

    /// Something exploded
    Explosion,

    /// A level after the first one started
    LevelUp,
}

impl AudioCue {
    /// Sound file backing the cue, relative to the asset root
    pub const fn asset(self) -> &'static str {
        match self {
            Self::Theme => "sounds/theme.mid",
            Self::Thrust => "sounds/thrust.wav",
            Self::Fire => "sounds/missile.wav",
            Self::Explosion => "sounds/explosion.wav",
            Self::LevelUp => "sounds/level.wav",
        }
    }
}

/// Anything that can play cues
pub trait AudioSink {
    /// Play a cue. Must not block.
    fn play(&mut self, cue: AudioCue);
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogAudioSink {
    played: u64,
}

impl LogAudioSink {
    /// Cues received so far
    pub const fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LogAudioSink {
    fn play(&mut self, cue: AudioCue) {
        self.played += 1;
        log::trace!("cue {:?} ({})", cue, cue.asset());
    }
}
