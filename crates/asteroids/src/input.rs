//! Player input
//!
//! The simulation polls plain boolean state once per tick; it never talks to
//! a keyboard. Name entry on the leaderboard screen works from the set of
//! keys held during the tick.

use crate::config::NameEntryConfig;

/// Flight controls held during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlState {
    /// Rotate counter-clockwise
    pub turn_left: bool,

    /// Rotate clockwise
    pub turn_right: bool,

    /// Accelerate along the facing
    pub thrust: bool,

    /// Accelerate against the facing
    pub reverse: bool,

    /// Launch a missile when the cooldown allows
    pub fire: bool,
}

/// Key used on the name entry screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    /// Letter or digit
    Char(char),

    /// Erase the last character
    Backspace,

    /// Accept the name
    Confirm,
}

/// Everything the outside world feeds into one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Flight controls
    pub controls: ControlState,

    /// Keys held for name entry
    pub text_keys: Vec<TextKey>,
}

impl FrameInput {
    /// Input holding only flight controls
    pub const fn controls(controls: ControlState) -> Self {
        Self {
            controls,
            text_keys: Vec::new(),
        }
    }

    /// Input holding only name entry keys
    pub fn keys(text_keys: impl Into<Vec<TextKey>>) -> Self {
        Self {
            controls: ControlState::default(),
            text_keys: text_keys.into(),
        }
    }
}

/// Leaderboard name editor
///
/// Letters are upper-cased, anything other than ASCII letters and digits is
/// ignored. A held key registers once, then again only after the repeat
/// delay. Typing past the line limit or erasing into the prompt does
/// nothing.
#[derive(Debug, Clone)]
pub struct NameEntry {
    prompt: String,
    name: String,
    max_name_length: usize,
    repeat_delay: u32,
    cooldown: u32,
    default_name: String,
    confirmed: bool,
}

impl NameEntry {
    /// Start a fresh entry
    pub fn new(config: &NameEntryConfig) -> Self {
        let prompt_length = config.prompt.chars().count();
        Self {
            prompt: config.prompt.clone(),
            name: String::new(),
            max_name_length: config.max_line_length.saturating_sub(prompt_length),
            repeat_delay: config.repeat_delay,
            cooldown: config.repeat_delay,
            default_name: config.default_name.clone(),
            confirmed: false,
        }
    }

    /// Prompt followed by the name typed so far
    pub fn line(&self) -> String {
        format!("{}{}", self.prompt, self.name)
    }

    /// Name typed so far
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the line has reached its length limit
    pub fn is_full(&self) -> bool {
        self.name.len() >= self.max_name_length
    }

    /// Whether the entry has been accepted
    pub const fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Feed one tick of held keys. Returns the final name on the tick the
    /// entry is confirmed, `None` otherwise.
    pub fn update(&mut self, held: &[TextKey]) -> Option<String> {
        if self.confirmed {
            return None;
        }
        self.cooldown = self.cooldown.saturating_sub(1);

        for key in held {
            match *key {
                TextKey::Char(c) => {
                    if self.cooldown == 0 && c.is_ascii_alphanumeric() && self.name.len() < self.max_name_length {
                        self.name.push(c.to_ascii_uppercase());
                        self.cooldown = self.repeat_delay;
                    }
                }
                TextKey::Backspace => {
                    if self.cooldown == 0 && self.name.pop().is_some() {
                        self.cooldown = self.repeat_delay;
                    }
                }
                TextKey::Confirm => {
                    if self.name.is_empty() {
                        self.name.clone_from(&self.default_name);
                    }
                    self.confirmed = true;
                    return Some(self.name.clone());
                }
            }
        }
        None
    }
}
