//! Persistent leaderboard
//!
//! Records are kept as an append-only text file, one `"<NAME> <SCORE>"` line
//! per finished run. The board shows the best few runs, highest score
//! first, with ties kept in file order.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// One finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    /// Player name, no whitespace
    pub name: String,

    /// Final score
    pub score: u32,
}

impl ScoreRecord {
    /// Create a record
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Parse one file line. `None` when the line is not exactly a name and
    /// a non-negative integer.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let name = fields.next()?;
        let score = fields.next()?.parse().ok()?;
        if fields.next().is_some() {
            return None;
        }
        Some(Self::new(name, score))
    }

    /// File line for this record, newline included
    pub fn to_line(&self) -> String {
        format!("{} {}\n", self.name, self.score)
    }
}

/// Leaderboard errors
#[derive(Error, Debug)]
pub enum LeaderboardError {
    /// Reading or writing the score file failed
    #[error("leaderboard I/O error: {0}")]
    Io(#[from] io::Error),

    /// Name is empty or contains whitespace
    #[error("invalid leaderboard name {0:?}")]
    InvalidName(String),
}

/// Storage for finished runs
pub trait LeaderboardStore {
    /// Append a finished run
    fn append_record(&mut self, name: &str, score: u32) -> Result<(), LeaderboardError>;

    /// Best `n` runs, highest score first, ties in insertion order
    fn top_n(&self, n: usize) -> Result<Vec<ScoreRecord>, LeaderboardError>;
}

fn check_name(name: &str) -> Result<(), LeaderboardError> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(LeaderboardError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Highest scores first; the sort is stable so equal scores keep their order.
pub fn rank(mut records: Vec<ScoreRecord>, n: usize) -> Vec<ScoreRecord> {
    records.sort_by(|a, b| b.score.cmp(&a.score));
    records.truncate(n);
    records
}

/// Leaderboard backed by a flat text file
#[derive(Debug, Clone)]
pub struct FileLeaderboard {
    path: PathBuf,
}

impl FileLeaderboard {
    /// Use the file at `path`; it is created on the first append
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every readable record in file order. Malformed lines are skipped.
    pub fn records(&self) -> Result<Vec<ScoreRecord>, LeaderboardError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for (number, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match ScoreRecord::parse(line) {
                Some(record) => records.push(record),
                None => log::warn!(
                    "Skipping malformed leaderboard line {} in {}: {:?}",
                    number + 1,
                    self.path.display(),
                    line
                ),
            }
        }
        Ok(records)
    }
}

impl LeaderboardStore for FileLeaderboard {
    fn append_record(&mut self, name: &str, score: u32) -> Result<(), LeaderboardError> {
        check_name(name)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(ScoreRecord::new(name, score).to_line().as_bytes())?;
        log::info!("Saved score {} for {} to {}", score, name, self.path.display());
        Ok(())
    }

    fn top_n(&self, n: usize) -> Result<Vec<ScoreRecord>, LeaderboardError> {
        Ok(rank(self.records()?, n))
    }
}

/// In-memory leaderboard with the same ordering rules
#[derive(Debug, Clone, Default)]
pub struct MemoryLeaderboard {
    records: Vec<ScoreRecord>,
}

impl MemoryLeaderboard {
    /// Empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in insertion order
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }
}

impl LeaderboardStore for MemoryLeaderboard {
    fn append_record(&mut self, name: &str, score: u32) -> Result<(), LeaderboardError> {
        check_name(name)?;
        self.records.push(ScoreRecord::new(name, score));
        Ok(())
    }

    fn top_n(&self, n: usize) -> Result<Vec<ScoreRecord>, LeaderboardError> {
        Ok(rank(self.records.clone(), n))
    }
}
