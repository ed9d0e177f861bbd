//! Tournament, TournamentState and TournamentReport.

use crate::models::contestant::{Contestant, ContestantId};
use crate::models::game::MatchResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// A contestant could never take part in a match (no moves, no health, harmless moves).
    InvalidContestant { name: String, reason: String },
    /// The roster cannot be paired down to a single champion (needs 2, 4, 8, ... entrants).
    InvalidRoster { len: usize },
    /// A contestant with this name already exists (names are unique, case-insensitive).
    DuplicateContestantName(String),
    /// Contestant not found in the roster.
    ContestantNotFound(ContestantId),
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// A roster file could not be read or parsed.
    RosterSource(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidContestant { name, reason } => {
                write!(f, "Invalid contestant '{}': {}", name, reason)
            }
            TournamentError::InvalidRoster { len } => write!(
                f,
                "Roster of {} contestants cannot be paired (need a power of two, at least 2)",
                len
            ),
            TournamentError::DuplicateContestantName(name) => {
                write!(f, "A contestant named '{}' already exists", name)
            }
            TournamentError::ContestantNotFound(_) => write!(f, "Contestant not found"),
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::RosterSource(msg) => write!(f, "Could not load roster: {}", msg),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentState {
    /// Adding contestants; no match played.
    #[default]
    Setup,
    /// Matches are being played; roster shrinks by one per match.
    InProgress,
    /// One contestant left.
    Completed,
}

/// Full tournament state: pending roster, eliminated contestants, match history.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// Contestants still in play, in pairing order. Front two meet next.
    pub roster: VecDeque<Contestant>,
    /// Losers, in elimination order.
    pub eliminated: Vec<Contestant>,
    /// Every match played so far.
    pub matches: Vec<MatchResult>,
    pub state: TournamentState,
    /// Set when the tournament starts.
    pub started_at: Option<DateTime<Utc>>,
    /// Seed of the random source driving the matches, when known. Only recorded, never used.
    pub seed: Option<u64>,
    /// Current bracket stage (1-based once started).
    pub stage: u32,
    /// Entrants of the current stage that have not fought yet.
    pub stage_pending: usize,
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new()
    }
}

impl Tournament {
    /// Create a new tournament in Setup state with no contestants.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            roster: VecDeque::new(),
            eliminated: Vec::new(),
            matches: Vec::new(),
            state: TournamentState::Setup,
            started_at: None,
            seed: None,
            stage: 0,
            stage_pending: 0,
        }
    }

    /// Create a tournament with an initial roster. Each contestant is validated as if added one by one.
    pub fn with_contestants(contestants: Vec<Contestant>) -> Result<Self, TournamentError> {
        let mut tournament = Self::new();
        for c in contestants {
            tournament.add_contestant(c)?;
        }
        Ok(tournament)
    }

    /// Look up a contestant still in play.
    pub fn get_contestant(&self, id: ContestantId) -> Option<&Contestant> {
        self.roster.iter().find(|c| c.id == id)
    }

    /// Look up a contestant in play or eliminated.
    pub fn get_contestant_any(&self, id: ContestantId) -> Option<&Contestant> {
        self.get_contestant(id)
            .or_else(|| self.eliminated.iter().find(|c| c.id == id))
    }

    /// Add a contestant at the back of the roster (only valid in Setup). Names must be unique (case-insensitive).
    pub fn add_contestant(&mut self, contestant: Contestant) -> Result<(), TournamentError> {
        if self.state != TournamentState::Setup {
            return Err(TournamentError::InvalidState);
        }
        contestant.validate()?;
        let name = contestant.name.trim().to_string();
        let is_duplicate = self
            .roster
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(&name));
        if is_duplicate {
            return Err(TournamentError::DuplicateContestantName(name));
        }
        self.roster.push_back(Contestant { name, ..contestant });
        Ok(())
    }

    /// Remove a contestant by id (only valid in Setup).
    pub fn remove_contestant(&mut self, id: ContestantId) -> Result<Contestant, TournamentError> {
        if self.state != TournamentState::Setup {
            return Err(TournamentError::InvalidState);
        }
        let idx = self
            .roster
            .iter()
            .position(|c| c.id == id)
            .ok_or(TournamentError::ContestantNotFound(id))?;
        self.roster
            .remove(idx)
            .ok_or(TournamentError::ContestantNotFound(id))
    }

    /// The last contestant standing (only once Completed).
    pub fn champion(&self) -> Option<&Contestant> {
        match self.state {
            TournamentState::Completed => self.roster.front(),
            _ => None,
        }
    }

    /// Snapshot of a finished tournament.
    pub fn report(&self) -> Result<TournamentReport, TournamentError> {
        let champion = self.champion().ok_or(TournamentError::InvalidState)?;
        Ok(TournamentReport {
            id: self.id,
            started_at: self.started_at,
            seed: self.seed,
            champion: champion.clone(),
            eliminated: self.eliminated.clone(),
            matches: self.matches.clone(),
        })
    }
}

/// Everything worth keeping about a finished tournament.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TournamentReport {
    pub id: TournamentId,
    pub started_at: Option<DateTime<Utc>>,
    pub seed: Option<u64>,
    pub champion: Contestant,
    pub eliminated: Vec<Contestant>,
    pub matches: Vec<MatchResult>,
}
