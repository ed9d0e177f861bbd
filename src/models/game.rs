//! Match records: TurnOutcome, RoundLog and MatchResult.

use crate::models::contestant::ContestantId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Result of a single attack.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub attacker: String,
    pub defender: String,
    pub move_name: String,
    pub success: bool,
    /// Defender health after the turn, clamped to zero.
    pub defender_health: i32,
}

/// One exchange: the first contestant's turn, then the second's unless the first one finished it.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundLog {
    pub number: u32,
    pub turns: Vec<TurnOutcome>,
}

/// A finished match between two contestants.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: MatchId,
    /// 1-based position in the tournament. Zero for standalone matches.
    pub number: u32,
    /// Bracket stage this match belongs to (1 = opening stage). Zero for standalone matches.
    pub stage: u32,
    /// Opens every round.
    pub first_name: String,
    pub second_name: String,
    pub winner: ContestantId,
    pub winner_name: String,
    pub loser: ContestantId,
    pub loser_name: String,
    /// Winner's health when the match ended (what it carries into the next match).
    pub winner_health: i32,
    pub rounds: Vec<RoundLog>,
}

impl MatchResult {
    pub fn rounds_played(&self) -> u32 {
        self.rounds.len() as u32
    }

    /// Every turn in order.
    pub fn turns(&self) -> impl Iterator<Item = &TurnOutcome> {
        self.rounds.iter().flat_map(|r| r.turns.iter())
    }
}
