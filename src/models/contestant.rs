//! Contestant and ContestantDefinition data structures.

use crate::models::moves::Move;
use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a contestant (used in match results and lookups).
pub type ContestantId = Uuid;

/// A contestant as written in a roster file: no id, full health.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContestantDefinition {
    pub name: String,
    pub health: i32,
    pub moves: Vec<Move>,
}

impl ContestantDefinition {
    pub fn into_contestant(self) -> Contestant {
        Contestant::new(self.name, self.health, self.moves)
    }
}

/// A wrestler in the tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Contestant {
    pub id: ContestantId,
    pub name: String,
    /// Health at tournament start.
    pub starting_health: i32,
    /// Current health. Goes negative on the finishing blow; carried between matches.
    pub health: i32,
    pub moves: Vec<Move>,
}

impl Contestant {
    /// Create a new contestant at full health.
    pub fn new(name: impl Into<String>, health: i32, moves: Vec<Move>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            starting_health: health,
            health,
            moves,
        }
    }

    /// Reject contestants that could never finish a match.
    pub fn validate(&self) -> Result<(), TournamentError> {
        let invalid = |reason: &str| TournamentError::InvalidContestant {
            name: self.name.clone(),
            reason: reason.to_string(),
        };
        if self.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if self.health <= 0 {
            return Err(invalid("health must be positive"));
        }
        if self.moves.is_empty() {
            return Err(invalid("move list is empty"));
        }
        if let Some(m) = self.moves.iter().find(|m| m.damage <= 0) {
            return Err(invalid(&format!("move '{}' has non-positive damage", m.name)));
        }
        Ok(())
    }

    pub fn is_eliminated(&self) -> bool {
        self.health <= 0
    }

    /// Health as reported to the outside world (never below zero).
    pub fn displayed_health(&self) -> i32 {
        self.health.max(0)
    }

    /// Apply a landed move.
    pub fn take_damage(&mut self, damage: i32) {
        self.health -= damage;
    }
}
