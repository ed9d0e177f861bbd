//! Data structures for the wrestling tournament: moves, contestants, matches, tournament state.

mod contestant;
mod game;
mod moves;
mod tournament;

pub use contestant::{Contestant, ContestantDefinition, ContestantId};
pub use game::{MatchId, MatchResult, RoundLog, TurnOutcome};
pub use moves::{Move, MoveCategory};
pub use tournament::{Tournament, TournamentError, TournamentId, TournamentReport, TournamentState};
