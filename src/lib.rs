//! Wrestling tournament simulator: library with models, match engine and bracket logic.

pub mod logic;
pub mod models;
pub mod narration;

pub use logic::{
    default_roster, load_roster, play_next_match, resolve_match, resolve_turn, roster_from_csv,
    roster_from_json, run_tournament, start_tournament, validate_bracket_size,
    FINISHER_GUARANTEED_AT, FINISHER_SUCCESS_CHANCE,
};
pub use models::{
    Contestant, ContestantDefinition, ContestantId, MatchId, MatchResult, Move, MoveCategory,
    RoundLog, Tournament, TournamentError, TournamentId, TournamentReport, TournamentState,
    TurnOutcome,
};
