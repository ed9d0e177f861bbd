//! Tournament business logic: turns, matches, bracket progression, roster sources.

mod bout;
mod bracket;
mod roster;
mod turn;

pub use bout::resolve_match;
pub use bracket::{play_next_match, run_tournament, start_tournament, validate_bracket_size};
pub use roster::{default_roster, load_roster, roster_from_csv, roster_from_json};
pub use turn::{resolve_turn, FINISHER_GUARANTEED_AT, FINISHER_SUCCESS_CHANCE};
