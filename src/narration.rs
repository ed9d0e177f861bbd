//! Human-readable commentary built from match records. Nothing here feeds back into the simulation.

use crate::models::{MatchResult, TurnOutcome};

pub fn turn_line(turn: &TurnOutcome) -> String {
    if turn.success {
        format!(
            "{} performs {} on {}. {}'s health: {}.",
            turn.attacker, turn.move_name, turn.defender, turn.defender, turn.defender_health
        )
    } else {
        format!("{}'s {} failed!", turn.attacker, turn.move_name)
    }
}

/// Full commentary for one match: header, every round, result, then a blank line.
pub fn match_lines(result: &MatchResult) -> Vec<String> {
    let mut lines = Vec::with_capacity(3 + result.rounds.len() * 3);
    if result.number > 0 {
        lines.push(format!("Match {}:", result.number));
    }
    lines.push(format!(
        "Match: {} vs. {}",
        result.first_name, result.second_name
    ));
    for round in &result.rounds {
        lines.push(format!("Round {}:", round.number));
        lines.extend(round.turns.iter().map(turn_line));
    }
    lines.push(format!(
        "{}'s health is below 0. {} wins!",
        result.loser_name, result.winner_name
    ));
    lines.push(String::new());
    lines
}

pub fn champion_line(name: &str) -> String {
    format!("{} wins the tournament!", name)
}
