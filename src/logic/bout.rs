//! Match engine: alternate turns between two contestants until one drops.

use crate::logic::turn::resolve_turn;
use crate::models::{Contestant, MatchResult, RoundLog, TournamentError};
use rand::Rng;
use uuid::Uuid;

/// Run a match between `first` and `second` to a definite winner.
///
/// Each round `first` attacks, then `second` answers unless it was just finished. The
/// attacker of the turn that brings the defender to zero or below wins immediately.
/// Both contestants are validated before the first turn. Health changes stay on the
/// contestants; the returned record has `number` and `stage` set to zero.
pub fn resolve_match<R: Rng + ?Sized>(
    first: &mut Contestant,
    second: &mut Contestant,
    rng: &mut R,
) -> Result<MatchResult, TournamentError> {
    first.validate()?;
    second.validate()?;

    let first_name = first.name.clone();
    let second_name = second.name.clone();
    let mut rounds = Vec::new();
    let mut number = 1;

    loop {
        let mut round = RoundLog {
            number,
            turns: Vec::with_capacity(2),
        };

        round.turns.push(resolve_turn(first, second, rng)?);
        if second.is_eliminated() {
            rounds.push(round);
            return Ok(finish(first, second, first_name, second_name, rounds));
        }

        round.turns.push(resolve_turn(second, first, rng)?);
        rounds.push(round);
        if first.is_eliminated() {
            return Ok(finish(second, first, first_name, second_name, rounds));
        }

        number += 1;
    }
}

fn finish(
    winner: &Contestant,
    loser: &Contestant,
    first_name: String,
    second_name: String,
    rounds: Vec<RoundLog>,
) -> MatchResult {
    log::debug!(
        "{} beats {} after {} round(s) with {} health left",
        winner.name,
        loser.name,
        rounds.len(),
        winner.health
    );
    MatchResult {
        id: Uuid::new_v4(),
        number: 0,
        stage: 0,
        first_name,
        second_name,
        winner: winner.id,
        winner_name: winner.name.clone(),
        loser: loser.id,
        loser_name: loser.name.clone(),
        winner_health: winner.health,
        rounds,
    }
}
