//! Single turn: pick a move, decide whether it lands, apply damage.

use crate::models::{Contestant, TournamentError, TurnOutcome};
use rand::seq::SliceRandom;
use rand::Rng;

/// Defender health at or below which a finisher can no longer miss.
pub const FINISHER_GUARANTEED_AT: i32 = 45;

/// Chance a finisher lands against a defender above [`FINISHER_GUARANTEED_AT`].
pub const FINISHER_SUCCESS_CHANCE: f64 = 0.5;

/// Resolve one attack of `attacker` on `defender`.
///
/// 1. Pick one of the attacker's moves uniformly at random.
/// 2. Signature moves always land. Finishers land with [`FINISHER_SUCCESS_CHANCE`] while the
///    defender has more than [`FINISHER_GUARANTEED_AT`] health, and always land otherwise.
/// 3. A landed move subtracts its damage from the defender (health may drop below zero).
///
/// Only fails for a contestant without moves, which [`Contestant::validate`] rejects up front.
pub fn resolve_turn<R: Rng + ?Sized>(
    attacker: &Contestant,
    defender: &mut Contestant,
    rng: &mut R,
) -> Result<TurnOutcome, TournamentError> {
    let chosen = attacker
        .moves
        .choose(rng)
        .ok_or_else(|| TournamentError::InvalidContestant {
            name: attacker.name.clone(),
            reason: "move list is empty".to_string(),
        })?;

    let success = !chosen.is_finisher()
        || defender.health <= FINISHER_GUARANTEED_AT
        || rng.gen_bool(FINISHER_SUCCESS_CHANCE);

    if success {
        defender.take_damage(chosen.damage);
    }

    log::debug!(
        "{} -> {} with {} ({}): defender at {}",
        attacker.name,
        defender.name,
        chosen.name,
        if success { "hit" } else { "miss" },
        defender.health
    );

    Ok(TurnOutcome {
        attacker: attacker.name.clone(),
        defender: defender.name.clone(),
        move_name: chosen.name.clone(),
        success,
        defender_health: defender.displayed_health(),
    })
}
