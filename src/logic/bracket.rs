//! Tournament progression: pair the front of the roster, requeue the winner at the back.

use crate::logic::bout::resolve_match;
use crate::models::{Contestant, MatchResult, Tournament, TournamentError, TournamentState};
use chrono::Utc;
use rand::Rng;

/// A roster can be paired down to one champion only if every stage has an even
/// number of entrants, i.e. its size is a power of two (at least 2).
pub fn validate_bracket_size(len: usize) -> Result<(), TournamentError> {
    if len < 2 || !len.is_power_of_two() {
        return Err(TournamentError::InvalidRoster { len });
    }
    Ok(())
}

/// Start the tournament: require a pairable roster; set state to InProgress at stage 1.
pub fn start_tournament(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::Setup {
        return Err(TournamentError::InvalidState);
    }
    if let Err(e) = validate_bracket_size(tournament.roster.len()) {
        log::warn!("Refusing to start tournament {}: {}", tournament.id, e);
        return Err(e);
    }
    tournament.state = TournamentState::InProgress;
    tournament.started_at = Some(Utc::now());
    tournament.stage = 1;
    tournament.stage_pending = tournament.roster.len();
    log::info!(
        "Tournament {} started with {} contestants",
        tournament.id,
        tournament.roster.len()
    );
    Ok(())
}

/// Play the next match: the first two contestants in the roster fight, the winner goes to
/// the back of the roster with whatever health it has left, the loser is eliminated.
///
/// When the last match of a stage is played, the next stage starts with everyone left.
/// When one contestant remains, the tournament is Completed.
pub fn play_next_match<'t, R: Rng + ?Sized>(
    tournament: &'t mut Tournament,
    rng: &mut R,
) -> Result<&'t MatchResult, TournamentError> {
    if tournament.state != TournamentState::InProgress {
        return Err(TournamentError::InvalidState);
    }
    // The roster is public; a start-time size check does not cover later edits.
    if tournament.stage_pending < 2 || tournament.roster.len() < 2 {
        return Err(TournamentError::InvalidRoster {
            len: tournament.roster.len(),
        });
    }

    let (mut first, mut second) = match (tournament.roster.pop_front(), tournament.roster.pop_front()) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err(TournamentError::InvalidState),
    };

    let mut result = match resolve_match(&mut first, &mut second, rng) {
        Ok(r) => r,
        Err(e) => {
            tournament.roster.push_front(second);
            tournament.roster.push_front(first);
            return Err(e);
        }
    };
    result.number = tournament.matches.len() as u32 + 1;
    result.stage = tournament.stage;

    let (winner, loser) = if result.winner == first.id {
        (first, second)
    } else {
        (second, first)
    };
    log::info!(
        "Match {} (stage {}): {} beats {} in {} round(s), {} health left",
        result.number,
        result.stage,
        winner.name,
        loser.name,
        result.rounds_played(),
        winner.displayed_health()
    );
    tournament.roster.push_back(winner);
    tournament.eliminated.push(loser);
    tournament.matches.push(result);

    tournament.stage_pending -= 2;
    if tournament.roster.len() == 1 {
        tournament.stage_pending = 0;
        tournament.state = TournamentState::Completed;
        if let Some(champion) = tournament.roster.front() {
            log::info!("Tournament {} won by {}", tournament.id, champion.name);
        }
    } else if tournament.stage_pending == 0 {
        tournament.stage += 1;
        tournament.stage_pending = tournament.roster.len();
        log::info!(
            "Stage {} begins with {} contestants",
            tournament.stage,
            tournament.stage_pending
        );
    }

    tournament.matches.last().ok_or(TournamentError::InvalidState)
}

/// Run the whole tournament (starting it if still in Setup) and return the champion.
pub fn run_tournament<'t, R: Rng + ?Sized>(
    tournament: &'t mut Tournament,
    rng: &mut R,
) -> Result<&'t Contestant, TournamentError> {
    if tournament.state == TournamentState::Setup {
        start_tournament(tournament)?;
    }
    while tournament.state == TournamentState::InProgress {
        play_next_match(tournament, rng)?;
    }
    tournament.champion().ok_or(TournamentError::InvalidState)
}
