//! Single binary CLI: run one wrestling tournament and narrate it on stdout.
//! Run with: cargo run --bin tournament
//! Configure with env: ROSTER (path to .json or .csv roster), SEED (u64).
//! Logs go to stderr; filter with RUST_LOG (default "info").

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::process::ExitCode;
use wrestling_tournament::{
    default_roster, load_roster, narration, play_next_match, start_tournament, Contestant,
    Tournament, TournamentError, TournamentState,
};

/// Process configuration, read once from the environment.
struct Config {
    roster: Option<PathBuf>,
    seed: u64,
}

fn default_seed() -> u64 {
    rand::random()
}

impl Config {
    fn from_env() -> Self {
        let seed = std::env::var("SEED")
            .ok()
            .and_then(|s| match s.trim().parse() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    log::warn!("Ignoring SEED={:?}: not an unsigned integer", s);
                    None
                }
            })
            .unwrap_or_else(default_seed);
        Self {
            roster: std::env::var_os("ROSTER").map(PathBuf::from),
            seed,
        }
    }
}

fn contestants(config: &Config) -> Result<Vec<Contestant>, TournamentError> {
    match &config.roster {
        Some(path) => {
            log::info!("Loading roster from {}", path.display());
            load_roster(path)
        }
        None => Ok(default_roster()),
    }
}

fn run(config: &Config) -> Result<(), TournamentError> {
    let mut tournament = Tournament::with_contestants(contestants(config)?)?;
    tournament.seed = Some(config.seed);
    log::info!("Using seed {}", config.seed);

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    start_tournament(&mut tournament)?;
    while tournament.state == TournamentState::InProgress {
        let result = play_next_match(&mut tournament, &mut rng)?;
        for line in narration::match_lines(result) {
            println!("{}", line);
        }
    }

    let report = tournament.report()?;
    println!("{}", narration::champion_line(&report.champion.name));
    log::info!(
        "{} matches played, {} eliminated",
        report.matches.len(),
        report.eliminated.len()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
