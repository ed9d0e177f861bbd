//! Roster sources: built-in wrestlers, JSON files and CSV files.

use crate::models::{Contestant, ContestantDefinition, Move, MoveCategory, TournamentError};
use serde::Deserialize;
use std::path::Path;

/// The four wrestlers used when no roster file is given.
pub fn default_roster() -> Vec<Contestant> {
    vec![
        Contestant::new(
            "Hulk Hogan",
            200,
            vec![Move::signature("Big Boot", 15), Move::finisher("Leg Drop", 20)],
        ),
        Contestant::new(
            "Wrestler A",
            100,
            vec![
                Move::signature("Move A", 45),
                Move::signature("Move B", 20),
                Move::finisher("Finishing Move", 100),
            ],
        ),
        Contestant::new(
            "Wrestler B",
            100,
            vec![
                Move::signature("Move A", 22),
                Move::signature("Move B", 34),
                Move::finisher("Finishing Move", 100),
            ],
        ),
        Contestant::new(
            "Wrestler C",
            100,
            vec![
                Move::signature("Move A", 22),
                Move::signature("Move B", 34),
                Move::finisher("Finishing Move", 100),
            ],
        ),
    ]
}

/// Load a roster from a `.json` or `.csv` file (chosen by extension).
pub fn load_roster(path: &Path) -> Result<Vec<Contestant>, TournamentError> {
    let source_err =
        |msg: String| TournamentError::RosterSource(format!("{}: {}", path.display(), msg));
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match extension.as_deref() {
        Some("json") => {
            let text = std::fs::read_to_string(path).map_err(|e| source_err(e.to_string()))?;
            roster_from_json(&text)
        }
        Some("csv") => {
            let file = std::fs::File::open(path).map_err(|e| source_err(e.to_string()))?;
            roster_from_csv(file)
        }
        _ => Err(source_err("expected a .json or .csv file".to_string())),
    }
}

/// Parse a JSON array of `{ "name", "health", "moves": [{ "name", "damage", "type" }] }`.
pub fn roster_from_json(text: &str) -> Result<Vec<Contestant>, TournamentError> {
    let definitions: Vec<ContestantDefinition> =
        serde_json::from_str(text).map_err(|e| TournamentError::RosterSource(e.to_string()))?;
    Ok(definitions
        .into_iter()
        .map(ContestantDefinition::into_contestant)
        .collect())
}

/// One move per row; consecutive rows with the same wrestler form one contestant.
#[derive(Debug, Deserialize)]
struct MoveRow {
    wrestler: String,
    health: i32,
    #[serde(rename = "move")]
    move_name: String,
    damage: i32,
    #[serde(rename = "type")]
    category: MoveCategory,
}

/// Parse CSV with header `wrestler,health,move,damage,type`.
pub fn roster_from_csv<R: std::io::Read>(reader: R) -> Result<Vec<Contestant>, TournamentError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut definitions: Vec<ContestantDefinition> = Vec::new();

    for (line, row) in rdr.deserialize::<MoveRow>().enumerate() {
        let row = row.map_err(|e| TournamentError::RosterSource(e.to_string()))?;
        let mv = Move::new(row.move_name, row.damage, row.category);

        if let Some(current) = definitions
            .last_mut()
            .filter(|c| c.name == row.wrestler)
        {
            if current.health != row.health {
                return Err(TournamentError::RosterSource(format!(
                    "row {}: '{}' listed with health {} and {}",
                    line + 1,
                    row.wrestler,
                    current.health,
                    row.health
                )));
            }
            current.moves.push(mv);
            continue;
        }

        definitions.push(ContestantDefinition {
            name: row.wrestler,
            health: row.health,
            moves: vec![mv],
        });
    }

    Ok(definitions
        .into_iter()
        .map(ContestantDefinition::into_contestant)
        .collect())
}
