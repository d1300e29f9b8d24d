//! Single-team listing

use std::path::PathBuf;

use crate::{
    core::{
        extract::{extract_practice_squad, extract_roster, players_for_team, ExtractOptions},
        table::read_table,
    },
    Entry, Result,
};

#[derive(Debug, Clone)]
pub struct TeamParams {
    pub input: PathBuf,
    pub sheet: Option<String>,
    pub team: String,
    pub practice_squad: bool,
    pub verbose: bool,
}

/// Players of one team, roster or practice squad, in sheet order.
pub fn team_players(params: &TeamParams) -> Result<Vec<Entry>> {
    let table = read_table(&params.input, params.sheet.as_deref())?;
    let options = ExtractOptions::default();

    let entries = if params.practice_squad {
        extract_practice_squad(&table, &options)?.accepted
    } else {
        extract_roster(&table, &options)?
    };

    Ok(players_for_team(&entries, &params.team)
        .into_iter()
        .cloned()
        .collect())
}

/// Handle the team command
pub fn handle_team(params: TeamParams) -> Result<()> {
    let players = team_players(&params)?;

    if players.is_empty() {
        println!("No players found for team '{}'", params.team);
        return Ok(());
    }

    for entry in &players {
        if params.verbose && !entry.position.is_empty() {
            println!("{} ({})", entry.name, entry.position);
        } else {
            println!("{}", entry.name);
        }
    }

    Ok(())
}
