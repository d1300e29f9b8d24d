//! Sleeper export commands

use std::path::{Path, PathBuf};

use crate::{
    core::writer::write_records,
    error::LeagueError,
    sleeper::{
        mapping::{PICK_HEADER, ROSTER_PLAYER_HEADER, TEAM_SUMMARY_HEADER},
        SleeperClient,
    },
    LeagueId, Result, Season,
};

use super::resolve_league_id;

pub fn teams_csv_path(out_dir: &Path, league_id: &LeagueId) -> PathBuf {
    out_dir.join(format!("sleeper_league_{league_id}_teams.csv"))
}

pub fn roster_players_csv_path(out_dir: &Path, league_id: &LeagueId) -> PathBuf {
    out_dir.join(format!("sleeper_league_{league_id}_roster_players.csv"))
}

pub fn draft_csv_path(out_dir: &Path, season: Option<&str>, draft_id: &str) -> PathBuf {
    out_dir.join(format!(
        "sleeper_draft_{}_{draft_id}.csv",
        season.unwrap_or("unknown")
    ))
}

/// Handle `sleeper roster`: team summaries and rostered players.
pub async fn handle_sleeper_roster(
    client: &SleeperClient,
    league_id: Option<LeagueId>,
    out_dir: &Path,
    verbose: bool,
) -> Result<Vec<PathBuf>> {
    let league_id = resolve_league_id(league_id)?;

    if verbose {
        println!("Fetching league {league_id} from {}...", client.base_url());
    }
    // tarpaulin::skip - HTTP call, covered by the mock server tests
    let export = client.fetch_roster_players(&league_id).await?;

    let players_out = roster_players_csv_path(out_dir, &league_id);
    let teams_out = teams_csv_path(out_dir, &league_id);
    write_records(&players_out, &ROSTER_PLAYER_HEADER, &export.players)?;
    write_records(&teams_out, &TEAM_SUMMARY_HEADER, &export.teams)?;

    println!("Wrote {} ({} rows)", players_out.display(), export.players.len());
    println!("Wrote {} ({} rows)", teams_out.display(), export.teams.len());
    Ok(vec![players_out, teams_out])
}

/// Handle `sleeper draft`: one CSV per draft, header-only for drafts without
/// picks. Nothing is written when the league has no matching drafts.
pub async fn handle_sleeper_draft(
    client: &SleeperClient,
    league_id: Option<LeagueId>,
    season: Option<Season>,
    out_dir: &Path,
    verbose: bool,
) -> Result<Vec<PathBuf>> {
    let league_id = resolve_league_id(league_id)?;

    if verbose {
        match season {
            Some(s) => println!("Fetching {s} drafts for league {league_id}..."),
            None => println!("Fetching all drafts for league {league_id}..."),
        }
    }
    let drafts = client.fetch_draft(&league_id, season).await?;

    if drafts.is_empty() {
        println!("No drafts found for this league.");
        return Ok(Vec::new());
    }

    std::fs::create_dir_all(out_dir).map_err(|e| LeagueError::from_write(out_dir, e))?;

    let mut written = Vec::with_capacity(drafts.len());
    for export in &drafts {
        let path = draft_csv_path(out_dir, export.draft.season.as_deref(), &export.draft.draft_id);
        write_records(&path, &PICK_HEADER, &export.picks)?;
        println!("Wrote {} ({} picks)", path.display(), export.picks.len());
        written.push(path);
    }

    Ok(written)
}
