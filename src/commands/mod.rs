//! Command implementations for the dynasty league CLI

pub mod auction;
pub mod available;
pub mod inspect;
pub mod practice_squad;
pub mod roster;
pub mod sleeper;
pub mod team;

use std::path::{Path, PathBuf};

use crate::{error::LeagueError, Division, LeagueId, Result, LEAGUE_ID_ENV_VAR};


/// League id from the flag, else from `SLEEPER_LEAGUE_ID`.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    if let Some(id) = league_id {
        return Ok(id);
    }
    match std::env::var(LEAGUE_ID_ENV_VAR) {
        Ok(raw) if !raw.trim().is_empty() => raw.parse(),
        _ => Err(LeagueError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        }),
    }
}

/// One division sheet to process and where its output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetJob {
    pub label: String,
    pub input: PathBuf,
    pub sheet: Option<String>,
    pub out: PathBuf,
}

/// The explicit input/output pair, or with `all_divisions` one job per known
/// division using its conventional file names.
pub fn plan_jobs(
    input: &Path,
    sheet: Option<&str>,
    out: &Path,
    all_divisions: bool,
    out_for: fn(&Division) -> &'static str,
) -> Vec<DatasetJob> {
    if all_divisions {
        return Division::ALL
            .iter()
            .map(|&d| DatasetJob {
                label: d.label().to_string(),
                input: PathBuf::from(d.csv_path()),
                sheet: None,
                out: PathBuf::from(out_for(&d)),
            })
            .collect();
    }

    let label = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    vec![DatasetJob {
        label,
        input: input.to_path_buf(),
        sheet: sheet.map(str::to_string),
        out: out.to_path_buf(),
    }]
}
