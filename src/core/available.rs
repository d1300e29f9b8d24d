//! Available player pool: a rankings export minus everyone already taken.

use std::collections::HashSet;
use tracing::warn;

use crate::{
    core::{
        normalize::normalize_name,
        table::{Row, Table},
    },
    error::LeagueError,
    Result,
};

/// Name columns of the consolidated player lists (`Player`) and of the
/// extraction output (`name`), in lookup order.
pub const NAME_COLUMNS: [&str; 2] = ["Player", "name"];
/// Name column of the FantasyPros rankings export.
pub const RANKINGS_PLAYER_COLUMN: &str = "PLAYER NAME";

/// Non-blank values of the first header-named column found. A missing column
/// is treated as an empty list.
pub fn column_values(table: &Table, columns: &[&str]) -> Vec<String> {
    let Some(col) = columns.iter().find_map(|c| table.header_index(c)) else {
        warn!(source = table.source(), ?columns, "column not found, treating as empty");
        return Vec::new();
    };

    (1..table.len())
        .map(|row| table.cell(row, col))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drop names whose normalized form was already seen; the first spelling wins.
pub fn dedupe_by_normalized<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| {
            let key = normalize_name(name);
            !key.is_empty() && seen.insert(key)
        })
        .map(|name| name.trim().to_string())
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolSummary {
    pub roster: usize,
    pub practice: usize,
    pub taken: usize,
    pub rankings: usize,
    pub available: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailablePool {
    /// Unique taken names, sorted case-insensitively.
    pub taken: Vec<String>,
    /// Rankings header, unchanged.
    pub header: Row,
    /// Rankings rows whose player is not taken, original order and columns.
    pub available: Vec<Row>,
    pub summary: PoolSummary,
}

/// Remove every roster and practice squad player from the rankings.
///
/// Fails with `UnreadableFormat` when the rankings have no `PLAYER NAME`
/// column.
pub fn build_available(
    roster_names: &[String],
    practice_names: &[String],
    rankings: &Table,
) -> Result<AvailablePool> {
    let player_col = rankings
        .header_index(RANKINGS_PLAYER_COLUMN)
        .ok_or_else(|| LeagueError::UnreadableFormat {
            path: rankings.source().to_string(),
            reason: format!("required column '{RANKINGS_PLAYER_COLUMN}' not found"),
        })?;

    let mut taken = dedupe_by_normalized(
        roster_names
            .iter()
            .chain(practice_names)
            .map(String::as_str),
    );
    let taken_keys: HashSet<String> = taken.iter().map(|n| normalize_name(n)).collect();
    taken.sort_by_key(|n| n.to_lowercase());

    let body = rankings.rows().get(1..).unwrap_or_default();
    let available: Vec<Row> = body
        .iter()
        .enumerate()
        .filter(|(i, _)| !taken_keys.contains(&normalize_name(rankings.cell(i + 1, player_col))))
        .map(|(_, row)| row.clone())
        .collect();

    let summary = PoolSummary {
        roster: roster_names.len(),
        practice: practice_names.len(),
        taken: taken_keys.len(),
        rankings: body.len(),
        available: available.len(),
    };

    Ok(AvailablePool {
        taken,
        header: rankings.rows().first().cloned().unwrap_or_default(),
        available,
        summary,
    })
}
