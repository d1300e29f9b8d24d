//! Practice squad and roster extraction from division sheets.
//!
//! Practice squads live below a "Practice Squad Stash" marker row, one block
//! per band of side-by-side teams. Regular rosters are everything else on the
//! sheet except the non-roster sections (contracts, draft picks, cash).

use serde::Serialize;
use std::{collections::HashMap, collections::HashSet, fmt};
use tracing::{debug, info};

use crate::{
    core::{
        layout::{GroupedSheet, SheetLayout},
        normalize::{clean_display_name, normalize_name, normalize_team},
        sections::{contains_marker, find_sections, prepare_markers, MarkerScope},
        table::Table,
    },
    error::LeagueError,
    Result,
};


pub const DEFAULT_TEAM_CAP: usize = 3;
pub const DEFAULT_LEAGUE_CAP: usize = 36;

pub const PRACTICE_SQUAD_MARKER: &str = "practice squad stash";

/// Markers of sections that do not hold regular roster players.
/// "extentions" is how the league sheet spells it.
pub const NON_ROSTER_SECTIONS: [&str; 6] = [
    "practice squad stash",
    "new offseason contracts",
    "contract extentions",
    "contract extensions",
    "rookie draft picks",
    "offseason free agent auction cash",
];

/// Label-column values that are never team names.
const NON_TEAM_LABELS: [&str; 2] = ["count", "number"];

/// Player-column values left over from header rows.
const HEADER_LIKE_PLAYERS: [&str; 2] = ["player", "players"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryStatus {
    PracticeSquad,
    Active,
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryStatus::PracticeSquad => write!(f, "practice-squad"),
            EntryStatus::Active => write!(f, "active"),
        }
    }
}

/// One player found on a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    pub normalized: String,
    pub team: String,
    pub status: EntryStatus,
    pub position: String,
}

impl Entry {
    /// Build an entry from a raw player cell. Returns `None` when the cell is
    /// blank, a header artifact, or has no usable name once cleaned.
    pub fn from_cell(raw: &str, team: &str, position: &str, status: EntryStatus) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() || HEADER_LIKE_PLAYERS.contains(&raw.to_lowercase().as_str()) {
            return None;
        }

        let name = clean_display_name(raw);
        let normalized = normalize_name(&name);
        if name.is_empty() || normalized.is_empty() {
            return None;
        }

        Some(Self {
            name,
            normalized,
            team: team.trim().to_string(),
            status,
            position: position.trim().to_string(),
        })
    }
}

/// Practice squad size limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeSquadCaps {
    pub per_team: usize,
    pub league: usize,
}

impl Default for PracticeSquadCaps {
    fn default() -> Self {
        Self {
            per_team: DEFAULT_TEAM_CAP,
            league: DEFAULT_LEAGUE_CAP,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub layout: SheetLayout,
    pub practice_markers: Vec<String>,
    pub caps: PracticeSquadCaps,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            layout: SheetLayout::default(),
            practice_markers: vec![PRACTICE_SQUAD_MARKER.to_string()],
            caps: PracticeSquadCaps::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The team already had `cap` players selected.
    TeamCapReached { cap: usize },
    /// Same normalized name already selected for this team.
    Duplicate,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::TeamCapReached { cap } => {
                write!(f, "team already has {cap} practice squad players")
            }
            RejectReason::Duplicate => write!(f, "already listed for this team"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    pub entry: Entry,
    pub reason: RejectReason,
}

/// Outcome of practice squad extraction: who made it and who was dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub accepted: Vec<Entry>,
    pub rejected: Vec<Rejected>,
}

impl Selection {
    pub fn total(&self) -> usize {
        self.accepted.len()
    }

    /// Accepted count per team, teams in first-seen order.
    pub fn team_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for entry in &self.accepted {
            let key = normalize_team(&entry.team);
            match counts.iter_mut().find(|(team, _)| normalize_team(team) == key) {
                Some((_, n)) => *n += 1,
                None => counts.push((entry.team.clone(), 1)),
            }
        }
        counts
    }
}

/// Extract every practice squad block and apply the caps.
///
/// A block runs from the row after its marker to the first row with no
/// player in any group, so an empty block never reaches the next band of
/// teams.
pub fn extract_practice_squad(table: &Table, options: &ExtractOptions) -> Result<Selection> {
    let sheet = options.layout.bind(table)?;
    let markers = prepare_markers(&options.practice_markers);
    let sections = find_sections(table.rows(), &markers, MarkerScope::AnyCell);
    debug!(source = table.source(), sections = sections.len(), "practice squad sections");

    let mut candidates = Vec::new();
    for section in &sections {
        let teams: Vec<(usize, Option<String>)> = sheet
            .bases()
            .iter()
            .map(|&base| (base, section_team_label(&sheet, section.marker_row, base, &markers)))
            .collect();

        for row in section.rows() {
            if !sheet.has_players(row) {
                break;
            }

            for (base, team) in &teams {
                let Some(team) = team else { continue };
                if let Some(entry) = Entry::from_cell(
                    sheet.player(row, *base),
                    team,
                    sheet.position(row, *base),
                    EntryStatus::PracticeSquad,
                ) {
                    candidates.push(entry);
                }
            }
        }
    }

    apply_caps(candidates, &options.caps)
}

/// Keep the first `per_team` distinct players of each team, in encounter
/// order, then check the league total.
///
/// A repeated name within a team is rejected as `Duplicate` and does not use
/// up a slot: `[A, A, B, C]` keeps `A, B, C`.
pub fn apply_caps(candidates: Vec<Entry>, caps: &PracticeSquadCaps) -> Result<Selection> {
    let mut per_team: HashMap<String, HashSet<String>> = HashMap::new();
    let mut selection = Selection::default();

    for entry in candidates {
        let picked = per_team.entry(normalize_team(&entry.team)).or_default();

        let reason = if picked.contains(&entry.normalized) {
            Some(RejectReason::Duplicate)
        } else if picked.len() >= caps.per_team {
            Some(RejectReason::TeamCapReached { cap: caps.per_team })
        } else {
            None
        };

        match reason {
            Some(reason) => {
                info!(player = %entry.name, team = %entry.team, %reason, "dropped");
                selection.rejected.push(Rejected { entry, reason });
            }
            None => {
                picked.insert(entry.normalized.clone());
                selection.accepted.push(entry);
            }
        }
    }

    if selection.accepted.len() > caps.league {
        return Err(LeagueError::CapExceeded {
            total: selection.accepted.len(),
            cap: caps.league,
        });
    }

    Ok(selection)
}

/// Extract regular roster players, skipping every non-roster section.
pub fn extract_roster(table: &Table, options: &ExtractOptions) -> Result<Vec<Entry>> {
    let sheet = options.layout.bind(table)?;
    let section_markers = prepare_markers(&NON_ROSTER_SECTIONS);
    let excluded = non_roster_rows(&sheet, &section_markers);

    let mut entries = Vec::new();
    for row in 0..table.len() {
        if excluded.contains(&row) {
            continue;
        }
        for &base in sheet.bases() {
            if sheet.player(row, base).is_empty() {
                continue;
            }
            let Some(team) = team_label_above(&sheet, row, base, &section_markers) else {
                continue;
            };
            if let Some(entry) = Entry::from_cell(
                sheet.player(row, base),
                &team,
                sheet.position(row, base),
                EntryStatus::Active,
            ) {
                entries.push(entry);
            }
        }
    }

    debug!(source = table.source(), entries = entries.len(), "roster extracted");
    Ok(entries)
}

/// Entries for one team (normalized comparison), encounter order kept.
pub fn players_for_team<'a>(entries: &'a [Entry], team: &str) -> Vec<&'a Entry> {
    let wanted = normalize_team(team);
    entries
        .iter()
        .filter(|e| normalize_team(&e.team) == wanted)
        .collect()
}

/// Rows inside non-roster sections: from the row after each section marker
/// up to, not including, the first row with no player in any group. That
/// row is checked for a marker too, so a section may start directly below
/// the previous one.
fn non_roster_rows(sheet: &GroupedSheet<'_>, markers: &[String]) -> HashSet<usize> {
    let rows = sheet.table().rows();
    let mut excluded = HashSet::new();

    let mut i = 0;
    while i < rows.len() {
        if !rows[i].iter().any(|cell| contains_marker(cell, markers)) {
            i += 1;
            continue;
        }
        let mut j = i + 1;
        while j < rows.len() && sheet.has_players(j) {
            excluded.insert(j);
            j += 1;
        }
        i = j;
    }

    excluded
}

fn is_team_label(value: &str, markers: &[String]) -> bool {
    let v = value.trim();
    !v.is_empty()
        && !v.chars().all(|c| c.is_ascii_digit())
        && !NON_TEAM_LABELS.contains(&v.to_lowercase().as_str())
        && !contains_marker(v, markers)
        && !contains_marker(v, &NON_ROSTER_SECTIONS)
}

/// Nearest team name above `row` in the group's label column.
pub fn team_label_above(
    sheet: &GroupedSheet<'_>,
    row: usize,
    base: usize,
    markers: &[String],
) -> Option<String> {
    (0..row)
        .rev()
        .map(|r| sheet.label(r, base))
        .find(|label| is_team_label(label, markers))
        .map(str::to_string)
}

/// Team for a practice squad block: the nearest name above the marker row,
/// else the marker cell itself when it names the team ("TEAM A PS").
fn section_team_label(
    sheet: &GroupedSheet<'_>,
    marker_row: usize,
    base: usize,
    markers: &[String],
) -> Option<String> {
    team_label_above(sheet, marker_row, base, markers).or_else(|| {
        let own = sheet.label(marker_row, base);
        let generic = contains_marker(own, &NON_ROSTER_SECTIONS)
            || NON_TEAM_LABELS.contains(&own.to_lowercase().as_str());
        (!own.is_empty() && !generic && !own.chars().all(|c| c.is_ascii_digit()))
            .then(|| own.to_string())
    })
}
