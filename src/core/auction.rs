//! Free agent auction values.
//!
//! The league's remaining auction cash is spread over the best-ranked free
//! agents, one per open roster slot, weighted by the inverse of their rank.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::{collections::HashSet, ops::AddAssign};
use tracing::debug;

use crate::{
    core::{layout::SheetLayout, normalize::normalize_name, table::Table},
    error::LeagueError,
    Result,
};

pub const DEFAULT_ROSTER_SIZE: usize = 15;
pub const CASH_MARKER: &str = "offseason free agent auction cash";
pub const PRACTICE_SQUAD_LABEL: &str = "practice squad stash";

/// Labels of the first column of each team group on the roster header row.
const GROUP_HEADER_LABELS: [&str; 2] = ["number", "count"];

const RANK_COLUMNS: [&str; 2] = ["RK", "Overall"];
const PLAYER_COLUMNS: [&str; 2] = ["PLAYER NAME", "Player Name"];
const POSITION_COLUMNS: [&str; 2] = ["POS", "Player Position"];

/// Largest rounding drift tolerated before the top value absorbs it.
const BUDGET_TOLERANCE: f64 = 0.10;

static CASH_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$(\d+)").expect("valid cash pattern"));
static POSITION_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z]+").expect("valid position pattern"));

#[derive(Debug, Clone, PartialEq)]
pub struct RankedPlayer {
    pub rank: f64,
    pub player: String,
    pub position: String,
}

/// Remaining cash and open roster slots across the scanned sheets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BudgetSummary {
    pub cash: u64,
    pub open_slots: usize,
    pub teams: usize,
}

impl AddAssign for BudgetSummary {
    fn add_assign(&mut self, other: Self) {
        self.cash += other.cash;
        self.open_slots += other.open_slots;
        self.teams += other.teams;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuctionValue {
    pub player: String,
    pub position: String,
    pub value: f64,
}

pub const AUCTION_HEADER: [&str; 3] = ["Player", "Pos", "Value"];

fn find_column(table: &Table, aliases: &[&str]) -> Option<usize> {
    aliases.iter().find_map(|name| table.header_index(name))
}

/// Read a rankings export (current `RK`/`PLAYER NAME`/`POS` headers or the
/// older `Overall`/`Player Name`/`Player Position` ones), sorted by rank.
/// Rows without a numeric rank or a player name are skipped.
pub fn parse_rankings(table: &Table) -> Result<Vec<RankedPlayer>> {
    let missing = |what: &str| LeagueError::UnreadableFormat {
        path: table.source().to_string(),
        reason: format!("no {what} column in rankings"),
    };
    let rank_col = find_column(table, &RANK_COLUMNS).ok_or_else(|| missing("rank"))?;
    let player_col = find_column(table, &PLAYER_COLUMNS).ok_or_else(|| missing("player name"))?;
    let position_col = find_column(table, &POSITION_COLUMNS);

    let mut players: Vec<RankedPlayer> = (1..table.len())
        .filter_map(|row| {
            let rank = table.cell(row, rank_col).parse::<f64>().ok()?;
            let player = table.cell(row, player_col);
            if player.is_empty() || !rank.is_finite() {
                return None;
            }
            let position = position_col
                .and_then(|col| POSITION_PREFIX.find(table.cell(row, col)))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            Some(RankedPlayer {
                rank,
                player: player.to_string(),
                position,
            })
        })
        .collect();

    players.sort_by(|a, b| a.rank.total_cmp(&b.rank));
    Ok(players)
}

fn is_group_header(cell: &str) -> bool {
    GROUP_HEADER_LABELS.contains(&cell.trim().to_lowercase().as_str())
}

fn is_label(cell: &str, label: &str) -> bool {
    cell.trim().to_lowercase() == label
}

/// Budget and open slots of one division sheet.
///
/// Team groups start at the `Number`/`Count` cells of the first header row.
/// Active players are the non-blank player cells between that row and the
/// group's practice squad marker (or the end of the sheet when it has none).
/// Cash is the first `$amount` in each group's cell on the row after every
/// cash marker row.
pub fn summarize_budget(table: &Table, layout: &SheetLayout, roster_size: usize) -> BudgetSummary {
    let rows = table.rows();
    let Some(header_row) = rows.iter().position(|r| r.iter().any(|c| is_group_header(c))) else {
        debug!(source = table.source(), "no roster header row");
        return BudgetSummary::default();
    };
    let starts: Vec<usize> = rows[header_row]
        .iter()
        .enumerate()
        .filter(|(_, c)| is_group_header(c))
        .map(|(i, _)| i)
        .collect();

    let rows_with = |label: &str| -> Vec<usize> {
        rows.iter()
            .enumerate()
            .filter(|(_, r)| r.iter().any(|c| is_label(c, label)))
            .map(|(i, _)| i)
            .collect()
    };
    let ps_rows = rows_with(PRACTICE_SQUAD_LABEL);
    let cash_rows = rows_with(CASH_MARKER);

    let mut summary = BudgetSummary::default();
    for &start in &starts {
        let end = ps_rows
            .iter()
            .copied()
            .find(|&r| r > header_row && !table.cell(r, start).is_empty())
            .unwrap_or(rows.len());
        let active = (header_row + 1..end)
            .filter(|&r| !table.cell(r, start + layout.player_offset).is_empty())
            .count();

        summary.open_slots += roster_size.saturating_sub(active);
        summary.teams += 1;

        for &cash_row in &cash_rows {
            let amount = CASH_AMOUNT
                .captures(table.cell(cash_row + 1, start))
                .and_then(|caps| caps[1].parse::<u64>().ok());
            summary.cash += amount.unwrap_or(0);
        }
    }

    debug!(source = table.source(), ?summary, "budget summary");
    summary
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// If the rounded values miss the budget by more than ten cents, the largest
/// value takes the difference.
pub fn balance_to_budget(values: &mut [f64], budget: f64) {
    let difference = budget - values.iter().sum::<f64>();
    if difference.abs() <= BUDGET_TOLERANCE {
        return;
    }
    let largest = values
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1).then(b.0.cmp(&a.0)))
        .map(|(i, _)| i);
    if let Some(i) = largest {
        values[i] = round_cents(values[i] + difference);
    }
}

/// Price the top free agents. `taken` holds normalized names of every
/// rostered and practice squad player.
pub fn value_free_agents(
    rankings: &[RankedPlayer],
    taken: &HashSet<String>,
    budget: &BudgetSummary,
) -> Vec<AuctionValue> {
    let top: Vec<&RankedPlayer> = rankings
        .iter()
        .filter(|p| !taken.contains(&normalize_name(&p.player)))
        .take(budget.open_slots)
        .collect();

    let total_score: f64 = top.iter().map(|p| 1.0 / p.rank).sum();
    if top.is_empty() || !total_score.is_normal() {
        return Vec::new();
    }

    let cash = budget.cash as f64;
    let mut values: Vec<f64> = top
        .iter()
        .map(|p| round_cents(cash * (1.0 / p.rank) / total_score))
        .collect();
    balance_to_budget(&mut values, cash);

    top.into_iter()
        .zip(values)
        .map(|(p, value)| AuctionValue {
            player: p.player.clone(),
            position: p.position.clone(),
            value,
        })
        .collect()
}
