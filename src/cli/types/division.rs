//! Known league divisions and their conventional file names.

use std::fmt;

/// A league division, tracked in its own CSV export and workbook sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Division {
    Beamen,
    Falco,
}

impl Division {
    /// Every division processed by `--all-divisions`, in output order.
    pub const ALL: [Division; 2] = [Division::Beamen, Division::Falco];

    /// Label used in progress output
    pub fn label(&self) -> &'static str {
        match self {
            Division::Beamen => "BeamenDivision",
            Division::Falco => "Falco",
        }
    }

    pub fn csv_path(&self) -> &'static str {
        match self {
            Division::Beamen => "BeamenDivision.csv",
            Division::Falco => "Falco.csv",
        }
    }

    /// Sheet name inside the league workbook
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Division::Beamen => "Beamen Division",
            Division::Falco => "Falco Division",
        }
    }

    pub fn practice_squad_out(&self) -> &'static str {
        match self {
            Division::Beamen => "practice_squad_players.csv",
            Division::Falco => "practice_squad_players_falco.csv",
        }
    }

    pub fn roster_out(&self) -> &'static str {
        match self {
            Division::Beamen => "roster_players.csv",
            Division::Falco => "roster_players_falco.csv",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
