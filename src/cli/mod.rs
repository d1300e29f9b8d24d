//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{LeagueId, Season};

use crate::core::{
    auction::DEFAULT_ROSTER_SIZE,
    extract::{DEFAULT_LEAGUE_CAP, DEFAULT_TEAM_CAP},
};

pub const DEFAULT_RANKINGS: &str = "FantasyPros_2025_Dynasty_ALL_Rankings.csv";

/// A division sheet to read.
#[derive(Debug, Args)]
pub struct SheetSource {
    /// Division sheet: a CSV export or a workbook (.xlsx, .xls, .ods).
    #[clap(long, short, default_value = "BeamenDivision.csv")]
    pub input: PathBuf,

    /// Sheet to read when the input is a workbook (first sheet if omitted).
    #[clap(long)]
    pub sheet: Option<String>,
}

/// Input selection shared by the extraction commands.
#[derive(Debug, Args)]
pub struct DivisionArgs {
    #[clap(flatten)]
    pub source: SheetSource,

    /// Process every division with its conventional input and output file
    /// names. `--input`, `--sheet` and `--out` are ignored.
    #[clap(long)]
    pub all_divisions: bool,
}

#[derive(Debug, Subcommand)]
pub enum SleeperCmd {
    /// Export team summaries and rostered players for a league.
    ///
    /// Writes `sleeper_league_<id>_teams.csv` and
    /// `sleeper_league_<id>_roster_players.csv`.
    Roster {
        /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Directory for the CSV files.
        #[clap(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Export draft and auction picks, one CSV per draft.
    Draft {
        /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Only drafts of this season (all seasons if omitted).
        #[clap(long, short)]
        season: Option<Season>,

        /// Directory for the CSV files; created if missing.
        #[clap(long, default_value = "sleeper_drafts_csv")]
        out_dir: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract practice squad players, enforcing the per-team and league caps.
    PracticeSquad {
        #[clap(flatten)]
        division: DivisionArgs,

        /// Output CSV.
        #[clap(long, short, default_value = "practice_squad_players.csv")]
        out: PathBuf,

        /// Maximum practice squad players per team.
        #[clap(long, default_value_t = DEFAULT_TEAM_CAP)]
        team_cap: usize,

        /// Maximum practice squad players across the league.
        #[clap(long, default_value_t = DEFAULT_LEAGUE_CAP)]
        league_cap: usize,

        /// Section marker text (repeatable). Defaults to "Practice Squad Stash".
        #[clap(long = "marker")]
        markers: Vec<String>,
    },

    /// Extract regularly rostered players, skipping the non-roster sections.
    Roster {
        #[clap(flatten)]
        division: DivisionArgs,

        /// Output CSV.
        #[clap(long, short, default_value = "roster_players.csv")]
        out: PathBuf,

        /// Single-column `Player` list of every extracted name.
        #[clap(long, default_value = "extracted_roster.csv")]
        names_out: PathBuf,
    },

    /// Remove taken players from a rankings export.
    Available {
        /// Roster player list (`Player` or `name` column).
        #[clap(long, short, default_value = "extracted_roster.csv")]
        roster: PathBuf,

        /// Practice squad player list (`Player` or `name` column).
        #[clap(long, short, default_value = "practice_squad_players.csv")]
        practice: PathBuf,

        /// Rankings CSV with a `PLAYER NAME` column.
        #[clap(long = "rankings", short = 'k', default_value = DEFAULT_RANKINGS)]
        rankings: PathBuf,

        /// Output for the de-duplicated taken players.
        #[clap(long, short = 't', default_value = "all_taken_players.csv")]
        out_taken: PathBuf,

        /// Output for the rankings rows still available.
        #[clap(long, short = 'a', default_value = "available_players.csv")]
        out_available: PathBuf,
    },

    /// Price the top free agents against the league's remaining auction cash.
    Auction {
        /// League workbook holding the division sheets.
        #[clap(long, short)]
        workbook: PathBuf,

        /// Division sheet names (repeatable). Defaults to every division.
        #[clap(long = "sheet")]
        sheets: Vec<String>,

        /// Rankings CSV.
        #[clap(long = "rankings", short = 'k', default_value = DEFAULT_RANKINGS)]
        rankings: PathBuf,

        /// Output CSV.
        #[clap(long, short, default_value = "free_agents.csv")]
        out: PathBuf,

        /// Active roster size used to count open slots.
        #[clap(long, default_value_t = DEFAULT_ROSTER_SIZE)]
        roster_size: usize,
    },

    /// List one team's players.
    Team {
        #[clap(flatten)]
        source: SheetSource,

        /// Team name (case and spacing ignored).
        #[clap(long)]
        team: String,

        /// List the practice squad instead of the regular roster.
        #[clap(long)]
        practice_squad: bool,
    },

    /// Show sheet names, marker rows and team labels to debug a layout.
    Inspect {
        /// Division sheet: a CSV export or a workbook.
        #[clap(long, short)]
        input: PathBuf,

        /// Sheets to inspect (repeatable). Defaults to every sheet.
        #[clap(long = "sheet")]
        sheets: Vec<String>,

        /// Marker text to look for (repeatable). Defaults to the section markers.
        #[clap(long = "marker")]
        markers: Vec<String>,
    },

    /// Export data from the Sleeper API.
    Sleeper {
        #[clap(subcommand)]
        cmd: SleeperCmd,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "dynasty-ffl", about = "Dynasty fantasy football league tools", version)]
pub struct DynastyFfl {
    /// Print detailed progress and info-level diagnostics.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
