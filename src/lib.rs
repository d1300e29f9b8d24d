//! Dynasty Fantasy Football League Tools
//!
//! Utilities for running a dynasty fantasy football league out of a shared
//! spreadsheet and the Sleeper API.
//!
//! ## Features
//!
//! - **Practice Squad Extraction**: Find each team's practice squad block in a
//!   division sheet, enforce the per-team and league caps, write a CSV
//! - **Roster Extraction**: List regularly rostered players, skipping the
//!   non-roster sections of the sheet
//! - **Available Players**: Remove everyone taken from a rankings export
//! - **Auction Values**: Price the top free agents against the league's
//!   remaining auction cash and open roster slots
//! - **Sleeper Export**: Pull rosters and draft/auction history from Sleeper
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dynasty_ffl::core::{extract::{extract_practice_squad, ExtractOptions}, table::read_table};
//! use std::path::Path;
//!
//! # fn example() -> dynasty_ffl::Result<()> {
//! let table = read_table(Path::new("BeamenDivision.csv"), None)?;
//! let selection = extract_practice_squad(&table, &ExtractOptions::default())?;
//! for entry in &selection.accepted {
//!     println!("{} ({})", entry.name, entry.team);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your Sleeper league ID to avoid passing it in every command:
//! ```bash
//! export SLEEPER_LEAGUE_ID=780973719656284160
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod logging;
pub mod sleeper;

// Re-export commonly used types
pub use cli::types::{Division, LeagueId, Season};
pub use core::extract::{Entry, EntryStatus, PracticeSquadCaps, Selection};
pub use error::{LeagueError, Result};

pub const LEAGUE_ID_ENV_VAR: &str = "SLEEPER_LEAGUE_ID";
pub const API_BASE_ENV_VAR: &str = "SLEEPER_API_BASE";
