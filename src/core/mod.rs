//! Core spreadsheet processing for the league tools
//!
//! This module holds the pure pipeline pieces shared by every command:
//! - `table`: Load CSV exports and workbook sheets into text grids
//! - `layout`: Named access to the side-by-side team column groups
//! - `sections`: Marker-delimited row ranges
//! - `normalize`: Player and team name canonicalization
//! - `extract`: Practice squad and roster extraction with caps
//! - `writer`: Atomic CSV output
//! - `available`: Rankings minus everyone already taken
//! - `auction`: Free agent auction values

pub mod auction;
pub mod available;
pub mod extract;
pub mod layout;
pub mod normalize;
pub mod sections;
pub mod table;
pub mod writer;

// Re-export commonly used items for convenience
pub use layout::SheetLayout;
pub use normalize::{clean_display_name, normalize_name, normalize_team};
pub use table::{read_table, Row, Table};
