//! Sleeper fantasy API access.
//!
//! - `http`: the client and its endpoints
//! - `types`: JSON shapes returned by the API
//! - `mapping`: joins of rosters, users and picks into flat CSV rows

pub mod http;
pub mod mapping;
pub mod types;

pub use http::{DraftExport, RosterExport, SleeperClient, DEFAULT_API_BASE, DEFAULT_REQUEST_DELAY};
pub use mapping::{PickEntry, RosterPlayerRow, TeamEntry, TeamSummaryRow};
